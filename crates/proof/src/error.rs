#[derive(Debug, thiserror::Error)]
pub enum ProofError {
    #[error("Failed to read proof key: {0}")]
    KeyLoad(String),
    #[error("Proof signing failed: {0}")]
    Signing(#[from] rsa::signature::Error),
}
