use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rsa::pkcs1v15::SigningKey;
use rsa::signature::{SignatureEncoding, Signer};
use sha2::Sha256;

use crate::error::ProofError;
use crate::keystore::ProofKey;

/// RSA PKCS#1 v1.5 signer with SHA-256 digest, producing the Base64
/// header value a WOPI host verifies against the discovery key.
pub struct ProofSigner {
    signing_key: SigningKey<Sha256>,
}

impl ProofSigner {
    pub fn new(key: &ProofKey) -> Self {
        Self {
            signing_key: SigningKey::<Sha256>::new(key.private_key().clone()),
        }
    }

    /// Signs the canonical message. The output is a single Base64 token
    /// (standard alphabet, padded, no line breaks) fit for a header value.
    pub fn sign(&self, message: &[u8]) -> Result<String, ProofError> {
        let signature = self.signing_key.try_sign(message)?;
        Ok(STANDARD.encode(signature.to_vec()))
    }
}
