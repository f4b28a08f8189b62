use std::fs;
use std::path::Path;

use rsa::RsaPrivateKey;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::traits::PublicKeyParts;

use crate::error::ProofError;

/// RSA key pair backing proof-header generation.
///
/// Immutable once loaded; the public components are exposed as raw
/// big-endian bytes, the form verifiers and the CAPI blob encoder
/// both start from.
#[derive(Debug)]
pub struct ProofKey {
    private: RsaPrivateKey,
}

impl ProofKey {
    /// Wraps an already-materialized private key, for hosts that source
    /// key material from somewhere other than the key file.
    pub fn from_private_key(private: RsaPrivateKey) -> Self {
        Self { private }
    }

    pub fn modulus_be(&self) -> Vec<u8> {
        self.private.n().to_bytes_be()
    }

    pub fn exponent_be(&self) -> Vec<u8> {
        self.private.e().to_bytes_be()
    }

    pub(crate) fn private_key(&self) -> &RsaPrivateKey {
        &self.private
    }
}

/// Loads the proof key from a PEM file, degrading to `None` on failure.
///
/// A missing or unparsable key disables proof generation for the whole
/// process; it must never abort startup. The diagnostic goes to both
/// stderr and the warn log so operators see it regardless of how
/// logging is wired up.
pub fn load(path: &Path) -> Option<ProofKey> {
    match read_key(path) {
        Ok(key) => Some(key),
        Err(err) => {
            let msg = format!(
                "Could not load proof key: {err}\n\
                 No proof-key will be present in discovery.\n\
                 Generate an RSA key with:\n    \
                 ssh-keygen -t rsa -m PEM -N \"\" -f \"{}\"",
                path.display()
            );
            eprintln!("{msg}");
            tracing::warn!("{msg}");
            None
        }
    }
}

/// Reads and parses the key file as a result, for callers that want to
/// branch on the reason instead of degrading.
pub fn read_key(path: &Path) -> Result<ProofKey, ProofError> {
    let pem = fs::read_to_string(path)
        .map_err(|e| ProofError::KeyLoad(format!("{}: {e}", path.display())))?;
    parse_pem(&pem)
}

// ssh-keygen -m PEM writes PKCS#1 ("BEGIN RSA PRIVATE KEY"); openssl
// and most newer tooling write PKCS#8 ("BEGIN PRIVATE KEY"). Accept both.
fn parse_pem(pem: &str) -> Result<ProofKey, ProofError> {
    RsaPrivateKey::from_pkcs8_pem(pem)
        .or_else(|_| RsaPrivateKey::from_pkcs1_pem(pem))
        .map(|private| ProofKey { private })
        .map_err(|e| ProofError::KeyLoad(e.to_string()))
}
