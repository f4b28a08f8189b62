use std::path::Path;
use std::time::SystemTime;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::capi::rsa_capi_blob;
use crate::error::ProofError;
use crate::keystore::{self, ProofKey};
use crate::message::proof_message;
use crate::signer::ProofSigner;
use crate::ticks::protocol_ticks;

pub const TIMESTAMP_HEADER: &str = "X-WOPI-TimeStamp";
pub const PROOF_HEADER: &str = "X-WOPI-Proof";

/// Process-wide proof-header context.
///
/// Construct once at startup and share by reference (`Arc` under a
/// multi-threaded server); everything inside is immutable after
/// construction, so concurrent `proof_headers` calls need no
/// coordination. Without a key the service is a no-op: empty discovery
/// attributes and empty header lists, never an error.
pub struct ProofService {
    signer: Option<ProofSigner>,
    attributes: Vec<(String, String)>,
}

impl ProofService {
    /// Loads the key from `key_path` and builds the service. Key-load
    /// failure is logged by the key store and degrades to a keyless
    /// service.
    pub fn new(key_path: &Path) -> Self {
        Self::from_key(keystore::load(key_path))
    }

    pub fn from_key(key: Option<ProofKey>) -> Self {
        let Some(key) = key else {
            return Self { signer: None, attributes: Vec::new() };
        };

        let modulus = key.modulus_be();
        let exponent = key.exponent_be();
        let blob = rsa_capi_blob(&modulus, &exponent);
        let attributes = vec![
            ("value".to_string(), STANDARD.encode(&blob)),
            ("modulus".to_string(), STANDARD.encode(&modulus)),
            ("exponent".to_string(), STANDARD.encode(&exponent)),
        ];

        Self { signer: Some(ProofSigner::new(&key)), attributes }
    }

    pub fn has_key(&self) -> bool {
        self.signer.is_some()
    }

    /// Public-key attributes for the discovery document: `value` (CAPI
    /// blob), `modulus`, `exponent`, each Base64. Empty without a key.
    pub fn discovery_attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Produces the two proof headers for one outbound request, using a
    /// fresh timestamp. Returns an empty list without a key; a signing
    /// primitive failure after a successful key load is propagated.
    pub fn proof_headers(
        &self,
        access_token: &str,
        uri: &str,
    ) -> Result<Vec<(String, String)>, ProofError> {
        self.proof_headers_at(access_token, uri, SystemTime::now())
    }

    /// As `proof_headers`, with an explicit instant.
    pub fn proof_headers_at(
        &self,
        access_token: &str,
        uri: &str,
        instant: SystemTime,
    ) -> Result<Vec<(String, String)>, ProofError> {
        let Some(signer) = &self.signer else {
            return Ok(Vec::new());
        };

        let ticks = protocol_ticks(instant);
        let message = proof_message(access_token, uri, ticks);
        let signature = signer.sign(&message)?;

        Ok(vec![
            (TIMESTAMP_HEADER.to_string(), ticks.to_string()),
            (PROOF_HEADER.to_string(), signature),
        ])
    }
}
