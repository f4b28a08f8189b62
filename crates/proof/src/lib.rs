pub mod capi;
pub mod error;
pub mod keystore;
pub mod message;
pub mod service;
pub mod signer;
pub mod ticks;

pub use error::ProofError;
pub use keystore::ProofKey;
pub use service::{PROOF_HEADER, ProofService, TIMESTAMP_HEADER};
pub use signer::ProofSigner;
