//! Signing and verification for a certificate transparency log.
//!
//! A [`LogSigner`] produces signed certificate timestamps (a promise that an entry was seen
//! by the log at a given time) and signed tree heads (a commitment to the log's contents at
//! a given size). A [`LogSigVerifier`] checks them. Both rebuild the exact bytes that are
//! signed with the [`serializer`], following "Certificate Transparency"
//! <https://www.rfc-editor.org/rfc/rfc6962>.
//!
//! The (hash, signature) algorithm pair is fixed by the key family when a signer or verifier
//! is built: P-256 keys sign with SHA-256 and ECDSA, and other families are refused.
//!
#![warn(missing_docs, rust_2018_idioms)]

mod common;
pub mod config;
mod errors;
pub mod keys;
pub mod proofs;
pub mod serializer;
mod signer;
pub mod traits;
mod verifier;

pub use common::{
    AlgorithmPair, HashAlgorithm, LogEntryType, SignatureAlgorithm, MAX_CERTIFICATE_LENGTH,
    MAX_SIGNATURE_LENGTH, SHA256_LENGTH,
};
pub use errors::{ConfigError, DeserializeError, KeyError, SerializeError, SignError, VerifyError};
pub use keys::{KeyFamily, PrivateKey, PublicKey};
pub use proofs::{LogEntry, SignatureRecord, TimestampProof, TreeHeadProof};
pub use signer::LogSigner;
pub use verifier::LogSigVerifier;
