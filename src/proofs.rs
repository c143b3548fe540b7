//! Timestamp and tree head proofs, and the signature record they carry
use crate::common::{AlgorithmPair, HashAlgorithm, LogEntryType, SignatureAlgorithm};
use crate::errors::{DeserializeError, SerializeError};
use crate::serializer;

#[cfg(feature = "serde_enabled")]
use serde::{Deserialize, Serialize};

/// A signature together with the algorithms that produced it (`DigitallySigned`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde_enabled", derive(Serialize, Deserialize))]
pub struct SignatureRecord {
    /// Hash applied to the signed input.
    pub hash_algorithm: HashAlgorithm,
    /// Scheme that produced `signature`.
    pub signature_algorithm: SignatureAlgorithm,
    /// Raw signature bytes. For ECDSA, a DER encoded `(r, s)` pair.
    #[cfg_attr(
        feature = "serde_enabled",
        serde(with = "serde_with::As::<serde_with::hex::Hex>")
    )]
    pub signature: Vec<u8>,
}

impl SignatureRecord {
    /// Builds a record stamped with `algorithms`.
    pub fn new(algorithms: AlgorithmPair, signature: Vec<u8>) -> Self {
        Self {
            hash_algorithm: algorithms.hash,
            signature_algorithm: algorithms.signature,
            signature,
        }
    }

    /// The (hash, signature) pair this record claims.
    pub fn algorithms(&self) -> AlgorithmPair {
        AlgorithmPair {
            hash: self.hash_algorithm,
            signature: self.signature_algorithm,
        }
    }

    /// Wire form of the record, see [`serializer::encode_signature_record`].
    pub fn encode(&self) -> Result<Vec<u8>, SerializeError> {
        serializer::encode_signature_record(self)
    }

    /// Parses the wire form of a record, see [`serializer::decode_signature_record`].
    pub fn decode(bytes: &[u8]) -> Result<Self, DeserializeError> {
        serializer::decode_signature_record(bytes)
    }
}

/// An entry submitted to the log. Owned by the caller, only read when signing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_enabled", derive(Serialize, Deserialize))]
pub struct LogEntry {
    /// What `leaf_certificate` holds.
    pub entry_type: LogEntryType,
    /// DER certificate, or precertificate, bytes.
    #[cfg_attr(
        feature = "serde_enabled",
        serde(with = "serde_with::As::<serde_with::hex::Hex>")
    )]
    pub leaf_certificate: Vec<u8>,
}

impl LogEntry {
    /// An entry for an X.509 leaf certificate.
    pub fn x509(leaf_certificate: Vec<u8>) -> Self {
        Self {
            entry_type: LogEntryType::X509,
            leaf_certificate,
        }
    }

    /// An entry for a precertificate.
    pub fn precert(leaf_certificate: Vec<u8>) -> Self {
        Self {
            entry_type: LogEntryType::PRECERT,
            leaf_certificate,
        }
    }
}

/// Signed certificate timestamp: the log's promise that it saw an entry at `timestamp`.
///
/// The timestamp is assigned by the caller before signing; signing a proof without one
/// is a programming error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde_enabled", derive(Serialize, Deserialize))]
pub struct TimestampProof {
    /// Milliseconds since the epoch.
    pub timestamp: Option<u64>,
    /// Filled in by the signer.
    pub signature: SignatureRecord,
}

impl TimestampProof {
    /// An unsigned proof for `timestamp`.
    pub fn new(timestamp: u64) -> Self {
        Self {
            timestamp: Some(timestamp),
            signature: SignatureRecord::default(),
        }
    }
}

/// Signed tree head: the log's commitment to its contents at `tree_size` entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde_enabled", derive(Serialize, Deserialize))]
pub struct TreeHeadProof {
    /// Milliseconds since the epoch.
    pub timestamp: Option<u64>,
    /// Number of entries in the tree.
    pub tree_size: u64,
    /// Root of the Merkle tree over the first `tree_size` entries.
    #[cfg_attr(
        feature = "serde_enabled",
        serde(with = "serde_with::As::<serde_with::hex::Hex>")
    )]
    pub root_hash: Vec<u8>,
    /// Filled in by the signer.
    pub signature: SignatureRecord,
}

impl TreeHeadProof {
    /// An unsigned tree head.
    pub fn new(timestamp: u64, tree_size: u64, root_hash: Vec<u8>) -> Self {
        Self {
            timestamp: Some(timestamp),
            tree_size,
            root_hash,
            signature: SignatureRecord::default(),
        }
    }
}
