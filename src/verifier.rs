//! Log signature verifier.
//!
//! Checks run cheapest first and stop at the first failure: the serialized signature is
//! decoded, the signed input is rebuilt, the record's algorithms are compared field by field
//! with the verifier's, and only then is the signature itself checked.
use crate::common::{AlgorithmPair, LogEntryType};
use crate::errors::{DeserializeError, SerializeError, VerifyError};
use crate::keys::PublicKey;
use crate::proofs::{LogEntry, SignatureRecord, TimestampProof, TreeHeadProof};
use crate::serializer;
use crate::traits::RawVerify;
use p256::ecdsa::VerifyingKey;
use tracing::{debug, error};

/// Verifies timestamps and tree heads against a log's public key.
#[derive(Debug)]
pub struct LogSigVerifier<K = VerifyingKey> {
    key: K,
    algorithms: AlgorithmPair,
}

impl LogSigVerifier {
    /// Build a verifier that owns `key`.
    ///
    /// # Panics
    /// Panics if `key` is of a family that cannot sign for a log.
    pub fn new(key: PublicKey) -> Self {
        let family = key.family();
        match (key, family.algorithm_pair()) {
            (PublicKey::Ecdsa(key), Some(algorithms)) => {
                debug!(%family, ?algorithms, "log verifier ready");
                Self::from_raw(key, algorithms)
            }
            _ => {
                error!(%family, "unsupported key type for log verifier");
                panic!("Unsupported key type: {}", family);
            }
        }
    }
}

impl<K: RawVerify> LogSigVerifier<K> {
    /// Verifier over a raw primitive that accepts only records claiming `algorithms`.
    pub(crate) fn from_raw(key: K, algorithms: AlgorithmPair) -> Self {
        Self { key, algorithms }
    }

    /// The (hash, signature) pair a record must carry to verify.
    pub fn algorithms(&self) -> AlgorithmPair {
        self.algorithms
    }

    /// Verify a serialized signature over a timestamped certificate.
    pub fn verify_timestamp(
        &self,
        timestamp: u64,
        entry_type: LogEntryType,
        leaf_certificate: &[u8],
        serialized_signature: &[u8],
    ) -> Result<(), VerifyError> {
        let signature = serializer::decode_signature_record(serialized_signature)
            .map_err(deserialize_error)?;
        let input = serializer::encode_timestamp_input(timestamp, entry_type, leaf_certificate)
            .map_err(|err| serialize_error("timestamp", err))?;
        self.verify(&input, &signature)
    }

    /// Verify a signed timestamp over `entry`. A proof without a timestamp is checked as
    /// if stamped at zero.
    pub fn verify_timestamp_proof(
        &self,
        entry: &LogEntry,
        proof: &TimestampProof,
    ) -> Result<(), VerifyError> {
        let input = serializer::encode_timestamp_input(
            proof.timestamp.unwrap_or_default(),
            entry.entry_type,
            &entry.leaf_certificate,
        )
        .map_err(|err| serialize_error("timestamp", err))?;
        self.verify(&input, &proof.signature)
    }

    /// Verify a serialized signature over a tree head.
    pub fn verify_tree_head(
        &self,
        timestamp: u64,
        tree_size: u64,
        root_hash: &[u8],
        serialized_signature: &[u8],
    ) -> Result<(), VerifyError> {
        let signature = serializer::decode_signature_record(serialized_signature)
            .map_err(deserialize_error)?;
        let input = serializer::encode_tree_head_input(timestamp, tree_size, root_hash)
            .map_err(|err| serialize_error("tree head", err))?;
        self.verify(&input, &signature)
    }

    /// Verify a signed tree head.
    pub fn verify_tree_head_proof(&self, proof: &TreeHeadProof) -> Result<(), VerifyError> {
        let input = serializer::encode_tree_head_input(
            proof.timestamp.unwrap_or_default(),
            proof.tree_size,
            &proof.root_hash,
        )
        .map_err(|err| serialize_error("tree head", err))?;
        self.verify(&input, &proof.signature)
    }

    fn verify(&self, input: &[u8], signature: &SignatureRecord) -> Result<(), VerifyError> {
        let result = if signature.hash_algorithm != self.algorithms.hash {
            Err(VerifyError::HashAlgorithmMismatch)
        } else if signature.signature_algorithm != self.algorithms.signature {
            Err(VerifyError::SignatureAlgorithmMismatch)
        } else if !self.key.raw_verify(input, &signature.signature) {
            Err(VerifyError::InvalidSignature)
        } else {
            Ok(())
        };

        if let Err(err) = &result {
            debug!(%err, claimed = ?signature.algorithms(), "signature rejected");
        }
        result
    }
}

fn deserialize_error(err: DeserializeError) -> VerifyError {
    let err = VerifyError::from_deserialize_error(err);
    debug!(%err, "cannot decode signature");
    err
}

fn serialize_error(what: &str, err: SerializeError) -> VerifyError {
    let err = VerifyError::from_serialize_error(err);
    debug!(%err, "cannot verify {}", what);
    err
}
