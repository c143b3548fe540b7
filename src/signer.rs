//! Log signer: produces signatures over timestamps and tree heads.
use crate::common::{AlgorithmPair, LogEntryType};
use crate::errors::{SerializeError, SignError};
use crate::keys::{PrivateKey, PublicKey};
use crate::proofs::{LogEntry, SignatureRecord, TimestampProof, TreeHeadProof};
use crate::serializer;
use crate::traits::RawSign;
use p256::ecdsa::{SigningKey, VerifyingKey};
use tracing::{debug, error};

/// Signs timestamps and tree heads with a log's private key.
///
/// The algorithms are fixed when the signer is built, from the family of its key. The signer
/// is immutable afterwards and can be shared between threads.
///
/// # Example
/// ```
/// use ct_log_signer::{LogEntryType, LogSigner, PrivateKey};
/// use p256::ecdsa::SigningKey;
///
/// let signer = LogSigner::new(PrivateKey::from(SigningKey::from_slice(&[0x42; 32]).unwrap()));
/// let record = signer
///     .sign_timestamp(1_000_000, LogEntryType::X509, b"leaf certificate")
///     .unwrap();
/// assert_eq!(record.algorithms(), signer.algorithms());
/// ```
#[derive(Debug)]
pub struct LogSigner<K = SigningKey> {
    key: K,
    algorithms: AlgorithmPair,
}

impl LogSigner {
    /// Build a signer that owns `key`.
    ///
    /// # Panics
    /// Panics if `key` is of a family that cannot sign for a log. A log configured with such
    /// a key is a deployment error and must not start.
    pub fn new(key: PrivateKey) -> Self {
        let family = key.family();
        match (key, family.algorithm_pair()) {
            (PrivateKey::Ecdsa(key), Some(algorithms)) => {
                debug!(%family, ?algorithms, "log signer ready");
                Self::from_raw(key, algorithms)
            }
            _ => {
                error!(%family, "unsupported key type for log signer");
                panic!("Unsupported key type: {}", family);
            }
        }
    }

    /// The public half of the signing key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::Ecdsa(VerifyingKey::from(&self.key))
    }
}

impl<K: RawSign> LogSigner<K> {
    /// Signer over a raw primitive whose records are stamped with `algorithms`.
    pub(crate) fn from_raw(key: K, algorithms: AlgorithmPair) -> Self {
        Self { key, algorithms }
    }

    /// The (hash, signature) pair every record from this signer carries.
    pub fn algorithms(&self) -> AlgorithmPair {
        self.algorithms
    }

    /// Sign a timestamp over a certificate.
    ///
    /// # Errors
    /// Fails without signing if the entry type is unknown, or the certificate is empty or
    /// too long.
    pub fn sign_timestamp(
        &self,
        timestamp: u64,
        entry_type: LogEntryType,
        leaf_certificate: &[u8],
    ) -> Result<SignatureRecord, SignError> {
        let input = serializer::encode_timestamp_input(timestamp, entry_type, leaf_certificate)
            .map_err(|err| serialize_error("timestamp", err))?;
        Ok(self.sign(&input))
    }

    /// Sign `proof` over `entry` in place, writing `proof.signature`.
    ///
    /// # Panics
    /// Panics if `proof.timestamp` is not set.
    ///
    /// # Errors
    /// As [`sign_timestamp`](Self::sign_timestamp). On error `proof` is left untouched.
    pub fn sign_timestamp_proof(
        &self,
        entry: &LogEntry,
        proof: &mut TimestampProof,
    ) -> Result<(), SignError> {
        let timestamp = proof
            .timestamp
            .expect("Attempt to sign a timestamp proof with a missing timestamp");
        proof.signature =
            self.sign_timestamp(timestamp, entry.entry_type, &entry.leaf_certificate)?;
        Ok(())
    }

    /// Sign a tree head.
    ///
    /// # Errors
    /// Fails without signing if `root_hash` is not a SHA-256 digest.
    pub fn sign_tree_head(
        &self,
        timestamp: u64,
        tree_size: u64,
        root_hash: &[u8],
    ) -> Result<SignatureRecord, SignError> {
        let input = serializer::encode_tree_head_input(timestamp, tree_size, root_hash)
            .map_err(|err| serialize_error("tree head", err))?;
        Ok(self.sign(&input))
    }

    /// Sign `proof` in place, writing `proof.signature`.
    ///
    /// # Panics
    /// Panics if `proof.timestamp` is not set.
    ///
    /// # Errors
    /// As [`sign_tree_head`](Self::sign_tree_head). On error `proof` is left untouched.
    pub fn sign_tree_head_proof(&self, proof: &mut TreeHeadProof) -> Result<(), SignError> {
        let timestamp = proof
            .timestamp
            .expect("Attempt to sign a tree head proof with a missing timestamp");
        proof.signature = self.sign_tree_head(timestamp, proof.tree_size, &proof.root_hash)?;
        Ok(())
    }

    fn sign(&self, input: &[u8]) -> SignatureRecord {
        SignatureRecord::new(self.algorithms, self.key.raw_sign(input))
    }
}

fn serialize_error(what: &str, err: SerializeError) -> SignError {
    let err = SignError::from_serialize_error(err);
    debug!(%err, "cannot sign {}", what);
    err
}
