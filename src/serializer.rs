//! Canonical byte encodings for log signatures.
//!
//! Inputs are laid out in the TLS presentation language used by certificate transparency
//! (RFC 6962): big-endian integers, and variable length vectors prefixed by the minimum
//! number of bytes that can hold their maximum length.
//!
//! ```text
//! timestamp input  = version(1) || 0x00(1) || timestamp(8) || entry_type(2)
//!                    || payload<1..2^24-1> || extensions<0..2^16-1>
//! tree head input  = version(1) || 0x01(1) || timestamp(8) || tree_size(8) || root_hash[32]
//! signature record = hash_algorithm(1) || signature_algorithm(1) || signature<0..2^16-1>
//! ```
use crate::common::{
    HashAlgorithm, LogEntryType, SignatureAlgorithm, MAX_CERTIFICATE_LENGTH,
    MAX_SIGNATURE_LENGTH, SHA256_LENGTH,
};
use crate::errors::{DeserializeError, SerializeError};
use crate::proofs::SignatureRecord;

/// Protocol version written at the start of every signing input.
pub const VERSION_V1: u8 = 0;

/// Discriminates what a signing input commits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SignatureType {
    /// A timestamp over a single log entry.
    CertificateTimestamp = 0,
    /// A tree head.
    TreeHash = 1,
}

/// Number of bytes needed to encode lengths up to `max_length`.
fn prefix_length(max_length: usize) -> usize {
    let mut bytes = 0;
    let mut remaining = max_length;
    while remaining > 0 {
        remaining >>= 8;
        bytes += 1;
    }
    bytes
}

fn write_uint(out: &mut Vec<u8>, value: u64, bytes: usize) {
    debug_assert!(bytes <= 8);
    out.extend_from_slice(&value.to_be_bytes()[8 - bytes..]);
}

fn write_var_bytes(out: &mut Vec<u8>, data: &[u8], max_length: usize) {
    debug_assert!(data.len() <= max_length);
    write_uint(out, data.len() as u64, prefix_length(max_length));
    out.extend_from_slice(data);
}

/// Builds the bytes signed for a timestamp over `payload`.
///
/// # Errors
/// The function fails if
/// * `entry_type` is not a known entry type
/// * `payload` is empty, or longer than `MAX_CERTIFICATE_LENGTH`
pub fn encode_timestamp_input(
    timestamp: u64,
    entry_type: LogEntryType,
    payload: &[u8],
) -> Result<Vec<u8>, SerializeError> {
    if !entry_type.is_known() {
        return Err(SerializeError::InvalidEntryType);
    }
    if payload.is_empty() {
        return Err(SerializeError::EmptyCertificate);
    }
    if payload.len() > MAX_CERTIFICATE_LENGTH {
        return Err(SerializeError::CertificateTooLong);
    }

    let mut out = Vec::with_capacity(1 + 1 + 8 + 2 + 3 + payload.len() + 2);
    out.push(VERSION_V1);
    out.push(SignatureType::CertificateTimestamp as u8);
    write_uint(&mut out, timestamp, 8);
    write_uint(&mut out, u64::from(entry_type.0), 2);
    write_var_bytes(&mut out, payload, MAX_CERTIFICATE_LENGTH);
    // No extensions are defined for v1 timestamps.
    write_uint(&mut out, 0, 2);
    Ok(out)
}

/// Builds the bytes signed for a tree head.
///
/// # Errors
/// The function fails if `root_hash` is not `SHA256_LENGTH` bytes long.
pub fn encode_tree_head_input(
    timestamp: u64,
    tree_size: u64,
    root_hash: &[u8],
) -> Result<Vec<u8>, SerializeError> {
    if root_hash.len() != SHA256_LENGTH {
        return Err(SerializeError::InvalidHashLength);
    }

    let mut out = Vec::with_capacity(1 + 1 + 8 + 8 + SHA256_LENGTH);
    out.push(VERSION_V1);
    out.push(SignatureType::TreeHash as u8);
    write_uint(&mut out, timestamp, 8);
    write_uint(&mut out, tree_size, 8);
    out.extend_from_slice(root_hash);
    Ok(out)
}

/// Encodes a signature record to its wire form.
///
/// # Errors
/// The function fails if the raw signature is longer than `MAX_SIGNATURE_LENGTH`.
pub fn encode_signature_record(record: &SignatureRecord) -> Result<Vec<u8>, SerializeError> {
    if record.signature.len() > MAX_SIGNATURE_LENGTH {
        return Err(SerializeError::SignatureTooLong);
    }

    let mut out = Vec::with_capacity(2 + 2 + record.signature.len());
    out.push(record.hash_algorithm.id());
    out.push(record.signature_algorithm.id());
    write_var_bytes(&mut out, &record.signature, MAX_SIGNATURE_LENGTH);
    Ok(out)
}

/// Cursor over an input being decoded.
struct Reader<'a> {
    input: &'a [u8],
}

impl<'a> Reader<'a> {
    fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DeserializeError> {
        if self.input.len() < len {
            return Err(DeserializeError::InputTooShort);
        }
        let (head, tail) = self.input.split_at(len);
        self.input = tail;
        Ok(head)
    }

    fn read_uint(&mut self, bytes: usize) -> Result<u64, DeserializeError> {
        Ok(self
            .read_bytes(bytes)?
            .iter()
            .fold(0u64, |acc, b| (acc << 8) | u64::from(*b)))
    }

    fn read_var_bytes(&mut self, max_length: usize) -> Result<&'a [u8], DeserializeError> {
        let len = self.read_uint(prefix_length(max_length))? as usize;
        self.read_bytes(len)
    }
}

/// Decodes a signature record from its wire form. The whole input must be consumed.
///
/// # Errors
/// The function fails if
/// * the input ends before the record does
/// * either algorithm identifier is unassigned
/// * bytes remain after the record
pub fn decode_signature_record(input: &[u8]) -> Result<SignatureRecord, DeserializeError> {
    let mut reader = Reader { input };

    let hash_algorithm = HashAlgorithm::from_id(reader.read_uint(1)? as u8)
        .ok_or(DeserializeError::InvalidHashAlgorithm)?;
    let signature_algorithm = SignatureAlgorithm::from_id(reader.read_uint(1)? as u8)
        .ok_or(DeserializeError::InvalidSignatureAlgorithm)?;
    let signature = reader.read_var_bytes(MAX_SIGNATURE_LENGTH)?.to_vec();

    if !reader.input.is_empty() {
        return Err(DeserializeError::InputTooLong);
    }

    Ok(SignatureRecord {
        hash_algorithm,
        signature_algorithm,
        signature,
    })
}
