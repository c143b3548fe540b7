//! Identifiers and sizes shared by the signer, the verifier and the serializer
#[cfg(feature = "serde_enabled")]
use serde::{Deserialize, Serialize};

/// Length of a SHA-256 digest, and therefore of a tree head root hash.
pub const SHA256_LENGTH: usize = 32;
/// Largest certificate (or precertificate) payload that can be timestamped.
pub const MAX_CERTIFICATE_LENGTH: usize = (1 << 24) - 1;
/// Largest raw signature a signature record can carry.
pub const MAX_SIGNATURE_LENGTH: usize = (1 << 16) - 1;

/// Hash algorithm identifiers, numbered as in the TLS `HashAlgorithm` registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde_enabled", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum HashAlgorithm {
    /// No hash
    #[default]
    None = 0,
    /// MD5
    Md5 = 1,
    /// SHA-1
    Sha1 = 2,
    /// SHA-224
    Sha224 = 3,
    /// SHA-256
    Sha256 = 4,
    /// SHA-384
    Sha384 = 5,
    /// SHA-512
    Sha512 = 6,
}

impl HashAlgorithm {
    /// Returns the identifier used on the wire.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Looks up a wire identifier, returning `None` for unassigned values.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::None),
            1 => Some(Self::Md5),
            2 => Some(Self::Sha1),
            3 => Some(Self::Sha224),
            4 => Some(Self::Sha256),
            5 => Some(Self::Sha384),
            6 => Some(Self::Sha512),
            _ => None,
        }
    }
}

/// Signature algorithm identifiers, numbered as in the TLS `SignatureAlgorithm` registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde_enabled", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum SignatureAlgorithm {
    /// Anonymous, i.e. unsigned
    #[default]
    Anonymous = 0,
    /// RSA PKCS#1 v1.5
    Rsa = 1,
    /// DSA
    Dsa = 2,
    /// ECDSA
    Ecdsa = 3,
}

impl SignatureAlgorithm {
    /// Returns the identifier used on the wire.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Looks up a wire identifier, returning `None` for unassigned values.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Anonymous),
            1 => Some(Self::Rsa),
            2 => Some(Self::Dsa),
            3 => Some(Self::Ecdsa),
            _ => None,
        }
    }
}

/// The (hash, signature) combination a signer or verifier is bound to. It is fixed when the
/// instance is built, from the family of the key it is given, and never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_enabled", derive(Serialize, Deserialize))]
pub struct AlgorithmPair {
    /// Digest applied to the canonical input before signing.
    pub hash: HashAlgorithm,
    /// Asymmetric scheme producing the raw signature.
    pub signature: SignatureAlgorithm,
}

impl AlgorithmPair {
    /// SHA-256 with ECDSA, the pair used by elliptic curve log keys.
    pub const SHA256_ECDSA: AlgorithmPair = AlgorithmPair {
        hash: HashAlgorithm::Sha256,
        signature: SignatureAlgorithm::Ecdsa,
    };
}

/// Type of a log entry. Kept open so that an unrecognised value read from a caller can be
/// carried to the serializer, which rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_enabled", derive(Serialize, Deserialize))]
pub struct LogEntryType(pub u16);

impl LogEntryType {
    /// An X.509 leaf certificate.
    pub const X509: LogEntryType = LogEntryType(0);
    /// A precertificate.
    pub const PRECERT: LogEntryType = LogEntryType(1);

    /// Whether this is a type the log knows how to encode.
    pub fn is_known(self) -> bool {
        self == Self::X509 || self == Self::PRECERT
    }
}
