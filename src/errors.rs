//! Errors specific to log signing and verification
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the serializer while building a canonical signing input or a signature record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SerializeError {
    /// The entry type is not one the serializer knows how to encode.
    #[error("invalid entry type")]
    InvalidEntryType,
    /// The certificate payload is empty.
    #[error("empty certificate")]
    EmptyCertificate,
    /// The certificate payload is longer than `MAX_CERTIFICATE_LENGTH`.
    #[error("certificate too long")]
    CertificateTooLong,
    /// The root hash is not a SHA-256 digest.
    #[error("invalid hash length")]
    InvalidHashLength,
    /// The raw signature does not fit the record's two byte length prefix.
    #[error("signature too long")]
    SignatureTooLong,
}

/// Failures of the deserializer while reading a signature record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeserializeError {
    /// The input ended before the record did.
    #[error("input too short")]
    InputTooShort,
    /// The hash algorithm identifier is unassigned.
    #[error("invalid hash algorithm")]
    InvalidHashAlgorithm,
    /// The signature algorithm identifier is unassigned.
    #[error("invalid signature algorithm")]
    InvalidSignatureAlgorithm,
    /// Bytes remain after the record.
    #[error("input too long")]
    InputTooLong,
}

/// Recoverable failures when signing a timestamp or a tree head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignError {
    /// The entry type is not one the log can sign.
    #[error("invalid entry type")]
    InvalidEntryType,
    /// The certificate payload is empty.
    #[error("empty certificate")]
    EmptyCertificate,
    /// The certificate payload exceeds the maximum length.
    #[error("certificate too long")]
    CertificateTooLong,
    /// The root hash has the wrong length.
    #[error("invalid hash length")]
    InvalidHashLength,
}

impl SignError {
    /// Translates a serializer failure. Serializer codes that cannot arise from a signing
    /// input are a broken internal contract and abort.
    pub(crate) fn from_serialize_error(err: SerializeError) -> Self {
        match err {
            SerializeError::InvalidEntryType => SignError::InvalidEntryType,
            SerializeError::EmptyCertificate => SignError::EmptyCertificate,
            SerializeError::CertificateTooLong => SignError::CertificateTooLong,
            SerializeError::InvalidHashLength => SignError::InvalidHashLength,
            SerializeError::SignatureTooLong => {
                panic!("unexpected serializer error while signing: {:?}", err)
            }
        }
    }
}

/// Recoverable failures when verifying a timestamp or a tree head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// The entry type is not one the log can sign.
    #[error("invalid entry type")]
    InvalidEntryType,
    /// The certificate payload is empty.
    #[error("empty certificate")]
    EmptyCertificate,
    /// The certificate payload exceeds the maximum length.
    #[error("certificate too long")]
    CertificateTooLong,
    /// The root hash has the wrong length.
    #[error("invalid hash length")]
    InvalidHashLength,
    /// The serialized signature is truncated.
    #[error("signature too short")]
    SignatureTooShort,
    /// The serialized signature has trailing bytes.
    #[error("signature too long")]
    SignatureTooLong,
    /// The serialized signature names an unassigned hash algorithm.
    #[error("invalid hash algorithm")]
    InvalidHashAlgorithm,
    /// The serialized signature names an unassigned signature algorithm.
    #[error("invalid signature algorithm")]
    InvalidSignatureAlgorithm,
    /// The signature is well formed but uses a different hash than this verifier.
    #[error("hash algorithm mismatch")]
    HashAlgorithmMismatch,
    /// The signature is well formed but uses a different scheme than this verifier.
    #[error("signature algorithm mismatch")]
    SignatureAlgorithmMismatch,
    /// The signature does not validate against the input.
    #[error("invalid signature")]
    InvalidSignature,
}

impl VerifyError {
    /// Translates a serializer failure, with the same contract as
    /// [`SignError::from_serialize_error`].
    pub(crate) fn from_serialize_error(err: SerializeError) -> Self {
        match err {
            SerializeError::InvalidEntryType => VerifyError::InvalidEntryType,
            SerializeError::EmptyCertificate => VerifyError::EmptyCertificate,
            SerializeError::CertificateTooLong => VerifyError::CertificateTooLong,
            SerializeError::InvalidHashLength => VerifyError::InvalidHashLength,
            SerializeError::SignatureTooLong => {
                panic!("unexpected serializer error while verifying: {:?}", err)
            }
        }
    }

    /// Translates a failure to read the serialized signature.
    pub(crate) fn from_deserialize_error(err: DeserializeError) -> Self {
        match err {
            DeserializeError::InputTooShort => VerifyError::SignatureTooShort,
            DeserializeError::InvalidHashAlgorithm => VerifyError::InvalidHashAlgorithm,
            DeserializeError::InvalidSignatureAlgorithm => VerifyError::InvalidSignatureAlgorithm,
            DeserializeError::InputTooLong => VerifyError::SignatureTooLong,
        }
    }
}

/// Failures to parse key material.
#[derive(Debug, Error)]
pub enum KeyError {
    /// The PKCS#8 document does not hold a private key of any recognised family.
    #[error("unrecognised private key: {0}")]
    InvalidPrivateKey(String),
    /// The SPKI document does not hold a public key of any recognised family.
    #[error("unrecognised public key: {0}")]
    InvalidPublicKey(String),
}

/// Failures to load a signer or verifier from configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading a configuration or key file failed.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// The file being read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
    /// The configuration file is not valid TOML for `KeyConfig`.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// A key file is required but not configured.
    #[error("missing {0} in configuration")]
    MissingKeyPath(&'static str),
    /// A configured key file could not be parsed.
    #[error(transparent)]
    Key(#[from] KeyError),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn serialize_errors_translate_one_to_one() {
        let cases = [
            (
                SerializeError::InvalidEntryType,
                SignError::InvalidEntryType,
                VerifyError::InvalidEntryType,
            ),
            (
                SerializeError::EmptyCertificate,
                SignError::EmptyCertificate,
                VerifyError::EmptyCertificate,
            ),
            (
                SerializeError::CertificateTooLong,
                SignError::CertificateTooLong,
                VerifyError::CertificateTooLong,
            ),
            (
                SerializeError::InvalidHashLength,
                SignError::InvalidHashLength,
                VerifyError::InvalidHashLength,
            ),
        ];
        for (err, sign, verify) in cases {
            assert_eq!(SignError::from_serialize_error(err), sign);
            assert_eq!(VerifyError::from_serialize_error(err), verify);
        }
    }

    #[test]
    fn deserialize_errors_translate_one_to_one() {
        assert_eq!(
            VerifyError::from_deserialize_error(DeserializeError::InputTooShort),
            VerifyError::SignatureTooShort
        );
        assert_eq!(
            VerifyError::from_deserialize_error(DeserializeError::InputTooLong),
            VerifyError::SignatureTooLong
        );
        assert_eq!(
            VerifyError::from_deserialize_error(DeserializeError::InvalidHashAlgorithm),
            VerifyError::InvalidHashAlgorithm
        );
        assert_eq!(
            VerifyError::from_deserialize_error(DeserializeError::InvalidSignatureAlgorithm),
            VerifyError::InvalidSignatureAlgorithm
        );
    }

    #[test]
    #[should_panic(expected = "unexpected serializer error")]
    fn unmapped_serializer_error_aborts_signing() {
        SignError::from_serialize_error(SerializeError::SignatureTooLong);
    }

    #[test]
    #[should_panic(expected = "unexpected serializer error")]
    fn unmapped_serializer_error_aborts_verification() {
        VerifyError::from_serialize_error(SerializeError::SignatureTooLong);
    }
}
