//! Key handles accepted by the signer and the verifier.
//!
//! Keys are a closed set of families. A family is recognised when it can be parsed, which
//! is separate from being supported for log signing: only elliptic curve (P-256) keys are.
use crate::common::AlgorithmPair;
use crate::errors::KeyError;
use crate::traits::{RawSign, RawVerify};
use p256::ecdsa::signature::{DigestSigner, DigestVerifier};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use p256::pkcs8::{DecodePrivateKey, DecodePublicKey};
use sha2::{Digest, Sha256};
use std::fmt;

/// Family of a key handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyFamily {
    /// NIST P-256 elliptic curve key.
    EllipticCurve,
    /// Ed25519 key.
    Ed25519,
}

impl KeyFamily {
    /// The algorithms a log key of this family signs with, or `None` if the family
    /// cannot be used as a log key.
    pub fn algorithm_pair(self) -> Option<AlgorithmPair> {
        match self {
            KeyFamily::EllipticCurve => Some(AlgorithmPair::SHA256_ECDSA),
            KeyFamily::Ed25519 => None,
        }
    }
}

impl fmt::Display for KeyFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyFamily::EllipticCurve => f.write_str("EC"),
            KeyFamily::Ed25519 => f.write_str("ED25519"),
        }
    }
}

/// A private key handle.
#[derive(Debug)]
pub enum PrivateKey {
    /// ECDSA over P-256.
    Ecdsa(SigningKey),
    /// Ed25519.
    Ed25519(ed25519_dalek::SigningKey),
}

impl PrivateKey {
    /// Family of this key.
    pub fn family(&self) -> KeyFamily {
        match self {
            PrivateKey::Ecdsa(_) => KeyFamily::EllipticCurve,
            PrivateKey::Ed25519(_) => KeyFamily::Ed25519,
        }
    }

    /// Parse a DER encoded PKCS#8 private key of any recognised family.
    pub fn from_pkcs8_der(der: &[u8]) -> Result<Self, KeyError> {
        match SigningKey::from_pkcs8_der(der) {
            Ok(key) => Ok(PrivateKey::Ecdsa(key)),
            Err(ec_err) => {
                ed25519_dalek::SigningKey::from_pkcs8_der(der)
                    .map(PrivateKey::Ed25519)
                    .map_err(|_| KeyError::InvalidPrivateKey(ec_err.to_string()))
            }
        }
    }

    /// Parse a PEM encoded PKCS#8 private key of any recognised family.
    pub fn from_pkcs8_pem(pem: &str) -> Result<Self, KeyError> {
        match SigningKey::from_pkcs8_pem(pem) {
            Ok(key) => Ok(PrivateKey::Ecdsa(key)),
            Err(ec_err) => {
                ed25519_dalek::SigningKey::from_pkcs8_pem(pem)
                    .map(PrivateKey::Ed25519)
                    .map_err(|_| KeyError::InvalidPrivateKey(ec_err.to_string()))
            }
        }
    }
}

impl From<SigningKey> for PrivateKey {
    fn from(key: SigningKey) -> Self {
        PrivateKey::Ecdsa(key)
    }
}

impl From<ed25519_dalek::SigningKey> for PrivateKey {
    fn from(key: ed25519_dalek::SigningKey) -> Self {
        PrivateKey::Ed25519(key)
    }
}

/// A public key handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKey {
    /// ECDSA over P-256.
    Ecdsa(VerifyingKey),
    /// Ed25519.
    Ed25519(ed25519_dalek::VerifyingKey),
}

impl PublicKey {
    /// Family of this key.
    pub fn family(&self) -> KeyFamily {
        match self {
            PublicKey::Ecdsa(_) => KeyFamily::EllipticCurve,
            PublicKey::Ed25519(_) => KeyFamily::Ed25519,
        }
    }

    /// Parse a DER encoded SubjectPublicKeyInfo of any recognised family.
    pub fn from_public_key_der(der: &[u8]) -> Result<Self, KeyError> {
        match VerifyingKey::from_public_key_der(der) {
            Ok(key) => Ok(PublicKey::Ecdsa(key)),
            Err(ec_err) => {
                ed25519_dalek::VerifyingKey::from_public_key_der(der)
                    .map(PublicKey::Ed25519)
                    .map_err(|_| KeyError::InvalidPublicKey(ec_err.to_string()))
            }
        }
    }

    /// Parse a PEM encoded SubjectPublicKeyInfo of any recognised family.
    pub fn from_public_key_pem(pem: &str) -> Result<Self, KeyError> {
        match VerifyingKey::from_public_key_pem(pem) {
            Ok(key) => Ok(PublicKey::Ecdsa(key)),
            Err(ec_err) => {
                ed25519_dalek::VerifyingKey::from_public_key_pem(pem)
                    .map(PublicKey::Ed25519)
                    .map_err(|_| KeyError::InvalidPublicKey(ec_err.to_string()))
            }
        }
    }
}

impl From<&PrivateKey> for PublicKey {
    fn from(key: &PrivateKey) -> Self {
        match key {
            PrivateKey::Ecdsa(sk) => PublicKey::Ecdsa(VerifyingKey::from(sk)),
            PrivateKey::Ed25519(sk) => PublicKey::Ed25519(sk.verifying_key()),
        }
    }
}

impl From<VerifyingKey> for PublicKey {
    fn from(key: VerifyingKey) -> Self {
        PublicKey::Ecdsa(key)
    }
}

impl From<ed25519_dalek::VerifyingKey> for PublicKey {
    fn from(key: ed25519_dalek::VerifyingKey) -> Self {
        PublicKey::Ed25519(key)
    }
}

impl RawSign for SigningKey {
    fn raw_sign(&self, data: &[u8]) -> Vec<u8> {
        // RFC 6979 nonces: no RNG state is shared between calls.
        let signature: Signature = self.sign_digest(Sha256::new_with_prefix(data));
        signature.to_der().as_bytes().to_vec()
    }
}

impl RawVerify for VerifyingKey {
    fn raw_verify(&self, data: &[u8], signature: &[u8]) -> bool {
        match Signature::from_der(signature) {
            Ok(signature) => self
                .verify_digest(Sha256::new_with_prefix(data), &signature)
                .is_ok(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use p256::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};

    fn ec_key() -> SigningKey {
        SigningKey::from_slice(&[0x42; 32]).unwrap()
    }

    fn ed_key() -> ed25519_dalek::SigningKey {
        ed25519_dalek::SigningKey::from_bytes(&[7u8; 32])
    }

    #[test]
    fn families() {
        let ec = PrivateKey::from(ec_key());
        let ed = PrivateKey::from(ed_key());
        assert_eq!(ec.family(), KeyFamily::EllipticCurve);
        assert_eq!(ed.family(), KeyFamily::Ed25519);
        assert_eq!(PublicKey::from(&ec).family(), KeyFamily::EllipticCurve);
        assert_eq!(PublicKey::from(&ed).family(), KeyFamily::Ed25519);

        assert_eq!(
            KeyFamily::EllipticCurve.algorithm_pair(),
            Some(AlgorithmPair::SHA256_ECDSA)
        );
        assert_eq!(KeyFamily::Ed25519.algorithm_pair(), None);
    }

    #[test]
    fn parse_ec_keys() {
        let sk = ec_key();
        let der = sk.to_pkcs8_der().unwrap();
        let pem = sk.to_pkcs8_pem(LineEnding::LF).unwrap();
        assert_eq!(
            PrivateKey::from_pkcs8_der(der.as_bytes()).unwrap().family(),
            KeyFamily::EllipticCurve
        );
        assert_eq!(
            PrivateKey::from_pkcs8_pem(&pem).unwrap().family(),
            KeyFamily::EllipticCurve
        );

        let vk = VerifyingKey::from(&sk);
        let spki_pem = vk.to_public_key_pem(LineEnding::LF).unwrap();
        let spki_der = vk.to_public_key_der().unwrap();
        assert_eq!(
            PublicKey::from_public_key_pem(&spki_pem).unwrap(),
            PublicKey::Ecdsa(vk.clone())
        );
        assert_eq!(
            PublicKey::from_public_key_der(spki_der.as_bytes()).unwrap(),
            PublicKey::Ecdsa(vk)
        );
    }

    #[test]
    fn parse_ed25519_keys() {
        let sk = ed_key();
        let pem = sk.to_pkcs8_pem(LineEnding::LF).unwrap();
        assert_eq!(
            PrivateKey::from_pkcs8_pem(&pem).unwrap().family(),
            KeyFamily::Ed25519
        );

        let spki_pem = sk
            .verifying_key()
            .to_public_key_pem(LineEnding::LF)
            .unwrap();
        assert_eq!(
            PublicKey::from_public_key_pem(&spki_pem).unwrap().family(),
            KeyFamily::Ed25519
        );
    }

    const EMPTY_PEM: &str = "-----BEGIN PUBLIC KEY-----\n-----END PUBLIC KEY-----\n";

    #[test]
    fn reject_garbage() {
        assert!(matches!(
            PrivateKey::from_pkcs8_der(b"not a key"),
            Err(KeyError::InvalidPrivateKey(_))
        ));
        assert!(matches!(
            PublicKey::from_public_key_pem(EMPTY_PEM),
            Err(KeyError::InvalidPublicKey(_))
        ));
    }

    #[test]
    fn raw_primitive() {
        let sk = ec_key();
        let vk = VerifyingKey::from(&sk);
        let sigma = sk.raw_sign(b"tilin");

        assert!(vk.raw_verify(b"tilin", &sigma));
        assert!(!vk.raw_verify(b"tilim", &sigma));
        // Not DER.
        assert!(!vk.raw_verify(b"tilin", &[0u8; 64]));
        assert!(!vk.raw_verify(b"tilin", &[]));

        let other = VerifyingKey::from(&SigningKey::from_slice(&[0x43; 32]).unwrap());
        assert!(!other.raw_verify(b"tilin", &sigma));
    }

    #[test]
    fn raw_primitive_is_sha256_ecdsa() {
        use p256::ecdsa::signature::{Signer, Verifier};

        let sk = ec_key();
        let vk = VerifyingKey::from(&sk);
        let sigma = sk.raw_sign(b"tilin");
        let decoded = Signature::from_der(&sigma).unwrap();
        assert!(vk.verify(b"tilin", &decoded).is_ok());

        // Deterministic nonces.
        let plain: Signature = sk.sign(b"tilin");
        assert_eq!(plain.to_der().as_bytes(), sigma.as_slice());
    }
}
