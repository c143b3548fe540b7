//! Traits that define the raw asymmetric primitive behind a log key

/// Trait that defines raw signing with a log private key
pub trait RawSign {
    /// Hash `data` with the key's fixed digest and sign it, returning the raw signature
    /// bytes in the encoding used on the wire.
    fn raw_sign(&self, data: &[u8]) -> Vec<u8>;
}

/// Trait that defines raw verification with a log public key
///
/// # Example
/// ```
/// use ct_log_signer::traits::{RawSign, RawVerify};
/// use p256::ecdsa::{SigningKey, VerifyingKey};
///
/// let signing_key = SigningKey::from_slice(&[0x42; 32]).unwrap();
/// let verifying_key = VerifyingKey::from(&signing_key);
/// let sigma = signing_key.raw_sign(b"tilin");
///
/// assert!(verifying_key.raw_verify(b"tilin", &sigma));
/// assert!(!verifying_key.raw_verify(b"tolon", &sigma));
/// ```
pub trait RawVerify {
    /// Check `signature` over `data`. Signature bytes that cannot be parsed do not verify.
    fn raw_verify(&self, data: &[u8], signature: &[u8]) -> bool;
}
