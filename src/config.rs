//! Key configuration for log signers and verifiers
use crate::errors::ConfigError;
use crate::keys::{PrivateKey, PublicKey};
use crate::signer::LogSigner;
use crate::verifier::LogSigVerifier;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;
use zeroize::Zeroizing;

/// Locations of a log's key material, usually read from a TOML file:
///
/// ```toml
/// private_key_path = "/etc/ct/log-key.pem"
/// public_key_path = "/etc/ct/log-key.pub.pem"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyConfig {
    /// PEM encoded PKCS#8 private key, needed to sign.
    #[serde(default)]
    pub private_key_path: Option<PathBuf>,

    /// PEM encoded SubjectPublicKeyInfo, needed to verify.
    #[serde(default)]
    pub public_key_path: Option<PathBuf>,
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl KeyConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = read_file(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Read the private key and build a signer from it.
    ///
    /// # Panics
    /// As [`LogSigner::new`], if the key is of an unsupported family.
    pub fn load_signer(&self) -> Result<LogSigner, ConfigError> {
        let path = self
            .private_key_path
            .as_deref()
            .ok_or(ConfigError::MissingKeyPath("private_key_path"))?;
        let pem = Zeroizing::new(read_file(path)?);
        let key = PrivateKey::from_pkcs8_pem(&pem)?;
        info!(path = %path.display(), family = %key.family(), "loaded log private key");
        Ok(LogSigner::new(key))
    }

    /// Read the public key and build a verifier from it.
    ///
    /// # Panics
    /// As [`LogSigVerifier::new`], if the key is of an unsupported family.
    pub fn load_verifier(&self) -> Result<LogSigVerifier, ConfigError> {
        let path = self
            .public_key_path
            .as_deref()
            .ok_or(ConfigError::MissingKeyPath("public_key_path"))?;
        let key = PublicKey::from_public_key_pem(&read_file(path)?)?;
        info!(path = %path.display(), family = %key.family(), "loaded log public key");
        Ok(LogSigVerifier::new(key))
    }
}
