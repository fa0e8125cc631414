//! The project's symmetric crypter.

use std::fmt;

use age::secrecy::ExposeSecret;
use age::x25519;
use tracing::debug;

use super::{Age, Cipher, Passphrase};
use crate::core::types::Ciphertext;
use crate::error::{CipherError, Result};

/// Encrypts and decrypts secure values with the project identity.
///
/// The same key both encrypts and decrypts, so callers can treat it as a
/// symmetric cipher. At rest the identity only exists wrapped under the
/// passphrase (see [`Crypter::wrap_key`]).
pub struct Crypter {
    identity: x25519::Identity,
}

impl Crypter {
    /// Create a crypter with a fresh project identity.
    pub fn generate() -> Self {
        debug!("generating project identity");
        Self {
            identity: x25519::Identity::generate(),
        }
    }

    /// Recover a crypter from a wrapped identity.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::IncorrectPassphrase` if the passphrase does not
    /// open `wrapped`, or `CipherError::DecryptionFailed` if it is corrupt.
    pub fn unwrap_key(wrapped: &str, passphrase: &str) -> Result<Self> {
        let secret = zeroize::Zeroizing::new(Passphrase.decrypt(wrapped, passphrase)?);
        let identity = secret
            .trim()
            .parse::<x25519::Identity>()
            .map_err(|e| CipherError::decryption(InvalidIdentity(e)))?;

        debug!("project identity unlocked");
        Ok(Self { identity })
    }

    /// Encrypt the identity under `passphrase` for storage.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if encryption fails.
    pub fn wrap_key(&self, passphrase: &str) -> Result<Ciphertext> {
        let secret = self.identity.to_string();
        Passphrase.encrypt(secret.expose_secret(), passphrase)
    }

    /// Encrypt a configuration value.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if encryption fails.
    pub fn encrypt(&self, plaintext: &str) -> Result<Ciphertext> {
        Age.encrypt(plaintext, &self.identity.to_public())
    }

    /// Decrypt a configuration value.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::DecryptionFailed` on a foreign or corrupt
    /// ciphertext.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String> {
        Age.decrypt(ciphertext, &self.identity)
    }
}

impl fmt::Debug for Crypter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Crypter")
            .field("recipient", &self.identity.to_public().to_string())
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
struct InvalidIdentity(&'static str);

impl fmt::Display for InvalidIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stored project key is not an age identity: {}", self.0)
    }
}

impl std::error::Error for InvalidIdentity {}
