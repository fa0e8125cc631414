//! Passphrase encryption backend and passphrase sources.
//!
//! Uses age's scrypt mode. Only the project identity is encrypted this way;
//! configuration values go through the x25519 backend.

use age::secrecy::SecretString;
use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::age::{open, seal};
use super::Cipher;
use crate::core::constants::PASSPHRASE_ENV;
use crate::error::{CipherError, Result};

/// Scrypt-based backend keyed by a passphrase.
pub struct Passphrase;

impl Cipher for Passphrase {
    type Recipient = str;
    type Identity = str;

    fn encrypt(&self, plaintext: &str, passphrase: &str) -> Result<String> {
        trace!(plaintext_len = plaintext.len(), "encrypting with passphrase");

        let encryptor =
            age::Encryptor::with_user_passphrase(SecretString::from(passphrase.to_string()));
        seal(encryptor, plaintext)
    }

    fn decrypt(&self, encrypted: &str, passphrase: &str) -> Result<String> {
        trace!(ciphertext_len = encrypted.len(), "decrypting with passphrase");

        let identity = age::scrypt::Identity::new(SecretString::from(passphrase.to_string()));
        open(encrypted, &identity, |e| match e {
            age::DecryptError::DecryptionFailed | age::DecryptError::NoMatchingKeys => {
                CipherError::IncorrectPassphrase
            }
            other => CipherError::decryption(other),
        })
    }
}

/// Where the passphrase for secure values comes from.
pub trait PassphraseSource {
    /// Produce the passphrase.
    ///
    /// `confirm` is set when a new project key is about to be created, so
    /// interactive sources can ask twice.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::NoPassphrase` when no passphrase is available.
    fn passphrase(&self, confirm: bool) -> Result<Zeroizing<String>>;
}

/// A passphrase known up front.
pub struct Fixed(Zeroizing<String>);

impl Fixed {
    /// Wrap a passphrase.
    pub fn new(passphrase: &str) -> Self {
        Self(Zeroizing::new(passphrase.to_string()))
    }
}

impl PassphraseSource for Fixed {
    fn passphrase(&self, _confirm: bool) -> Result<Zeroizing<String>> {
        Ok(self.0.clone())
    }
}

/// The passphrase in `STRATA_CONFIG_PASSPHRASE`.
pub struct FromEnv;

impl PassphraseSource for FromEnv {
    fn passphrase(&self, _confirm: bool) -> Result<Zeroizing<String>> {
        match std::env::var(PASSPHRASE_ENV) {
            Ok(value) => {
                debug!(var = PASSPHRASE_ENV, "using passphrase from environment");
                Ok(Zeroizing::new(value))
            }
            Err(_) => Err(CipherError::NoPassphrase.into()),
        }
    }
}
