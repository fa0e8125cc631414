//! Configuration operations.
//!
//! Get, list, set and delete on a stack's effective configuration. An
//! empty stack name addresses the project-wide scope.

use tracing::{debug, info};
use zeroize::Zeroizing;

use super::Project;
use crate::core::cipher::PassphraseSource;
use crate::core::domain::Entry;
use crate::core::key::ConfigKey;
use crate::core::store;
use crate::core::value::{Decrypter, Value};
use crate::error::{Error, KeyError, Result};

impl Project {
    /// Read a single value.
    ///
    /// Plain values are read through the forbidden decrypter, so a secure
    /// value can only be decrypted after an explicit `is_secure` check.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::NotFound` if `key` is not in the stack's effective
    /// configuration, or a read error if decryption fails.
    pub fn get(
        &self,
        stack: &str,
        key: &ConfigKey,
        source: &dyn PassphraseSource,
    ) -> Result<Zeroizing<String>> {
        let config = self.configuration(stack);
        let value = config.get(key).ok_or_else(|| KeyError::NotFound {
            key: self.pretty(key).to_string(),
            stack: stack.to_string(),
        })?;

        let crypter = if value.is_secure() {
            Some(self.crypter(source)?)
        } else {
            None
        };
        let decrypter = crypter
            .as_ref()
            .map_or(Decrypter::Forbidden, Decrypter::Symmetric);

        let plaintext = value
            .read(&decrypter)
            .map_err(|e| self.read_error(key, stack, e))?;

        Ok(Zeroizing::new(plaintext))
    }

    /// Read every value in the stack's effective configuration.
    ///
    /// Secure values are masked unless `show_secrets` is set and the listing
    /// holds at least one secure value; then the passphrase is requested
    /// once and used for every entry.
    ///
    /// # Returns
    ///
    /// Entries sorted by fully-qualified key.
    ///
    /// # Errors
    ///
    /// Returns an error if unlocking the crypter or any decryption fails.
    pub fn list(
        &self,
        stack: &str,
        show_secrets: bool,
        source: &dyn PassphraseSource,
    ) -> Result<Vec<Entry>> {
        let config = self.configuration(stack);
        let has_secure = config.values().any(Value::is_secure);

        let crypter = if show_secrets && has_secure {
            Some(self.crypter(source)?)
        } else {
            None
        };
        let decrypter = crypter
            .as_ref()
            .map_or(Decrypter::Blinding, Decrypter::Symmetric);

        debug!(
            stack,
            entries = config.len(),
            reveal = crypter.is_some(),
            "listing configuration"
        );

        config
            .iter()
            .map(|(key, value)| -> Result<Entry> {
                let text = value
                    .read(&decrypter)
                    .map_err(|e| self.read_error(key, stack, e))?;
                Ok(Entry::new(
                    key.clone(),
                    self.pretty(key).to_string(),
                    text,
                    value.is_secure(),
                ))
            })
            .collect()
    }

    /// Store a value in one scope and save.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidStack` for a malformed stack name, or a
    /// save error.
    pub fn set(&mut self, stack: &str, key: &ConfigKey, value: Value) -> Result<()> {
        if !stack.is_empty() {
            store::validate_stack_name(stack)?;
        }

        info!(key = %key, stack, secure = value.is_secure(), "setting configuration");
        self.store.scope_mut(stack).insert(key.clone(), value);
        self.save()
    }

    /// Encrypt `plaintext` and store it as a secure value.
    ///
    /// The first secret in a project creates its encryption key.
    ///
    /// # Errors
    ///
    /// Returns an error if the passphrase is unavailable or wrong, if
    /// encryption fails, or if saving fails.
    pub fn set_secret(
        &mut self,
        stack: &str,
        key: &ConfigKey,
        plaintext: &str,
        source: &dyn PassphraseSource,
    ) -> Result<()> {
        let crypter = self.crypter_or_init(source)?;
        let ciphertext = crypter.encrypt(plaintext)?;
        self.set(stack, key, Value::Secure(ciphertext))
    }

    /// Remove a value from one scope and save. A missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a save error.
    pub fn delete(&mut self, stack: &str, key: &ConfigKey) -> Result<()> {
        let removed = self
            .store
            .existing_scope_mut(stack)
            .and_then(|config| config.remove(key))
            .is_some();

        info!(key = %key, stack, removed, "deleting configuration");
        self.save()
    }

    fn read_error(&self, key: &ConfigKey, stack: &str, source: Error) -> Error {
        Error::Read {
            key: self.pretty(key).to_string(),
            stack: stack.to_string(),
            source: Box::new(source),
        }
    }
}
