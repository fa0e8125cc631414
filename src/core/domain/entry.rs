//! Listing entry type.
//!
//! One resolved configuration value, already read through a decrypter.

use zeroize::Zeroizing;

use crate::core::key::ConfigKey;

/// A resolved configuration entry ready for display.
#[derive(Debug, Clone)]
pub struct Entry {
    key: ConfigKey,
    display: String,
    value: Zeroizing<String>,
    secure: bool,
}

impl Entry {
    /// Create an entry. `display` is the short key form.
    pub fn new(key: ConfigKey, display: String, value: String, secure: bool) -> Self {
        Self {
            key,
            display,
            value: Zeroizing::new(value),
            secure,
        }
    }

    /// Fully-qualified key
    pub fn key(&self) -> &ConfigKey {
        &self.key
    }

    /// Key as shown to the user
    pub fn display_key(&self) -> &str {
        &self.display
    }

    /// Value as read: plaintext, decrypted text, or the blinding mask
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the stored value is ciphertext
    pub fn is_secure(&self) -> bool {
        self.secure
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display)
    }
}
