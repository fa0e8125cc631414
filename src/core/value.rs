//! Configuration values and the decrypters that read them.
//!
//! A [`Value`] never holds decrypted secret text. Reading goes through
//! [`Value::read`], which consults the [`Decrypter`] only for secure values.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::cipher::Crypter;
use crate::core::constants::BLINDED_VALUE;
use crate::core::types::Ciphertext;
use crate::error::{CipherError, Result};

/// A stored configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Repr", into = "Repr")]
pub enum Value {
    /// Plaintext, stored as-is.
    Plain(String),
    /// Ciphertext produced by the project's [`Crypter`].
    Secure(Ciphertext),
}

/// On-disk shape: a bare string, or `{ secure = "..." }`.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum Repr {
    Plain(String),
    Secure { secure: Ciphertext },
}

impl Value {
    /// Whether the value is stored as ciphertext.
    pub fn is_secure(&self) -> bool {
        matches!(self, Self::Secure(_))
    }

    /// Plaintext of the value.
    ///
    /// Plain values are returned without touching `decrypter`.
    ///
    /// # Errors
    ///
    /// Returns whatever the decrypter returns for a secure value.
    pub fn read(&self, decrypter: &Decrypter<'_>) -> Result<String> {
        match self {
            Self::Plain(text) => Ok(text.clone()),
            Self::Secure(ciphertext) => decrypter.decrypt(ciphertext),
        }
    }
}

impl From<Repr> for Value {
    fn from(repr: Repr) -> Self {
        match repr {
            Repr::Plain(text) => Self::Plain(text),
            Repr::Secure { secure } => Self::Secure(secure),
        }
    }
}

impl From<Value> for Repr {
    fn from(value: Value) -> Self {
        match value {
            Value::Plain(text) => Self::Plain(text),
            Value::Secure(secure) => Self::Secure { secure },
        }
    }
}

/// How secure values are turned into display text.
#[derive(Debug, Clone, Copy)]
pub enum Decrypter<'a> {
    /// Real decryption with the project's key.
    Symmetric(&'a Crypter),
    /// Masks every secure value; needs no key material.
    Blinding,
    /// Guard for code paths that must only ever see plain values.
    Forbidden,
}

impl Decrypter<'_> {
    /// Turn `ciphertext` into plaintext (or a mask).
    ///
    /// # Errors
    ///
    /// `Symmetric` fails on a wrong key or corrupt ciphertext; `Forbidden`
    /// always fails with `CipherError::Forbidden`.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String> {
        match self {
            Self::Symmetric(crypter) => crypter.decrypt(ciphertext),
            Self::Blinding => {
                trace!("blinding secure value");
                Ok(BLINDED_VALUE.to_string())
            }
            Self::Forbidden => Err(CipherError::Forbidden.into()),
        }
    }
}
