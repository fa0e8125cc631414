//! Cryptographic operations.
//!
//! Secure configuration values are age ciphertexts addressed to a single
//! per-project x25519 identity. That identity is itself stored in the project
//! file, encrypted under the user's passphrase with age's scrypt mode.
//!
//! ## Backends
//!
//! - **age** ([`Age`]): x25519 public-key encryption of values.
//! - **passphrase** ([`Passphrase`]): scrypt-based encryption used to wrap
//!   the project identity.
//!
//! [`Crypter`] combines both into the symmetric encrypt/decrypt capability
//! the rest of the crate uses.

mod age;
mod crypter;
mod passphrase;

pub use self::age::Age;
pub use crypter::Crypter;
pub use passphrase::{Fixed, FromEnv, Passphrase, PassphraseSource};

/// Cryptographic backend trait.
///
/// Recipients and identities are backend-specific:
/// - age: x25519 public/private keys
/// - passphrase: the passphrase itself, for both directions
pub trait Cipher {
    /// Type representing what a value is encrypted to.
    type Recipient: ?Sized;

    /// Type representing what decrypts a value.
    type Identity: ?Sized;

    /// Encrypt plaintext for a recipient.
    ///
    /// # Returns
    ///
    /// ASCII-armored ciphertext.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if encryption fails.
    fn encrypt(&self, plaintext: &str, recipient: &Self::Recipient) -> crate::error::Result<String>;

    /// Decrypt an armored ciphertext.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if the identity does not match or the
    /// ciphertext is corrupt.
    fn decrypt(&self, encrypted: &str, identity: &Self::Identity) -> crate::error::Result<String>;
}
