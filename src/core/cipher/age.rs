//! Age encryption backend implementation.
//!
//! Provides encryption/decryption using the age format with x25519 keys
//! and ASCII armor encoding. The armor helpers are shared with the
//! passphrase backend.

use std::io::{Read, Write};

use ::age::x25519;
use tracing::trace;

use super::Cipher;
use crate::error::{CipherError, Result};

/// Age-based cryptographic backend using x25519 keys
pub struct Age;

impl Cipher for Age {
    type Recipient = x25519::Recipient;
    type Identity = x25519::Identity;

    fn encrypt(&self, plaintext: &str, recipient: &x25519::Recipient) -> Result<String> {
        trace!(plaintext_len = plaintext.len(), "encrypting");

        let encryptor =
            age::Encryptor::with_recipients(std::iter::once(recipient as &dyn age::Recipient))
                .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

        seal(encryptor, plaintext)
    }

    fn decrypt(&self, encrypted: &str, identity: &x25519::Identity) -> Result<String> {
        trace!(ciphertext_len = encrypted.len(), "decrypting");

        open(encrypted, identity, CipherError::decryption)
    }
}

/// Write `plaintext` through `encryptor` into an ASCII-armored string.
pub(super) fn seal(encryptor: age::Encryptor, plaintext: &str) -> Result<String> {
    let mut encrypted = Vec::new();
    let mut writer = encryptor
        .wrap_output(age::armor::ArmoredWriter::wrap_output(
            &mut encrypted,
            age::armor::Format::AsciiArmor,
        )?)
        .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

    writer.write_all(plaintext.as_bytes())?;
    let armored = writer
        .finish()
        .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;
    armored
        .finish()
        .map_err(|e| CipherError::ArmorFailed(format!("{}", e)))?;

    trace!(ciphertext_len = encrypted.len(), "encrypted");

    String::from_utf8(encrypted)
        .map_err(|e| CipherError::EncryptionFailed(format!("UTF-8 error: {}", e)).into())
}

/// Decrypt an ASCII-armored ciphertext with `identity`.
///
/// `rejected` maps errors from unlocking the file key and checking the
/// header; payload errors are always `DecryptionFailed`.
pub(super) fn open(
    encrypted: &str,
    identity: &dyn age::Identity,
    rejected: fn(age::DecryptError) -> CipherError,
) -> Result<String> {
    let reader = age::armor::ArmoredReader::new(encrypted.as_bytes());
    let decryptor = age::Decryptor::new(reader).map_err(CipherError::decryption)?;

    let mut decrypted = Vec::new();
    let mut reader = decryptor
        .decrypt(std::iter::once(identity))
        .map_err(rejected)?;

    reader
        .read_to_end(&mut decrypted)
        .map_err(CipherError::decryption)?;

    trace!(plaintext_len = decrypted.len(), "decrypted");

    String::from_utf8(decrypted).map_err(|e| CipherError::decryption(e).into())
}
