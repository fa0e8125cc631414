//! Error types.
//!
//! Errors are grouped by concern and folded into [`Error`] so every
//! operation can return the crate-wide [`Result`].

use thiserror::Error;

/// Top-level error for all strata operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    /// Reading a value failed; carries the key and stack it was read for.
    #[error("could not decrypt configuration value '{key}' for stack '{}': {source}", scope_label(.stack))]
    Read {
        key: String,
        stack: String,
        #[source]
        source: Box<Error>,
    },

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Project file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("not initialized: no Strata.toml found in this directory or any parent")]
    NotInitialized,

    #[error("already initialized: Strata.toml exists")]
    AlreadyInitialized,

    #[error("failed to read project file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to write project file: {0}")]
    WriteFile(#[source] std::io::Error),

    #[error("failed to parse project file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize project file: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("invalid stack name '{name}': {reason}")]
    InvalidStack { name: String, reason: String },
}

/// Configuration key errors.
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("invalid configuration key '{key}': {reason}")]
    Invalid { key: String, reason: String },

    #[error("configuration key '{key}' not found for stack '{}'", scope_label(.stack))]
    NotFound { key: String, stack: String },
}

/// Encryption and decryption errors.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("armor encoding failed: {0}")]
    ArmorFailed(String),

    /// A secure value reached a code path that only expects plaintext.
    #[error("internal error: attempted to decrypt a value through the forbidden decrypter")]
    Forbidden,

    #[error("incorrect passphrase")]
    IncorrectPassphrase,

    #[error("no passphrase available: set STRATA_CONFIG_PASSPHRASE or run interactively")]
    NoPassphrase,

    #[error("project has secure values but no encryption key")]
    NoEncryptionKey,
}

impl CipherError {
    /// Wrap an underlying failure as a decryption error.
    pub fn decryption<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::DecryptionFailed(Box::new(source))
    }
}

/// Label used in messages for a stack name; empty means project-wide.
fn scope_label(stack: &str) -> &str {
    if stack.is_empty() {
        "<project>"
    } else {
        stack
    }
}

pub type Result<T> = std::result::Result<T, Error>;
