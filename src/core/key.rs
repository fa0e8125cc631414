//! Configuration keys.
//!
//! A key is the triple `namespace:category:name`. It is stored and compared
//! by its serialized string, so ordering matches plain string ordering.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::constants::{DEFAULT_CATEGORY, KEY_DELIMITER};
use crate::error::{KeyError, Result};

/// A fully-qualified configuration key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Build a key from its three segments.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::Invalid` if any segment breaks the key grammar.
    pub fn new(namespace: &str, category: &str, name: &str) -> Result<Self> {
        Self::parse(&format!(
            "{namespace}{KEY_DELIMITER}{category}{KEY_DELIMITER}{name}"
        ))
    }

    /// Parse a fully-qualified `namespace:category:name` string.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::Invalid` if the string does not match the grammar.
    pub fn parse(raw: &str) -> Result<Self> {
        let segments: Vec<&str> = raw.split(KEY_DELIMITER).collect();
        if segments.len() != 3 {
            return Err(invalid(
                raw,
                format!(
                    "expected namespace:category:name, found {} segment(s)",
                    segments.len()
                ),
            ));
        }

        validate_segment(raw, "namespace", segments[0], false)?;
        validate_segment(raw, "category", segments[1], false)?;
        validate_segment(raw, "name", segments[2], true)?;

        Ok(Self(raw.to_string()))
    }

    /// Parse a key, qualifying a bare name with the project namespace.
    ///
    /// A raw string without a delimiter is treated as if
    /// `<namespace>:config:<raw>` had been written. The namespace lookup only
    /// runs for bare names.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::Invalid` if the key is malformed or the namespace
    /// lookup fails.
    pub fn qualify<F>(raw: &str, namespace: F) -> Result<Self>
    where
        F: FnOnce() -> Result<String>,
    {
        if raw.contains(KEY_DELIMITER) {
            return Self::parse(raw);
        }

        let namespace = namespace()
            .map_err(|e| invalid(raw, format!("cannot determine project namespace: {e}")))?;
        Self::new(&namespace, DEFAULT_CATEGORY, raw)
    }

    /// Leading segment.
    pub fn namespace(&self) -> &str {
        self.segment(0)
    }

    /// Middle segment, conventionally `config`.
    pub fn category(&self) -> &str {
        self.segment(1)
    }

    /// Trailing segment.
    pub fn name(&self) -> &str {
        self.segment(2)
    }

    /// Fully-qualified string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short display form relative to `namespace`. See [`pretty`].
    pub fn pretty<'a>(&'a self, namespace: &str) -> &'a str {
        pretty(&self.0, namespace)
    }

    fn segment(&self, index: usize) -> &str {
        self.0.split(KEY_DELIMITER).nth(index).unwrap_or_default()
    }
}

/// Strip the `<namespace>:config:` prefix from `key` for display.
///
/// Keys from other namespaces or categories come back unchanged.
pub fn pretty<'a>(key: &'a str, namespace: &str) -> &'a str {
    let prefix = format!("{namespace}{KEY_DELIMITER}{DEFAULT_CATEGORY}{KEY_DELIMITER}");
    key.strip_prefix(prefix.as_str()).unwrap_or(key)
}

/// Validate a project namespace on its own, e.g. a name given to `init`.
pub fn validate_namespace(namespace: &str) -> Result<()> {
    validate_segment(namespace, "namespace", namespace, false)
}

fn validate_segment(raw: &str, what: &str, segment: &str, is_name: bool) -> Result<()> {
    if segment.is_empty() {
        return Err(invalid(raw, format!("{what} cannot be empty")));
    }

    for (i, ch) in segment.chars().enumerate() {
        let allowed = ch.is_ascii_alphanumeric()
            || matches!(ch, '_' | '-' | '.')
            || (is_name && ch == '/');
        if !allowed {
            return Err(invalid(
                raw,
                format!(
                    "invalid character '{}' at position {} of the {}",
                    ch,
                    i + 1,
                    what
                ),
            ));
        }
    }

    Ok(())
}

fn invalid(raw: &str, reason: String) -> crate::error::Error {
    KeyError::Invalid {
        key: raw.to_string(),
        reason,
    }
    .into()
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ConfigKey {
    type Error = crate::error::Error;

    fn try_from(raw: String) -> Result<Self> {
        Self::parse(&raw)
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl std::str::FromStr for ConfigKey {
    type Err = crate::error::Error;

    fn from_str(raw: &str) -> Result<Self> {
        Self::parse(raw)
    }
}
