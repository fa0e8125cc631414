//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

use std::collections::BTreeMap;

use crate::core::key::ConfigKey;
use crate::core::value::Value;

/// A stack name (e.g., dev, production). Empty means project-wide.
pub type StackName = String;

/// An age-encrypted, ASCII-armored value.
pub type Ciphertext = String;

/// A project name; doubles as the default key namespace.
pub type ProjectName = String;

/// One scope's configuration entries, ordered by fully-qualified key.
pub type ConfigMap = BTreeMap<ConfigKey, Value>;
