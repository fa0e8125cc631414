//! Project file management.
//!
//! Handles reading, writing, and validating `Strata.toml`, the persisted
//! [`ConfigStore`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::core::key;
use crate::core::types::{Ciphertext, ConfigMap, ProjectName, StackName};
use crate::error::{ConfigError, Result};

/// Project descriptor stored in `Strata.toml`.
///
/// Holds one project-wide mapping and, per stack, an independent mapping of
/// overrides. Either may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigStore {
    /// Project metadata
    pub project: Meta,
    /// Project-wide configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ConfigMap>,
    /// Per-stack overrides
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub stacks: BTreeMap<StackName, StackInfo>,
}

/// Metadata section of the project file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// Project name, used as the default key namespace
    pub name: ProjectName,
    /// Currently selected stack
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<StackName>,
    /// Project identity wrapped under the passphrase
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_key: Option<Ciphertext>,
}

/// A stack's own settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StackInfo {
    /// Overrides applied on top of the project-wide configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ConfigMap>,
}

impl ConfigStore {
    /// Create an empty store for a project.
    pub fn new(name: &str) -> Self {
        Self {
            project: Meta {
                name: name.to_string(),
                ..Meta::default()
            },
            ..Self::default()
        }
    }

    /// Find the project file, starting in `start` and walking up.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if no ancestor holds one.
    pub fn find(start: &Path) -> Result<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(constants::PROJECT_FILE))
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| ConfigError::NotInitialized.into())
    }

    /// Load a project file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if the file doesn't exist,
    /// or `ConfigError::Parse` if the TOML is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading project file");

        if !path.exists() {
            return Err(ConfigError::NotInitialized.into());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let store: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        debug!(
            project = %store.project.name,
            entries = store.config.as_ref().map_or(0, |c| c.len()),
            stacks = store.stacks.len(),
            "project file loaded"
        );

        store.validate()?;

        Ok(store)
    }

    /// Save to a project file.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "saving project file");

        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, contents).map_err(ConfigError::WriteFile)?;

        Ok(())
    }

    /// Validate the loaded descriptor.
    ///
    /// Keys are validated while parsing; this covers the project name and
    /// stack names.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` or `ConfigError::InvalidStack`.
    pub fn validate(&self) -> Result<()> {
        key::validate_namespace(&self.project.name).map_err(|e| ConfigError::InvalidValue {
            field: "project name",
            reason: e.to_string(),
        })?;

        if let Some(stack) = &self.project.stack {
            validate_stack_name(stack)?;
        }
        for stack in self.stacks.keys() {
            validate_stack_name(stack)?;
        }

        Ok(())
    }

    /// Override mapping for `stack`, if it has one.
    pub fn stack_config(&self, stack: &str) -> Option<&ConfigMap> {
        self.stacks.get(stack).and_then(|info| info.config.as_ref())
    }

    /// Mapping for a scope, if it exists. Empty `stack` is project-wide.
    pub fn scope(&self, stack: &str) -> Option<&ConfigMap> {
        if stack.is_empty() {
            self.config.as_ref()
        } else {
            self.stack_config(stack)
        }
    }

    /// Mapping for a scope, created on first use.
    pub fn scope_mut(&mut self, stack: &str) -> &mut ConfigMap {
        if stack.is_empty() {
            self.config.get_or_insert_with(ConfigMap::new)
        } else {
            self.stacks
                .entry(stack.to_string())
                .or_default()
                .config
                .get_or_insert_with(ConfigMap::new)
        }
    }

    /// Mutable mapping for a scope without creating anything.
    pub fn existing_scope_mut(&mut self, stack: &str) -> Option<&mut ConfigMap> {
        if stack.is_empty() {
            self.config.as_mut()
        } else {
            self.stacks
                .get_mut(stack)
                .and_then(|info| info.config.as_mut())
        }
    }
}

/// Validate a stack name.
///
/// Stack names must be non-empty and use only ASCII alphanumerics, `_`,
/// `-` and `.`.
pub fn validate_stack_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ConfigError::InvalidStack {
            name: name.to_string(),
            reason: "cannot be empty".to_string(),
        }
        .into());
    }

    if let Some((i, ch)) = name
        .chars()
        .enumerate()
        .find(|(_, ch)| !ch.is_ascii_alphanumeric() && !matches!(ch, '_' | '-' | '.'))
    {
        return Err(ConfigError::InvalidStack {
            name: name.to_string(),
            reason: format!("invalid character '{}' at position {}", ch, i + 1),
        }
        .into());
    }

    Ok(())
}
