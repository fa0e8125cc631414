//! The primary interface for strata operations.
//!
//! [`Project`] owns the loaded [`ConfigStore`] and the path it came from.
//! It is opened once per invocation and handed to every operation.

mod config;

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::cipher::{Crypter, PassphraseSource};
use crate::core::constants;
use crate::core::domain::StackSummary;
use crate::core::key::{self, ConfigKey};
use crate::core::resolve::resolve;
use crate::core::store::{self, ConfigStore};
use crate::core::types::ConfigMap;
use crate::error::{CipherError, ConfigError, Result};

/// A loaded project file.
#[derive(Debug)]
pub struct Project {
    store: ConfigStore,
    path: PathBuf,
}

impl Project {
    /// Open the project that contains the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if no `Strata.toml` exists here
    /// or in any parent directory.
    pub fn open() -> Result<Self> {
        Self::discover(&std::env::current_dir()?)
    }

    /// Open the nearest project file at or above `start`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if none is found, or a load error.
    pub fn discover(start: &Path) -> Result<Self> {
        let path = ConfigStore::find(start)?;
        Self::open_at(&path)
    }

    /// Open a specific project file.
    ///
    /// # Errors
    ///
    /// Returns error if the file is missing or invalid.
    pub fn open_at(path: &Path) -> Result<Self> {
        let store = ConfigStore::load(path)?;
        Ok(Self {
            store,
            path: path.to_path_buf(),
        })
    }

    /// Create a new project file in `dir`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::AlreadyInitialized` if `dir` already has one,
    /// or `ConfigError::InvalidValue` if `name` is not a valid namespace.
    pub fn init(dir: &Path, name: &str) -> Result<Self> {
        let path = dir.join(constants::PROJECT_FILE);
        if path.exists() {
            return Err(ConfigError::AlreadyInitialized.into());
        }

        key::validate_namespace(name).map_err(|e| ConfigError::InvalidValue {
            field: "project name",
            reason: e.to_string(),
        })?;

        let project = Self {
            store: ConfigStore::new(name),
            path,
        };
        project.save()?;

        info!(project = name, "project initialized");
        Ok(project)
    }

    /// Project name (the default key namespace).
    pub fn name(&self) -> &str {
        &self.store.project.name
    }

    /// Path of the project file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read-only access to the underlying store.
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Parse a raw key, qualifying bare names with this project's name.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::Invalid` if the key is malformed.
    pub fn parse_key(&self, raw: &str) -> Result<ConfigKey> {
        ConfigKey::qualify(raw, || Ok(self.name().to_string()))
    }

    /// Short display form of a key for this project.
    pub fn pretty<'a>(&self, key: &'a ConfigKey) -> &'a str {
        key.pretty(self.name())
    }

    /// Effective configuration for `stack`. Empty `stack` is project-wide.
    pub fn configuration(&self, stack: &str) -> Cow<'_, ConfigMap> {
        let overrides = if stack.is_empty() {
            None
        } else {
            self.store.stack_config(stack)
        };
        resolve(self.store.config.as_ref(), overrides)
    }

    /// The selected stack, if any.
    pub fn current_stack(&self) -> Option<&str> {
        self.store.project.stack.as_deref()
    }

    /// Pick the stack to read from: an explicit name, else the selected
    /// stack, else the project-wide scope. An explicit empty name selects
    /// the project-wide scope even when a stack is current.
    pub fn stack_or_current(&self, explicit: Option<&str>) -> String {
        explicit
            .or_else(|| self.current_stack())
            .unwrap_or_default()
            .to_string()
    }

    /// Select `name` as the current stack, registering it if new.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidStack` for a malformed name, or a save error.
    pub fn select_stack(&mut self, name: &str) -> Result<()> {
        store::validate_stack_name(name)?;

        self.store.stacks.entry(name.to_string()).or_default();
        self.store.project.stack = Some(name.to_string());
        self.save()?;

        info!(stack = name, "stack selected");
        Ok(())
    }

    /// All stacks in the project file, in name order.
    pub fn stacks(&self) -> Vec<StackSummary> {
        let current = self.current_stack();
        let mut summaries: Vec<StackSummary> = self
            .store
            .stacks
            .iter()
            .map(|(name, info)| StackSummary {
                name: name.clone(),
                entries: info.config.as_ref().map_or(0, |c| c.len()),
                current: current == Some(name.as_str()),
            })
            .collect();

        if let Some(name) = current {
            if !self.store.stacks.contains_key(name) {
                summaries.push(StackSummary {
                    name: name.to_string(),
                    entries: 0,
                    current: true,
                });
                summaries.sort_by(|a, b| a.name.cmp(&b.name));
            }
        }

        summaries
    }

    /// Write the store back to its file.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or the write fails.
    pub fn save(&self) -> Result<()> {
        self.store.save(&self.path)
    }

    /// Unlock the symmetric crypter for reading secure values.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::NoEncryptionKey` if the project has no key yet,
    /// `CipherError::IncorrectPassphrase` on a wrong passphrase.
    pub(crate) fn crypter(&self, source: &dyn PassphraseSource) -> Result<Crypter> {
        let wrapped = self
            .store
            .project
            .encryption_key
            .as_deref()
            .ok_or(CipherError::NoEncryptionKey)?;
        let passphrase = source.passphrase(false)?;
        Crypter::unwrap_key(wrapped, &passphrase)
    }

    /// Unlock the crypter, creating the project key on first use.
    ///
    /// A new key is only recorded in memory; the caller's save persists it.
    pub(crate) fn crypter_or_init(&mut self, source: &dyn PassphraseSource) -> Result<Crypter> {
        if self.store.project.encryption_key.is_some() {
            return self.crypter(source);
        }

        debug!("creating project encryption key");
        let passphrase = source.passphrase(true)?;
        let crypter = Crypter::generate();
        self.store.project.encryption_key = Some(crypter.wrap_key(&passphrase)?);
        Ok(crypter)
    }
}
