//! Constants used throughout strata.
//!
//! Centralizes file names, environment variables and display strings.

/// Project file name (Strata.toml).
pub const PROJECT_FILE: &str = "Strata.toml";

/// Environment variable holding the passphrase for secure values.
pub const PASSPHRASE_ENV: &str = "STRATA_CONFIG_PASSPHRASE";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "STRATA_LOG";

/// Separator between the segments of a configuration key.
pub const KEY_DELIMITER: char = ':';

/// Category used when qualifying a bare key name.
pub const DEFAULT_CATEGORY: &str = "config";

/// Text shown in place of a secure value when secrets are not revealed.
pub const BLINDED_VALUE: &str = "********";

/// Width of each column in the `config ls` table.
pub const COLUMN_WIDTH: usize = 32;
