//! Strata - per-stack project configuration with encrypted secrets.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Create Strata.toml
//! │   ├── config        # config ls/rm/text/secret
//! │   ├── stack         # stack ls/select
//! │   ├── prompt        # Passphrase and no-echo value input
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── key           # namespace:category:name keys
//!     ├── value         # Plain/Secure values and decrypters
//!     ├── cipher/       # age + passphrase encryption
//!     ├── store         # Strata.toml (project + stack mappings)
//!     ├── resolve       # Stack-over-project merge
//!     └── project/      # Get/list/set/delete façade
//! ```
//!
//! # Model
//!
//! - Project-wide values with per-stack overrides
//! - Secure values stored only as age ciphertext
//! - One project key, wrapped under a passphrase
//! - Secrets masked in listings unless explicitly revealed

pub mod cli;
pub mod core;
pub mod error;
