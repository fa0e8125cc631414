//! Interactive input.
//!
//! Passphrase and secret values are read without echo. When stdin is not a
//! terminal, values are read from it directly so commands can be piped.

use std::io::{self, IsTerminal};

use dialoguer::Password;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::cipher::{FromEnv, PassphraseSource};
use crate::error::{CipherError, Result};

/// Passphrase from `STRATA_CONFIG_PASSPHRASE`, else an interactive prompt.
pub struct Prompt;

impl PassphraseSource for Prompt {
    fn passphrase(&self, confirm: bool) -> Result<Zeroizing<String>> {
        if let Ok(passphrase) = FromEnv.passphrase(confirm) {
            return Ok(passphrase);
        }

        if !io::stdin().is_terminal() {
            return Err(CipherError::NoPassphrase.into());
        }

        debug!(confirm, "prompting for passphrase");
        let mut prompt = Password::new().with_prompt("Enter passphrase");
        if confirm {
            prompt = prompt.with_confirmation("Confirm passphrase", "passphrases do not match");
        }

        Ok(Zeroizing::new(prompt.interact()?))
    }
}

/// Read a secret value for `key` without echo.
pub fn read_value(key: &str) -> Result<Zeroizing<String>> {
    if !io::stdin().is_terminal() {
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let value = input.trim_end_matches(['\r', '\n']).to_string();
        input.clear();
        return Ok(Zeroizing::new(value));
    }

    let value = Password::new()
        .with_prompt(format!("Value for {}", key))
        .allow_empty_password(true)
        .interact()?;

    Ok(Zeroizing::new(value))
}
