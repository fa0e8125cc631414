//! Strata - per-stack project configuration with encrypted secrets.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use strata::cli::output;
use strata::cli::{execute, Cli};
use strata::core::constants::LOG_ENV;
use strata::error::{CipherError, ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("strata=debug")
        } else {
            EnvFilter::new("strata=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .init();

    if let Err(e) = execute(cli.command) {
        let suggestion = match root_cause(&e) {
            Error::Config(ConfigError::NotInitialized) => Some("run: strata init"),
            Error::Cipher(CipherError::NoPassphrase) => {
                Some("set STRATA_CONFIG_PASSPHRASE or run in a terminal")
            }
            Error::Cipher(CipherError::Forbidden) => Some("this is a bug in strata; please report it"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

/// Look through read-context wrappers to the underlying error.
fn root_cause(e: &Error) -> &Error {
    match e {
        Error::Read { source, .. } => root_cause(source),
        other => other,
    }
}
