//! Command-line interface.

pub mod completions;
pub mod config;
pub mod init;
pub mod output;
pub mod prompt;
pub mod stack;

use clap::{Parser, Subcommand};

/// Strata - per-stack project configuration with encrypted secrets.
#[derive(Parser)]
#[command(
    name = "strata",
    about = "Per-stack project configuration with encrypted secrets",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create Strata.toml in the current directory
    Init {
        /// Project name (defaults to the directory name)
        name: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Manage stacks
    Stack {
        #[command(subcommand)]
        action: StackAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Configuration subcommands.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// List configuration for a stack, or print one value
    Ls {
        /// Key to print (omit to list everything)
        key: Option<String>,
        /// Target a specific stack instead of the current one
        #[arg(short, long)]
        stack: Option<String>,
        /// Show secret values instead of blinded values
        #[arg(long)]
        show_secrets: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove a configuration value
    Rm {
        /// Configuration key
        key: String,
        /// Target a stack instead of the project-wide configuration
        #[arg(short, long, default_value = "")]
        stack: String,
    },

    /// Set a plaintext configuration value
    Text {
        /// Configuration key
        key: String,
        /// Value
        value: String,
        /// Target a stack instead of the project-wide configuration
        #[arg(short, long, default_value = "")]
        stack: String,
    },

    /// Set an encrypted configuration value
    Secret {
        /// Configuration key
        key: String,
        /// Value (read without echo when omitted)
        value: Option<String>,
        /// Target a stack instead of the project-wide configuration
        #[arg(short, long, default_value = "")]
        stack: String,
    },
}

/// Stack subcommands.
#[derive(Subcommand)]
pub enum StackAction {
    /// List stacks in the project file
    Ls,

    /// Make a stack the current one
    Select {
        /// Stack name
        name: String,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Init { name } => init::execute(name),
        Config { action } => match action {
            ConfigAction::Ls {
                key,
                stack,
                show_secrets,
                json,
            } => config::ls(key.as_deref(), stack.as_deref(), show_secrets, json),
            ConfigAction::Rm { key, stack } => config::rm(&key, &stack),
            ConfigAction::Text { key, value, stack } => config::text(&key, &value, &stack),
            ConfigAction::Secret { key, value, stack } => {
                config::secret(&key, value.as_deref(), &stack)
            }
        },
        Stack { action } => match action {
            StackAction::Ls => stack::list(),
            StackAction::Select { name } => stack::select(&name),
        },
        Completions { shell } => completions::execute(shell),
    }
}
