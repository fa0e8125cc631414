//! Configuration commands.
//!
//! Implements `config ls`, `config rm`, `config text` and `config secret`.

use crate::cli::output;
use crate::cli::prompt::{self, Prompt};
use crate::core::constants::COLUMN_WIDTH;
use crate::core::domain::Entry;
use crate::core::project::Project;
use crate::core::value::Value;
use crate::error::Result;

/// List a stack's configuration, or print a single value.
pub fn ls(key: Option<&str>, stack: Option<&str>, show_secrets: bool, json: bool) -> Result<()> {
    let project = Project::open()?;
    let stack = project.stack_or_current(stack);

    if let Some(raw) = key {
        let key = project.parse_key(raw)?;
        let value = project.get(&stack, &key, &Prompt)?;
        // Plain output for scripting - no decoration
        output::data(&value);
        return Ok(());
    }

    let entries = project.list(&stack, show_secrets, &Prompt)?;

    if json {
        let rows: Vec<_> = entries
            .iter()
            .map(|e| {
                serde_json::json!({
                    "key": e.key().as_str(),
                    "value": e.value(),
                    "secure": e.is_secure(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", render_table(&entries));
    }

    Ok(())
}

/// Remove a configuration value.
pub fn rm(raw: &str, stack: &str) -> Result<()> {
    let mut project = Project::open()?;
    let key = project.parse_key(raw)?;
    project.delete(stack, &key)?;
    output::success(&format!("removed {}", output::key(project.pretty(&key))));
    Ok(())
}

/// Set a plaintext value.
pub fn text(raw: &str, value: &str, stack: &str) -> Result<()> {
    let mut project = Project::open()?;
    let key = project.parse_key(raw)?;
    project.set(stack, &key, Value::Plain(value.to_string()))?;
    output::success(&format!("set {}", output::key(project.pretty(&key))));
    Ok(())
}

/// Set an encrypted value, prompting for it when not given.
pub fn secret(raw: &str, value: Option<&str>, stack: &str) -> Result<()> {
    let mut project = Project::open()?;
    let key = project.parse_key(raw)?;

    let value = match value {
        Some(v) => zeroize::Zeroizing::new(v.to_string()),
        None => prompt::read_value(project.pretty(&key))?,
    };

    project.set_secret(stack, &key, &value, &Prompt)?;
    output::success(&format!("set secret {}", output::key(project.pretty(&key))));
    Ok(())
}

/// Two left-justified columns, header `KEY` / `VALUE`, one row per entry.
/// Nothing at all when there are no entries.
pub fn render_table(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let mut table = format!(
        "{:<w$} {:<w$}\n",
        "KEY",
        "VALUE",
        w = COLUMN_WIDTH
    );
    for entry in entries {
        table.push_str(&format!(
            "{:<w$} {:<w$}\n",
            entry.display_key(),
            entry.value(),
            w = COLUMN_WIDTH
        ));
    }
    table
}
