//! Stack commands.

use crate::cli::output;
use crate::core::project::Project;
use crate::error::Result;

/// List stacks, marking the current one.
pub fn list() -> Result<()> {
    let project = Project::open()?;
    let stacks = project.stacks();

    if stacks.is_empty() {
        output::dimmed("no stacks");
        output::hint("run: strata stack select <name>");
        return Ok(());
    }

    let width = stacks.iter().map(|s| s.name.len()).max().unwrap_or(5).max(5);

    println!("{:<width$} {:>7}", "STACK", "ENTRIES", width = width + 2);
    for s in stacks {
        let marker = if s.current { "*" } else { " " };
        println!(
            "{} {:<width$} {:>7}",
            marker,
            s.name,
            s.entries,
            width = width
        );
    }

    Ok(())
}

/// Select the current stack.
pub fn select(name: &str) -> Result<()> {
    let mut project = Project::open()?;
    project.select_stack(name)?;
    output::success(&format!("current stack is now {}", output::key(name)));
    Ok(())
}
