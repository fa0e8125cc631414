//! Init command - create Strata.toml.

use tracing::info;

use crate::cli::output;
use crate::core::project::Project;
use crate::error::Result;

/// Initialize a project in the current directory.
pub fn execute(name: Option<String>) -> Result<()> {
    let dir = std::env::current_dir()?;
    let name = name.unwrap_or_else(|| {
        dir.file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "project".to_string())
    });

    info!("Initializing project: {}", name);

    let project = Project::init(&dir, &name)?;
    output::success(&format!(
        "initialized {} for project {}",
        project.path().display(),
        output::key(project.name())
    ));
    Ok(())
}
