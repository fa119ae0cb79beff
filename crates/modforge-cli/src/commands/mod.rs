pub mod build;
pub mod export;
pub mod run;

use anyhow::{bail, Context, Result};
use modforge_model::Project;
use std::path::Path;

/// Load and validate a project file; validation failures are fatal
pub fn load_project(path: &Path) -> Result<Project> {
    let project = Project::from_file(path)
        .with_context(|| format!("Failed to read project file {}", path.display()))?;

    if let Err(errors) = modforge_model::validate_project(&project) {
        for error in &errors {
            eprintln!("  {}", error);
        }
        bail!("Project validation failed with {} error(s)", errors.len());
    }

    Ok(project)
}
