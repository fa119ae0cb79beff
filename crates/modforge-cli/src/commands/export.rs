//! Export command - generate the mod source tree into a workspace directory

use anyhow::{Context, Result};
use colored::Colorize;
use modforge_export::Exporter;
use modforge_pipeline::workspace::assert_in_workspace;
use std::path::PathBuf;

/// Export command arguments
pub struct ExportArgs {
    pub project: PathBuf,
    pub output: PathBuf,
    pub workspace_root: PathBuf,
    pub template: PathBuf,
}

/// Run the export command
pub fn run(args: ExportArgs) -> Result<()> {
    let project = super::load_project(&args.project)?;

    // User-supplied output must stay inside the workspace root
    assert_in_workspace(&args.workspace_root, &args.output)
        .context("Refusing to write outside the workspace")?;
    let output_dir = args.workspace_root.join(&args.output);

    Exporter::new(&args.template)
        .export(&project, &output_dir)
        .context("Export failed")?;

    println!(
        "{} {} ({} blocks, {} items) -> {}",
        "Exported".green().bold(),
        project.meta.name,
        project.blocks.len(),
        project.items.len(),
        output_dir.display()
    );
    Ok(())
}
