//! Build command - run the Gradle build for an exported project

use anyhow::{bail, Result};
use colored::Colorize;
use modforge_build::BuildRunner;
use std::path::PathBuf;

/// Build command arguments
pub struct BuildArgs {
    pub project_dir: PathBuf,
    pub verbose: bool,
}

/// Run the build command
pub fn run(args: BuildArgs) -> Result<()> {
    let outcome = BuildRunner::new(&args.project_dir).run()?;

    if args.verbose {
        for line in &outcome.logs {
            println!("{}", line);
        }
    }

    if !outcome.success {
        bail!(
            "{}",
            outcome
                .error
                .unwrap_or_else(|| "Build failed".to_string())
        );
    }

    match outcome.artifact_path {
        Some(jar) => {
            println!("{} {}", "Built".green().bold(), jar.display());
            Ok(())
        }
        None => {
            // Successful exit but nothing usable in build/libs
            bail!(
                "{}",
                outcome
                    .error
                    .unwrap_or_else(|| "Build succeeded but JAR artifact not found.".to_string())
            );
        }
    }
}
