//! Run command - the full export-build-test pipeline

use anyhow::{bail, Result};
use colored::Colorize;
use modforge_pipeline::{Pipeline, PipelineStep};
use std::path::PathBuf;
use std::time::Duration;

/// Run command arguments
pub struct RunArgs {
    pub project: PathBuf,
    pub template: PathBuf,
    pub task: String,
    pub timeout: u64,
}

/// Run the full pipeline, printing progress as it streams
pub fn run(args: RunArgs) -> Result<()> {
    let project = super::load_project(&args.project)?;

    let pipeline = Pipeline::new(&args.template)
        .with_test_task(&args.task)
        .with_test_timeout(Duration::from_secs(args.timeout));

    let mut failure: Option<String> = None;

    pipeline.run(&project, &mut |event| {
        let label = match event.step {
            PipelineStep::Error => format!("{}", event.step.name().red().bold()),
            PipelineStep::Done => format!("{}", event.step.name().green().bold()),
            _ => format!("{}", event.step.name().cyan().bold()),
        };

        match event.progress {
            Some(progress) => println!("[{:>6}] {:>3}% {}", label, progress, event.message),
            None => println!("[{:>6}]      {}", label, event.message),
        }

        if event.step == PipelineStep::Error {
            if let Some(details) = &event.details {
                // Show the raw diagnostics unmodified
                for line in details.lines() {
                    eprintln!("    {}", line);
                }
            }
            failure = Some(event.message.clone());
        }
    });

    if let Some(message) = failure {
        bail!("Pipeline failed: {}", message);
    }

    println!("{}", "Pipeline finished successfully.".green());
    Ok(())
}
