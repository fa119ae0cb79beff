use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

/// Modforge content pipeline.
///
/// Turns a mod content project (blocks, items, recipes) into a built and
/// smoke-tested Fabric mod: generate the Gradle source tree, build it, then
/// start the server headlessly and watch its log for success or crashes.
///
/// EXAMPLES:
///     modforge run project.json        Full pipeline in a temp workspace
///     modforge export project.json -o out/mymod
///     modforge build out/mymod         Build an exported tree
///     modforge test out/mymod          Headless smoke test
#[derive(Parser)]
#[command(name = "modforge")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the mod source tree for a project
    Export {
        /// Path to the project JSON file
        project: PathBuf,
        /// Output directory, relative to the workspace root
        #[arg(long, short = 'o')]
        output: PathBuf,
        /// Workspace root that must contain the output directory
        #[arg(long, default_value = ".")]
        workspace_root: PathBuf,
        /// Template directory
        #[arg(long, env = "MODFORGE_TEMPLATE", default_value = "template")]
        template: PathBuf,
    },

    /// Build an exported mod project with Gradle
    Build {
        /// Project directory containing the generated sources
        project_dir: PathBuf,
        /// Print the full build log
        #[arg(long, short = 'v')]
        verbose: bool,
    },

    /// Smoke-test a built mod by starting the server headlessly
    Test {
        /// Project directory containing the generated sources
        project_dir: PathBuf,
        /// Gradle task to run
        #[arg(long, default_value = modforge_build::DEFAULT_TASK)]
        task: String,
        /// Timeout in seconds
        #[arg(long, default_value_t = 180)]
        timeout: u64,
        /// Print the full session log
        #[arg(long, short = 'v')]
        verbose: bool,
    },

    /// Run the full export-build-test pipeline
    Run {
        /// Path to the project JSON file
        project: PathBuf,
        /// Template directory
        #[arg(long, env = "MODFORGE_TEMPLATE", default_value = "template")]
        template: PathBuf,
        /// Headless test task
        #[arg(long, default_value = modforge_build::DEFAULT_TASK)]
        task: String,
        /// Headless test timeout in seconds
        #[arg(long, default_value_t = 180)]
        timeout: u64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            project,
            output,
            workspace_root,
            template,
        } => commands::export::run(commands::export::ExportArgs {
            project,
            output,
            workspace_root,
            template,
        }),
        Commands::Build {
            project_dir,
            verbose,
        } => commands::build::run(commands::build::BuildArgs {
            project_dir,
            verbose,
        }),
        Commands::Test {
            project_dir,
            task,
            timeout,
            verbose,
        } => commands::test::run(commands::test::TestArgs {
            project_dir,
            task,
            timeout,
            verbose,
        }),
        Commands::Run {
            project,
            template,
            task,
            timeout,
        } => commands::run::run(commands::run::RunArgs {
            project,
            template,
            task,
            timeout,
        }),
    }
}
