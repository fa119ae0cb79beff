//! Pipeline orchestration
//!
//! Composes the code generator, build runner and test runner into the
//! export, build, test, done state machine. The orchestrator owns a
//! scoped temporary workspace for the whole run and streams progress
//! events to a caller-supplied observer; the event stream is its only
//! external contract.

use modforge_build::{BuildRunner, TestRunner};
use modforge_export::Exporter;
use modforge_model::Project;
use std::path::PathBuf;
use std::time::Duration;

/// Pipeline stage identifiers, as they appear in progress events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStep {
    Export,
    Build,
    Test,
    Done,
    Error,
}

impl PipelineStep {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Export => "export",
            Self::Build => "build",
            Self::Test => "test",
            Self::Done => "done",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A progress update streamed to the observer after every transition
#[derive(Debug, Clone)]
pub struct ProgressEvent {
    pub step: PipelineStep,
    pub message: String,
    /// 0..=100, monotonically non-decreasing within a run
    pub progress: Option<u8>,
    /// Raw diagnostic text for error steps
    pub details: Option<String>,
}

/// Observer callback receiving progress events
pub type ProgressObserver<'a> = &'a mut dyn FnMut(ProgressEvent);

/// Ephemeral state of one pipeline invocation
///
/// Owned exclusively by the orchestrator; the workspace directory it points
/// at is removed when the run ends, on every exit path.
struct PipelineRun<'a> {
    work_dir: PathBuf,
    current_step: PipelineStep,
    progress: u8,
    observer: ProgressObserver<'a>,
}

impl<'a> PipelineRun<'a> {
    fn new(work_dir: PathBuf, observer: ProgressObserver<'a>) -> Self {
        Self {
            work_dir,
            current_step: PipelineStep::Export,
            progress: 0,
            observer,
        }
    }

    /// Enter a step and announce it
    fn advance(&mut self, step: PipelineStep, message: &str, progress: u8) {
        self.current_step = step;
        self.progress = self.progress.max(progress);
        (self.observer)(ProgressEvent {
            step,
            message: message.to_string(),
            progress: Some(self.progress),
            details: None,
        });
    }

    /// Enter the error state with raw diagnostics
    fn fail(&mut self, message: &str, details: String) {
        tracing::warn!(
            step = %self.current_step,
            work_dir = %self.work_dir.display(),
            "pipeline failed"
        );
        self.current_step = PipelineStep::Error;
        (self.observer)(ProgressEvent {
            step: PipelineStep::Error,
            message: message.to_string(),
            progress: None,
            details: Some(details),
        });
    }
}

/// The export-build-test pipeline
///
/// One `Pipeline` value can serve any number of runs; each run owns its own
/// workspace and subprocesses, so concurrent runs for different projects
/// share no mutable state.
pub struct Pipeline {
    template_dir: PathBuf,
    test_task: String,
    test_timeout: Duration,
}

impl Pipeline {
    /// Create a pipeline generating from the given template directory
    pub fn new(template_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_dir: template_dir.into(),
            test_task: modforge_build::DEFAULT_TASK.to_string(),
            test_timeout: modforge_build::DEFAULT_TIMEOUT,
        }
    }

    /// Override the headless test task
    pub fn with_test_task(mut self, task: impl Into<String>) -> Self {
        self.test_task = task.into();
        self
    }

    /// Override the headless test timeout
    pub fn with_test_timeout(mut self, timeout: Duration) -> Self {
        self.test_timeout = timeout;
        self
    }

    /// Run the full pipeline for one project
    ///
    /// Streams progress to `observer`; every failure is terminal for the
    /// run and carries its raw diagnostic text in the event details. The
    /// temporary workspace is removed on every exit path, including panics
    /// in a stage (the `TempDir` guard cleans up during unwinding).
    pub fn run(&self, project: &Project, observer: ProgressObserver<'_>) {
        let workspace = match tempfile::Builder::new()
            .prefix("modforge-build-")
            .tempdir()
        {
            Ok(dir) => dir,
            Err(e) => {
                (observer)(ProgressEvent {
                    step: PipelineStep::Error,
                    message: "Could not create build workspace.".to_string(),
                    progress: None,
                    details: Some(e.to_string()),
                });
                return;
            }
        };

        tracing::info!(work_dir = %workspace.path().display(), "pipeline workspace created");
        let mut run = PipelineRun::new(workspace.path().to_path_buf(), observer);

        run.advance(PipelineStep::Export, "Generating mod sources...", 10);
        let exporter = Exporter::new(&self.template_dir);
        if let Err(e) = exporter.export(project, &run.work_dir) {
            run.fail("Source generation failed.", e.to_string());
            return;
        }

        run.advance(PipelineStep::Build, "Sources ready, building...", 30);
        let build = match BuildRunner::new(&run.work_dir).run() {
            Ok(outcome) => outcome,
            Err(e) => {
                run.fail("Could not start the build tool.", e.to_string());
                return;
            }
        };
        if !build.artifact_ok() {
            let details = build.error.unwrap_or_else(|| build.logs.join("\n"));
            run.fail("The build did not succeed.", details);
            return;
        }

        run.advance(
            PipelineStep::Test,
            "Build complete, starting headless test...",
            70,
        );
        let test = match TestRunner::new(&run.work_dir)
            .with_task(&self.test_task)
            .with_timeout(self.test_timeout)
            .run()
        {
            Ok(outcome) => outcome,
            Err(e) => {
                run.fail("Could not start the test run.", e.to_string());
                return;
            }
        };
        if !test.success {
            let details = test.error.unwrap_or_else(|| test.logs.join("\n"));
            run.fail("The mod did not start correctly.", details);
            return;
        }

        run.advance(PipelineStep::Done, "All checks passed.", 100);
    }
}
