//! Headless test runner
//!
//! Launches the built mod's server task and watches its log stream through
//! the [`LogClassifier`]. The run resolves on the first of: a terminal
//! classification, the subprocess exiting on its own, or the wall-clock
//! timeout. Reader threads feed one mpsc channel and a single consumer
//! loop owns the child process, so exactly one resolution path can fire.

use crate::classifier::{LogClassifier, LogStatus};
use crate::error::{BuildResult, BuildToolError};
use crate::tool::resolve_build_tool;
use std::io::BufRead;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::time::{Duration, Instant};

/// Default Gradle task: start the dedicated server headlessly
pub const DEFAULT_TASK: &str = "runServer";

/// Wall-clock bound on a test session
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(180);

/// Result of a headless test session
#[derive(Debug)]
pub struct TestOutcome {
    pub success: bool,
    pub logs: Vec<String>,
    pub error: Option<String>,
}

/// Headless smoke test for one built project
pub struct TestRunner {
    project_dir: PathBuf,
    task: String,
    timeout: Duration,
}

impl TestRunner {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            task: DEFAULT_TASK.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the Gradle task to run
    pub fn with_task(mut self, task: impl Into<String>) -> Self {
        self.task = task.into();
        self
    }

    /// Override the session timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Launch the task and classify its output
    ///
    /// A successfully started server is killed immediately; it must not be
    /// left running. Only a failure to spawn the process is an `Err`.
    pub fn run(&self) -> BuildResult<TestOutcome> {
        let tool = resolve_build_tool(&self.project_dir);
        let mut logs = tool.warnings.clone();
        logs.push(format!(
            "Starting {} in {} using {}",
            self.task,
            self.project_dir.display(),
            tool.display()
        ));
        tracing::info!(
            project_dir = %self.project_dir.display(),
            command = %tool.display(),
            task = %self.task,
            "starting headless test"
        );

        let mut child = Command::new(&tool.command)
            .arg(&self.task)
            .current_dir(&self.project_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| BuildToolError::launch(tool.display(), e))?;

        let (tx, rx) = mpsc::channel();

        if let Some(stdout) = child.stdout.take() {
            let tx = tx.clone();
            std::thread::spawn(move || stream_lines(stdout, tx));
        }
        if let Some(stderr) = child.stderr.take() {
            let tx = tx.clone();
            std::thread::spawn(move || stream_lines(stderr, tx));
        }
        drop(tx);

        let mut classifier = LogClassifier::new();
        let deadline = Instant::now() + self.timeout;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());

            match rx.recv_timeout(remaining) {
                Ok(line) => {
                    logs.push(line.clone());

                    match classifier.classify(&line).status {
                        LogStatus::Success => {
                            // Server came up; do not leave it running
                            kill_and_reap(&mut child);
                            return Ok(TestOutcome {
                                success: true,
                                logs,
                                error: None,
                            });
                        }
                        LogStatus::Crashed => {
                            let reason = classifier
                                .state()
                                .crash_reason
                                .clone()
                                .unwrap_or_else(|| "Crash detected".to_string());
                            kill_and_reap(&mut child);
                            return Ok(TestOutcome {
                                success: false,
                                logs,
                                error: Some(reason),
                            });
                        }
                        LogStatus::Running | LogStatus::Unknown => {}
                    }
                }
                Err(mpsc::RecvTimeoutError::Timeout) => {
                    kill_and_reap(&mut child);
                    return Ok(TestOutcome {
                        success: false,
                        logs,
                        error: Some("Timeout waiting for server start".to_string()),
                    });
                }
                Err(mpsc::RecvTimeoutError::Disconnected) => {
                    // Both pipes closed: the process exited on its own
                    classifier.finish();
                    let status = child.wait()?;

                    return Ok(if status.success() {
                        TestOutcome {
                            success: true,
                            logs,
                            error: None,
                        }
                    } else {
                        let code = status
                            .code()
                            .map(|c| c.to_string())
                            .unwrap_or_else(|| "signal".to_string());
                        TestOutcome {
                            success: false,
                            logs,
                            error: Some(format!("Process exited with code {}", code)),
                        }
                    });
                }
            }
        }
    }
}

/// Kill the child and reap it; both tolerate an already-exited process
fn kill_and_reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

/// Forward non-empty lines from a pipe into the channel until EOF
fn stream_lines<R: std::io::Read>(reader: R, tx: mpsc::Sender<String>) {
    let reader = std::io::BufReader::new(reader);
    for line in reader.lines() {
        match line {
            Ok(text) => {
                if !text.trim().is_empty() && tx.send(text).is_err() {
                    return;
                }
            }
            Err(_) => return,
        }
    }
}
