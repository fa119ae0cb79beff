//! Build runner
//!
//! Invokes the Gradle `build` task for a generated project, captures the
//! log stream, and locates the produced jar artifact.

use crate::error::{BuildResult, BuildToolError};
use crate::tool::resolve_build_tool;
use std::io::BufRead;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::mpsc;

/// Gradle task the build runner always invokes
pub const BUILD_TASK: &str = "build";

/// Where Gradle drops built jars, relative to the project dir
const ARTIFACT_DIR: &str = "build/libs";

/// Result of a build invocation
///
/// `success` reflects the tool's exit status. A successful exit without a
/// usable artifact keeps `success = true` but carries an explanatory
/// `error` and no `artifact_path`; [`BuildOutcome::artifact_ok`] is the
/// three-way check callers usually want.
#[derive(Debug)]
pub struct BuildOutcome {
    pub success: bool,
    pub artifact_path: Option<PathBuf>,
    pub logs: Vec<String>,
    pub error: Option<String>,
}

impl BuildOutcome {
    /// Build succeeded AND produced a usable artifact
    pub fn artifact_ok(&self) -> bool {
        self.success && self.artifact_path.is_some()
    }
}

enum LogLine {
    Out(String),
    Err(String),
}

/// Gradle build invocation for one project directory
pub struct BuildRunner {
    project_dir: PathBuf,
}

impl BuildRunner {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
        }
    }

    /// Run `gradle build` and wait for completion
    ///
    /// The accumulated log is returned on every path. Only a failure to
    /// launch the process at all is an `Err`.
    pub fn run(&self) -> BuildResult<BuildOutcome> {
        let tool = resolve_build_tool(&self.project_dir);
        let mut logs = tool.warnings.clone();
        logs.push(format!(
            "Starting build in {} using {}",
            self.project_dir.display(),
            tool.display()
        ));
        tracing::info!(
            project_dir = %self.project_dir.display(),
            command = %tool.display(),
            used_wrapper = tool.used_wrapper,
            "starting build"
        );

        let mut child = Command::new(&tool.command)
            .arg(BUILD_TASK)
            .current_dir(&self.project_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| BuildToolError::launch(tool.display(), e))?;

        let (tx, rx) = mpsc::channel();

        if let Some(stdout) = child.stdout.take() {
            let tx = tx.clone();
            std::thread::spawn(move || stream_lines(stdout, tx, LogLine::Out));
        }
        if let Some(stderr) = child.stderr.take() {
            let tx = tx.clone();
            std::thread::spawn(move || stream_lines(stderr, tx, LogLine::Err));
        }
        drop(tx);

        // Drain until both pipes close
        for line in rx {
            match line {
                LogLine::Out(text) => logs.push(text),
                LogLine::Err(text) => logs.push(format!("[ERR] {}", text)),
            }
        }

        let status = child.wait()?;

        if !status.success() {
            let code = status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string());
            return Ok(BuildOutcome {
                success: false,
                artifact_path: None,
                logs,
                error: Some(format!("Build failed with exit code {}", code)),
            });
        }

        match self.find_artifact(&mut logs) {
            Some(jar) => Ok(BuildOutcome {
                success: true,
                artifact_path: Some(jar),
                logs,
                error: None,
            }),
            None => Ok(BuildOutcome {
                success: true,
                artifact_path: None,
                logs,
                error: Some("Build succeeded but JAR artifact not found.".to_string()),
            }),
        }
    }

    /// Pick the primary jar out of `build/libs`
    ///
    /// Sources and dev-remap jars are auxiliary outputs, never the artifact.
    /// Names are scanned in sorted order so the choice is stable.
    fn find_artifact(&self, logs: &mut Vec<String>) -> Option<PathBuf> {
        let libs_dir = self.project_dir.join(ARTIFACT_DIR);

        let entries = match std::fs::read_dir(&libs_dir) {
            Ok(entries) => entries,
            Err(e) => {
                logs.push(format!("Error finding artifacts: {}", e));
                return None;
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter_map(|e| e.file_name().into_string().ok())
            .collect();
        names.sort();

        names
            .into_iter()
            .find(|name| {
                name.ends_with(".jar")
                    && !name.ends_with("-sources.jar")
                    && !name.ends_with("-dev.jar")
            })
            .map(|name| libs_dir.join(name))
    }
}

/// Forward lines from a pipe into the channel until EOF
fn stream_lines<R, F>(reader: R, tx: mpsc::Sender<LogLine>, wrap: F)
where
    R: std::io::Read,
    F: Fn(String) -> LogLine,
{
    let reader = std::io::BufReader::new(reader);
    for line in reader.lines() {
        match line {
            Ok(text) => {
                if !text.trim().is_empty() && tx.send(wrap(text)).is_err() {
                    return;
                }
            }
            Err(_) => return,
        }
    }
}
