//! Log-stream classification
//!
//! A pure state machine fed one log line at a time, deciding whether a
//! launched game runtime came up cleanly or crashed. No I/O happens here;
//! the test runner drives it with whatever the subprocess prints.

/// Classification status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStatus {
    /// Session in progress, nothing decisive seen yet
    Running,
    /// Startup banner observed
    Success,
    /// A crash marker observed
    Crashed,
    /// Session ended without a decisive line
    Unknown,
}

/// Current classification of a log session
#[derive(Debug, Clone, PartialEq)]
pub struct LogClassification {
    pub status: LogStatus,
    pub crash_reason: Option<String>,
}

impl LogClassification {
    fn running() -> Self {
        Self {
            status: LogStatus::Running,
            crash_reason: None,
        }
    }

    fn crashed(reason: impl Into<String>) -> Self {
        Self {
            status: LogStatus::Crashed,
            crash_reason: Some(reason.into()),
        }
    }

    /// Terminal states never change again
    pub fn is_terminal(&self) -> bool {
        matches!(self.status, LogStatus::Success | LogStatus::Crashed)
    }
}

impl Default for LogClassification {
    fn default() -> Self {
        Self::running()
    }
}

/// Server startup banner markers, e.g. `Done (2.541s)! For help, type "help"`
const SUCCESS_DONE_MARKER: &str = "Done (";
const SUCCESS_HELP_MARKER: &str = ")! For help, type";

/// Loader refuses to start with a conflicting mod set
const INCOMPATIBLE_MARKER: &str = "Incompatible mod set!";
/// Bytecode patch failure, almost always a generated-code error
const MIXIN_FAILED_MARKER: &str = "Mixin apply failed";

/// Streaming log classifier
///
/// Holds the full session transcript and the current classification. Once a
/// terminal state is reached, further lines are recorded but never change
/// the state.
#[derive(Debug, Default)]
pub struct LogClassifier {
    transcript: Vec<String>,
    state: LogClassification,
}

impl LogClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current classification
    pub fn state(&self) -> &LogClassification {
        &self.state
    }

    /// Every line seen so far, in arrival order
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Consume one log line and return the updated classification
    pub fn classify(&mut self, line: &str) -> &LogClassification {
        self.transcript.push(line.to_string());

        if self.state.is_terminal() {
            return &self.state;
        }

        let lower = line.to_lowercase();

        if line.contains(MIXIN_FAILED_MARKER) {
            self.state = LogClassification::crashed("Mixin application failed (Code error)");
        } else if line.contains(INCOMPATIBLE_MARKER) {
            self.state = LogClassification::crashed("Incompatible mods");
        } else if lower.contains("exception in thread") || lower.contains("fatal error") {
            self.state = LogClassification::crashed(line);
        } else if line.contains(SUCCESS_DONE_MARKER) && line.contains(SUCCESS_HELP_MARKER) {
            self.state = LogClassification {
                status: LogStatus::Success,
                crash_reason: None,
            };
        }

        &self.state
    }

    /// Close the session: a classification still `Running` becomes `Unknown`
    pub fn finish(&mut self) -> &LogClassification {
        if self.state.status == LogStatus::Running {
            self.state.status = LogStatus::Unknown;
        }
        &self.state
    }
}
