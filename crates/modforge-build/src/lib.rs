//! Gradle build and headless test infrastructure
//!
//! Provides the two subprocess stages of the mod pipeline:
//! - [`BuildRunner`]: run `gradle build` and locate the jar artifact
//! - [`TestRunner`]: start the built mod headlessly and classify its log
//!   stream with the [`LogClassifier`] under a hard timeout
//!
//! Both resolve the Gradle invocation the same way (project wrapper
//! preferred, global tool as fallback) via [`tool::resolve_build_tool`].

pub mod classifier;
pub mod error;
pub mod runner;
pub mod testbot;
pub mod tool;

pub use classifier::{LogClassification, LogClassifier, LogStatus};
pub use error::{BuildResult, BuildToolError};
pub use runner::{BuildOutcome, BuildRunner, BUILD_TASK};
pub use testbot::{TestOutcome, TestRunner, DEFAULT_TASK, DEFAULT_TIMEOUT};
pub use tool::{resolve_build_tool, ResolvedTool, GRADLE_COMMAND};
