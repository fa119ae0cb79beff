//! Pipeline orchestration for modforge
//!
//! Composes source generation, the Gradle build and the headless smoke
//! test into one observable run, plus the path-containment guard for
//! user-supplied output directories.

pub mod orchestrator;
pub mod workspace;

pub use orchestrator::{Pipeline, PipelineStep, ProgressEvent, ProgressObserver};
pub use workspace::{assert_in_workspace, safe_join, WorkspaceError};
