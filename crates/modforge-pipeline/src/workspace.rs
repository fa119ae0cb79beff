//! Workspace path containment
//!
//! Any user-supplied directory the pipeline writes into must resolve inside
//! the workspace root. Paths are normalized lexically, so the check does
//! not require the target to exist yet.

use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("Path '{target}' resolves to '{resolved}', which is outside workspace '{root}'")]
    OutsideWorkspace {
        target: PathBuf,
        resolved: PathBuf,
        root: PathBuf,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Resolve `.` and `..` components without touching the filesystem
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

fn absolute(path: &Path) -> Result<PathBuf, std::io::Error> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

/// Reject a target path that escapes the workspace root
pub fn assert_in_workspace(root: &Path, target: &Path) -> Result<(), WorkspaceError> {
    let resolved_root = normalize(&absolute(root)?);
    let resolved = normalize(&resolved_root.join(target));

    if !resolved.starts_with(&resolved_root) {
        return Err(WorkspaceError::OutsideWorkspace {
            target: target.to_path_buf(),
            resolved,
            root: resolved_root,
        });
    }

    Ok(())
}

/// Join path parts under the workspace root, refusing escapes
pub fn safe_join(root: &Path, parts: &[&str]) -> Result<PathBuf, WorkspaceError> {
    let mut target = PathBuf::new();
    for part in parts {
        target.push(part);
    }

    assert_in_workspace(root, &target)?;
    Ok(normalize(&absolute(root)?.join(&target)))
}
