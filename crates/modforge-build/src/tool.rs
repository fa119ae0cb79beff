//! Build tool resolution
//!
//! Both runners launch Gradle the same way: a project-local wrapper script
//! when one exists, otherwise the globally installed `gradle` command. The
//! wrapper pins the Gradle version without a system-wide install, so it is
//! always preferred.

use std::path::{Path, PathBuf};

/// Global build tool command used when no wrapper is present
pub const GRADLE_COMMAND: &str = "gradle";

/// Platform-specific wrapper script name
pub fn wrapper_name() -> &'static str {
    if cfg!(windows) {
        "gradlew.bat"
    } else {
        "gradlew"
    }
}

/// The command a runner will invoke
#[derive(Debug, Clone)]
pub struct ResolvedTool {
    /// Wrapper path, or the bare global command
    pub command: PathBuf,
    pub used_wrapper: bool,
    /// Non-fatal problems encountered during resolution
    pub warnings: Vec<String>,
}

impl ResolvedTool {
    /// Printable command name
    pub fn display(&self) -> String {
        self.command.display().to_string()
    }
}

/// Pick the build tool invocation for a project directory
///
/// On unix a wrapper is made executable first; failure to adjust
/// permissions is a warning, not an error.
pub fn resolve_build_tool(project_dir: &Path) -> ResolvedTool {
    let wrapper_path = project_dir.join(wrapper_name());
    let mut warnings = Vec::new();

    if wrapper_path.is_file() {
        ensure_executable(&wrapper_path, &mut warnings);
        return ResolvedTool {
            command: wrapper_path,
            used_wrapper: true,
            warnings,
        };
    }

    ResolvedTool {
        command: PathBuf::from(GRADLE_COMMAND),
        used_wrapper: false,
        warnings,
    }
}

#[cfg(unix)]
fn ensure_executable(path: &Path, warnings: &mut Vec<String>) {
    use std::os::unix::fs::PermissionsExt;

    let result = std::fs::metadata(path).and_then(|meta| {
        let mut perms = meta.permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(path, perms)
    });

    if let Err(e) = result {
        let warning = format!("Warning: Could not chmod {}: {}", path.display(), e);
        tracing::warn!(path = %path.display(), error = %e, "could not make wrapper executable");
        warnings.push(warning);
    }
}

#[cfg(not(unix))]
fn ensure_executable(_path: &Path, _warnings: &mut Vec<String>) {}
