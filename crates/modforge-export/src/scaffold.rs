//! Template scaffolding
//!
//! Copies the fixed mod template into an output directory, substituting the
//! `{{MOD_ID}}`, `{{MOD_NAME}}` and `{{MOD_DESCRIPTION}}` placeholders in
//! every text file. Binary files are copied byte-for-byte.

use crate::error::{ExportError, ExportResult};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Placeholder values substituted into the template
#[derive(Debug, Clone)]
pub struct TemplateVars {
    pub mod_id: String,
    pub mod_name: String,
    pub description: String,
}

impl TemplateVars {
    /// Build vars from project metadata, with the stock description fallback
    pub fn new(
        mod_id: impl Into<String>,
        mod_name: impl Into<String>,
        description: Option<&str>,
    ) -> Self {
        Self {
            mod_id: mod_id.into(),
            mod_name: mod_name.into(),
            description: description.unwrap_or("Created with Modforge").to_string(),
        }
    }

    fn substitute(&self, content: &str) -> String {
        content
            .replace("{{MOD_ID}}", &self.mod_id)
            .replace("{{MOD_NAME}}", &self.mod_name)
            .replace("{{MOD_DESCRIPTION}}", &self.description)
    }
}

/// Extensions copied without substitution
fn is_binary(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("png") | Some("jar")
    )
}

/// Copy the template tree into `output_dir` with placeholder substitution
///
/// After copying, the generic `src/main/resources/mixin.json` is renamed to
/// `<modId>.mixins.json`; a template without that file is tolerated.
pub fn scaffold_template(
    template_dir: &Path,
    output_dir: &Path,
    vars: &TemplateVars,
) -> ExportResult<()> {
    if !template_dir.is_dir() {
        return Err(ExportError::TemplateNotFound {
            path: template_dir.to_path_buf(),
        });
    }

    fs::create_dir_all(output_dir).map_err(|e| ExportError::io(output_dir, e))?;

    for entry in WalkDir::new(template_dir).follow_links(false) {
        let entry = entry.map_err(|e| {
            let io_err = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "walk failed"));
            ExportError::io(template_dir, io_err)
        })?;

        let relative = match entry.path().strip_prefix(template_dir) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel,
            _ => continue,
        };
        let dest = output_dir.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest).map_err(|e| ExportError::io(&dest, e))?;
            continue;
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| ExportError::io(parent, e))?;
        }

        if is_binary(entry.path()) {
            fs::copy(entry.path(), &dest).map_err(|e| ExportError::io(entry.path(), e))?;
        } else {
            let content = fs::read_to_string(entry.path())
                .map_err(|e| ExportError::io(entry.path(), e))?;
            fs::write(&dest, vars.substitute(&content)).map_err(|e| ExportError::io(&dest, e))?;
        }
    }

    rename_mixin_config(output_dir, &vars.mod_id);

    Ok(())
}

/// Rename the generic mixin config to the mod-specific name
fn rename_mixin_config(output_dir: &Path, mod_id: &str) {
    let src = output_dir.join("src/main/resources/mixin.json");
    let dest = output_dir.join(format!("src/main/resources/{}.mixins.json", mod_id));

    if let Err(e) = fs::rename(&src, &dest) {
        // Templates without a mixin config are fine
        tracing::debug!(src = %src.display(), error = %e, "no mixin config to rename");
    }
}
