//! Source tree generation for mod content projects
//!
//! Turns a [`Project`](modforge_model::Project) into a complete, buildable
//! Gradle source tree: template scaffolding with placeholder substitution,
//! Java registry generation wired into the entry point through a named
//! insertion slot, and per-object asset files (lang entries, blockstates,
//! models, textures).
//!
//! For a fixed input the output tree is byte-identical across runs.

pub mod assets;
pub mod error;
pub mod registry;
pub mod scaffold;

pub use error::{ExportError, ExportResult};
pub use scaffold::TemplateVars;

use modforge_model::Project;
use std::fs;
use std::path::{Path, PathBuf};

/// Java package the generated sources live in
const JAVA_PACKAGE: &str = "com.example";

/// Code generator for a content project
pub struct Exporter {
    template_dir: PathBuf,
}

impl Exporter {
    /// Create an exporter reading the template from the given directory
    pub fn new(template_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_dir: template_dir.into(),
        }
    }

    /// Generate the full source tree for `project` into `output_dir`
    pub fn export(&self, project: &Project, output_dir: &Path) -> ExportResult<()> {
        let meta = &project.meta;
        let vars = TemplateVars::new(&meta.mod_id, &meta.name, meta.description.as_deref());

        scaffold::scaffold_template(&self.template_dir, output_dir, &vars)?;
        registry::write_registry(project, output_dir, JAVA_PACKAGE)?;
        self.write_assets(project, output_dir)?;

        tracing::debug!(
            mod_id = %meta.mod_id,
            blocks = project.blocks.len(),
            items = project.items.len(),
            "export complete"
        );
        Ok(())
    }

    fn write_assets(&self, project: &Project, output_dir: &Path) -> ExportResult<()> {
        let mod_id = &project.meta.mod_id;
        let assets_dir = output_dir.join(format!("src/main/resources/assets/{}", mod_id));

        let lang_path = assets_dir.join("lang/en_us.json");
        write_file(&lang_path, assets::generate_lang_json(project).as_bytes())?;

        for (id, block) in &project.blocks {
            write_file(
                &assets_dir.join(format!("blockstates/{}.json", id)),
                assets::generate_block_state(mod_id, id).as_bytes(),
            )?;
            write_file(
                &assets_dir.join(format!("models/block/{}.json", id)),
                assets::generate_block_model(mod_id, id).as_bytes(),
            )?;
            write_file(
                &assets_dir.join(format!("models/item/{}.json", id)),
                assets::generate_item_block_model(mod_id, id).as_bytes(),
            )?;
            write_file(
                &assets_dir.join(format!("textures/block/{}.png", id)),
                &assets::texture_bytes(&block.texture),
            )?;
        }

        for (id, item) in &project.items {
            write_file(
                &assets_dir.join(format!("models/item/{}.json", id)),
                assets::generate_item_model(mod_id, id).as_bytes(),
            )?;
            write_file(
                &assets_dir.join(format!("textures/item/{}.png", id)),
                &assets::texture_bytes(&item.texture),
            )?;
        }

        Ok(())
    }
}

/// Write a file, creating parent directories
fn write_file(path: &Path, bytes: &[u8]) -> ExportResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ExportError::io(parent, e))?;
    }
    fs::write(path, bytes).map_err(|e| ExportError::io(path, e))
}
