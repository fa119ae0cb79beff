//! Content project data model
//!
//! Typed representation of a mod content project (blocks, items, recipes)
//! as authored by the editor, plus the referential-integrity validation
//! that gates the build pipeline. Deserializing a `Project` from JSON
//! performs the structural checks; [`validate::validate_project`] performs
//! the semantic ones.

pub mod project;
pub mod validate;

pub use project::{
    Block, BlockProperties, Item, ItemKind, ItemProperties, Project, ProjectMeta, Recipe,
    RecipeResult, Texture, TextureKind,
};
pub use validate::{validate_project, ValidationError};
