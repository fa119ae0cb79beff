//! Project validation
//!
//! Semantic checks the pipeline requires before a run starts: id format and
//! recipe referential integrity. Structural validation happens when the
//! project is deserialized.

use crate::project::Project;

/// Validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Object id is not lower snake-case
    InvalidId { id: String, context: String },
    /// Map key disagrees with the object's own id field
    MismatchedKey { key: String, id: String },
    /// Recipe result references an unknown item
    UnknownResultItem { recipe: String, item: String },
    /// Recipe key references an unknown item
    UnknownKeyItem {
        recipe: String,
        key: String,
        item: String,
    },
    /// Recipe pattern is not exactly three rows
    InvalidPattern { recipe: String, rows: usize },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidId { id, context } => {
                write!(
                    f,
                    "Invalid id '{}' in {}: must be lower snake-case (a-z, 0-9, _)",
                    id, context
                )
            }
            ValidationError::MismatchedKey { key, id } => {
                write!(f, "Map key '{}' does not match object id '{}'", key, id)
            }
            ValidationError::UnknownResultItem { recipe, item } => {
                write!(
                    f,
                    "Recipe '{}': result item '{}' not found in project",
                    recipe, item
                )
            }
            ValidationError::UnknownKeyItem { recipe, key, item } => {
                write!(
                    f,
                    "Recipe '{}': key '{}' references unknown item '{}'",
                    recipe, key, item
                )
            }
            ValidationError::InvalidPattern { recipe, rows } => {
                write!(
                    f,
                    "Recipe '{}': pattern must have 3 rows, found {}",
                    recipe, rows
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check that an id is lower snake-case
fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// References may be project-local ids or vanilla-namespaced
fn is_known_reference(reference: &str, project: &Project) -> bool {
    project.blocks.contains_key(reference)
        || project.items.contains_key(reference)
        || reference.starts_with("minecraft:")
}

/// Validate a project for pipeline entry
///
/// Collects every problem rather than stopping at the first one.
pub fn validate_project(project: &Project) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !is_valid_id(&project.meta.mod_id) {
        errors.push(ValidationError::InvalidId {
            id: project.meta.mod_id.clone(),
            context: "meta.modId".to_string(),
        });
    }

    for (key, block) in &project.blocks {
        if !is_valid_id(&block.id) {
            errors.push(ValidationError::InvalidId {
                id: block.id.clone(),
                context: "blocks".to_string(),
            });
        }
        if key != &block.id {
            errors.push(ValidationError::MismatchedKey {
                key: key.clone(),
                id: block.id.clone(),
            });
        }
    }

    for (key, item) in &project.items {
        if !is_valid_id(&item.id) {
            errors.push(ValidationError::InvalidId {
                id: item.id.clone(),
                context: "items".to_string(),
            });
        }
        if key != &item.id {
            errors.push(ValidationError::MismatchedKey {
                key: key.clone(),
                id: item.id.clone(),
            });
        }
    }

    for recipe in project.recipes.values() {
        if recipe.pattern.len() != 3 {
            errors.push(ValidationError::InvalidPattern {
                recipe: recipe.id.clone(),
                rows: recipe.pattern.len(),
            });
        }

        if !is_known_reference(&recipe.result.item, project) {
            errors.push(ValidationError::UnknownResultItem {
                recipe: recipe.id.clone(),
                item: recipe.result.item.clone(),
            });
        }

        for (key, item_ref) in &recipe.key {
            if !is_known_reference(item_ref, project) {
                errors.push(ValidationError::UnknownKeyItem {
                    recipe: recipe.id.clone(),
                    key: key.clone(),
                    item: item_ref.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{Block, Item, Project, ProjectMeta, Recipe, RecipeResult, Texture, TextureKind};
    use std::collections::BTreeMap;

    fn texture() -> Texture {
        Texture {
            kind: TextureKind::Procedural,
            value: "data:image/png;base64,AAAA".to_string(),
        }
    }

    fn project_with(blocks: Vec<Block>, items: Vec<Item>, recipes: Vec<Recipe>) -> Project {
        Project {
            meta: ProjectMeta {
                mod_id: "test_mod".to_string(),
                name: "Test Mod".to_string(),
                version: "1.0.0".to_string(),
                author: None,
                description: None,
            },
            blocks: blocks.into_iter().map(|b| (b.id.clone(), b)).collect(),
            items: items.into_iter().map(|i| (i.id.clone(), i)).collect(),
            recipes: recipes.into_iter().map(|r| (r.id.clone(), r)).collect(),
        }
    }

    fn block(id: &str) -> Block {
        Block {
            id: id.to_string(),
            name: id.to_string(),
            properties: Default::default(),
            texture: texture(),
        }
    }

    fn item(id: &str) -> Item {
        Item {
            id: id.to_string(),
            name: id.to_string(),
            item_type: Default::default(),
            properties: Default::default(),
            texture: texture(),
        }
    }

    fn recipe(id: &str, result_item: &str, key: &[(&str, &str)]) -> Recipe {
        Recipe {
            id: id.to_string(),
            pattern: vec!["RRR".to_string(), "RRR".to_string(), "RRR".to_string()],
            key: key
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<BTreeMap<_, _>>(),
            result: RecipeResult {
                item: result_item.to_string(),
                count: 1,
            },
        }
    }

    #[test]
    fn test_valid_project_passes() {
        let project = project_with(
            vec![block("ruby_block")],
            vec![item("ruby")],
            vec![recipe("ruby_from_block", "ruby_block", &[("R", "ruby")])],
        );
        assert!(validate_project(&project).is_ok());
    }

    #[test]
    fn test_vanilla_references_allowed() {
        let project = project_with(
            vec![],
            vec![item("ruby")],
            vec![recipe("r", "ruby", &[("S", "minecraft:stick")])],
        );
        assert!(validate_project(&project).is_ok());
    }

    #[test]
    fn test_unknown_result_item_rejected() {
        let project = project_with(vec![], vec![], vec![recipe("r", "emerald", &[])]);
        let errors = validate_project(&project).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::UnknownResultItem { item, .. } if item == "emerald")));
    }

    #[test]
    fn test_unknown_key_item_rejected() {
        let project = project_with(
            vec![block("ruby_block")],
            vec![],
            vec![recipe("r", "ruby_block", &[("X", "no_such_item")])],
        );
        let errors = validate_project(&project).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("no_such_item"));
    }

    #[test]
    fn test_invalid_mod_id_rejected() {
        let mut project = project_with(vec![], vec![], vec![]);
        project.meta.mod_id = "MyMod".to_string();
        let errors = validate_project(&project).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidId { .. }));
    }

    #[test]
    fn test_short_pattern_rejected() {
        let mut r = recipe("r", "ruby_block", &[]);
        r.pattern.pop();
        let project = project_with(vec![block("ruby_block")], vec![], vec![r]);
        let errors = validate_project(&project).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::InvalidPattern { rows: 2, .. })));
    }

    #[test]
    fn test_mismatched_map_key_rejected() {
        let mut project = project_with(vec![], vec![], vec![]);
        project
            .blocks
            .insert("wrong_key".to_string(), block("ruby_block"));
        let errors = validate_project(&project).unwrap_err();
        assert!(matches!(errors[0], ValidationError::MismatchedKey { .. }));
    }
}
