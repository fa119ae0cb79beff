//! Project types (project.json)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root content project
///
/// Maps are keyed by object id. `BTreeMap` keeps iteration in sorted id
/// order, which the code generator relies on for deterministic output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub meta: ProjectMeta,
    #[serde(default)]
    pub blocks: BTreeMap<String, Block>,
    #[serde(default)]
    pub items: BTreeMap<String, Item>,
    #[serde(default)]
    pub recipes: BTreeMap<String, Recipe>,
}

impl Project {
    /// Parse a project from JSON
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Load a project from a file
    pub fn from_file(path: &std::path::Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

/// Project metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMeta {
    /// Mod identifier, lower snake-case
    pub mod_id: String,
    /// Display name
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

/// A block definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Block {
    pub id: String,
    /// Display name
    pub name: String,
    #[serde(default)]
    pub properties: BlockProperties,
    pub texture: Texture,
}

/// Block numeric/boolean properties
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlockProperties {
    #[serde(default = "default_hardness")]
    pub hardness: f64,
    /// Light emission, 0..=15
    #[serde(default)]
    pub luminance: u8,
    #[serde(default)]
    pub transparent: bool,
}

fn default_hardness() -> f64 {
    1.0
}

impl Default for BlockProperties {
    fn default() -> Self {
        Self {
            hardness: default_hardness(),
            luminance: 0,
            transparent: false,
        }
    }
}

/// An item definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: String,
    /// Display name
    pub name: String,
    #[serde(default, rename = "itemType")]
    pub item_type: ItemKind,
    #[serde(default)]
    pub properties: ItemProperties,
    pub texture: Texture,
}

/// Item flavor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Gem,
    Sword,
}

/// Item numeric properties
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemProperties {
    /// 1..=64
    #[serde(default = "default_stack_size")]
    pub max_stack_size: u32,
    #[serde(default)]
    pub attack_damage: Option<f64>,
}

fn default_stack_size() -> u32 {
    64
}

impl Default for ItemProperties {
    fn default() -> Self {
        Self {
            max_stack_size: default_stack_size(),
            attack_damage: None,
        }
    }
}

/// Texture reference
///
/// A procedural value is a `data:<mime>;base64,<payload>` URI; an imported
/// value is a path to an image file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Texture {
    #[serde(rename = "type")]
    pub kind: TextureKind,
    pub value: String,
}

/// Texture origin
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextureKind {
    Procedural,
    Imported,
}

/// A shaped crafting recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub id: String,
    /// Three pattern rows
    pub pattern: Vec<String>,
    /// Single pattern character -> item reference
    #[serde(default)]
    pub key: BTreeMap<String, String>,
    pub result: RecipeResult,
}

/// Recipe output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeResult {
    /// Item reference, project-local id or namespaced (`minecraft:stick`)
    pub item: String,
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_count() -> u32 {
    1
}
