//! Asset generation
//!
//! Language entries, blockstates, block/item models and texture bytes for
//! every object in a project. All JSON is emitted with sorted keys so the
//! output tree is byte-identical across runs.

use base64::Engine as _;
use modforge_model::{Project, Texture, TextureKind};
use serde_json::json;
use std::collections::BTreeMap;

/// 1x1 transparent PNG written in place of any texture that fails to decode
pub const PLACEHOLDER_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x04, 0x00, 0x00, 0x00, 0xb5,
    0x1c, 0x0c, 0x02, 0x00, 0x00, 0x00, 0x0b, 0x49, 0x44, 0x41, 0x54, 0x78, 0xda, 0x63, 0x64,
    0x60, 0x00, 0x00, 0x00, 0x06, 0x00, 0x02, 0x30, 0x81, 0xd0, 0x2f, 0x00, 0x00, 0x00, 0x00,
    0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

fn pretty(value: &serde_json::Value) -> String {
    // to_string_pretty on Value with object maps sorted by construction
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Language file: one entry per block and item
///
/// Keys are `block.<modId>.<id>` / `item.<modId>.<id>`, values the display
/// names. Sorted key order comes from the BTreeMap.
pub fn generate_lang_json(project: &Project) -> String {
    let mod_id = &project.meta.mod_id;
    let mut lang = BTreeMap::new();

    for (id, block) in &project.blocks {
        lang.insert(format!("block.{}.{}", mod_id, id), block.name.clone());
    }
    for (id, item) in &project.items {
        lang.insert(format!("item.{}.{}", mod_id, id), item.name.clone());
    }

    pretty(&json!(lang))
}

/// Blockstate: default variant mapped to the block model
pub fn generate_block_state(mod_id: &str, block_id: &str) -> String {
    pretty(&json!({
        "variants": {
            "": { "model": format!("{}:block/{}", mod_id, block_id) }
        }
    }))
}

/// Block model: full cube with a single texture named after the block
pub fn generate_block_model(mod_id: &str, block_id: &str) -> String {
    pretty(&json!({
        "parent": "minecraft:block/cube_all",
        "textures": {
            "all": format!("{}:block/{}", mod_id, block_id)
        }
    }))
}

/// Item model for a block's auto-generated item: parented to the block model
pub fn generate_item_block_model(mod_id: &str, block_id: &str) -> String {
    pretty(&json!({
        "parent": format!("{}:block/{}", mod_id, block_id)
    }))
}

/// Item model: flat generated icon with the item texture as layer0
pub fn generate_item_model(mod_id: &str, item_id: &str) -> String {
    pretty(&json!({
        "parent": "minecraft:item/generated",
        "textures": {
            "layer0": format!("{}:item/{}", mod_id, item_id)
        }
    }))
}

/// Decode a `data:<mime>;base64,<payload>` URI
///
/// Returns `None` for anything that is not a well-formed base64 data URI.
pub fn data_uri_to_bytes(data_uri: &str) -> Option<Vec<u8>> {
    let rest = data_uri.strip_prefix("data:")?;
    let (_mime, payload) = rest.split_once(";base64,")?;
    base64::engine::general_purpose::STANDARD.decode(payload).ok()
}

/// Materialize a texture to raw image bytes
///
/// Procedural textures decode their data URI; imported textures read the
/// referenced file. Anything malformed or unreadable falls back to the
/// transparent placeholder so generation never aborts on a bad texture.
pub fn texture_bytes(texture: &Texture) -> Vec<u8> {
    let decoded = match texture.kind {
        TextureKind::Procedural => data_uri_to_bytes(&texture.value),
        TextureKind::Imported => std::fs::read(&texture.value).ok(),
    };

    decoded.unwrap_or_else(|| {
        tracing::warn!(value = %texture.value, "texture could not be decoded, using placeholder");
        PLACEHOLDER_PNG.to_vec()
    })
}
