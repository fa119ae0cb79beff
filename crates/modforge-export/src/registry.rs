//! Java registry generation
//!
//! Emits the `ModRegistry` class registering every block and item, and wires
//! it into the template's entry point through a named insertion slot.

use crate::error::{ExportError, ExportResult};
use modforge_model::Project;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Slot name the template entry point must carry
pub const REGISTRY_SLOT: &str = "registry";

/// Marker prefix for insertion slots in template sources
const SLOT_MARKER: &str = "// modforge:slot ";

/// Generate the `ModRegistry.java` source for a project
///
/// Constants are emitted in sorted id order; blocks additionally register a
/// `BlockItem` so they appear in the inventory.
pub fn generate_registry_class(project: &Project, package_path: &str) -> String {
    let mod_id = &project.meta.mod_id;

    let mut block_constants = String::new();
    for (id, _block) in &project.blocks {
        let constant = id.to_uppercase();
        let _ = writeln!(
            block_constants,
            "    public static final Block {} = registerBlock(\"{}\", new Block(AbstractBlock.Settings.create().strength(1.0f)));",
            constant, id
        );
    }

    let mut item_constants = String::new();
    for (id, _item) in &project.items {
        let constant = id.to_uppercase();
        let _ = writeln!(
            item_constants,
            "    public static final Item {} = registerItem(\"{}\", new Item(new Item.Settings()));",
            constant, id
        );
    }

    let group_entries = project
        .blocks
        .keys()
        .chain(project.items.keys())
        .map(|id| format!("            entries.add({});", id.to_uppercase()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"package {package_path};

import net.fabricmc.fabric.api.itemgroup.v1.ItemGroupEvents;
import net.minecraft.block.AbstractBlock;
import net.minecraft.block.Block;
import net.minecraft.item.Item;
import net.minecraft.item.ItemGroups;
import net.minecraft.registry.Registries;
import net.minecraft.registry.Registry;
import net.minecraft.util.Identifier;

public class ModRegistry {{

    // Blocks
{block_constants}
    // Items
{item_constants}
    private static Block registerBlock(String name, Block block) {{
        registerItem(name, new net.minecraft.item.BlockItem(block, new Item.Settings()));
        return Registry.register(Registries.BLOCK, Identifier.of("{mod_id}", name), block);
    }}

    private static Item registerItem(String name, Item item) {{
        return Registry.register(Registries.ITEM, Identifier.of("{mod_id}", name), item);
    }}

    public static void registerAll() {{
        ItemGroupEvents.modifyEntriesEvent(ItemGroups.INGREDIENTS).register(entries -> {{
{group_entries}
        }});
    }}
}}
"#
    )
}

/// Replace a named insertion slot with generated code
///
/// A slot is a line of the form `// modforge:slot <name>`; the whole line is
/// replaced, keeping its indentation. Returns `None` when the slot is absent.
pub fn inject_at_slot(source: &str, slot: &str, code: &str) -> Option<String> {
    let mut found = false;
    let mut out = String::with_capacity(source.len() + code.len());

    for line in source.lines() {
        let trimmed = line.trim_start();
        if !found
            && trimmed
                .strip_prefix(SLOT_MARKER)
                .is_some_and(|name| name.trim() == slot)
        {
            let indent = &line[..line.len() - trimmed.len()];
            out.push_str(indent);
            out.push_str(code);
            found = true;
        } else {
            out.push_str(line);
        }
        out.push('\n');
    }

    found.then_some(out)
}

/// Write `ModRegistry.java` and wire it into the entry point
pub fn write_registry(project: &Project, output_dir: &Path, package_path: &str) -> ExportResult<()> {
    let java_dir = output_dir.join("src/main/java/com/example");
    fs::create_dir_all(&java_dir).map_err(|e| ExportError::io(&java_dir, e))?;

    let registry_path = java_dir.join("ModRegistry.java");
    fs::write(&registry_path, generate_registry_class(project, package_path))
        .map_err(|e| ExportError::io(&registry_path, e))?;

    let entry_path = java_dir.join("TemplateMod.java");
    let entry_source =
        fs::read_to_string(&entry_path).map_err(|e| ExportError::io(&entry_path, e))?;

    let patched = inject_at_slot(&entry_source, REGISTRY_SLOT, "ModRegistry.registerAll();")
        .ok_or_else(|| ExportError::missing_slot(REGISTRY_SLOT, &entry_path))?;

    fs::write(&entry_path, patched).map_err(|e| ExportError::io(&entry_path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use modforge_model::{Block, Item, Project, ProjectMeta, Texture, TextureKind};

    fn sample_project() -> Project {
        let texture = Texture {
            kind: TextureKind::Procedural,
            value: "data:image/png;base64,AAAA".to_string(),
        };
        let mut project = Project {
            meta: ProjectMeta {
                mod_id: "gemcraft".to_string(),
                name: "Gemcraft".to_string(),
                version: "1.0.0".to_string(),
                author: None,
                description: None,
            },
            blocks: Default::default(),
            items: Default::default(),
            recipes: Default::default(),
        };
        project.blocks.insert(
            "ruby_block".to_string(),
            Block {
                id: "ruby_block".to_string(),
                name: "Ruby Block".to_string(),
                properties: Default::default(),
                texture: texture.clone(),
            },
        );
        project.items.insert(
            "ruby".to_string(),
            Item {
                id: "ruby".to_string(),
                name: "Ruby".to_string(),
                item_type: Default::default(),
                properties: Default::default(),
                texture,
            },
        );
        project
    }

    #[test]
    fn test_registry_class_contains_constants() {
        let source = generate_registry_class(&sample_project(), "com.example");

        assert!(source.contains("package com.example;"));
        assert!(source.contains(
            "public static final Block RUBY_BLOCK = registerBlock(\"ruby_block\""
        ));
        assert!(source.contains("public static final Item RUBY = registerItem(\"ruby\""));
        assert!(source.contains("Identifier.of(\"gemcraft\", name)"));
        assert!(source.contains("entries.add(RUBY_BLOCK);"));
        assert!(source.contains("entries.add(RUBY);"));
    }

    #[test]
    fn test_registry_class_deterministic() {
        let project = sample_project();
        assert_eq!(
            generate_registry_class(&project, "com.example"),
            generate_registry_class(&project, "com.example")
        );
    }

    #[test]
    fn test_inject_at_slot_replaces_marker() {
        let source = "public void onInitialize() {\n    // modforge:slot registry\n}\n";
        let patched = inject_at_slot(source, "registry", "ModRegistry.registerAll();").unwrap();

        assert!(patched.contains("    ModRegistry.registerAll();"));
        assert!(!patched.contains("modforge:slot"));
    }

    #[test]
    fn test_inject_at_slot_missing_returns_none() {
        let source = "public void onInitialize() {\n}\n";
        assert!(inject_at_slot(source, "registry", "code();").is_none());
    }

    #[test]
    fn test_inject_at_slot_wrong_name_returns_none() {
        let source = "    // modforge:slot other\n";
        assert!(inject_at_slot(source, "registry", "code();").is_none());
    }
}
