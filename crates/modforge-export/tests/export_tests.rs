//! Exporter integration tests
//!
//! Full-tree contract: every block and item yields its registry constant,
//! lang entry, models and texture, and the whole tree is byte-identical
//! across runs.

use modforge_export::Exporter;
use modforge_model::{Block, Item, Project, ProjectMeta, Texture, TextureKind};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ENTRY_POINT: &str = r#"package com.example;

public class TemplateMod {
    public static final String MOD_ID = "{{MOD_ID}}";

    public void onInitialize() {
        // modforge:slot registry
    }
}
"#;

fn make_template() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("build.gradle"),
        "// build for {{MOD_NAME}}\n",
    )
    .unwrap();

    let java_dir = dir.path().join("src/main/java/com/example");
    fs::create_dir_all(&java_dir).unwrap();
    fs::write(java_dir.join("TemplateMod.java"), ENTRY_POINT).unwrap();

    let resources = dir.path().join("src/main/resources");
    fs::create_dir_all(&resources).unwrap();
    fs::write(
        resources.join("fabric.mod.json"),
        r#"{ "id": "{{MOD_ID}}", "name": "{{MOD_NAME}}", "description": "{{MOD_DESCRIPTION}}" }"#,
    )
    .unwrap();
    fs::write(resources.join("mixin.json"), "{}\n").unwrap();
    dir
}

fn texture(value: &str) -> Texture {
    Texture {
        kind: TextureKind::Procedural,
        value: value.to_string(),
    }
}

fn sample_project() -> Project {
    let png = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";
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
            texture: texture(png),
        },
    );
    project.items.insert(
        "ruby".to_string(),
        Item {
            id: "ruby".to_string(),
            name: "Ruby".to_string(),
            item_type: Default::default(),
            properties: Default::default(),
            texture: texture("data:not-valid"),
        },
    );
    project
}

/// Collect every file in a tree as relative path -> bytes
fn snapshot_tree(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    let mut files = BTreeMap::new();
    for entry in walkdir::WalkDir::new(root) {
        let entry = entry.unwrap();
        if entry.file_type().is_file() {
            let rel = entry.path().strip_prefix(root).unwrap().to_path_buf();
            files.insert(rel, fs::read(entry.path()).unwrap());
        }
    }
    files
}

#[test]
fn test_export_produces_complete_tree() {
    let template = make_template();
    let out = tempfile::tempdir().unwrap();

    Exporter::new(template.path())
        .export(&sample_project(), out.path())
        .unwrap();

    let expect = [
        "build.gradle",
        "src/main/resources/fabric.mod.json",
        "src/main/resources/gemcraft.mixins.json",
        "src/main/java/com/example/TemplateMod.java",
        "src/main/java/com/example/ModRegistry.java",
        "src/main/resources/assets/gemcraft/lang/en_us.json",
        "src/main/resources/assets/gemcraft/blockstates/ruby_block.json",
        "src/main/resources/assets/gemcraft/models/block/ruby_block.json",
        "src/main/resources/assets/gemcraft/models/item/ruby_block.json",
        "src/main/resources/assets/gemcraft/models/item/ruby.json",
        "src/main/resources/assets/gemcraft/textures/block/ruby_block.png",
        "src/main/resources/assets/gemcraft/textures/item/ruby.png",
    ];
    for path in expect {
        assert!(out.path().join(path).is_file(), "missing {}", path);
    }
}

#[test]
fn test_entry_point_wired_to_registry() {
    let template = make_template();
    let out = tempfile::tempdir().unwrap();

    Exporter::new(template.path())
        .export(&sample_project(), out.path())
        .unwrap();

    let entry =
        fs::read_to_string(out.path().join("src/main/java/com/example/TemplateMod.java")).unwrap();
    assert!(entry.contains("ModRegistry.registerAll();"));
    assert!(!entry.contains("modforge:slot"));
    assert!(entry.contains("MOD_ID = \"gemcraft\""));
}

#[test]
fn test_lang_file_entries() {
    let template = make_template();
    let out = tempfile::tempdir().unwrap();

    Exporter::new(template.path())
        .export(&sample_project(), out.path())
        .unwrap();

    let lang: BTreeMap<String, String> = serde_json::from_str(
        &fs::read_to_string(
            out.path()
                .join("src/main/resources/assets/gemcraft/lang/en_us.json"),
        )
        .unwrap(),
    )
    .unwrap();

    assert_eq!(lang.len(), 2);
    assert_eq!(
        lang.get("block.gemcraft.ruby_block").map(String::as_str),
        Some("Ruby Block")
    );
    assert_eq!(lang.get("item.gemcraft.ruby").map(String::as_str), Some("Ruby"));
}

#[test]
fn test_bad_texture_becomes_placeholder() {
    let template = make_template();
    let out = tempfile::tempdir().unwrap();

    Exporter::new(template.path())
        .export(&sample_project(), out.path())
        .unwrap();

    // The item texture was a malformed data URI
    let bytes = fs::read(
        out.path()
            .join("src/main/resources/assets/gemcraft/textures/item/ruby.png"),
    )
    .unwrap();
    assert_eq!(bytes, modforge_export::assets::PLACEHOLDER_PNG);
}

#[test]
fn test_export_is_deterministic() {
    let template = make_template();
    let project = sample_project();
    let out_a = tempfile::tempdir().unwrap();
    let out_b = tempfile::tempdir().unwrap();

    let exporter = Exporter::new(template.path());
    exporter.export(&project, out_a.path()).unwrap();
    exporter.export(&project, out_b.path()).unwrap();

    assert_eq!(snapshot_tree(out_a.path()), snapshot_tree(out_b.path()));
}

#[test]
fn test_shipped_template_exports() {
    // The repo's real template must carry all three placeholders and the
    // registry slot.
    let template = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../template");
    let out = tempfile::tempdir().unwrap();

    Exporter::new(&template)
        .export(&sample_project(), out.path())
        .unwrap();

    let fabric =
        fs::read_to_string(out.path().join("src/main/resources/fabric.mod.json")).unwrap();
    assert!(fabric.contains("\"id\": \"gemcraft\""));
    assert!(fabric.contains("gemcraft.mixins.json"));
    assert!(out
        .path()
        .join("src/main/resources/gemcraft.mixins.json")
        .is_file());
}
