use super::*;
use crate::registry::MemoryResourceLoader;
use crate::resource::Texture;

fn registry_with(paths: &[&str]) -> AssetRegistry {
    let mut loader = MemoryResourceLoader::new();
    loader.insert_texture("/mods/go/stone.png", Texture::solid("/mods/go/stone.png", [20, 20, 20, 255]));
    loader.insert_texture("/mods/go/stone_n.png", Texture::solid("/mods/go/stone_n.png", [128, 128, 255, 255]));
    let mut registry = AssetRegistry::new(loader);
    registry.reset(Some("/mods/go"));
    registry.assign_ids(paths.iter().map(|p| Some(*p)));
    registry
}

// ============================================================================
// Defaults and ids
// ============================================================================

#[test]
fn test_default_reads_as_absent() {
    let maker = MaterialMaker::default();
    assert_eq!(maker.diffuse_id, NO_STRING_ID);
    assert_eq!(maker.normal_id, NO_STRING_ID);
    assert!(!maker.has_shininess());
    assert!(!maker.transparent);
}

#[test]
fn test_ids_absent_until_init() {
    let registry = registry_with(&["stone.png", "stone_n.png"]);
    let mut maker = MaterialMaker::with_paths(Some("stone.png".into()), Some("stone_n.png".into()));
    assert_eq!(maker.diffuse_id, NO_STRING_ID);

    maker.init_string_ids(&registry);

    assert_eq!(maker.diffuse_id, 0);
    assert_eq!(maker.normal_id, 1);
}

#[test]
fn test_init_without_paths_stays_absent() {
    let registry = registry_with(&["stone.png"]);
    let mut maker = MaterialMaker::default();
    maker.init_string_ids(&registry);
    assert_eq!(maker.diffuse_id, NO_STRING_ID);
    assert_eq!(maker.normal_id, NO_STRING_ID);
}

#[test]
fn test_resource_names_order() {
    let maker = MaterialMaker::with_paths(None, Some("n.png".into()));
    assert_eq!(maker.resource_names(), vec![None, Some("n.png")]);
}

// ============================================================================
// Shininess
// ============================================================================

#[test]
fn test_shininess_range() {
    let mut maker = MaterialMaker::default();
    assert!(!maker.set_shininess(0.0));
    assert!(!maker.set_shininess(1.5));
    assert!(!maker.has_shininess());
    assert!(maker.set_shininess(1.0));
    assert_eq!(maker.shininess, 1.0);
}

// ============================================================================
// Shader name & material building
// ============================================================================

#[test]
fn test_shader_names() {
    let mut maker = MaterialMaker::default();
    assert_eq!(maker.shader_name(), "Diffuse");

    maker.set_shininess(0.4);
    assert_eq!(maker.shader_name(), "Specular");

    maker.normal_id = 3;
    assert_eq!(maker.shader_name(), "Bumped Specular");

    maker.transparent = true;
    assert_eq!(maker.shader_name(), "Transparent/Bumped Specular");
}

#[test]
fn test_make_resolves_textures() {
    let mut registry = registry_with(&["stone.png", "stone_n.png"]);
    let mut maker = MaterialMaker::with_paths(Some("stone.png".into()), Some("stone_n.png".into()));
    maker.set_shininess(0.5);
    maker.init_string_ids(&registry);

    let material = maker.make(&mut registry);

    assert_eq!(material.shader(), "Bumped Specular");
    assert_eq!(material.diffuse().unwrap().path(), "/mods/go/stone.png");
    assert_eq!(material.normal().unwrap().path(), "/mods/go/stone_n.png");
    assert_eq!(material.shininess(), Some(0.5));
}

#[test]
fn test_make_degrades_on_missing_texture() {
    let mut registry = registry_with(&["missing.png"]);
    let mut maker = MaterialMaker::with_paths(Some("missing.png".into()), None);
    maker.init_string_ids(&registry);

    let material = maker.make(&mut registry);

    assert_eq!(material.shader(), "Diffuse");
    assert!(material.diffuse().is_none());
}
