//! Integration tests for the filesystem resource loader
//!
//! Writes small PNG and OBJ files into temporary directories and resolves
//! them through the loader, the registry and a full session.
//!
//! Run with: cargo test --test fs_loader_tests

use std::fs;
use std::path::Path;
use tabletop_mods::tabletop::asset::{Asset, BuiltinAssets};
use tabletop_mods::tabletop::loader::load_mod_dir;
use tabletop_mods::tabletop::registry::{AssetRegistry, ResourceLoader};
use tabletop_mods::tabletop::{Error, Session, SessionConfig};
use tabletop_mods_fs::{decode_obj, FsResourceLoader};

// ============================================================================
// HELPERS
// ============================================================================

const QUAD_OBJ: &str = "\
o quad
v 0 0 0
v 1 0 0
v 1 0 1
v 0 0 1
vn 0 1 0
f 1//1 2//1 3//1 4//1
";

const TRIANGLE_OBJ: &str = "\
v 0 0 0
v 1 0 0
v 0 1 0
f 1 2 3
";

fn write_png(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    image::RgbaImage::from_pixel(width, height, image::Rgba([200, 10, 10, 255]))
        .save(path)
        .unwrap();
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

// ============================================================================
// DECODING
// ============================================================================

#[test]
fn test_texture_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("red.png");
    write_png(&file, 4, 2);
    let loader = FsResourceLoader::new(dir.path());

    let texture = loader.load_texture(&path_str(&file), false).unwrap();

    assert_eq!(texture.width(), 4);
    assert_eq!(texture.height(), 2);
    assert_eq!(texture.pixels().len(), 4 * 2 * 4);
    assert_eq!(&texture.pixels()[..4], &[200, 10, 10, 255]);
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let loader = FsResourceLoader::new(dir.path());
    let missing = path_str(&dir.path().join("nope.png"));

    assert_eq!(loader.load_texture(&missing, false), Err(Error::NotFound(missing.clone())));
}

#[test]
fn test_corrupt_texture_is_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("broken.png");
    fs::write(&file, b"definitely not a png").unwrap();
    let loader = FsResourceLoader::new(dir.path());

    let result = loader.load_texture(&path_str(&file), false);

    assert!(matches!(result, Err(Error::DecodeError(_))));
}

#[test]
fn test_obj_quad_triangulated() {
    let mesh = decode_obj("quad.obj", QUAD_OBJ.as_bytes()).unwrap();

    assert_eq!(mesh.positions().len(), 4);
    assert_eq!(mesh.normals().len(), 4);
    assert_eq!(mesh.triangle_count(), 2);
}

#[test]
fn test_obj_without_normals() {
    let mesh = decode_obj("tri.obj", TRIANGLE_OBJ.as_bytes()).unwrap();
    assert_eq!(mesh.triangle_count(), 1);
    assert!(mesh.normals().is_empty());
}

#[test]
fn test_obj_empty_is_decode_error() {
    assert!(matches!(decode_obj("empty.obj", b""), Err(Error::DecodeError(_))));
}

#[test]
fn test_builtin_scheme_maps_to_bundle_root() {
    let bundle = tempfile::tempdir().unwrap();
    fs::create_dir_all(bundle.path().join("dice")).unwrap();
    fs::write(bundle.path().join("dice/d6.obj"), TRIANGLE_OBJ).unwrap();
    let loader = FsResourceLoader::new(bundle.path());

    assert_eq!(loader.file_path("builtin://dice/d6.obj", true), bundle.path().join("dice/d6.obj"));
    let mesh = loader.load_mesh("builtin://dice/d6.obj", true).unwrap();
    assert_eq!(mesh.path(), "builtin://dice/d6.obj");
}

// ============================================================================
// THROUGH THE REGISTRY
// ============================================================================

#[test]
fn test_registry_reads_mod_files_once() {
    let mod_dir = tempfile::tempdir().unwrap();
    write_png(&mod_dir.path().join("cards/ace.png"), 2, 2);
    let mut registry = AssetRegistry::new(FsResourceLoader::new(mod_dir.path()));
    registry.reset(Some(&path_str(mod_dir.path())));

    let first = registry.resolve_texture("cards/ace.png").unwrap();
    fs::remove_file(mod_dir.path().join("cards/ace.png")).unwrap();
    let second = registry.resolve_texture("cards/./ace.png").unwrap();

    assert!(std::sync::Arc::ptr_eq(&first, &second));
}

#[test]
fn test_registry_blocks_files_outside_mod() {
    let root = tempfile::tempdir().unwrap();
    write_png(&root.path().join("secret.png"), 1, 1);
    let mod_dir = root.path().join("mods/chess");
    fs::create_dir_all(&mod_dir).unwrap();
    let mut registry = AssetRegistry::new(FsResourceLoader::new(root.path()));
    registry.reset(Some(&path_str(&mod_dir)));

    let result = registry.resolve_texture("../../secret.png");

    assert!(matches!(result, Err(Error::SandboxViolation(_))));
}

#[test]
fn test_session_with_mod_on_disk() {
    let mod_dir = tempfile::tempdir().unwrap();
    write_png(&mod_dir.path().join("cards/back.png"), 2, 3);
    write_png(&mod_dir.path().join("cards/one.png"), 2, 3);
    fs::write(
        mod_dir.path().join("meta.json"),
        r#"{
            "name": "Solitaire",
            "assets": {
                "deck": {"type": "deck", "back": "cards/back.png", "cards": ["cards/one.png", "cards/two.png"]}
            },
            "instances": [{"asset": "deck"}]
        }"#,
    )
    .unwrap();
    let bundle = tempfile::tempdir().unwrap();
    let mut session = Session::new(
        SessionConfig::default(),
        BuiltinAssets::standard(),
        FsResourceLoader::new(bundle.path()),
    );
    let game_mod = load_mod_dir(mod_dir.path(), session.builtins(), session.config()).unwrap();
    session.activate(game_mod);

    let Some(Asset::Deck(deck)) = session.active_mod().unwrap().assets.get("deck") else {
        panic!("deck expected");
    };
    let cards = deck.card_data(session.registry());
    let registry = session.registry_mut();

    let back = registry.get_texture(cards[0].card_back_id).unwrap();
    assert_eq!((back.width(), back.height()), (2, 3));
    assert!(registry.get_texture(cards[0].card_id).is_ok());
    assert!(matches!(registry.get_texture(cards[1].card_id), Err(Error::NotFound(_))));
    let d6 = registry.get_id(Some("builtin://dice/d6.obj"));
    assert!(matches!(registry.get_mesh(d6), Err(Error::NotFound(_))));
}
