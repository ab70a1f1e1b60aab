use std::{fs, path::PathBuf};

use englyph::{
    builtin, CharacterGlyph, DirSource, FaceCache, FaceSource, FaceStore, GlyphError, GlyphFace,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const FAMILY: &str = "block/serif";

const WIDE: &str = r#"{
    "fixed lines": 2, "fixed columns": 2, "align": ["left", "bottom"],
    "tracking": 0, "monospace": true, "block": "narrow face",
    "character": {"A": ["/\\", "||"]}
}"#;

const NARROW: &str = r#"{
    "fixed lines": 2, "fixed columns": 1, "align": ["left", "bottom"],
    "tracking": 0, "monospace": true,
    "character": {"A": ["a", "a"], "B": ["b", "b"]}
}"#;

/// A fresh face directory under the system temp dir.
fn face_dir(test: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("englyph-{test}-{}", std::process::id()));
    let family = root.join(FAMILY);
    fs::create_dir_all(&family).unwrap();
    fs::write(family.join("wide.json"), WIDE).unwrap();
    fs::write(family.join("narrow_face.json"), NARROW).unwrap();
    fs::write(family.join("broken.json"), "[1, 2").unwrap();
    root
}

#[test]
fn dir_source_loads_and_merges() {
    let root = face_dir("merge");
    let store = FaceStore::new(DirSource::new(&root));
    assert_eq!(
        store.source().faces(FAMILY),
        vec!["broken", "narrow_face", "wide"]
    );
    let face = store.load_merged("wide", FAMILY).unwrap();
    assert_eq!(face.fallback_name(), "narrow_face");
    assert_eq!(face.char_count(), 2);
    assert_eq!(face.glyph('A').unwrap().glyph.select(false), ["/\\", "||"]);
    assert_eq!(
        face.compose("AB", Default::default())
            .unwrap()
            .to_plain_lines(),
        vec!["/\\b ", "||b "]
    );
    fs::remove_dir_all(root).ok();
}

#[test]
fn dir_source_errors() {
    let root = face_dir("errors");
    let store = FaceStore::new(DirSource::new(&root));
    assert!(matches!(
        store.load("missing", FAMILY),
        Err(GlyphError::AssetNotFound { .. })
    ));
    let err = store.load("broken", FAMILY).unwrap_err();
    assert!(matches!(err, GlyphError::AssetCorrupt { .. }));
    assert!(err.is_asset_error());
    let fallback = store.load_or_default("broken", FAMILY).unwrap();
    assert_eq!(fallback.name, builtin::DEFAULT_FACE);
    fs::remove_dir_all(root).ok();
}

#[test]
fn cache_loads_once() {
    let root = face_dir("cache");
    let cache = FaceCache::new(DirSource::new(&root));
    let first = cache.get("wide", FAMILY).unwrap();
    fs::remove_dir_all(&root).unwrap();
    let second = cache.get("wide", FAMILY).unwrap();
    assert_eq!(first, second);
    assert_eq!(cache.len(), 1);
}

#[cfg(feature = "zip")]
#[test]
fn zip_source_reads_bundles() {
    use std::io::{Cursor, Write};

    use englyph::ZipSource;
    use zip::{write::SimpleFileOptions, ZipWriter};

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, body) in [("wide", WIDE), ("narrow_face", NARROW)] {
        writer
            .start_file(format!("{FAMILY}/{name}.json"), SimpleFileOptions::default())
            .unwrap();
        writer.write_all(body.as_bytes()).unwrap();
    }
    let bytes = writer.finish().unwrap().into_inner();

    let source = ZipSource::from_bytes(bytes).unwrap();
    assert_eq!(source.faces(FAMILY), vec!["narrow_face", "wide"]);
    let store = FaceStore::new(source);
    assert_eq!(store.load_merged("wide", FAMILY).unwrap().char_count(), 2);
    assert!(matches!(
        store.load("tall", FAMILY),
        Err(GlyphError::AssetNotFound { .. })
    ));
    assert!(ZipSource::from_bytes(b"not a zip".to_vec()).is_err());
}

fn face_with(chars: &[char], mark: &str) -> GlyphFace {
    let mut face = GlyphFace::new(mark, FAMILY);
    for ch in chars {
        face.insert_glyph(*ch, CharacterGlyph::new(&[mark]));
    }
    face
}

proptest! {
    #[test]
    fn merge_is_idempotent_and_keeps_primary(
        ours in prop::collection::vec(prop::char::range('a', 'z'), 0..10),
        theirs in prop::collection::vec(prop::char::range('a', 'z'), 0..10),
    ) {
        let fallback = face_with(&theirs, "fallback");
        let mut once = face_with(&ours, "primary");
        once.adopt_missing(&fallback);
        let mut twice = once.clone();
        prop_assert_eq!(twice.adopt_missing(&fallback), 0);
        prop_assert_eq!(&once, &twice);
        for ch in &ours {
            prop_assert_eq!(once.glyph(*ch).unwrap().glyph.select(false), ["primary"]);
        }
        for ch in &theirs {
            prop_assert!(once.has_char(*ch));
        }
    }
}
