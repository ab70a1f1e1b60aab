//! Faces compiled into the library.
use once_cell::sync::Lazy;

use crate::{error::Result, face::GlyphFace, store::FaceStore, store::MemorySource};

pub const DEFAULT_FAMILY: &str = "block/sans";
pub const DEFAULT_FACE: &str = "basic_latin";

static BUILTIN: Lazy<MemorySource> = Lazy::new(|| {
    MemorySource::new()
        .with(
            DEFAULT_FAMILY,
            "basic_latin",
            &include_bytes!("../assets/glyphs/block/sans/basic_latin.json")[..],
        )
        .with(
            DEFAULT_FAMILY,
            "seven_segment",
            &include_bytes!("../assets/glyphs/block/sans/seven_segment.json")[..],
        )
});

/// The built-in faces as a [`FaceSource`](crate::FaceSource).
pub fn source() -> &'static MemorySource {
    &BUILTIN
}

/// The face used when nothing else is available.
pub fn default_face() -> Result<GlyphFace> {
    FaceStore::new(source()).load_merged(DEFAULT_FACE, DEFAULT_FAMILY)
}
