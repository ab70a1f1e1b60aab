//! Face loading and fallback merging.
use std::{
    collections::{BTreeMap, HashMap},
    fs, io,
    path::PathBuf,
    sync::Arc,
};

use parking_lot::Mutex;

use crate::{
    builtin,
    error::{GlyphError, Result},
    face::GlyphFace,
};

/// Resolves `(family, face)` to a raw face payload.
pub trait FaceSource {
    /// Returns the payload, or `AssetNotFound` when there is none.
    fn read(&self, family: &str, face: &str) -> Result<Vec<u8>>;

    /// Face names available in `family`, sorted.
    fn faces(&self, _family: &str) -> Vec<String> {
        Vec::new()
    }
}

impl<S: FaceSource + ?Sized> FaceSource for &S {
    fn read(&self, family: &str, face: &str) -> Result<Vec<u8>> {
        (**self).read(family, face)
    }

    fn faces(&self, family: &str) -> Vec<String> {
        (**self).faces(family)
    }
}

/// Faces stored as `<root>/<family>/<face>.json`.
#[derive(Clone, Debug)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path(&self, family: &str, face: &str) -> PathBuf {
        self.root.join(family).join(format!("{face}.json"))
    }
}

impl FaceSource for DirSource {
    fn read(&self, family: &str, face: &str) -> Result<Vec<u8>> {
        match fs::read(self.path(family, face)) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(GlyphError::not_found(family, face))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn faces(&self, family: &str) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.root.join(family)) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|x| x == "json"))
            .filter_map(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();
        names.sort();
        names
    }
}

/// Faces bundled in a zip archive with the same `<family>/<face>.json` layout.
#[cfg(feature = "zip")]
#[derive(Clone, Debug)]
pub struct ZipSource {
    bytes: Vec<u8>,
}

#[cfg(feature = "zip")]
impl ZipSource {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        zip::ZipArchive::new(io::Cursor::new(bytes.as_slice()))
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(Self { bytes })
    }

    pub fn open(path: &std::path::Path) -> Result<Self> {
        Self::from_bytes(fs::read(path)?)
    }

    fn archive(&self) -> Result<zip::ZipArchive<io::Cursor<&[u8]>>> {
        zip::ZipArchive::new(io::Cursor::new(self.bytes.as_slice()))
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
    }
}

#[cfg(feature = "zip")]
impl FaceSource for ZipSource {
    fn read(&self, family: &str, face: &str) -> Result<Vec<u8>> {
        use std::io::Read;

        let mut archive = self.archive()?;
        let mut file = match archive.by_name(&format!("{family}/{face}.json")) {
            Ok(file) => file,
            Err(zip::result::ZipError::FileNotFound) => {
                return Err(GlyphError::not_found(family, face))
            }
            Err(e) => return Err(GlyphError::corrupt(family, face, e.to_string())),
        };
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)
            .map_err(|e| GlyphError::corrupt(family, face, e.to_string()))?;
        Ok(buf)
    }

    fn faces(&self, family: &str) -> Vec<String> {
        let Ok(archive) = self.archive() else {
            return Vec::new();
        };
        let prefix = format!("{family}/");
        let mut names: Vec<String> = archive
            .file_names()
            .filter_map(|n| n.strip_prefix(&prefix))
            .filter_map(|n| n.strip_suffix(".json"))
            .filter(|n| !n.contains('/'))
            .map(str::to_string)
            .collect();
        names.sort();
        names
    }
}

/// Faces held in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    entries: BTreeMap<(String, String), Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, family: &str, face: &str, bytes: impl Into<Vec<u8>>) {
        self.entries
            .insert((family.to_string(), face.to_string()), bytes.into());
    }

    pub fn with(mut self, family: &str, face: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(family, face, bytes);
        self
    }
}

impl FaceSource for MemorySource {
    fn read(&self, family: &str, face: &str) -> Result<Vec<u8>> {
        self.entries
            .get(&(family.to_string(), face.to_string()))
            .cloned()
            .ok_or_else(|| GlyphError::not_found(family, face))
    }

    fn faces(&self, family: &str) -> Vec<String> {
        self.entries
            .keys()
            .filter(|(f, _)| f == family)
            .map(|(_, name)| name.clone())
            .collect()
    }
}

/// Loads faces from a source and fills in their fallback characters.
#[derive(Clone, Debug)]
pub struct FaceStore<S> {
    source: S,
}

impl<S: FaceSource> FaceStore<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Loads one face exactly as stored, without its fallback.
    pub fn load(&self, face: &str, family: &str) -> Result<GlyphFace> {
        let bytes = self.source.read(family, face)?;
        let loaded = GlyphFace::from_bytes(family, face, &bytes)?;
        log::debug!(
            "loaded glyph face {family}/{face} ({} characters)",
            loaded.char_count()
        );
        Ok(loaded)
    }

    /// Copies in every character of the fallback face that `primary` lacks.
    ///
    /// A missing or broken fallback leaves `primary` as it was.
    pub fn merge_fallback(&self, mut primary: GlyphFace, family: &str) -> GlyphFace {
        let fallback = primary.fallback_name();
        if fallback == primary.name {
            return primary;
        }
        match self.load(&fallback, family) {
            Ok(parent) => {
                let adopted = primary.adopt_missing(&parent);
                log::debug!(
                    "merged {adopted} characters from {family}/{fallback} into {}",
                    primary.name
                );
            }
            Err(e) => log::warn!(
                "fallback face {family}/{fallback} for {} unavailable: {e}",
                primary.name
            ),
        }
        primary
    }

    pub fn load_merged(&self, face: &str, family: &str) -> Result<GlyphFace> {
        let primary = self.load(face, family)?;
        Ok(self.merge_fallback(primary, family))
    }

    /// Like [`load_merged`](Self::load_merged) but substitutes the built-in
    /// default face when the requested one cannot be loaded.
    pub fn load_or_default(&self, face: &str, family: &str) -> Result<GlyphFace> {
        match self.load_merged(face, family) {
            Err(e) if e.is_asset_error() => {
                log::warn!("{e}; using built-in {}", builtin::DEFAULT_FACE);
                builtin::default_face()
            }
            other => other,
        }
    }
}

/// Merged faces shared between callers.
///
/// Each `(family, face)` is loaded and merged once; concurrent first
/// requests wait on the same lock instead of merging twice.
pub struct FaceCache<S> {
    store: FaceStore<S>,
    faces: Mutex<HashMap<(String, String), Arc<GlyphFace>>>,
}

impl<S: FaceSource> FaceCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            store: FaceStore::new(source),
            faces: Mutex::new(HashMap::new()),
        }
    }

    pub fn get(&self, face: &str, family: &str) -> Result<Arc<GlyphFace>> {
        let key = (family.to_string(), face.to_string());
        let mut faces = self.faces.lock();
        if let Some(found) = faces.get(&key) {
            return Ok(Arc::clone(found));
        }
        let merged = Arc::new(self.store.load_merged(face, family)?);
        faces.insert(key, Arc::clone(&merged));
        Ok(merged)
    }

    pub fn len(&self) -> usize {
        self.faces.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
