use thiserror::Error;

#[derive(Debug, Error)]
pub enum GlyphError {
    #[error("no glyph face asset for {family}/{face}")]
    AssetNotFound { family: String, face: String },
    #[error("corrupt glyph face asset {family}/{face}: {reason}")]
    AssetCorrupt {
        family: String,
        face: String,
        reason: String,
    },
    #[error("missing required glyph face data: {0}")]
    MissingFaceData(&'static str),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl GlyphError {
    pub(crate) fn not_found(family: &str, face: &str) -> Self {
        GlyphError::AssetNotFound {
            family: family.to_string(),
            face: face.to_string(),
        }
    }

    pub(crate) fn corrupt(family: &str, face: &str, reason: impl Into<String>) -> Self {
        GlyphError::AssetCorrupt {
            family: family.to_string(),
            face: face.to_string(),
            reason: reason.into(),
        }
    }

    /// Asset errors can be recovered from by substituting another face.
    pub fn is_asset_error(&self) -> bool {
        matches!(
            self,
            GlyphError::AssetNotFound { .. } | GlyphError::AssetCorrupt { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GlyphError>;
