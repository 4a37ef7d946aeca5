//! Startup font loading
//!
//! Fonts are read once, before the first frame. A font that fails to load
//! is reported and the editor keeps imgui's built-in font.

use crate::settings::FontSettings;
use imgui::{FontConfig, FontId, FontSource};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} is not a TrueType or OpenType font")]
    NotAFont(PathBuf),

    #[error("invalid font size {0}")]
    InvalidSize(f32),
}

/// sfnt version tags accepted at the start of a font file
const FONT_MAGIC: [[u8; 4]; 4] = [*b"\x00\x01\x00\x00", *b"OTTO", *b"true", *b"ttcf"];

/// Read a font file and check that it looks like TrueType/OpenType data
pub fn read_font_file(path: &Path) -> Result<Vec<u8>, FontError> {
    let data = std::fs::read(path).map_err(|source| FontError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match data.get(..4) {
        Some(magic) if FONT_MAGIC.iter().any(|m| m == magic) => Ok(data),
        _ => Err(FontError::NotAFont(path.to_path_buf())),
    }
}

fn configured_path(settings: &FontSettings) -> Result<Option<&Path>, FontError> {
    let Some(path) = &settings.path else {
        return Ok(None);
    };
    if !(settings.size_pixels.is_finite() && settings.size_pixels > 0.0) {
        return Err(FontError::InvalidSize(settings.size_pixels));
    }
    Ok(Some(path.as_path()))
}

/// Add the configured font to the atlas
///
/// Returns `Ok(None)` when no font is configured.
pub fn load_font(
    context: &mut imgui::Context,
    settings: &FontSettings,
) -> Result<Option<FontId>, FontError> {
    let Some(path) = configured_path(settings)? else {
        return Ok(None);
    };

    let data = read_font_file(path)?;
    let font = context.fonts().add_font(&[FontSource::TtfData {
        data: &data,
        size_pixels: settings.size_pixels,
        config: Some(FontConfig {
            name: path.file_name().map(|name| name.to_string_lossy().into_owned()),
            ..FontConfig::default()
        }),
    }]);

    info!(path = %path.display(), size = settings.size_pixels, "Loaded editor font");
    Ok(Some(font))
}
