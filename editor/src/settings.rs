//! Editor settings management
//!
//! Persistent settings for the inspector, the UI font and the asset root.

use engine::config::AssetConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Main editor settings structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorSettings {
    #[serde(default)]
    pub inspector: InspectorSettings,

    #[serde(default)]
    pub font: FontSettings,

    #[serde(default)]
    pub assets: AssetConfig,

    /// Settings version for future migration support
    #[serde(default)]
    pub version: u32,
}

/// Inspector behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectorSettings {
    /// Maximum depth of nested inspectables drawn inside one another
    pub max_nesting_depth: usize,
    /// Drag step of vector and rotation fields
    pub drag_speed: f32,
    /// Frames between widget-state sweeps; 0 disables sweeping
    pub cache_sweep_interval: u64,
}

/// UI font configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSettings {
    /// TrueType font to load at startup (None = imgui's built-in font)
    pub path: Option<PathBuf>,
    pub size_pixels: f32,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            inspector: InspectorSettings::default(),
            font: FontSettings::default(),
            assets: AssetConfig::default(),
            version: 1,
        }
    }
}

impl Default for InspectorSettings {
    fn default() -> Self {
        Self {
            max_nesting_depth: 8,
            drag_speed: 0.01,
            cache_sweep_interval: 600,
        }
    }
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            path: None,
            size_pixels: 12.0,
        }
    }
}

impl EditorSettings {
    /// Get the default path for the settings file
    pub fn default_path() -> PathBuf {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join("editor_settings.json")
    }

    /// Save settings to the default location
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(Self::default_path())
    }

    /// Load settings from the default location
    ///
    /// A missing or unparsable file yields the defaults.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::default_path();
        if !path.exists() {
            info!("No settings file found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        match serde_json::from_str::<Self>(&content) {
            Ok(settings) => {
                info!("Loaded editor settings from {:?}", path);
                Ok(settings)
            }
            Err(e) => {
                warn!("Failed to parse settings file: {}. Using defaults.", e);
                Ok(Self::default())
            }
        }
    }

    /// Save settings to a specific path
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)?;
        info!("Saved editor settings to {:?}", path.as_ref());
        Ok(())
    }

    /// Load settings from a specific path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(&path)?;
        let settings = serde_json::from_str(&content)?;
        info!("Loaded editor settings from {:?}", path.as_ref());
        Ok(settings)
    }
}
