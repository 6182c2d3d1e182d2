use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{RadarError, Result};

/// Upper bound on grid samples along each axis of the bounding square.
pub const MAX_GRID_STEPS: usize = 4096;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarConfig {
    pub width: f64,
    pub rings: Vec<RingConfig>,
    pub sectors: Vec<SectorConfig>,
    #[serde(default)]
    pub entries: Vec<EntryConfig>,
    #[serde(default)]
    pub style: StyleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingConfig {
    pub label: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorConfig {
    pub label: String,
    pub data: Option<toml::Value>,
}

/// An entry as written in the config. `ring` and `sector` are indices into
/// the ring and sector lists; indices that match nothing are tolerated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryConfig {
    pub label: String,
    pub ring: i64,
    pub sector: i64,
    #[serde(default)]
    pub moved: i64,
    pub data: Option<toml::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub background: String,
    pub line_color: String,
    pub font: String,
    pub blips: BlipStyle,
    pub tooltip: TooltipStyle,
    pub rings: RingStyle,
    pub sectors: SectorStyle,
    /// Placement seed. When absent a seed is drawn at construction.
    pub seed: Option<f64>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: "#00000000".to_string(),
            line_color: "gray".to_string(),
            font: "Arial, Helvetica".to_string(),
            blips: BlipStyle::default(),
            tooltip: TooltipStyle::default(),
            rings: RingStyle::default(),
            sectors: SectorStyle::default(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlipStyle {
    pub r: f64,
    /// Minimum spacing between candidate positions, also the grid step.
    pub offset: f64,
    pub font_size: f64,
    pub text_color: String,
}

impl Default for BlipStyle {
    fn default() -> Self {
        Self {
            r: 12.0,
            offset: 15.0,
            font_size: 12.0,
            text_color: "white".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipStyle {
    pub enabled: bool,
    pub background: String,
    pub text_color: String,
    pub font_size: f64,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            enabled: true,
            background: "black".to_string(),
            text_color: "white".to_string(),
            font_size: 15.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RingStyle {
    pub show_labels: bool,
    pub show_curved_labels: bool,
    pub show_background: bool,
    pub font_size: f64,
}

impl Default for RingStyle {
    fn default() -> Self {
        Self {
            show_labels: true,
            show_curved_labels: true,
            show_background: false,
            font_size: 30.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SectorStyle {
    /// Sector labels sit in an extra outer band, so the rings shrink to make room.
    pub show_labels: bool,
    pub highlight: bool,
    pub text_color: String,
    pub font_size: f64,
}

impl Default for SectorStyle {
    fn default() -> Self {
        Self {
            show_labels: true,
            highlight: true,
            text_color: "black".to_string(),
            font_size: 30.0,
        }
    }
}

impl RadarConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RadarConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Check the preconditions the layout relies on.
    pub fn validate(&self) -> Result<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(RadarError::InvalidWidth(self.width));
        }
        if self.rings.is_empty() {
            return Err(RadarError::NoRings);
        }
        if self.sectors.is_empty() {
            return Err(RadarError::NoSectors);
        }
        let offset = self.style.blips.offset;
        if !offset.is_finite() || offset <= 0.0 {
            return Err(RadarError::InvalidOffset(offset));
        }
        if self.width / offset > MAX_GRID_STEPS as f64 {
            return Err(RadarError::GridTooDense {
                width: self.width,
                offset,
                max: MAX_GRID_STEPS,
            });
        }
        if let Some(seed) = self.style.seed {
            if !seed.is_finite() {
                return Err(RadarError::InvalidSeed(seed));
            }
        }
        Ok(())
    }

    /// Get the default XDG config path (~/.config/radar-layout/radar.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("radar-layout").join("radar.toml"))
    }

    /// Write the config template to the default path, returns the path
    pub fn init_default_config() -> Result<PathBuf> {
        let path = Self::default_path().ok_or_else(|| {
            RadarError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "could not determine config directory",
            ))
        })?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, Self::generate_config_template())?;

        Ok(path)
    }

    /// Generate a commented TOML config template
    pub fn generate_config_template() -> String {
        r##"# Radar layout configuration

# Diagram width; the radar disc has diameter `width`.
width = 500

[[rings]]
label = "Adopt"
color = "#5ba300"

[[rings]]
label = "Trial"
color = "#009eb0"

[[rings]]
label = "Assess"
color = "#c7ba00"

[[rings]]
label = "Hold"
color = "#e09b96"

[[sectors]]
label = "Languages"

[[sectors]]
label = "Tools"

[[sectors]]
label = "Platforms"

[[sectors]]
label = "Techniques"

# `ring` and `sector` are 0-based indices into the lists above.
# `moved`: 1 = moved in, -1 = moved out, 0 = unchanged
[[entries]]
label = "Rust"
ring = 0
sector = 0
moved = 0

[[entries]]
label = "Kubernetes"
ring = 1
sector = 2
moved = 1

[style]
# Pin the seed for a reproducible layout (omit for a random one)
# seed = 123

[style.blips]
# Marker radius
r = 12
# Grid step for candidate positions; smaller packs more blips apart
offset = 15

[style.sectors]
# Reserve an outer band for sector labels (rings get narrower)
show_labels = true
"##
        .to_string()
    }
}
