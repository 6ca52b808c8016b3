use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const EDUCATION_URL: &str = "https://cdn.freecodecamp.org/testable-projects-fcc/data/choropleth_map/for_user_education.json";
pub const GEOMETRY_URL: &str = "https://cdn.freecodecamp.org/testable-projects-fcc/data/choropleth_map/counties.json";

/// Top-level configuration, read from TOML. Every section and key is optional.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default, deny_unknown_fields)]
pub struct MapConfig {
    pub data: DataConfig,
    pub canvas: CanvasConfig,
    pub palette: PaletteConfig,
    pub legend: LegendConfig,
    pub tooltip: TooltipConfig,
}

/// Where the two datasets come from: `http(s)://` URLs or local paths.
#[derive(Debug, Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    pub education: String,
    pub geometry: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
    pub title: String,
    pub description: String,
}

/// Fixed red/blue channels and the output range of the green channel.
#[derive(Debug, Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteConfig {
    pub red: u8,
    pub blue: u8,
    pub green_range: [u8; 2],
    pub nation_fill: String,
    pub state_fill: String,
    pub state_stroke: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct LegendConfig {
    pub thresholds: Vec<u32>,
    pub tile_size: f64,
    pub border: f64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct TooltipConfig {
    /// Offset from the cursor, in pixels.
    pub distance: f64,
    pub county_width: f64,
    pub legend_width: f64,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self { education: EDUCATION_URL.into(), geometry: GEOMETRY_URL.into() }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 600.0,
            title: "United States Educational Attainment".into(),
            description: "Percentage of adults age 25 and older with a bachelor's degree or higher (2010-2014)".into(),
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            red: 50,
            blue: 150,
            green_range: [0, 255],
            nation_fill: "red".into(),
            state_fill: "white".into(),
            state_stroke: "#111827".into(),
        }
    }
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self { thresholds: vec![10, 30, 50, 70], tile_size: 40.0, border: 5.0 }
    }
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self { distance: 10.0, county_width: 100.0, legend_width: 300.0 }
    }
}

impl MapConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}
