pub mod hover;
pub mod render;

use anyhow::{Context, Result};
use edumap::{AppState, DefaultSource, MapConfig};

use crate::cli::SourceArgs;

/// Read the configuration, apply dataset overrides and run the fetch pipeline.
fn load_app(args: &SourceArgs) -> Result<AppState> {
    let mut config = match &args.config {
        Some(path) => MapConfig::load_from_file(path)?,
        None => MapConfig::default(),
    };
    if let Some(education) = &args.education { config.data.education = education.clone() }
    if let Some(geometry) = &args.geometry { config.data.geometry = geometry.clone() }

    AppState::load(&DefaultSource, config).context("[load] Couldn't build the map")
}
