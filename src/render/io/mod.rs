//! Document output for a rendered scene.

mod html;
mod svg;

use std::{io::Write, path::Path};

use anyhow::{Context, Result};

use crate::{common::PendingWrite, render::Scene, tooltip::TooltipState};

/// Output document kind.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, clap::ValueEnum)]
pub enum DocumentFormat {
    /// Full page with title, map container, legend and tooltip element.
    #[default]
    Html,
    /// Standalone SVG with the legend nested below the map.
    Svg,
}

impl Scene {
    /// Write the scene to `path` atomically. Existing files are kept unless `force`.
    pub fn save(&self, path: &Path, format: DocumentFormat, force: bool) -> Result<()> {
        let mut sink = PendingWrite::open(path, force)?;
        match format {
            DocumentFormat::Html => self.write_html(&mut sink, &TooltipState::default())?,
            DocumentFormat::Svg => self.write_svg(&mut sink)?,
        }
        sink.flush()?;
        sink.finalize()
            .with_context(|| format!("[render] Failed to write {}", path.display()))
    }
}
