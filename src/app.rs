//! Pipeline wiring: the two ordered fetches and the resulting application state.

use crate::{
    color::ColorMapper,
    config::MapConfig,
    data::DatasetIndex,
    error::{Error, Result},
    render::{MapRenderer, Scene},
    source::DataSource,
    tooltip::{Cursor, HoverEvent, PointerTracker, Surface, TooltipController, TooltipState},
    topo::GeometryCatalog,
};

/// Everything the map needs after loading, owned by the caller.
pub struct AppState {
    pub config: MapConfig,
    pub dataset: DatasetIndex,
    pub colors: ColorMapper,
    pub catalog: GeometryCatalog,
    pub scene: Scene,
    pub tooltip: TooltipController,
    pointer: PointerTracker,
}

impl AppState {
    /// Fetch the education dataset, fit the color scale, then fetch the
    /// geometry and render. The geometry is only requested once the education
    /// dataset has loaded.
    pub fn load(source: &impl DataSource, config: MapConfig) -> Result<Self> {
        let dataset = source.fetch("education dataset", &config.data.education)
            .and_then(|json| DatasetIndex::from_json(&json))
            .inspect_err(log_failure)?;
        let colors = ColorMapper::fit_with(&dataset, &config.palette);
        tracing::info!(records = dataset.len(), "education dataset loaded");

        let catalog = source.fetch("geometry dataset", &config.data.geometry)
            .and_then(|json| GeometryCatalog::from_json(&json))
            .inspect_err(log_failure)?;
        tracing::info!(counties = catalog.counties().len(), states = catalog.states().len(), "geometry loaded");

        let scene = MapRenderer::new(&dataset, &colors, &config).render(&catalog)?;
        let pointer = PointerTracker::new(&scene);
        let tooltip = TooltipController::new(config.tooltip.clone());

        Ok(Self { config, dataset, colors, catalog, scene, tooltip, pointer })
    }

    /// Deliver a hover event straight to the tooltip.
    pub fn hover(&mut self, event: &HoverEvent) -> Result<&TooltipState> {
        self.tooltip.handle(event, &self.dataset)
    }

    /// Move the pointer over a surface and feed the resulting events to the
    /// tooltip, returning the state after each one.
    pub fn move_pointer(&mut self, surface: Surface, cursor: Cursor) -> Result<Vec<TooltipState>> {
        let events = self.pointer.move_to(&self.scene, surface, cursor);
        self.replay(&events)
    }

    /// Pointer leaves the page.
    pub fn leave_pointer(&mut self, cursor: Cursor) -> Result<Vec<TooltipState>> {
        let events = self.pointer.leave(cursor);
        self.replay(&events)
    }

    fn replay(&mut self, events: &[HoverEvent]) -> Result<Vec<TooltipState>> {
        events.iter()
            .map(|event| self.hover(event).cloned())
            .collect()
    }
}

fn log_failure(err: &Error) {
    tracing::error!("Couldn't fetch data: {err}");
}
