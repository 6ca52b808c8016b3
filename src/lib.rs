#![doc = "Choropleth map of U.S. county educational attainment"]
mod app;
mod color;
mod common;
mod config;
mod data;
mod error;
mod io;
mod render;
mod source;
mod tooltip;
mod topo;

#[doc(inline)]
pub use app::AppState;

#[doc(inline)]
pub use color::{ColorMapper, Fill, Rgb};

#[doc(inline)]
pub use config::{
    CanvasConfig, DataConfig, LegendConfig, MapConfig, PaletteConfig, TooltipConfig, EDUCATION_URL, GEOMETRY_URL,
};

#[doc(inline)]
pub use data::{DatasetIndex, EducationRecord, Fips};

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use render::{CountyPath, DocumentFormat, LegendSwatch, MapRenderer, Scene, ShapePath};

#[doc(inline)]
pub use source::{DataSource, DefaultSource};

#[doc(inline)]
pub use tooltip::{
    Cursor, HoverEvent, HoverKind, HoverTarget, PointerTracker, Surface, TooltipContent, TooltipController,
    TooltipState,
};

#[doc(inline)]
pub use topo::{parse_topology, FeatureId, GeometryCatalog, GeometryFeature, Topology};
