//! Scene construction and document output.

mod io;
mod renderer;
mod scene;

pub use io::DocumentFormat;
pub use renderer::MapRenderer;
pub use scene::{CountyPath, LegendSwatch, Scene, ShapePath};
