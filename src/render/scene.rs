use geo::{Geometry, Rect};

use crate::{
    color::{Fill, Rgb},
    data::Fips,
    tooltip::HoverTarget,
};

/// An untracked outline: the nation shape or a state border.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapePath {
    pub d: String,
    pub fill: Fill,
}

/// A county fill, carrying its FIPS code and education value as metadata.
#[derive(Clone, Debug)]
pub struct CountyPath {
    pub fips: Fips,
    pub education: f64,
    pub fill: Rgb,
    pub d: String,
    /// Outline in screen coordinates, kept for hit testing.
    pub geometry: Geometry<f64>,
}

impl CountyPath {
    #[inline]
    pub fn target(&self) -> HoverTarget { HoverTarget::County { fips: self.fips } }
}

/// A legend tile showing the color of one threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendSwatch {
    pub threshold: u32,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub fill: Rgb,
}

impl LegendSwatch {
    #[inline]
    pub fn target(&self) -> HoverTarget { HoverTarget::Legend { threshold: self.threshold } }

    /// `data-legend` value, e.g. `"30%"`.
    pub fn label(&self) -> String { format!("{}%", self.threshold) }

    pub fn rect(&self) -> Rect<f64> {
        Rect::new((self.x, self.y), (self.x + self.size, self.y + self.size))
    }
}

/// The drawable map: layers bottom-to-top, plus the legend row.
#[derive(Clone, Debug)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub title: String,
    pub description: String,
    pub state_stroke: String,
    pub nation: Vec<ShapePath>,
    pub states: Vec<ShapePath>,
    pub counties: Vec<CountyPath>,
    pub legend: Vec<LegendSwatch>,
    pub legend_width: f64,
    pub legend_height: f64,
}

impl Scene {
    pub fn county(&self, fips: Fips) -> Option<&CountyPath> {
        self.counties.iter().find(|c| c.fips == fips)
    }

    pub fn swatch(&self, threshold: u32) -> Option<&LegendSwatch> {
        self.legend.iter().find(|s| s.threshold == threshold)
    }

    /// Every element that hover handlers are attached to: counties, then legend swatches.
    pub fn tracked_elements(&self) -> impl Iterator<Item = HoverTarget> + '_ {
        self.counties.iter().map(CountyPath::target)
            .chain(self.legend.iter().map(LegendSwatch::target))
    }
}
