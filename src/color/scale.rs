use crate::{config::PaletteConfig, data::DatasetIndex};

use super::Rgb;

/// Linear education-percentage → color scale.
///
/// The domain is the observed `[min, max]` of the dataset; the range drives
/// the green channel while red and blue stay fixed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorMapper {
    domain: (f64, f64),
    range: (u8, u8),
    red: u8,
    blue: u8,
}

impl ColorMapper {
    /// Fit the scale domain to the dataset with the default palette.
    pub fn fit(dataset: &DatasetIndex) -> Self {
        Self::fit_with(dataset, &PaletteConfig::default())
    }

    pub fn fit_with(dataset: &DatasetIndex, palette: &PaletteConfig) -> Self {
        let domain = dataset.extent();
        tracing::debug!(min = domain.0, max = domain.1, "fit color scale");
        Self {
            domain,
            range: (palette.green_range[0], palette.green_range[1]),
            red: palette.red,
            blue: palette.blue,
        }
    }

    #[inline]
    pub fn domain(&self) -> (f64, f64) { self.domain }

    /// Green channel for a percentage.
    ///
    /// A zero-width domain maps everything to the range midpoint. Values
    /// outside the domain are clamped to the range; non-finite values map to
    /// the range start.
    pub fn green_for(&self, percentage: f64) -> u8 {
        let (lo, hi) = (self.range.0 as f64, self.range.1 as f64);
        if !percentage.is_finite() { return self.range.0 }

        let (min, max) = self.domain;
        let t = if max > min { (percentage - min) / (max - min) } else { 0.5 };

        (lo + (hi - lo) * t)
            .round()
            .clamp(lo.min(hi), lo.max(hi)) as u8
    }

    /// Color for a percentage: `rgb(red, green_for(percentage), blue)`.
    pub fn color_for(&self, percentage: f64) -> Rgb {
        Rgb::new(self.red, self.green_for(percentage), self.blue)
    }
}
