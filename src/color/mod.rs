//! Color values and the education color scale.

mod rgb;
mod scale;

pub use rgb::{Fill, Rgb};
pub use scale::ColorMapper;
