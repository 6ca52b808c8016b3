use std::fmt;

use serde::Serialize;

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }
}

impl fmt::Display for Rgb {
    /// Format as CSS: rgb(r, g, b)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Fill for a drawn element: either a computed color or a named CSS color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fill {
    Rgb(Rgb),
    Named(String),
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fill::Rgb(rgb) => rgb.fmt(f),
            Fill::Named(name) => f.write_str(name),
        }
    }
}

impl From<Rgb> for Fill {
    fn from(value: Rgb) -> Self { Fill::Rgb(value) }
}
