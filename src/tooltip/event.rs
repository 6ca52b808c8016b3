use std::fmt;

use crate::data::Fips;

/// A tracked element that delivers hover events: a county path or a legend swatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HoverTarget {
    County { fips: Fips },
    Legend { threshold: u32 },
}

impl fmt::Display for HoverTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoverTarget::County { fips } => write!(f, "county {fips}"),
            HoverTarget::Legend { threshold } => write!(f, "legend {threshold}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverKind {
    /// Pointer entered the element (`mouseover`).
    Over,
    /// Pointer left the element (`mouseout`).
    Out,
}

/// Pointer position in page pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Cursor {
    pub x: f64,
    pub y: f64,
}

impl Cursor {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverEvent {
    pub kind: HoverKind,
    pub target: HoverTarget,
    pub cursor: Cursor,
}

impl HoverEvent {
    pub fn over(target: HoverTarget, cursor: Cursor) -> Self {
        Self { kind: HoverKind::Over, target, cursor }
    }

    pub fn out(target: HoverTarget, cursor: Cursor) -> Self {
        Self { kind: HoverKind::Out, target, cursor }
    }
}
