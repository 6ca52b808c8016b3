//! Hover events, pointer hit testing and the tooltip state machine.

mod controller;
mod event;
mod pointer;

pub use controller::{TooltipContent, TooltipController, TooltipState};
pub use event::{Cursor, HoverEvent, HoverKind, HoverTarget};
pub use pointer::{PointerTracker, Surface};
