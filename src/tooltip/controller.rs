use serde::Serialize;

use crate::{
    config::TooltipConfig,
    data::DatasetIndex,
    error::Result,
};

use super::{Cursor, HoverEvent, HoverKind, HoverTarget};

/// What the tooltip text currently describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipContent {
    #[default]
    Empty,
    County,
    Legend,
}

/// Mutable tooltip element state.
#[derive(Clone, Debug, PartialEq, Default, Serialize)]
pub struct TooltipState {
    pub visible: bool,
    pub content: TooltipContent,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub text: String,
    /// Education percentage of the last hovered county.
    pub education: Option<f64>,
}

/// Hover state machine for the tooltip.
///
/// Every over/out event on a tracked element refreshes the content from the
/// event target and then flips visibility. A hover/unhover pair on the same
/// element therefore shows and hides the tooltip, and moving from one element
/// to another while visible hides it.
#[derive(Clone, Debug)]
pub struct TooltipController {
    config: TooltipConfig,
    state: TooltipState,
}

impl TooltipController {
    pub fn new(config: TooltipConfig) -> Self {
        Self { config, state: TooltipState::default() }
    }

    #[inline]
    pub fn state(&self) -> &TooltipState { &self.state }

    #[inline]
    pub fn is_visible(&self) -> bool { self.state.visible }

    /// `mouseover` handler.
    pub fn on_hover(&mut self, target: HoverTarget, cursor: Cursor, dataset: &DatasetIndex) -> Result<&TooltipState> {
        self.toggle(target, cursor, dataset)
    }

    /// `mouseout` handler.
    pub fn on_unhover(&mut self, target: HoverTarget, cursor: Cursor, dataset: &DatasetIndex) -> Result<&TooltipState> {
        self.toggle(target, cursor, dataset)
    }

    pub fn handle(&mut self, event: &HoverEvent, dataset: &DatasetIndex) -> Result<&TooltipState> {
        match event.kind {
            HoverKind::Over => self.on_hover(event.target, event.cursor, dataset),
            HoverKind::Out => self.on_unhover(event.target, event.cursor, dataset),
        }
    }

    /// Refresh content from the target, then flip visibility. A failed county
    /// lookup leaves the state untouched.
    fn toggle(&mut self, target: HoverTarget, cursor: Cursor, dataset: &DatasetIndex) -> Result<&TooltipState> {
        let distance = self.config.distance;
        let next = match target {
            HoverTarget::County { fips } => {
                let record = dataset.find_by_fips(fips)?;
                TooltipState {
                    visible: self.state.visible,
                    content: TooltipContent::County,
                    left: cursor.x + distance,
                    top: cursor.y + distance,
                    width: self.config.county_width,
                    text: format!("{}, {}, Education: {} %", record.area_name, record.state, record.bachelors_or_higher),
                    education: Some(record.bachelors_or_higher),
                }
            }
            HoverTarget::Legend { threshold } => TooltipState {
                visible: self.state.visible,
                content: TooltipContent::Legend,
                left: cursor.x + distance,
                top: cursor.y - 10.0 * distance,
                width: self.config.legend_width,
                text: format!("{threshold}% of population in the area with color up to this hue have a bachelor degree or higher"),
                education: None,
            },
        };

        self.state = TooltipState { visible: !next.visible, ..next };
        tracing::trace!(element = %target, visible = self.state.visible, "tooltip toggled");
        Ok(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{data::{EducationRecord, Fips}, error::Error};

    fn dataset() -> DatasetIndex {
        DatasetIndex::load(vec![
            EducationRecord { fips: Fips(1001), state: "AL".into(), area_name: "Autauga County".into(), bachelors_or_higher: 21.9 },
            EducationRecord { fips: Fips(1003), state: "AL".into(), area_name: "Baldwin County".into(), bachelors_or_higher: 28.6 },
        ]).unwrap()
    }

    fn county(fips: u32) -> HoverTarget { HoverTarget::County { fips: Fips(fips) } }

    #[test]
    fn starts_hidden() {
        let tooltip = TooltipController::new(TooltipConfig::default());
        assert!(!tooltip.is_visible());
        assert_eq!(tooltip.state().content, TooltipContent::Empty);
    }

    #[test]
    fn county_hover_shows_county_text() {
        let dataset = dataset();
        let mut tooltip = TooltipController::new(TooltipConfig::default());

        let state = tooltip.on_hover(county(1001), Cursor::new(200.0, 300.0), &dataset).unwrap();
        assert!(state.visible);
        assert_eq!(state.content, TooltipContent::County);
        assert_eq!(state.text, "Autauga County, AL, Education: 21.9 %");
        assert_eq!(state.width, 100.0);
        assert_eq!((state.left, state.top), (210.0, 310.0));
        assert_eq!(state.education, Some(21.9));
    }

    #[test]
    fn second_event_hides() {
        let dataset = dataset();
        let mut tooltip = TooltipController::new(TooltipConfig::default());

        tooltip.on_hover(county(1001), Cursor::new(0.0, 0.0), &dataset).unwrap();
        let state = tooltip.on_unhover(county(1001), Cursor::new(1.0, 1.0), &dataset).unwrap();
        assert!(!state.visible);
    }

    #[test]
    fn hovering_another_element_while_visible_hides() {
        let dataset = dataset();
        let mut tooltip = TooltipController::new(TooltipConfig::default());

        tooltip.on_hover(county(1001), Cursor::new(0.0, 0.0), &dataset).unwrap();
        let state = tooltip.on_hover(county(1003), Cursor::new(5.0, 5.0), &dataset).unwrap();
        assert!(!state.visible);
        assert_eq!(state.text, "Baldwin County, AL, Education: 28.6 %");
    }

    #[test]
    fn legend_hover_shows_legend_text() {
        let dataset = dataset();
        let mut tooltip = TooltipController::new(TooltipConfig::default());

        let state = tooltip.handle(
            &HoverEvent::over(HoverTarget::Legend { threshold: 30 }, Cursor::new(100.0, 400.0)),
            &dataset,
        ).unwrap();
        assert!(state.visible);
        assert_eq!(state.content, TooltipContent::Legend);
        assert_eq!(state.width, 300.0);
        assert_eq!((state.left, state.top), (110.0, 300.0));
        assert!(state.text.starts_with("30%"));
        assert!(state.text.ends_with("% of population in the area with color up to this hue have a bachelor degree or higher"));
    }

    #[test]
    fn unknown_county_leaves_state_unchanged() {
        let dataset = dataset();
        let mut tooltip = TooltipController::new(TooltipConfig::default());

        tooltip.on_hover(county(1001), Cursor::new(0.0, 0.0), &dataset).unwrap();
        let before = tooltip.state().clone();

        let err = tooltip.on_unhover(county(9999), Cursor::new(9.0, 9.0), &dataset).unwrap_err();
        assert!(matches!(err, Error::UnknownFips(Fips(9999))));
        assert_eq!(tooltip.state(), &before);
    }
}
