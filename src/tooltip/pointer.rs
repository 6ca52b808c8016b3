use geo::{BoundingRect, Intersects, Point};
use rstar::{RTree, RTreeObject, AABB};

use crate::render::Scene;

use super::{Cursor, HoverEvent, HoverTarget};

/// Which drawing surface a pointer position refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surface {
    Map,
    Legend,
}

/// Wrapper for county envelopes in the R-tree.
struct CountyEnvelope {
    index: usize,
    aabb: AABB<[f64; 2]>,
}

impl RTreeObject for CountyEnvelope {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope { self.aabb }
}

/// Turns raw pointer positions into the over/out events a browser would
/// deliver to tracked elements.
pub struct PointerTracker {
    tree: RTree<CountyEnvelope>,
    current: Option<HoverTarget>,
}

impl PointerTracker {
    pub fn new(scene: &Scene) -> Self {
        let items = scene.counties.iter().enumerate()
            .filter_map(|(index, county)| {
                let rect = county.geometry.bounding_rect()?;
                Some(CountyEnvelope {
                    index,
                    aabb: AABB::from_corners([rect.min().x, rect.min().y], [rect.max().x, rect.max().y]),
                })
            })
            .collect();

        Self { tree: RTree::bulk_load(items), current: None }
    }

    /// Element currently under the pointer.
    #[inline]
    pub fn current(&self) -> Option<HoverTarget> { self.current }

    /// Topmost tracked element at a position, if any. Points on a shared
    /// border hit the county drawn last.
    pub fn hit_test(&self, scene: &Scene, surface: Surface, x: f64, y: f64) -> Option<HoverTarget> {
        match surface {
            Surface::Legend => scene.legend.iter().rev()
                .find(|swatch| {
                    let rect = swatch.rect();
                    x >= rect.min().x && x <= rect.max().x && y >= rect.min().y && y <= rect.max().y
                })
                .map(|swatch| swatch.target()),
            Surface::Map => {
                let point = Point::new(x, y);
                self.tree.locate_in_envelope_intersecting(&AABB::from_point([x, y]))
                    .filter(|candidate| scene.counties[candidate.index].geometry.intersects(&point))
                    .map(|candidate| candidate.index)
                    .max() // later counties are drawn on top
                    .map(|index| scene.counties[index].target())
            }
        }
    }

    /// Move the pointer. Emits `out` for the element being left and `over`
    /// for the element being entered when they differ.
    pub fn move_to(&mut self, scene: &Scene, surface: Surface, cursor: Cursor) -> Vec<HoverEvent> {
        let next = self.hit_test(scene, surface, cursor.x, cursor.y);
        if next == self.current { return Vec::new() }

        let mut events = Vec::with_capacity(2);
        if let Some(previous) = self.current { events.push(HoverEvent::out(previous, cursor)) }
        if let Some(next) = next { events.push(HoverEvent::over(next, cursor)) }
        self.current = next;
        events
    }

    /// Pointer leaves the document.
    pub fn leave(&mut self, cursor: Cursor) -> Vec<HoverEvent> {
        self.current.take()
            .map(|previous| HoverEvent::out(previous, cursor))
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        color::Rgb,
        data::Fips,
        render::{CountyPath, LegendSwatch},
        tooltip::HoverKind,
    };
    use geo::{polygon, Geometry};

    fn square(fips: u32, x0: f64) -> CountyPath {
        let geometry: Geometry<f64> = polygon![
            (x: x0, y: 0.0), (x: x0 + 10.0, y: 0.0), (x: x0 + 10.0, y: 10.0), (x: x0, y: 10.0),
        ].into();
        CountyPath { fips: Fips(fips), education: 1.0, fill: Rgb::new(0, 0, 0), d: String::new(), geometry }
    }

    fn scene() -> Scene {
        Scene {
            width: 100.0,
            height: 100.0,
            title: String::new(),
            description: String::new(),
            state_stroke: String::new(),
            nation: vec![],
            states: vec![],
            counties: vec![square(1, 0.0), square(2, 10.0)],
            legend: vec![LegendSwatch { threshold: 10, x: 45.0, y: 5.0, size: 40.0, fill: Rgb::new(0, 0, 0) }],
            legend_width: 100.0,
            legend_height: 50.0,
        }
    }

    #[test]
    fn hit_test_finds_counties_and_swatches() {
        let scene = scene();
        let tracker = PointerTracker::new(&scene);
        assert_eq!(tracker.hit_test(&scene, Surface::Map, 5.0, 5.0), Some(HoverTarget::County { fips: Fips(1) }));
        assert_eq!(tracker.hit_test(&scene, Surface::Map, 15.0, 5.0), Some(HoverTarget::County { fips: Fips(2) }));
        assert_eq!(tracker.hit_test(&scene, Surface::Map, 50.0, 50.0), None);
        assert_eq!(tracker.hit_test(&scene, Surface::Legend, 60.0, 20.0), Some(HoverTarget::Legend { threshold: 10 }));
        assert_eq!(tracker.hit_test(&scene, Surface::Legend, 20.0, 20.0), None);
    }

    #[test]
    fn border_points_hit_the_topmost_county() {
        let scene = scene();
        let tracker = PointerTracker::new(&scene);
        assert_eq!(tracker.hit_test(&scene, Surface::Map, 10.0, 5.0), Some(HoverTarget::County { fips: Fips(2) }));
        assert_eq!(tracker.hit_test(&scene, Surface::Map, 0.0, 5.0), Some(HoverTarget::County { fips: Fips(1) }));
        assert_eq!(tracker.hit_test(&scene, Surface::Map, 20.0, 10.0), Some(HoverTarget::County { fips: Fips(2) }));
    }

    #[test]
    fn crossing_a_border_keeps_a_county_under_the_pointer() {
        let scene = scene();
        let mut tracker = PointerTracker::new(&scene);
        tracker.move_to(&scene, Surface::Map, Cursor::new(15.0, 5.0));

        assert!(tracker.move_to(&scene, Surface::Map, Cursor::new(10.0, 5.0)).is_empty());
        assert_eq!(tracker.current(), Some(HoverTarget::County { fips: Fips(2) }));
    }

    #[test]
    fn moving_between_elements_emits_out_then_over() {
        let scene = scene();
        let mut tracker = PointerTracker::new(&scene);

        let events = tracker.move_to(&scene, Surface::Map, Cursor::new(5.0, 5.0));
        assert_eq!(events, vec![HoverEvent::over(HoverTarget::County { fips: Fips(1) }, Cursor::new(5.0, 5.0))]);

        assert!(tracker.move_to(&scene, Surface::Map, Cursor::new(6.0, 6.0)).is_empty());

        let events = tracker.move_to(&scene, Surface::Map, Cursor::new(15.0, 5.0));
        let kinds = events.iter().map(|e| (e.kind, e.target)).collect::<Vec<_>>();
        assert_eq!(kinds, vec![
            (HoverKind::Out, HoverTarget::County { fips: Fips(1) }),
            (HoverKind::Over, HoverTarget::County { fips: Fips(2) }),
        ]);
    }

    #[test]
    fn leave_emits_out_for_current() {
        let scene = scene();
        let mut tracker = PointerTracker::new(&scene);
        tracker.move_to(&scene, Surface::Legend, Cursor::new(60.0, 20.0));

        let events = tracker.leave(Cursor::new(0.0, 0.0));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, HoverKind::Out);
        assert_eq!(tracker.current(), None);
        assert!(tracker.leave(Cursor::new(0.0, 0.0)).is_empty());
    }
}
