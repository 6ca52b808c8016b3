//! Conversion of TopoJSON arc references into `geo` geometries.

use geo::{Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};

use crate::error::{Error, Result};

use super::model::{Shape, Topology, Transform};

/// Decodes arcs once and resolves arc references against them.
pub(crate) struct ArcDecoder {
    transform: Option<Transform>,
    arcs: Vec<Vec<Coord<f64>>>,
}

impl ArcDecoder {
    pub(crate) fn new(topology: &Topology) -> Result<Self> {
        let transform = topology.transform;
        let arcs = topology.arcs.iter().enumerate()
            .map(|(i, arc)| decode_arc(i, arc, transform.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { transform, arcs })
    }

    /// Convert a shape, recursing into nested collections.
    pub(crate) fn convert(&self, shape: &Shape) -> Result<Geometry<f64>> {
        Ok(match shape {
            Shape::Point { coordinates } => Geometry::Point(Point(self.position(coordinates)?)),
            Shape::MultiPoint { coordinates } => Geometry::MultiPoint(MultiPoint(
                coordinates.iter()
                    .map(|c| self.position(c).map(Point))
                    .collect::<Result<_>>()?
            )),
            Shape::LineString { arcs } => Geometry::LineString(self.line(arcs)?),
            Shape::MultiLineString { arcs } => Geometry::MultiLineString(MultiLineString(
                arcs.iter().map(|line| self.line(line)).collect::<Result<_>>()?
            )),
            Shape::Polygon { arcs } => Geometry::Polygon(self.polygon(arcs)?),
            Shape::MultiPolygon { arcs } => Geometry::MultiPolygon(MultiPolygon(
                arcs.iter().map(|rings| self.polygon(rings)).collect::<Result<_>>()?
            )),
            Shape::GeometryCollection { geometries } => Geometry::GeometryCollection(GeometryCollection(
                geometries.iter()
                    .filter_map(|member| member.shape.as_ref())
                    .map(|shape| self.convert(shape))
                    .collect::<Result<_>>()?
            )),
        })
    }

    /// Point positions are quantized but never delta-encoded.
    fn position(&self, position: &[f64]) -> Result<Coord<f64>> {
        let [x, y] = xy(position)
            .ok_or_else(|| Error::InvalidTopology("point has fewer than two coordinates".into()))?;
        Ok(match &self.transform {
            Some(t) => Coord { x: x * t.scale[0] + t.translate[0], y: y * t.scale[1] + t.translate[1] },
            None => Coord { x, y },
        })
    }

    /// Concatenate arcs into one coordinate sequence. Consecutive arcs share
    /// their junction point, which is kept once.
    fn stitch(&self, indices: &[i64]) -> Result<Vec<Coord<f64>>> {
        let mut coords: Vec<Coord<f64>> = Vec::new();
        for &index in indices {
            let (i, reversed) = if index < 0 { (!index, true) } else { (index, false) };
            let arc = usize::try_from(i).ok()
                .and_then(|i| self.arcs.get(i))
                .ok_or_else(|| Error::InvalidTopology(format!("arc index {index} out of range (have {})", self.arcs.len())))?;

            coords.pop();
            if reversed {
                coords.extend(arc.iter().rev());
            } else {
                coords.extend(arc.iter());
            }
        }
        Ok(coords)
    }

    fn line(&self, indices: &[i64]) -> Result<LineString<f64>> {
        let mut coords = self.stitch(indices)?;
        if coords.len() == 1 { coords.push(coords[0]) }
        Ok(LineString(coords))
    }

    fn ring(&self, indices: &[i64]) -> Result<LineString<f64>> {
        let mut coords = self.stitch(indices)?;
        if let Some(&first) = coords.first() {
            while coords.len() < 4 { coords.push(first) }
        }
        Ok(LineString(coords))
    }

    fn polygon(&self, rings: &[Vec<i64>]) -> Result<Polygon<f64>> {
        let mut rings = rings.iter().map(|r| self.ring(r));
        let exterior = rings.next().transpose()?.unwrap_or_else(|| LineString(Vec::new()));
        let interiors = rings.collect::<Result<Vec<_>>>()?;
        Ok(Polygon::new(exterior, interiors))
    }
}

fn xy(position: &[f64]) -> Option<[f64; 2]> {
    match position {
        [x, y, ..] => Some([*x, *y]),
        _ => None,
    }
}

/// Decode one arc to absolute coordinates, undoing delta encoding when quantized.
fn decode_arc(i: usize, arc: &[Vec<f64>], transform: Option<&Transform>) -> Result<Vec<Coord<f64>>> {
    let (mut x, mut y) = (0.0, 0.0);
    arc.iter()
        .map(|position| -> Result<Coord<f64>> {
            let [dx, dy] = xy(position)
                .ok_or_else(|| Error::InvalidTopology(format!("arc {i} has a position with fewer than two coordinates")))?;
            Ok(match transform {
                Some(t) => {
                    x += dx;
                    y += dy;
                    Coord { x: x * t.scale[0] + t.translate[0], y: y * t.scale[1] + t.translate[1] }
                }
                None => Coord { x: dx, y: dy },
            })
        })
        .collect()
}
