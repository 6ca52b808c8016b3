use geo::{Coord, CoordsIter, Geometry, LineString, MapCoords};

/// Projection function: topology coords -> SVG coords (x,y)
pub(crate) type Projection = dyn Fn(&Coord<f64>) -> (f64, f64);

/// The boundary topology is pre-projected to screen space, so drawing uses it as-is.
pub(crate) fn identity(coord: &Coord<f64>) -> (f64, f64) {
    (coord.x, coord.y)
}

/// Apply a projection to every coordinate of a geometry.
pub(crate) fn project_geometry(geometry: &Geometry<f64>, project: &Projection) -> Geometry<f64> {
    geometry.map_coords(|coord| {
        let (x, y) = project(&coord);
        Coord { x, y }
    })
}

/// Build a compact SVG path string for any geometry: polygons close their
/// rings, lines stay open, points are not drawn.
pub(crate) fn geometry_to_path(geometry: &Geometry<f64>) -> String {
    let mut out = String::new();
    append_geometry(geometry, &mut out);
    out.trim_start().to_string()
}

fn append_geometry(geometry: &Geometry<f64>, out: &mut String) {
    match geometry {
        Geometry::Polygon(polygon) => {
            append_ring(polygon.exterior(), true, out);
            for interior in polygon.interiors() { append_ring(interior, true, out) }
        }
        Geometry::MultiPolygon(shape) => {
            for polygon in &shape.0 {
                append_ring(polygon.exterior(), true, out);
                for interior in polygon.interiors() { append_ring(interior, true, out) }
            }
        }
        Geometry::LineString(line) => append_ring(line, false, out),
        Geometry::MultiLineString(lines) => {
            for line in &lines.0 { append_ring(line, false, out) }
        }
        Geometry::GeometryCollection(collection) => {
            for member in &collection.0 { append_geometry(member, out) }
        }
        _ => {}
    }
}

/// Append a ring as an SVG subpath: "M x,y L x,y ... Z"
fn append_ring(ring: &LineString<f64>, close: bool, out: &mut String) {
    let mut coords = ring.coords_iter();
    if let Some(Coord { x, y }) = coords.next() {
        out.push_str(&format!(" M{x:.3},{y:.3}"));
        for Coord { x, y } in coords {
            out.push_str(&format!(" L{x:.3},{y:.3}"));
        }
        if close { out.push('Z') }
    }
}
