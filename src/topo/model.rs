use std::{collections::BTreeMap, fmt};

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{data::Fips, error::{Error, Result}};

/// A TopoJSON topology document.
#[derive(Debug, Clone, Deserialize)]
pub struct Topology {
    #[serde(rename = "type")]
    pub kind: String,
    /// Present when the topology is quantized: arc positions are then
    /// delta-encoded integers.
    #[serde(default)]
    pub transform: Option<Transform>,
    pub arcs: Vec<Vec<Vec<f64>>>,
    pub objects: BTreeMap<String, TopoObject>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct Transform {
    pub scale: [f64; 2],
    pub translate: [f64; 2],
}

/// A named object or one member of a geometry collection.
///
/// `shape` is `None` for null geometry objects (`"type": null`).
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawObject")]
pub struct TopoObject {
    pub id: Option<FeatureId>,
    pub properties: Option<Map<String, Value>>,
    pub shape: Option<Shape>,
}

/// Wire form of an object: the shape body is kept aside until the type is known.
#[derive(Deserialize)]
struct RawObject {
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    id: Option<FeatureId>,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(flatten)]
    body: Map<String, Value>,
}

impl TryFrom<RawObject> for TopoObject {
    type Error = serde_json::Error;

    fn try_from(raw: RawObject) -> std::result::Result<Self, Self::Error> {
        let shape = match raw.kind {
            None => None,
            Some(kind) => {
                let mut body = raw.body;
                body.insert("type".into(), Value::String(kind));
                Some(Shape::deserialize(Value::Object(body))?)
            }
        };
        Ok(Self { id: raw.id, properties: raw.properties, shape })
    }
}

/// Geometry body: arc references for lines and polygons, coordinates for points.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    GeometryCollection { geometries: Vec<TopoObject> },
    Point { coordinates: Vec<f64> },
    MultiPoint { coordinates: Vec<Vec<f64>> },
    LineString { arcs: Vec<i64> },
    MultiLineString { arcs: Vec<Vec<i64>> },
    Polygon { arcs: Vec<Vec<i64>> },
    MultiPolygon { arcs: Vec<Vec<Vec<i64>>> },
}

/// Feature identifier; county features carry their FIPS code here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FeatureId {
    Number(u64),
    Text(String),
}

impl FeatureId {
    /// Interpret the id as a FIPS code. Numeric strings such as `"01001"` are accepted.
    pub fn as_fips(&self) -> Option<Fips> {
        match self {
            FeatureId::Number(n) => u32::try_from(*n).ok().map(Fips),
            FeatureId::Text(s) => s.trim().parse::<u32>().ok().map(Fips),
        }
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureId::Number(n) => write!(f, "{n}"),
            FeatureId::Text(s) => f.write_str(s),
        }
    }
}

/// Parse a TopoJSON document.
pub fn parse_topology(json: &str) -> Result<Topology> {
    let topology: Topology = serde_json::from_str(json)
        .map_err(|source| Error::Parse { what: "geometry topology", source })?;

    if topology.kind != "Topology" {
        return Err(Error::InvalidTopology(format!("expected type \"Topology\", found {:?}", topology.kind)));
    }

    Ok(topology)
}
