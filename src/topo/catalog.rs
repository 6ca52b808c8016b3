use geo::Geometry;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

use super::{decode::ArcDecoder, model::{FeatureId, Shape, TopoObject, Topology}, parse_topology};

/// A single boundary shape with its identifier. `geometry` is `None` for
/// null geometry objects.
#[derive(Debug, Clone)]
pub struct GeometryFeature {
    pub id: Option<FeatureId>,
    pub properties: Map<String, Value>,
    pub geometry: Option<Geometry<f64>>,
}

/// Nation, state and county features decoded from one topology.
#[derive(Debug, Clone)]
pub struct GeometryCatalog {
    nation: Vec<GeometryFeature>,
    states: Vec<GeometryFeature>,
    counties: Vec<GeometryFeature>,
}

impl GeometryCatalog {
    pub const NATION: &'static str = "nation";
    pub const STATES: &'static str = "states";
    pub const COUNTIES: &'static str = "counties";

    /// Extract the three object groups into feature collections.
    pub fn load(topology: &Topology) -> Result<Self> {
        let decoder = ArcDecoder::new(topology)?;

        let group = |name: &'static str| -> Result<Vec<GeometryFeature>> {
            let object = topology.objects.get(name).ok_or(Error::MissingObject(name))?;
            let features = features(&decoder, object)?;
            tracing::debug!(group = name, features = features.len(), "decoded topology object");
            Ok(features)
        };

        Ok(Self {
            nation: group(Self::NATION)?,
            states: group(Self::STATES)?,
            counties: group(Self::COUNTIES)?,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::load(&parse_topology(json)?)
    }

    #[inline]
    pub fn nation(&self) -> &[GeometryFeature] { &self.nation }

    #[inline]
    pub fn states(&self) -> &[GeometryFeature] { &self.states }

    #[inline]
    pub fn counties(&self) -> &[GeometryFeature] { &self.counties }
}

/// Standard object → feature conversion: a collection yields one feature per
/// member, anything else a single feature.
fn features(decoder: &ArcDecoder, object: &TopoObject) -> Result<Vec<GeometryFeature>> {
    match &object.shape {
        Some(Shape::GeometryCollection { geometries }) => geometries.iter()
            .map(|member| feature(decoder, member))
            .collect(),
        _ => Ok(vec![feature(decoder, object)?]),
    }
}

fn feature(decoder: &ArcDecoder, object: &TopoObject) -> Result<GeometryFeature> {
    Ok(GeometryFeature {
        id: object.id.clone(),
        properties: object.properties.clone().unwrap_or_default(),
        geometry: object.shape.as_ref().map(|shape| decoder.convert(shape)).transpose()?,
    })
}
