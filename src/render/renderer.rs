use geo::Coord;

use crate::{
    color::{ColorMapper, Fill},
    config::MapConfig,
    data::DatasetIndex,
    error::{Error, Result},
    io::svg::{geometry_to_path, identity, project_geometry, Projection},
    topo::{GeometryCatalog, GeometryFeature},
};

use super::{CountyPath, LegendSwatch, Scene, ShapePath};

/// Draws the choropleth scene from a populated dataset, color scale and catalog.
pub struct MapRenderer<'a> {
    dataset: &'a DatasetIndex,
    colors: &'a ColorMapper,
    config: &'a MapConfig,
    project: Box<Projection>,
}

impl<'a> MapRenderer<'a> {
    pub fn new(dataset: &'a DatasetIndex, colors: &'a ColorMapper, config: &'a MapConfig) -> Self {
        Self { dataset, colors, config, project: Box::new(identity) }
    }

    /// Replace the default identity projection.
    pub fn with_projection(mut self, project: impl Fn(&Coord<f64>) -> (f64, f64) + 'static) -> Self {
        self.project = Box::new(project);
        self
    }

    /// Build the full scene. Fails if any county cannot be joined to a record.
    pub fn render(&self, catalog: &GeometryCatalog) -> Result<Scene> {
        let palette = &self.config.palette;
        let canvas = &self.config.canvas;

        let nation = self.outlines(catalog.nation(), &Fill::Named(palette.nation_fill.clone()));
        let states = self.outlines(catalog.states(), &Fill::Named(palette.state_fill.clone()));
        let counties = self.counties(catalog.counties())?;
        let (legend, legend_width, legend_height) = self.legend();

        tracing::info!(
            nation = nation.len(),
            states = states.len(),
            counties = counties.len(),
            legend = legend.len(),
            "rendered scene"
        );

        Ok(Scene {
            width: canvas.width,
            height: canvas.height,
            title: canvas.title.clone(),
            description: canvas.description.clone(),
            state_stroke: palette.state_stroke.clone(),
            nation,
            states,
            counties,
            legend,
            legend_width,
            legend_height,
        })
    }

    /// Null geometries draw nothing.
    fn outlines(&self, features: &[GeometryFeature], fill: &Fill) -> Vec<ShapePath> {
        features.iter()
            .filter_map(|feature| feature.geometry.as_ref())
            .map(|geometry| ShapePath {
                d: geometry_to_path(&project_geometry(geometry, &*self.project)),
                fill: fill.clone(),
            })
            .collect()
    }

    /// Every county must join to a record, even one without geometry; only
    /// counties with geometry are drawn.
    fn counties(&self, features: &[GeometryFeature]) -> Result<Vec<CountyPath>> {
        let mut counties = Vec::with_capacity(features.len());
        for (index, feature) in features.iter().enumerate() {
            let fips = feature.id.as_ref()
                .and_then(|id| id.as_fips())
                .ok_or(Error::MissingFeatureId { group: GeometryCatalog::COUNTIES, index })?;

            let record = self.dataset.find_by_fips(fips)?;
            let Some(geometry) = &feature.geometry else {
                tracing::debug!(%fips, "county has no geometry, not drawn");
                continue;
            };
            let geometry = project_geometry(geometry, &*self.project);

            counties.push(CountyPath {
                fips,
                education: record.bachelors_or_higher,
                fill: self.colors.color_for(record.bachelors_or_higher),
                d: geometry_to_path(&geometry),
                geometry,
            });
        }
        Ok(counties)
    }

    /// Legend tiles sit in one row at `x = (border + tile) * (i + 1)`, `y = border`.
    fn legend(&self) -> (Vec<LegendSwatch>, f64, f64) {
        let legend = &self.config.legend;
        let step = legend.border + legend.tile_size;

        let swatches = legend.thresholds.iter().enumerate()
            .map(|(i, &threshold)| LegendSwatch {
                threshold,
                x: step * (i + 1) as f64,
                y: legend.border,
                size: legend.tile_size,
                fill: self.colors.color_for(threshold as f64),
            })
            .collect::<Vec<_>>();

        let width = step * (swatches.len() + 1) as f64 + legend.border;
        let height = legend.tile_size + 2.0 * legend.border;
        (swatches, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::Rgb, data::{EducationRecord, Fips}};

    const TOPOLOGY: &str = r#"{
        "type": "Topology",
        "transform": {"scale": [1, 1], "translate": [0, 0]},
        "arcs": [
            [[0,0],[20,0],[0,10],[-20,0],[0,-10]],
            [[0,0],[10,0],[0,10],[-10,0],[0,-10]],
            [[10,0],[10,0],[0,10],[-10,0],[0,-10]]
        ],
        "objects": {
            "nation": {"type": "GeometryCollection", "geometries": [{"type": "Polygon", "arcs": [[0]]}]},
            "states": {"type": "GeometryCollection", "geometries": [{"type": "Polygon", "id": 1, "arcs": [[0]]}]},
            "counties": {"type": "GeometryCollection", "geometries": [
                {"type": "Polygon", "id": 1, "arcs": [[1]]},
                {"type": "Polygon", "id": 2, "arcs": [[2]]}
            ]}
        }
    }"#;

    fn dataset(fips: &[u32]) -> DatasetIndex {
        DatasetIndex::load(fips.iter().zip([10.0, 50.0, 30.0])
            .map(|(&fips, pct)| EducationRecord {
                fips: Fips(fips),
                state: "AL".into(),
                area_name: format!("County {fips}"),
                bachelors_or_higher: pct,
            })
            .collect()
        ).unwrap()
    }

    #[test]
    fn renders_layers_and_joins_counties() {
        let dataset = dataset(&[1, 2]);
        let colors = ColorMapper::fit(&dataset);
        let config = MapConfig::default();
        let catalog = GeometryCatalog::from_json(TOPOLOGY).unwrap();

        let scene = MapRenderer::new(&dataset, &colors, &config).render(&catalog).unwrap();

        assert_eq!(scene.nation.len(), 1);
        assert_eq!(scene.states.len(), 1);
        assert_eq!(scene.counties.len(), 2);
        assert_eq!(scene.nation[0].fill, Fill::Named("red".into()));
        assert_eq!(scene.states[0].fill, Fill::Named("white".into()));

        for county in &scene.counties {
            let record = dataset.find_by_fips(county.fips).unwrap();
            assert_eq!(county.fill, colors.color_for(record.bachelors_or_higher));
            assert_eq!(county.education, record.bachelors_or_higher);
        }
        assert_eq!(scene.county(Fips(2)).unwrap().fill, Rgb::new(50, 255, 150));
        assert!(scene.counties[1].d.starts_with("M10.000,0.000"));
    }

    #[test]
    fn legend_row_positions_and_colors() {
        let dataset = dataset(&[1, 2]);
        let colors = ColorMapper::fit(&dataset);
        let config = MapConfig::default();
        let catalog = GeometryCatalog::from_json(TOPOLOGY).unwrap();

        let scene = MapRenderer::new(&dataset, &colors, &config).render(&catalog).unwrap();

        let xs = scene.legend.iter().map(|s| s.x).collect::<Vec<_>>();
        assert_eq!(xs, vec![45.0, 90.0, 135.0, 180.0]);
        assert!(scene.legend.iter().all(|s| s.y == 5.0 && s.size == 40.0));
        assert_eq!(scene.swatch(30).unwrap().fill, Rgb::new(50, 128, 150));
        assert_eq!(scene.swatch(70).unwrap().fill, Rgb::new(50, 255, 150));
        assert_eq!(scene.swatch(10).unwrap().label(), "10%");
        assert_eq!(scene.tracked_elements().count(), 6);
    }

    #[test]
    fn unmatched_county_fails_the_render() {
        let dataset = dataset(&[1, 3]);
        let colors = ColorMapper::fit(&dataset);
        let config = MapConfig::default();
        let catalog = GeometryCatalog::from_json(TOPOLOGY).unwrap();

        let err = MapRenderer::new(&dataset, &colors, &config).render(&catalog).unwrap_err();
        assert!(matches!(err, Error::UnknownFips(Fips(2))));
    }

    #[test]
    fn county_without_id_fails_the_render() {
        let dataset = dataset(&[1, 2]);
        let colors = ColorMapper::fit(&dataset);
        let config = MapConfig::default();
        let catalog = GeometryCatalog::from_json(&TOPOLOGY.replace(r#""id": 2, "#, "")).unwrap();

        let err = MapRenderer::new(&dataset, &colors, &config).render(&catalog).unwrap_err();
        assert!(matches!(err, Error::MissingFeatureId { group: "counties", index: 1 }));
    }

    #[test]
    fn null_geometries_are_joined_but_not_drawn() {
        let dataset = dataset(&[1, 2]);
        let colors = ColorMapper::fit(&dataset);
        let config = MapConfig::default();
        let json = TOPOLOGY
            .replace(r#"{"type": "Polygon", "id": 2, "arcs": [[2]]}"#, r#"{"type": null, "id": 2}"#)
            .replace(r#"[{"type": "Polygon", "id": 1, "arcs": [[0]]}]"#, r#"[{"type": "Polygon", "id": 1, "arcs": [[0]]}, {"type": null}]"#);
        let catalog = GeometryCatalog::from_json(&json).unwrap();

        let scene = MapRenderer::new(&dataset, &colors, &config).render(&catalog).unwrap();
        assert_eq!(scene.states.len(), 1);
        assert_eq!(scene.counties.len(), 1);
        assert_eq!(scene.counties[0].fips, Fips(1));

        let unmatched = self::dataset(&[1, 3]);
        let colors = ColorMapper::fit(&unmatched);
        let err = MapRenderer::new(&unmatched, &colors, &config).render(&catalog).unwrap_err();
        assert!(matches!(err, Error::UnknownFips(Fips(2))));
    }

    #[test]
    fn custom_projection_moves_paths() {
        let dataset = dataset(&[1, 2]);
        let colors = ColorMapper::fit(&dataset);
        let config = MapConfig::default();
        let catalog = GeometryCatalog::from_json(TOPOLOGY).unwrap();

        let scene = MapRenderer::new(&dataset, &colors, &config)
            .with_projection(|c| (c.x + 100.0, c.y))
            .render(&catalog)
            .unwrap();
        assert!(scene.counties[0].d.starts_with("M100.000,0.000"));
    }
}
