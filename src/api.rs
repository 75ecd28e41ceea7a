use log::{debug, info};
use serde_json::Value;

use crate::coordinate::{Coordinate, CrsTransformer, Proj4Transformer, Reprojector};
use crate::errors::{ConversionError, ParseError, WktKitResult};
use crate::geojson::{geojson_document_to_wkt, wkt_to_geojson, Feature};
use crate::graphics::{Graphic, GraphicBuilder, StyleDefinitions};
use crate::wkt::{parse_geometry, to_wkt, Geometry};

/// Main interface to the WktKit library
///
/// Holds the CRS that imported geometry is displayed in. Imports are
/// parsed, reprojected when their declared CRS differs, and turned into
/// graphics; exports go the other way.
pub struct WktKit<T: CrsTransformer = Proj4Transformer> {
    target_epsg: u32,
    reprojector: Reprojector<T>,
    styles: StyleDefinitions,
}

impl WktKit<Proj4Transformer> {
    /// Create a new WktKit instance backed by `proj4rs`
    ///
    /// # Arguments
    /// * `target_epsg` - EPSG code graphics are produced in, e.g. `3857`
    pub fn new(target_epsg: u32) -> Self {
        Self::with_transformer(target_epsg, Proj4Transformer::new())
    }
}

impl<T: CrsTransformer> WktKit<T> {
    /// Create a WktKit instance around a custom transformation service
    pub fn with_transformer(target_epsg: u32, transformer: T) -> Self {
        WktKit {
            target_epsg,
            reprojector: Reprojector::with_transformer(transformer),
            styles: StyleDefinitions::builtin().clone(),
        }
    }

    /// Replace the default graphic symbols
    pub fn with_styles(mut self, styles: StyleDefinitions) -> Self {
        self.styles = styles;
        self
    }

    pub fn target_epsg(&self) -> u32 {
        self.target_epsg
    }

    /// Parse WKT and move it into the target CRS
    ///
    /// An unspecified (`""`) declared CRS is never assumed to be the
    /// target; it goes through the Reprojector, which keeps the input
    /// coordinates when the code cannot be resolved.
    ///
    /// # Arguments
    /// * `wkt` - Geometry text
    /// * `declared_epsg` - EPSG code the text is written in, e.g. `"4326"`
    ///
    /// # Returns
    /// The geometry in the target CRS, or a parse error
    pub fn reproject_wkt(&self, wkt: &str, declared_epsg: &str) -> WktKitResult<Geometry> {
        let geometry = parse_geometry(wkt)?;
        let target = self.target_epsg.to_string();
        let declared = declared_epsg.trim();

        if declared == target {
            return Ok(geometry);
        }

        debug!("Reprojecting {} from EPSG:{} to EPSG:{}", geometry.kind(), declared, target);
        let coords = self.reprojector
            .reproject(Some(geometry.coordinates()), declared, &target)
            .unwrap_or_default();
        Ok(geometry.with_coordinates(coords))
    }

    /// Import WKT as display graphics in the target CRS
    ///
    /// # Arguments
    /// * `wkt` - Geometry text
    /// * `declared_epsg` - EPSG code the text is written in
    ///
    /// # Returns
    /// One graphic, or one per point for a MULTIPOINT
    pub fn import_wkt(&self, wkt: &str, declared_epsg: &str) -> WktKitResult<Vec<Graphic>> {
        let geometry = self.reproject_wkt(wkt, declared_epsg)?;
        let graphics = self.graphics(&geometry);

        info!("Imported {} as {} graphic(s) in EPSG:{}", geometry.kind(), graphics.len(), self.target_epsg);
        Ok(graphics)
    }

    /// Import a GeoJSON Feature, bare geometry or FeatureCollection
    ///
    /// The CRS comes from the `crs` member. FeatureCollections and arrays
    /// are collapsed into a MULTIPOINT of their Point members.
    pub fn import_geojson(&self, value: &Value) -> WktKitResult<Vec<Graphic>> {
        let conversion = geojson_document_to_wkt(value)?;
        self.import_wkt(&conversion.wkt, conversion.epsg.as_deref().unwrap_or(""))
    }

    /// Serialize an edited geometry back to WKT
    pub fn export_wkt(&self, geometry: &Geometry) -> String {
        to_wkt(Some(geometry))
    }

    /// Serialize an edited geometry to a GeoJSON Feature
    ///
    /// # Arguments
    /// * `geometry` - A Point, LineString or Polygon
    /// * `epsg` - Code recorded in the `crs` member; `None` leaves it out
    ///
    /// A geometry without vertices fails with [`ParseError::EmptyGeometry`].
    pub fn export_geojson(&self, geometry: &Geometry, epsg: Option<&str>) -> Result<Feature, ConversionError> {
        if matches!(geometry, Geometry::LineString(_) | Geometry::Polygon(_)) && geometry.coordinates().is_empty() {
            return Err(ParseError::EmptyGeometry(geometry.kind().keyword().to_string()).into());
        }
        wkt_to_geojson(&to_wkt(Some(geometry)), epsg)
    }

    /// Graphics for a geometry already in the target CRS
    pub fn graphics(&self, geometry: &Geometry) -> Vec<Graphic> {
        let rows: Vec<[f64; 2]> = geometry.coordinates().iter().map(Coordinate::to_array).collect();
        GraphicBuilder::with_styles(&self.styles).build_graphics(&geometry.kind(), &rows, self.target_epsg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Coordinate;
    use crate::errors::{TransformError, WktKitError};
    use serde_json::json;

    /// Offsets 4326 coordinates by a fixed amount for a 4326 -> 3857 request
    struct OffsetTransformer;

    impl CrsTransformer for OffsetTransformer {
        fn transform(&self, from_crs: &str, to_crs: &str, coords: &[Coordinate])
            -> Result<Vec<Coordinate>, TransformError> {
            if from_crs != "EPSG:4326" || to_crs != "EPSG:3857" {
                return Err(TransformError::UnknownCrs(from_crs.to_string()));
            }
            Ok(coords.iter().map(|c| Coordinate::new(c.x + 100.0, c.y + 100.0)).collect())
        }
    }

    fn kit() -> WktKit<OffsetTransformer> {
        WktKit::with_transformer(3857, OffsetTransformer)
    }

    #[test]
    fn test_import_wkt_reprojects_declared_crs() {
        let graphics = kit().import_wkt("POINT (30 10)", "4326").unwrap();

        assert_eq!(graphics.len(), 1);
        assert_eq!(graphics[0].geometry, Geometry::Point(Coordinate::new(130.0, 110.0)));
        assert_eq!(graphics[0].spatial_reference.wkid, 3857);
    }

    #[test]
    fn test_import_wkt_in_target_crs_is_untouched() {
        let graphics = kit().import_wkt("LINESTRING (30 10, 10 30)", "3857").unwrap();
        assert_eq!(graphics[0].geometry.to_wkt(), "LINESTRING (30 10,10 30)");
    }

    #[test]
    fn test_import_wkt_keeps_coordinates_when_crs_unknown() {
        let graphics = kit().import_wkt("POINT (30 10)", "").unwrap();
        assert_eq!(graphics[0].geometry, Geometry::Point(Coordinate::new(30.0, 10.0)));
    }

    #[test]
    fn test_import_multipoint_yields_point_per_member() {
        let graphics = kit().import_wkt("MULTIPOINT ((10 40), (40 30))", "3857").unwrap();

        assert_eq!(graphics.len(), 2);
        assert!(graphics.iter().all(|g| matches!(g.geometry, Geometry::Point(_))));
    }

    #[test]
    fn test_import_wkt_reports_parse_errors() {
        let result = kit().import_wkt("POINT (30 x)", "4326");
        assert!(matches!(result, Err(WktKitError::Parse(_))));
    }

    #[test]
    fn test_import_geojson_uses_feature_crs() {
        let feature = json!({
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [30.0, 10.0] },
            "properties": {},
            "crs": { "type": "name", "properties": { "name": "EPSG:4326" } }
        });

        let graphics = kit().import_geojson(&feature).unwrap();
        assert_eq!(graphics[0].geometry, Geometry::Point(Coordinate::new(130.0, 110.0)));
    }

    #[test]
    fn test_import_feature_collection_as_multipoint() {
        let collection = json!({
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "geometry": { "type": "Point", "coordinates": [1.0, 2.0] }, "properties": {} },
                { "type": "Feature", "geometry": { "type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]] }, "properties": {} },
                { "type": "Feature", "geometry": { "type": "Point", "coordinates": [3.0, 4.0] }, "properties": {} }
            ]
        });

        let graphics = WktKit::with_transformer(4326, OffsetTransformer).import_geojson(&collection).unwrap();
        assert_eq!(graphics.len(), 2);
    }

    #[test]
    fn test_export_round_trip() {
        let kit = kit();
        let geometry = Geometry::Polygon(vec![
            Coordinate::new(30.0, 10.0),
            Coordinate::new(40.0, 40.0),
            Coordinate::new(20.0, 40.0),
            Coordinate::new(30.0, 10.0),
        ]);

        assert_eq!(kit.export_wkt(&geometry), "POLYGON ((30 10,40 40,20 40,30 10))");

        let feature = kit.export_geojson(&geometry, Some("3857")).unwrap();
        let value = feature.to_value().unwrap();
        assert_eq!(value["geometry"]["type"], "Polygon");
        assert_eq!(value["crs"]["properties"]["name"], "EPSG:3857");
    }

    #[test]
    fn test_export_geojson_rejects_multipoint() {
        let geometry = Geometry::MultiPoint(vec![Coordinate::new(1.0, 2.0)]);
        let result = kit().export_geojson(&geometry, None);
        assert!(matches!(result, Err(ConversionError::UnsupportedGeometryType(ref kind)) if kind == "MULTIPOINT"));
    }

    #[test]
    fn test_export_geojson_rejects_empty_geometry() {
        let kit = kit();

        let line = kit.export_geojson(&Geometry::LineString(vec![]), Some("4326"));
        assert!(matches!(line, Err(ConversionError::Parse(ParseError::EmptyGeometry(ref kind))) if kind == "LINESTRING"));

        let polygon = kit.export_geojson(&Geometry::Polygon(vec![]), None);
        assert!(matches!(polygon, Err(ConversionError::Parse(ParseError::EmptyGeometry(ref kind))) if kind == "POLYGON"));
    }
}
