//! Building footprints from the external map dataset.

use geojson::{Feature, Geometry, Value as GeoJsonValue};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Polygon rings in GeoJSON coordinate order (lng, lat): exterior ring
/// first, each ring closed (first position == last). Self-intersection is
/// not validated; the source dataset is trusted.
pub type PolygonRings = Vec<Vec<[f64; 2]>>;

/// A building footprint as loaded by the external data loader.
///
/// The id is opaque and comes from the source map dataset. Read-only from
/// the service's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub levels: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_use: Option<String>,
    pub footprint: PolygonRings,
}

impl Building {
    /// Whether the recorded use marks this as a commercial building.
    pub fn is_commercial(&self) -> bool {
        self.building_use.as_deref() == Some("commercial")
    }

    /// Convert to the GeoJSON feature shape the map client expects.
    ///
    /// Absent attributes serialize as explicit nulls; the client keys off
    /// the `building` property which falls back to `"yes"`.
    pub fn to_geojson_feature(&self) -> Feature {
        let mut properties = Map::new();
        properties.insert(
            "building".to_string(),
            JsonValue::from(self.building_type.clone().unwrap_or_else(|| "yes".to_string())),
        );
        properties.insert("id".to_string(), JsonValue::from(self.id.clone()));
        properties.insert("name".to_string(), opt_value(self.name.clone()));
        properties.insert(
            "building:levels".to_string(),
            opt_value(self.levels.map(|l| l.to_string())),
        );
        properties.insert("building:material".to_string(), opt_value(self.material.clone()));
        properties.insert("building:use".to_string(), opt_value(self.building_use.clone()));

        Feature {
            bbox: None,
            geometry: Some(self.to_geojson_geometry()),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }

    /// The footprint as a GeoJSON Polygon geometry.
    pub fn to_geojson_geometry(&self) -> Geometry {
        let rings = self
            .footprint
            .iter()
            .map(|ring| ring.iter().map(|pos| pos.to_vec()).collect())
            .collect();
        Geometry::new(GeoJsonValue::Polygon(rings))
    }

    /// Parse footprint rings out of a GeoJSON geometry.
    ///
    /// Returns `None` when the geometry is not a polygon or a position is
    /// missing an axis.
    pub fn rings_from_geometry(geometry: &Geometry) -> Option<PolygonRings> {
        match &geometry.value {
            GeoJsonValue::Polygon(rings) => rings
                .iter()
                .map(|ring| {
                    ring.iter()
                        .map(|pos| Some([*pos.first()?, *pos.get(1)?]))
                        .collect::<Option<Vec<_>>>()
                })
                .collect(),
            _ => None,
        }
    }

    /// The footprint as a `geo` polygon: exterior ring first, remaining
    /// rings as interiors.
    pub fn to_geo_polygon(&self) -> geo::Polygon {
        let mut rings = self.footprint.iter().map(|ring| {
            geo::LineString::new(ring.iter().map(|c| geo::Coord { x: c[0], y: c[1] }).collect())
        });
        let exterior = rings.next().unwrap_or_else(|| geo::LineString::new(vec![]));
        geo::Polygon::new(exterior, rings.collect())
    }
}

fn opt_value(value: Option<String>) -> JsonValue {
    value.map(JsonValue::from).unwrap_or(JsonValue::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_building() -> Building {
        Building {
            id: "way/1001".to_string(),
            name: Some("Ginza Place".to_string()),
            building_type: Some("retail".to_string()),
            levels: Some(11),
            material: None,
            building_use: Some("commercial".to_string()),
            footprint: vec![vec![
                [139.763, 35.671],
                [139.764, 35.671],
                [139.764, 35.672],
                [139.763, 35.672],
                [139.763, 35.671],
            ]],
        }
    }

    #[test]
    fn test_geojson_feature_properties() {
        let feature = sample_building().to_geojson_feature();
        let properties = feature.properties.unwrap();

        assert_eq!(properties["building"], "retail");
        assert_eq!(properties["id"], "way/1001");
        assert_eq!(properties["building:levels"], "11");
        assert_eq!(properties["building:use"], "commercial");
        assert!(properties["building:material"].is_null());
    }

    #[test]
    fn test_geojson_feature_building_defaults_to_yes() {
        let mut building = sample_building();
        building.building_type = None;
        let feature = building.to_geojson_feature();
        assert_eq!(feature.properties.unwrap()["building"], "yes");
    }

    #[test]
    fn test_geometry_roundtrip() {
        let building = sample_building();
        let geometry = building.to_geojson_geometry();
        let rings = Building::rings_from_geometry(&geometry).unwrap();
        assert_eq!(rings, building.footprint);
    }

    #[test]
    fn test_rings_from_non_polygon_geometry() {
        let geometry = Geometry::new(GeoJsonValue::Point(vec![139.7, 35.6]));
        assert!(Building::rings_from_geometry(&geometry).is_none());
    }

    #[test]
    fn test_to_geo_polygon_exterior() {
        let polygon = sample_building().to_geo_polygon();
        assert_eq!(polygon.exterior().0.len(), 5);
        assert!(polygon.interiors().is_empty());
    }

    #[test]
    fn test_is_commercial() {
        assert!(sample_building().is_commercial());

        let mut residential = sample_building();
        residential.building_use = Some("residential".to_string());
        assert!(!residential.is_commercial());

        let mut unknown = sample_building();
        unknown.building_use = None;
        assert!(!unknown.is_commercial());
    }
}
