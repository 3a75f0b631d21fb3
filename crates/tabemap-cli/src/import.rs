//! Dataset parsing for the loader.
//!
//! Restaurants arrive as a JSON array in the wire shape of the API.
//! Buildings arrive as a GeoJSON FeatureCollection exported from the map
//! dataset; features without an id or a polygon geometry are skipped and
//! counted.

use anyhow::{bail, Context, Result};
use geojson::GeoJson;
use serde_json::Value as JsonValue;
use tabemap_core::models::{Building, Restaurant};

pub fn parse_restaurants(raw: &str) -> Result<Vec<Restaurant>> {
    serde_json::from_str(raw).context("restaurants file is not a JSON array of restaurants")
}

/// Parse building footprints out of a GeoJSON FeatureCollection.
///
/// Returns the buildings plus the count of skipped features.
pub fn parse_buildings(raw: &str) -> Result<(Vec<Building>, usize)> {
    let geojson: GeoJson = raw.parse().context("buildings file is not valid GeoJSON")?;
    let collection = match geojson {
        GeoJson::FeatureCollection(collection) => collection,
        _ => bail!("buildings file must be a FeatureCollection"),
    };

    let mut buildings = Vec::new();
    let mut skipped = 0;

    for feature in &collection.features {
        match building_from_feature(feature) {
            Some(building) => buildings.push(building),
            None => skipped += 1,
        }
    }

    Ok((buildings, skipped))
}

fn building_from_feature(feature: &geojson::Feature) -> Option<Building> {
    let geometry = feature.geometry.as_ref()?;
    let footprint = Building::rings_from_geometry(geometry)?;
    let properties = feature.properties.as_ref()?;

    let id = string_prop(properties, "id").or_else(|| string_prop(properties, "@id"))?;

    Some(Building {
        id,
        name: string_prop(properties, "name"),
        // A bare "yes" marks an untyped building in the source data.
        building_type: string_prop(properties, "building").filter(|b| b != "yes"),
        levels: int_prop(properties, "building:levels"),
        material: string_prop(properties, "building:material"),
        building_use: string_prop(properties, "building:use"),
        footprint,
    })
}

fn string_prop(properties: &geojson::JsonObject, key: &str) -> Option<String> {
    properties.get(key).and_then(JsonValue::as_str).map(str::to_string)
}

fn int_prop(properties: &geojson::JsonObject, key: &str) -> Option<i32> {
    match properties.get(key)? {
        JsonValue::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_restaurants_wire_shape() {
        let raw = r#"[
            {
                "id": "r1",
                "name": "Sushi Aoki",
                "address": "Ginza, Tokyo",
                "openingHours": "11:00-22:00",
                "rating": 4.3,
                "lat": 35.6717,
                "lng": 139.7649,
                "buildingId": "way/1001"
            },
            {
                "id": "r2",
                "name": "Curry House",
                "address": "Shibuya, Tokyo",
                "openingHours": "10:00-20:00",
                "rating": 3.8,
                "lat": 35.658,
                "lng": 139.7016
            }
        ]"#;

        let restaurants = parse_restaurants(raw).unwrap();
        assert_eq!(restaurants.len(), 2);
        assert_eq!(restaurants[0].building_id.as_deref(), Some("way/1001"));
        assert!(restaurants[1].building_id.is_none());
    }

    #[test]
    fn test_parse_restaurants_rejects_non_array() {
        assert!(parse_restaurants(r#"{"id": "r1"}"#).is_err());
    }

    #[test]
    fn test_parse_buildings_skips_non_polygons() {
        let raw = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {
                        "@id": "way/1001",
                        "building": "retail",
                        "building:levels": "3",
                        "building:use": "commercial"
                    },
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[
                            [139.763, 35.671],
                            [139.764, 35.671],
                            [139.764, 35.672],
                            [139.763, 35.672],
                            [139.763, 35.671]
                        ]]
                    }
                },
                {
                    "type": "Feature",
                    "properties": {"@id": "node/5"},
                    "geometry": {"type": "Point", "coordinates": [139.7, 35.6]}
                }
            ]
        }"#;

        let (buildings, skipped) = parse_buildings(raw).unwrap();
        assert_eq!(buildings.len(), 1);
        assert_eq!(skipped, 1);

        let building = &buildings[0];
        assert_eq!(building.id, "way/1001");
        assert_eq!(building.building_type.as_deref(), Some("retail"));
        assert_eq!(building.levels, Some(3));
        assert_eq!(building.building_use.as_deref(), Some("commercial"));
        assert_eq!(building.footprint[0].len(), 5);
    }

    #[test]
    fn test_parse_buildings_untyped_building_has_no_type() {
        let raw = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {"id": "way/2", "building": "yes"},
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
                    }
                }
            ]
        }"#;

        let (buildings, skipped) = parse_buildings(raw).unwrap();
        assert_eq!(skipped, 0);
        assert!(buildings[0].building_type.is_none());
    }

    #[test]
    fn test_parse_buildings_rejects_bare_geometry() {
        let raw = r#"{"type": "Point", "coordinates": [139.7, 35.6]}"#;
        assert!(parse_buildings(raw).is_err());
    }

    #[test]
    fn test_numeric_levels_accepted() {
        let raw = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {"id": "way/3", "building:levels": 7},
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
                    }
                }
            ]
        }"#;

        let (buildings, _) = parse_buildings(raw).unwrap();
        assert_eq!(buildings[0].levels, Some(7));
    }
}
