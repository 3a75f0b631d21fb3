//! Building footprint queries against PostGIS.
//!
//! Containment and proximity are true spatial predicates (`ST_Contains`,
//! `ST_DWithin`/`ST_Distance` over geography, in meters), not the planar
//! degree arithmetic the restaurant queries use.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::Row;
use tabemap_core::error::{Result, TabemapError};
use tabemap_core::models::{Building, Point, SearchHit};

use super::{query_failed, PostgresStore};
use crate::ports::BuildingStore;

const COLUMNS: &str = "id, name, building_type, levels, material, building_use, \
                       ST_AsGeoJSON(footprint) AS footprint";

const QUERY_POINT: &str = "ST_SetSRID(ST_MakePoint($1, $2), 4326)";

fn building_from_row(row: &PgRow) -> Result<Building> {
    let footprint_json: String = row.get("footprint");
    let geometry: geojson::Geometry = serde_json::from_str(&footprint_json)
        .map_err(|e| TabemapError::Serialization(format!("invalid footprint geometry: {}", e)))?;
    let footprint = Building::rings_from_geometry(&geometry)
        .ok_or_else(|| TabemapError::Serialization("footprint is not a polygon".to_string()))?;

    Ok(Building {
        id: row.get("id"),
        name: row.get("name"),
        building_type: row.get("building_type"),
        levels: row.get("levels"),
        material: row.get("material"),
        building_use: row.get("building_use"),
        footprint,
    })
}

#[async_trait]
impl BuildingStore for PostgresStore {
    async fn get_all(&self) -> Result<Vec<Building>> {
        let rows = sqlx::query(&format!("SELECT {COLUMNS} FROM buildings ORDER BY id ASC"))
            .fetch_all(self.pool())
            .await
            .map_err(query_failed)?;

        rows.iter().map(building_from_row).collect()
    }

    async fn get(&self, id: &str) -> Result<Option<Building>> {
        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM buildings WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool())
            .await
            .map_err(query_failed)?;

        row.as_ref().map(building_from_row).transpose()
    }

    async fn get_commercial(&self) -> Result<Vec<Building>> {
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM buildings WHERE building_use = $1 ORDER BY id ASC"
        ))
        .bind("commercial")
        .fetch_all(self.pool())
        .await
        .map_err(query_failed)?;

        rows.iter().map(building_from_row).collect()
    }

    async fn find_containing(&self, point: Point) -> Result<Option<Building>> {
        let row = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM buildings \
             WHERE ST_Contains(footprint, {QUERY_POINT}) \
             ORDER BY id ASC \
             LIMIT 1"
        ))
        .bind(point.lng)
        .bind(point.lat)
        .fetch_optional(self.pool())
        .await
        .map_err(query_failed)?;

        row.as_ref().map(building_from_row).transpose()
    }

    async fn find_within_distance(
        &self,
        point: Point,
        radius_m: f64,
    ) -> Result<Vec<SearchHit<Building>>> {
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS}, \
                    ST_Distance(footprint::geography, {QUERY_POINT}::geography) AS distance \
             FROM buildings \
             WHERE ST_DWithin(footprint::geography, {QUERY_POINT}::geography, $3) \
             ORDER BY distance ASC, id ASC"
        ))
        .bind(point.lng)
        .bind(point.lat)
        .bind(radius_m)
        .fetch_all(self.pool())
        .await
        .map_err(query_failed)?;

        rows.into_iter()
            .map(|row| {
                let building = building_from_row(&row)?;
                Ok(SearchHit::new(building, row.get("distance")))
            })
            .collect()
    }

    async fn put_buildings(&self, buildings: &[Building]) -> Result<()> {
        if buildings.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool().begin().await.map_err(query_failed)?;

        for building in buildings {
            let footprint_json = serde_json::to_string(&building.to_geojson_geometry())
                .map_err(|e| {
                    TabemapError::Serialization(format!("failed to serialize footprint: {}", e))
                })?;

            sqlx::query(
                r#"
                INSERT INTO buildings (id, name, building_type, levels, material, building_use, footprint)
                VALUES ($1, $2, $3, $4, $5, $6, ST_SetSRID(ST_GeomFromGeoJSON($7), 4326))
                ON CONFLICT (id) DO UPDATE
                SET name = EXCLUDED.name,
                    building_type = EXCLUDED.building_type,
                    levels = EXCLUDED.levels,
                    material = EXCLUDED.material,
                    building_use = EXCLUDED.building_use,
                    footprint = EXCLUDED.footprint,
                    updated_at = now()
                "#,
            )
            .bind(&building.id)
            .bind(&building.name)
            .bind(&building.building_type)
            .bind(building.levels)
            .bind(&building.material)
            .bind(&building.building_use)
            .bind(footprint_json)
            .execute(&mut *tx)
            .await
            .map_err(query_failed)?;
        }

        tx.commit().await.map_err(query_failed)?;

        Ok(())
    }
}
