//! Restaurant queries against PostgreSQL.
//!
//! Nearest and radius searches rank by the planar degree distance
//! `sqrt((lat1-lat2)^2 + (lng1-lng2)^2)` computed in SQL, with the
//! restaurant id as the stable secondary sort key.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::Row;
use tabemap_core::error::Result;
use tabemap_core::models::{Point, Restaurant, SearchHit};

use super::{query_failed, PostgresStore};
use crate::ports::RestaurantStore;

const COLUMNS: &str = "id, name, address, opening_hours, rating, lat, lng, building_id";

const PLANAR_DISTANCE: &str = "sqrt(power(lat - $1, 2) + power(lng - $2, 2))";

fn restaurant_from_row(row: &PgRow) -> Restaurant {
    Restaurant {
        id: row.get("id"),
        name: row.get("name"),
        address: row.get("address"),
        opening_hours: row.get("opening_hours"),
        rating: row.get("rating"),
        lat: row.get("lat"),
        lng: row.get("lng"),
        building_id: row.get("building_id"),
    }
}

#[async_trait]
impl RestaurantStore for PostgresStore {
    async fn get_all(&self) -> Result<Vec<Restaurant>> {
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM restaurants ORDER BY rating DESC, id ASC"
        ))
        .fetch_all(self.pool())
        .await
        .map_err(query_failed)?;

        Ok(rows.iter().map(restaurant_from_row).collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Restaurant>> {
        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM restaurants WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool())
            .await
            .map_err(query_failed)?;

        Ok(row.as_ref().map(restaurant_from_row))
    }

    async fn find_nearest(&self, point: Point) -> Result<Option<SearchHit<Restaurant>>> {
        let row = sqlx::query(&format!(
            "SELECT {COLUMNS}, {PLANAR_DISTANCE} AS distance \
             FROM restaurants \
             ORDER BY distance ASC, id ASC \
             LIMIT 1"
        ))
        .bind(point.lat)
        .bind(point.lng)
        .fetch_optional(self.pool())
        .await
        .map_err(query_failed)?;

        Ok(row.map(|row| SearchHit::new(restaurant_from_row(&row), row.get("distance"))))
    }

    async fn find_within_radius(
        &self,
        point: Point,
        radius_deg: f64,
    ) -> Result<Vec<SearchHit<Restaurant>>> {
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS}, {PLANAR_DISTANCE} AS distance \
             FROM restaurants \
             WHERE {PLANAR_DISTANCE} <= $3 \
             ORDER BY distance ASC, id ASC"
        ))
        .bind(point.lat)
        .bind(point.lng)
        .bind(radius_deg)
        .fetch_all(self.pool())
        .await
        .map_err(query_failed)?;

        Ok(rows
            .into_iter()
            .map(|row| SearchHit::new(restaurant_from_row(&row), row.get("distance")))
            .collect())
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<Restaurant>> {
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM restaurants \
             WHERE name LIKE '%' || $1 || '%' \
             ORDER BY rating DESC, id ASC"
        ))
        .bind(name)
        .fetch_all(self.pool())
        .await
        .map_err(query_failed)?;

        Ok(rows.iter().map(restaurant_from_row).collect())
    }

    async fn put_restaurants(&self, restaurants: &[Restaurant]) -> Result<()> {
        if restaurants.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool().begin().await.map_err(query_failed)?;

        for restaurant in restaurants {
            sqlx::query(
                r#"
                INSERT INTO restaurants (id, name, address, opening_hours, rating, lat, lng, building_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                ON CONFLICT (id) DO UPDATE
                SET name = EXCLUDED.name,
                    address = EXCLUDED.address,
                    opening_hours = EXCLUDED.opening_hours,
                    rating = EXCLUDED.rating,
                    lat = EXCLUDED.lat,
                    lng = EXCLUDED.lng,
                    building_id = EXCLUDED.building_id,
                    updated_at = now()
                "#,
            )
            .bind(&restaurant.id)
            .bind(&restaurant.name)
            .bind(&restaurant.address)
            .bind(&restaurant.opening_hours)
            .bind(restaurant.rating)
            .bind(restaurant.lat)
            .bind(restaurant.lng)
            .bind(&restaurant.building_id)
            .execute(&mut *tx)
            .await
            .map_err(query_failed)?;
        }

        tx.commit().await.map_err(query_failed)?;

        Ok(())
    }
}
