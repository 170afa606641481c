//! PostgreSQL location repository implementation.

use crate::{traits::LocationRepository, DatabasePool};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use geotrace_core::{GeotraceError, GeotraceResult, Location, LocationId, NewLocation, UserId};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// PostgreSQL location repository implementation.
#[derive(Clone)]
pub struct PgLocationRepository {
    pool: Arc<DatabasePool>,
}

impl PgLocationRepository {
    /// Creates a new PostgreSQL location repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a location, joined with its owner.
#[derive(Debug, FromRow)]
struct LocationRow {
    id: i64,
    user_id: i64,
    owner_username: String,
    ip_address: String,
    city: String,
    country: String,
    continent: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    timezone: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Location {
            id: LocationId::from_i64(row.id),
            user_id: UserId::from_i64(row.user_id),
            owner_username: row.owner_username,
            ip_address: row.ip_address,
            city: row.city,
            country: row.country,
            continent: row.continent,
            latitude: row.latitude,
            longitude: row.longitude,
            timezone: row.timezone,
            created_at: row.created_at,
        }
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT l.id, l.user_id, u.username AS owner_username, l.ip_address,
           l.city, l.country, l.continent, l.latitude, l.longitude,
           l.timezone, l.created_at
    FROM locations l
    JOIN users u ON u.id = l.user_id
"#;

#[async_trait]
impl LocationRepository for PgLocationRepository {
    async fn create(&self, location: &NewLocation) -> GeotraceResult<Location> {
        debug!("Inserting location for user: {}", location.user_id);

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO locations (user_id, ip_address, city, country, continent,
                                   latitude, longitude, timezone)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(location.user_id.into_inner())
        .bind(&location.ip_address)
        .bind(&location.city)
        .bind(&location.country)
        .bind(&location.continent)
        .bind(location.latitude)
        .bind(location.longitude)
        .bind(&location.timezone)
        .fetch_one(self.pool.inner())
        .await?;

        // Re-select to pick up the owner username from the join.
        self.find_by_id(LocationId::from_i64(id))
            .await?
            .ok_or_else(|| GeotraceError::Internal("Failed to fetch inserted location".to_string()))
    }

    async fn find_by_id(&self, id: LocationId) -> GeotraceResult<Option<Location>> {
        debug!("Finding location by id: {}", id);

        let sql = format!("{SELECT_COLUMNS} WHERE l.id = $1");
        let row = sqlx::query_as::<_, LocationRow>(&sql)
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(row.map(Location::from))
    }

    async fn find_by_username(&self, username: &str) -> GeotraceResult<Vec<Location>> {
        debug!("Finding locations for username: {}", username);

        let sql = format!("{SELECT_COLUMNS} WHERE u.username = $1 ORDER BY l.id");
        let rows = sqlx::query_as::<_, LocationRow>(&sql)
            .bind(username)
            .fetch_all(self.pool.inner())
            .await?;

        Ok(rows.into_iter().map(Location::from).collect())
    }

    async fn find_all(&self) -> GeotraceResult<Vec<Location>> {
        debug!("Finding all locations");

        let sql = format!("{SELECT_COLUMNS} ORDER BY l.id");
        let rows = sqlx::query_as::<_, LocationRow>(&sql)
            .fetch_all(self.pool.inner())
            .await?;

        Ok(rows.into_iter().map(Location::from).collect())
    }

    async fn update(&self, location: &Location) -> GeotraceResult<Location> {
        debug!("Updating location: {}", location.id);

        sqlx::query(
            r#"
            UPDATE locations
            SET ip_address = $1, city = $2, country = $3, continent = $4,
                latitude = $5, longitude = $6, timezone = $7
            WHERE id = $8
            "#,
        )
        .bind(&location.ip_address)
        .bind(&location.city)
        .bind(&location.country)
        .bind(&location.continent)
        .bind(location.latitude)
        .bind(location.longitude)
        .bind(&location.timezone)
        .bind(location.id.into_inner())
        .execute(self.pool.inner())
        .await?;

        self.find_by_id(location.id)
            .await?
            .ok_or_else(|| GeotraceError::Internal("Failed to fetch updated location".to_string()))
    }

    async fn delete(&self, id: LocationId) -> GeotraceResult<bool> {
        debug!("Deleting location: {}", id);

        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for PgLocationRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgLocationRepository").finish_non_exhaustive()
    }
}
