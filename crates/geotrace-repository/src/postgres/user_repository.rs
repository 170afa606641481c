//! PostgreSQL user repository implementation.

use crate::{traits::UserRepository, DatabasePool};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use geotrace_core::{GeotraceResult, User, UserId};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// PostgreSQL user repository implementation.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: Arc<DatabasePool>,
}

impl PgUserRepository {
    /// Creates a new PostgreSQL user repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: UserId::from_i64(row.id),
            username: row.username,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, username: &str) -> GeotraceResult<User> {
        debug!("Inserting user: {}", username);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username)
            VALUES ($1)
            RETURNING id, username, created_at
            "#,
        )
        .bind(username)
        .fetch_one(self.pool.inner())
        .await?;

        Ok(row.into())
    }

    async fn create_all(&self, usernames: &[String]) -> GeotraceResult<Vec<User>> {
        debug!("Inserting {} users", usernames.len());

        let mut tx = self.pool.inner().begin().await?;
        let mut users = Vec::with_capacity(usernames.len());

        for username in usernames {
            let row = sqlx::query_as::<_, UserRow>(
                r#"
                INSERT INTO users (username)
                VALUES ($1)
                RETURNING id, username, created_at
                "#,
            )
            .bind(username)
            .fetch_one(&mut *tx)
            .await?;

            users.push(row.into());
        }

        tx.commit().await?;
        Ok(users)
    }

    async fn find_by_id(&self, id: UserId) -> GeotraceResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, created_at FROM users WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }

    async fn find_by_username(&self, username: &str) -> GeotraceResult<Option<User>> {
        debug!("Finding user by username: {}", username);

        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, created_at FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }

    async fn find_all(&self) -> GeotraceResult<Vec<User>> {
        debug!("Finding all users");

        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, created_at FROM users ORDER BY id",
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn update(&self, user: &User) -> GeotraceResult<User> {
        debug!("Updating user: {}", user.id);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET username = $1
            WHERE id = $2
            RETURNING id, username, created_at
            "#,
        )
        .bind(&user.username)
        .bind(user.id.into_inner())
        .fetch_one(self.pool.inner())
        .await?;

        Ok(row.into())
    }

    async fn delete(&self, id: UserId) -> GeotraceResult<bool> {
        debug!("Deleting user: {}", id);

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists(&self, id: UserId) -> GeotraceResult<bool> {
        let result: Option<i32> = sqlx::query_scalar("SELECT 1 FROM users WHERE id = $1 LIMIT 1")
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(result.is_some())
    }

    async fn exists_by_username(&self, username: &str) -> GeotraceResult<bool> {
        let result: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM users WHERE username = $1 LIMIT 1")
                .bind(username)
                .fetch_optional(self.pool.inner())
                .await?;

        Ok(result.is_some())
    }
}

impl std::fmt::Debug for PgUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgUserRepository").finish_non_exhaustive()
    }
}
