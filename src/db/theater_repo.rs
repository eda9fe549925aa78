// src/db/theater_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::{map_restricted_delete, TheaterStore},
    models::theater::{NewTheater, Theater, TheaterChanges},
};

#[derive(Clone)]
pub struct TheaterRepository {
    pool: PgPool,
}

impl TheaterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TheaterStore for TheaterRepository {
    async fn list(&self) -> Result<Vec<Theater>, AppError> {
        let theaters =
            sqlx::query_as::<_, Theater>("SELECT * FROM theaters ORDER BY number ASC, id ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(theaters)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Theater>, AppError> {
        let theater = sqlx::query_as::<_, Theater>("SELECT * FROM theaters WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(theater)
    }

    async fn insert(&self, theater: NewTheater) -> Result<Theater, AppError> {
        let created = sqlx::query_as::<_, Theater>(
            r#"
            INSERT INTO theaters (name, number, capacity, type)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&theater.name)
        .bind(theater.number)
        .bind(theater.capacity)
        .bind(theater.theater_type)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn update(
        &self,
        id: i32,
        changes: TheaterChanges,
    ) -> Result<Option<Theater>, AppError> {
        let updated = sqlx::query_as::<_, Theater>(
            r#"
            UPDATE theaters SET
                name       = COALESCE($2, name),
                number     = COALESCE($3, number),
                capacity   = COALESCE($4, capacity),
                type       = COALESCE($5, type),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.name)
        .bind(changes.number)
        .bind(changes.capacity)
        .bind(changes.theater_type)
        .fetch_optional(&self.pool)
        .await?;
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<Option<Theater>, AppError> {
        sqlx::query_as::<_, Theater>("DELETE FROM theaters WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_restricted_delete(e, "A sala possui sessões cadastradas."))
    }
}
