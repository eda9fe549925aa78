// src/db/movie_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::{map_restricted_delete, MovieStore},
    models::movie::{Movie, MovieChanges, NewMovie},
};

// O repositório de filmes, responsável por todas as interações com a tabela 'movies'
#[derive(Clone)]
pub struct MovieRepository {
    pool: PgPool,
}

impl MovieRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieStore for MovieRepository {
    async fn list(&self) -> Result<Vec<Movie>, AppError> {
        let movies = sqlx::query_as::<_, Movie>(
            "SELECT * FROM movies ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(movies)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, AppError> {
        let movie = sqlx::query_as::<_, Movie>("SELECT * FROM movies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(movie)
    }

    async fn insert(&self, movie: NewMovie) -> Result<Movie, AppError> {
        let created = sqlx::query_as::<_, Movie>(
            r#"
            INSERT INTO movies (title, genre, rating, duration, release_date, description, poster)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&movie.title)
        .bind(&movie.genre)
        .bind(&movie.rating)
        .bind(movie.duration)
        .bind(movie.release_date)
        .bind(&movie.description)
        .bind(&movie.poster)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn update(&self, id: i32, changes: MovieChanges) -> Result<Option<Movie>, AppError> {
        // COALESCE: campo ausente mantém o valor atual
        let updated = sqlx::query_as::<_, Movie>(
            r#"
            UPDATE movies SET
                title        = COALESCE($2, title),
                genre        = COALESCE($3, genre),
                rating       = COALESCE($4, rating),
                duration     = COALESCE($5, duration),
                release_date = COALESCE($6, release_date),
                description  = COALESCE($7, description),
                poster       = COALESCE($8, poster),
                updated_at   = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.title)
        .bind(changes.genre)
        .bind(changes.rating)
        .bind(changes.duration)
        .bind(changes.release_date)
        .bind(changes.description)
        .bind(changes.poster)
        .fetch_optional(&self.pool)
        .await?;
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<Option<Movie>, AppError> {
        sqlx::query_as::<_, Movie>("DELETE FROM movies WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_restricted_delete(e, "O filme possui sessões cadastradas."))
    }
}
