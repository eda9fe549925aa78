// src/db/session_repo.rs

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use crate::{
    common::error::{AppError, Resource},
    db::{foreign_key_constraint, map_restricted_delete, SessionStore},
    models::{
        movie::Movie,
        session::{NewSession, Session, SessionChanges, SessionDetail},
        theater::{Theater, TheaterType},
    },
};

const DETAIL_SELECT: &str = r#"
    SELECT
        s.id, s.date_time, s.price, s.format, s.language,
        s.movie_id, s.theater_id, s.created_at, s.updated_at,
        m.title AS movie_title, m.genre AS movie_genre, m.rating AS movie_rating,
        m.duration AS movie_duration, m.release_date AS movie_release_date,
        m.description AS movie_description, m.poster AS movie_poster,
        m.created_at AS movie_created_at, m.updated_at AS movie_updated_at,
        t.name AS theater_name, t.number AS theater_number,
        t.capacity AS theater_capacity, t.type AS theater_type,
        t.created_at AS theater_created_at, t.updated_at AS theater_updated_at
    FROM sessions s
    JOIN movies m ON m.id = s.movie_id
    JOIN theaters t ON t.id = s.theater_id
"#;

// Linha "achatada" do JOIN sessions + movies + theaters
#[derive(FromRow)]
struct SessionDetailRow {
    id: i32,
    date_time: DateTime<Utc>,
    price: Decimal,
    format: String,
    language: String,
    movie_id: i32,
    theater_id: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,

    movie_title: String,
    movie_genre: String,
    movie_rating: String,
    movie_duration: i32,
    movie_release_date: NaiveDate,
    movie_description: Option<String>,
    movie_poster: Option<String>,
    movie_created_at: DateTime<Utc>,
    movie_updated_at: DateTime<Utc>,

    theater_name: String,
    theater_number: i32,
    theater_capacity: i32,
    theater_type: TheaterType,
    theater_created_at: DateTime<Utc>,
    theater_updated_at: DateTime<Utc>,
}

impl From<SessionDetailRow> for SessionDetail {
    fn from(row: SessionDetailRow) -> Self {
        SessionDetail {
            movie: Movie {
                id: row.movie_id,
                title: row.movie_title,
                genre: row.movie_genre,
                rating: row.movie_rating,
                duration: row.movie_duration,
                release_date: row.movie_release_date,
                description: row.movie_description,
                poster: row.movie_poster,
                created_at: row.movie_created_at,
                updated_at: row.movie_updated_at,
            },
            theater: Theater {
                id: row.theater_id,
                name: row.theater_name,
                number: row.theater_number,
                capacity: row.theater_capacity,
                theater_type: row.theater_type,
                created_at: row.theater_created_at,
                updated_at: row.theater_updated_at,
            },
            session: Session {
                id: row.id,
                date_time: row.date_time,
                price: row.price,
                format: row.format,
                language: row.language,
                movie_id: row.movie_id,
                theater_id: row.theater_id,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
        }
    }
}

/// Traduz a violação de FK (filme/sala apagados entre a checagem e a escrita)
/// para o mesmo `NotFound` da checagem explícita.
fn map_reference_error(e: sqlx::Error, movie_id: Option<i32>, theater_id: Option<i32>) -> AppError {
    match foreign_key_constraint(&e).as_deref() {
        Some("sessions_movie_id_fkey") => {
            AppError::not_found(Resource::Movie, movie_id.unwrap_or_default())
        }
        Some("sessions_theater_id_fkey") => {
            AppError::not_found(Resource::Theater, theater_id.unwrap_or_default())
        }
        _ => e.into(),
    }
}

#[derive(Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for SessionRepository {
    async fn list_detailed(&self) -> Result<Vec<SessionDetail>, AppError> {
        let sql = format!("{DETAIL_SELECT} ORDER BY s.date_time ASC, s.id ASC");
        let rows = sqlx::query_as::<_, SessionDetailRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(SessionDetail::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Session>, AppError> {
        let session = sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(session)
    }

    async fn find_detailed(&self, id: i32) -> Result<Option<SessionDetail>, AppError> {
        let sql = format!("{DETAIL_SELECT} WHERE s.id = $1");
        let row = sqlx::query_as::<_, SessionDetailRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(SessionDetail::from))
    }

    async fn insert(&self, session: NewSession) -> Result<Session, AppError> {
        sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO sessions (date_time, price, format, language, movie_id, theater_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(session.date_time)
        .bind(session.price)
        .bind(&session.format)
        .bind(&session.language)
        .bind(session.movie_id)
        .bind(session.theater_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_reference_error(e, Some(session.movie_id), Some(session.theater_id)))
    }

    async fn update(
        &self,
        id: i32,
        changes: SessionChanges,
    ) -> Result<Option<Session>, AppError> {
        let (movie_id, theater_id) = (changes.movie_id, changes.theater_id);
        sqlx::query_as::<_, Session>(
            r#"
            UPDATE sessions SET
                date_time  = COALESCE($2, date_time),
                price      = COALESCE($3, price),
                format     = COALESCE($4, format),
                language   = COALESCE($5, language),
                movie_id   = COALESCE($6, movie_id),
                theater_id = COALESCE($7, theater_id),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.date_time)
        .bind(changes.price)
        .bind(changes.format)
        .bind(changes.language)
        .bind(movie_id)
        .bind(theater_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_reference_error(e, movie_id, theater_id))
    }

    async fn delete(&self, id: i32) -> Result<Option<Session>, AppError> {
        sqlx::query_as::<_, Session>("DELETE FROM sessions WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_restricted_delete(e, "A sessão possui ingressos vendidos."))
    }
}
