// src/models/session.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::validation::{validate_not_blank, validate_price};
use crate::models::{movie::Movie, theater::Theater};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[schema(example = 1)]
    pub id: i32,
    pub date_time: DateTime<Utc>,
    #[schema(value_type = f64, example = 25.0)]
    pub price: Decimal,
    #[schema(example = "3D")]
    pub format: String,
    #[schema(example = "Dublado")]
    pub language: String,
    pub movie_id: i32,
    pub theater_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Sessão com o filme e a sala embutidos (para listagem no painel)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionDetail {
    #[serde(flatten)]
    pub session: Session,
    pub movie: Movie,
    pub theater: Theater,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionPayload {
    /// ISO-8601 (ex: "2024-02-01T20:00:00Z")
    #[schema(example = "2024-02-01T20:00:00Z")]
    pub date_time: String,

    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = f64, example = 25.0)]
    pub price: Decimal,

    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "3D")]
    pub format: String,

    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "Dublado")]
    pub language: String,

    pub movie_id: i32,
    pub theater_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSessionPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,

    #[validate(custom(function = "validate_price"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,

    #[validate(custom(function = "validate_not_blank"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[validate(custom(function = "validate_not_blank"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movie_id: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theater_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct NewSession {
    pub date_time: DateTime<Utc>,
    pub price: Decimal,
    pub format: String,
    pub language: String,
    pub movie_id: i32,
    pub theater_id: i32,
}

#[derive(Debug, Clone, Default)]
pub struct SessionChanges {
    pub date_time: Option<DateTime<Utc>>,
    pub price: Option<Decimal>,
    pub format: Option<String>,
    pub language: Option<String>,
    pub movie_id: Option<i32>,
    pub theater_id: Option<i32>,
}
