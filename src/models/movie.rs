// src/models/movie.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::validation::{validate_not_blank, validate_poster};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Central do Brasil")]
    pub title: String,
    #[schema(example = "Drama")]
    pub genre: String,
    #[schema(example = "12")]
    pub rating: String,
    /// Duração em minutos
    #[schema(example = 113)]
    pub duration: i32,
    pub release_date: NaiveDate,
    pub description: Option<String>,
    /// Data URI em base64 (ex: "data:image/png;base64,...")
    pub poster: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ---
// Payloads
// ---
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMoviePayload {
    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "Central do Brasil")]
    pub title: String,

    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "Drama")]
    pub genre: String,

    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "12")]
    pub rating: String,

    #[validate(range(min = 1, message = "A duração deve ser positiva."))]
    #[schema(example = 113)]
    pub duration: i32,

    /// "YYYY-MM-DD" ou ISO-8601
    #[schema(example = "1998-04-03")]
    pub release_date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[validate(custom(function = "validate_poster"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMoviePayload {
    #[validate(custom(function = "validate_not_blank"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[validate(custom(function = "validate_not_blank"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    #[validate(custom(function = "validate_not_blank"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,

    #[validate(range(min = 1, message = "A duração deve ser positiva."))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[validate(custom(function = "validate_poster"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

// ---
// Entradas já validadas que seguem para o repositório
// ---
#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub genre: String,
    pub rating: String,
    pub duration: i32,
    pub release_date: NaiveDate,
    pub description: Option<String>,
    pub poster: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MovieChanges {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub rating: Option<String>,
    pub duration: Option<i32>,
    pub release_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub poster: Option<String>,
}
