// src/models/theater.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::validation::validate_not_blank;

// Mapeia o CREATE TYPE theater_type do banco
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "theater_type")]
pub enum TheaterType {
    #[serde(rename = "2D")]
    #[sqlx(rename = "2D")]
    TwoD,
    #[serde(rename = "3D")]
    #[sqlx(rename = "3D")]
    ThreeD,
    #[serde(rename = "IMAX")]
    #[sqlx(rename = "IMAX")]
    Imax,
}

impl TheaterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TheaterType::TwoD => "2D",
            TheaterType::ThreeD => "3D",
            TheaterType::Imax => "IMAX",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Theater {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Sala 1")]
    pub name: String,
    #[schema(example = 1)]
    pub number: i32,
    #[schema(example = 100)]
    pub capacity: i32,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub theater_type: TheaterType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTheaterPayload {
    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "Sala 1")]
    pub name: String,

    #[validate(range(min = 1, message = "O número da sala deve ser positivo."))]
    #[schema(example = 1)]
    pub number: i32,

    #[validate(range(min = 1, message = "A capacidade deve ser positiva."))]
    #[schema(example = 100)]
    pub capacity: i32,

    #[serde(rename = "type")]
    pub theater_type: TheaterType,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTheaterPayload {
    #[validate(custom(function = "validate_not_blank"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[validate(range(min = 1, message = "O número da sala deve ser positivo."))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<i32>,

    #[validate(range(min = 1, message = "A capacidade deve ser positiva."))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub theater_type: Option<TheaterType>,
}

// ---
// Entradas já validadas que seguem para o repositório
// ---
#[derive(Debug, Clone)]
pub struct NewTheater {
    pub name: String,
    pub number: i32,
    pub capacity: i32,
    pub theater_type: TheaterType,
}

#[derive(Debug, Clone, Default)]
pub struct TheaterChanges {
    pub name: Option<String>,
    pub number: Option<i32>,
    pub capacity: Option<i32>,
    pub theater_type: Option<TheaterType>,
}
