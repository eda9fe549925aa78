// src/common/extractors.rs

use axum::{extract::Path, Json};
use axum_extra::extract::WithRejection;

use crate::common::error::AppError;

// Extratores com rejeição convertida para AppError (400 no formato JSON da API)
pub type IdPath = WithRejection<Path<i32>, AppError>;
pub type JsonBody<T> = WithRejection<Json<T>, AppError>;
