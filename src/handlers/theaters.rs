// src/handlers/theaters.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    common::{
        error::AppError,
        extractors::{IdPath, JsonBody},
    },
    config::AppState,
    models::theater::{CreateTheaterPayload, Theater, UpdateTheaterPayload},
};

#[utoipa::path(
    post,
    path = "/theaters",
    tag = "Theaters",
    request_body = CreateTheaterPayload,
    responses(
        (status = 201, description = "Sala cadastrada", body = Theater),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_theater(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): JsonBody<CreateTheaterPayload>,
) -> Result<impl IntoResponse, AppError> {
    let theater = app_state.theater_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(theater)))
}

#[utoipa::path(
    get,
    path = "/theaters",
    tag = "Theaters",
    responses((status = 200, description = "Salas por número", body = Vec<Theater>))
)]
pub async fn list_theaters(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let theaters = app_state.theater_service.find_all().await?;
    Ok((StatusCode::OK, Json(theaters)))
}

#[utoipa::path(
    get,
    path = "/theaters/{id}",
    tag = "Theaters",
    params(("id" = i32, Path, description = "ID da sala")),
    responses(
        (status = 200, description = "Sala", body = Theater),
        (status = 404, description = "Sala não encontrada")
    )
)]
pub async fn get_theater(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let theater = app_state.theater_service.find_one(id).await?;
    Ok((StatusCode::OK, Json(theater)))
}

#[utoipa::path(
    patch,
    path = "/theaters/{id}",
    tag = "Theaters",
    params(("id" = i32, Path, description = "ID da sala")),
    request_body = UpdateTheaterPayload,
    responses(
        (status = 200, description = "Sala atualizada", body = Theater),
        (status = 404, description = "Sala não encontrada")
    )
)]
pub async fn update_theater(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
    WithRejection(Json(payload), _): JsonBody<UpdateTheaterPayload>,
) -> Result<impl IntoResponse, AppError> {
    let theater = app_state.theater_service.update(id, payload).await?;
    Ok((StatusCode::OK, Json(theater)))
}

#[utoipa::path(
    delete,
    path = "/theaters/{id}",
    tag = "Theaters",
    params(("id" = i32, Path, description = "ID da sala")),
    responses(
        (status = 200, description = "Sala removida", body = Theater),
        (status = 404, description = "Sala não encontrada"),
        (status = 409, description = "Sala com sessões cadastradas")
    )
)]
pub async fn delete_theater(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let theater = app_state.theater_service.remove(id).await?;
    Ok((StatusCode::OK, Json(theater)))
}
