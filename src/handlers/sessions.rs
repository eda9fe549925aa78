// src/handlers/sessions.rs

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
    models::session::{CreateSessionPayload, Session, SessionDetail, UpdateSessionPayload},
};

#[utoipa::path(
    post,
    path = "/sessions",
    tag = "Sessions",
    request_body = CreateSessionPayload,
    responses(
        (status = 201, description = "Sessão agendada", body = Session),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Filme ou sala inexistente")
    )
)]
pub async fn create_session(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): JsonBody<CreateSessionPayload>,
) -> Result<impl IntoResponse, AppError> {
    let session = app_state.session_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

#[utoipa::path(
    get,
    path = "/sessions",
    tag = "Sessions",
    responses(
        (status = 200, description = "Sessões com filme e sala", body = Vec<SessionDetail>)
    )
)]
pub async fn list_sessions(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let sessions = app_state.session_service.find_all().await?;
    Ok((StatusCode::OK, Json(sessions)))
}

#[utoipa::path(
    get,
    path = "/sessions/{id}",
    tag = "Sessions",
    params(("id" = i32, Path, description = "ID da sessão")),
    responses(
        (status = 200, description = "Sessão com filme e sala", body = SessionDetail),
        (status = 404, description = "Sessão não encontrada")
    )
)]
pub async fn get_session(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let session = app_state.session_service.find_one(id).await?;
    Ok((StatusCode::OK, Json(session)))
}

#[utoipa::path(
    patch,
    path = "/sessions/{id}",
    tag = "Sessions",
    params(("id" = i32, Path, description = "ID da sessão")),
    request_body = UpdateSessionPayload,
    responses(
        (status = 200, description = "Sessão atualizada", body = SessionDetail),
        (status = 404, description = "Sessão, filme ou sala inexistente")
    )
)]
pub async fn update_session(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
    WithRejection(Json(payload), _): JsonBody<UpdateSessionPayload>,
) -> Result<impl IntoResponse, AppError> {
    let session = app_state.session_service.update(id, payload).await?;
    Ok((StatusCode::OK, Json(session)))
}

#[utoipa::path(
    delete,
    path = "/sessions/{id}",
    tag = "Sessions",
    params(("id" = i32, Path, description = "ID da sessão")),
    responses(
        (status = 200, description = "Sessão removida", body = Session),
        (status = 404, description = "Sessão não encontrada"),
        (status = 409, description = "Sessão com ingressos vendidos")
    )
)]
pub async fn delete_session(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let session = app_state.session_service.remove(id).await?;
    Ok((StatusCode::OK, Json(session)))
}
