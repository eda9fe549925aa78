// src/handlers/movies.rs

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
    models::movie::{CreateMoviePayload, Movie, UpdateMoviePayload},
};

// POST /movies
#[utoipa::path(
    post,
    path = "/movies",
    tag = "Movies",
    request_body = CreateMoviePayload,
    responses(
        (status = 201, description = "Filme cadastrado", body = Movie),
        (status = 400, description = "Dados inválidos (data, pôster, campos obrigatórios)")
    )
)]
pub async fn create_movie(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): JsonBody<CreateMoviePayload>,
) -> Result<impl IntoResponse, AppError> {
    let movie = app_state.movie_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

// GET /movies
#[utoipa::path(
    get,
    path = "/movies",
    tag = "Movies",
    responses(
        (status = 200, description = "Filmes, do mais recente para o mais antigo", body = Vec<Movie>)
    )
)]
pub async fn list_movies(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let movies = app_state.movie_service.find_all().await?;
    Ok((StatusCode::OK, Json(movies)))
}

// GET /movies/{id}
#[utoipa::path(
    get,
    path = "/movies/{id}",
    tag = "Movies",
    params(("id" = i32, Path, description = "ID do filme")),
    responses(
        (status = 200, description = "Filme", body = Movie),
        (status = 404, description = "Filme não encontrado")
    )
)]
pub async fn get_movie(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let movie = app_state.movie_service.find_one(id).await?;
    Ok((StatusCode::OK, Json(movie)))
}

// PATCH /movies/{id}
#[utoipa::path(
    patch,
    path = "/movies/{id}",
    tag = "Movies",
    params(("id" = i32, Path, description = "ID do filme")),
    request_body = UpdateMoviePayload,
    responses(
        (status = 200, description = "Filme atualizado", body = Movie),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Filme não encontrado")
    )
)]
pub async fn update_movie(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
    WithRejection(Json(payload), _): JsonBody<UpdateMoviePayload>,
) -> Result<impl IntoResponse, AppError> {
    let movie = app_state.movie_service.update(id, payload).await?;
    Ok((StatusCode::OK, Json(movie)))
}

// DELETE /movies/{id}
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    tag = "Movies",
    params(("id" = i32, Path, description = "ID do filme")),
    responses(
        (status = 200, description = "Filme removido (estado anterior)", body = Movie),
        (status = 404, description = "Filme não encontrado"),
        (status = 409, description = "Filme com sessões cadastradas")
    )
)]
pub async fn delete_movie(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let movie = app_state.movie_service.remove(id).await?;
    Ok((StatusCode::OK, Json(movie)))
}
