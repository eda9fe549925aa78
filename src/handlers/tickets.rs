// src/handlers/tickets.rs

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
    models::ticket::{CreateTicketPayload, PurchaseTicketsPayload, Ticket, UpdateTicketPayload},
};

#[utoipa::path(
    post,
    path = "/tickets",
    tag = "Tickets",
    request_body = CreateTicketPayload,
    responses(
        (status = 201, description = "Ingresso emitido", body = Ticket),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Sessão ou usuário inexistente")
    )
)]
pub async fn create_ticket(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): JsonBody<CreateTicketPayload>,
) -> Result<impl IntoResponse, AppError> {
    let ticket = app_state.ticket_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

// POST /tickets/purchase
#[utoipa::path(
    post,
    path = "/tickets/purchase",
    tag = "Tickets",
    request_body = PurchaseTicketsPayload,
    responses(
        (status = 201, description = "Ingressos emitidos", body = Vec<Ticket>),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Sessão ou usuário inexistente")
    )
)]
pub async fn purchase_tickets(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): JsonBody<PurchaseTicketsPayload>,
) -> Result<impl IntoResponse, AppError> {
    let tickets = app_state.ticket_service.purchase(payload).await?;
    Ok((StatusCode::CREATED, Json(tickets)))
}

#[utoipa::path(
    get,
    path = "/tickets",
    tag = "Tickets",
    responses((status = 200, description = "Ingressos, mais recentes primeiro", body = Vec<Ticket>))
)]
pub async fn list_tickets(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let tickets = app_state.ticket_service.find_all().await?;
    Ok((StatusCode::OK, Json(tickets)))
}

#[utoipa::path(
    get,
    path = "/tickets/{id}",
    tag = "Tickets",
    params(("id" = i32, Path, description = "ID do ingresso")),
    responses(
        (status = 200, description = "Ingresso", body = Ticket),
        (status = 404, description = "Ingresso não encontrado")
    )
)]
pub async fn get_ticket(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let ticket = app_state.ticket_service.find_one(id).await?;
    Ok((StatusCode::OK, Json(ticket)))
}

#[utoipa::path(
    patch,
    path = "/tickets/{id}",
    tag = "Tickets",
    params(("id" = i32, Path, description = "ID do ingresso")),
    request_body = UpdateTicketPayload,
    responses(
        (status = 200, description = "Ingresso atualizado", body = Ticket),
        (status = 404, description = "Ingresso, sessão ou usuário inexistente")
    )
)]
pub async fn update_ticket(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
    WithRejection(Json(payload), _): JsonBody<UpdateTicketPayload>,
) -> Result<impl IntoResponse, AppError> {
    let ticket = app_state.ticket_service.update(id, payload).await?;
    Ok((StatusCode::OK, Json(ticket)))
}

#[utoipa::path(
    delete,
    path = "/tickets/{id}",
    tag = "Tickets",
    params(("id" = i32, Path, description = "ID do ingresso")),
    responses(
        (status = 200, description = "Ingresso cancelado", body = Ticket),
        (status = 404, description = "Ingresso não encontrado")
    )
)]
pub async fn delete_ticket(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let ticket = app_state.ticket_service.remove(id).await?;
    Ok((StatusCode::OK, Json(ticket)))
}
