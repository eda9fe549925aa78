// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Movies ---
        handlers::movies::create_movie,
        handlers::movies::list_movies,
        handlers::movies::get_movie,
        handlers::movies::update_movie,
        handlers::movies::delete_movie,

        // --- Theaters ---
        handlers::theaters::create_theater,
        handlers::theaters::list_theaters,
        handlers::theaters::get_theater,
        handlers::theaters::update_theater,
        handlers::theaters::delete_theater,

        // --- Sessions ---
        handlers::sessions::create_session,
        handlers::sessions::list_sessions,
        handlers::sessions::get_session,
        handlers::sessions::update_session,
        handlers::sessions::delete_session,

        // --- Tickets ---
        handlers::tickets::create_ticket,
        handlers::tickets::purchase_tickets,
        handlers::tickets::list_tickets,
        handlers::tickets::get_ticket,
        handlers::tickets::update_ticket,
        handlers::tickets::delete_ticket,

        // --- Users ---
        handlers::users::create_user,
        handlers::users::list_users,
        handlers::users::get_user,
        handlers::users::update_user,
        handlers::users::delete_user,
    ),
    components(
        schemas(
            // --- Movies ---
            models::movie::Movie,
            models::movie::CreateMoviePayload,
            models::movie::UpdateMoviePayload,

            // --- Theaters ---
            models::theater::TheaterType,
            models::theater::Theater,
            models::theater::CreateTheaterPayload,
            models::theater::UpdateTheaterPayload,

            // --- Sessions ---
            models::session::Session,
            models::session::SessionDetail,
            models::session::CreateSessionPayload,
            models::session::UpdateSessionPayload,

            // --- Tickets ---
            models::ticket::PaymentType,
            models::ticket::Ticket,
            models::ticket::CreateTicketPayload,
            models::ticket::PurchaseTicketsPayload,
            models::ticket::UpdateTicketPayload,

            // --- Users ---
            models::user::User,
            models::user::CreateUserPayload,
            models::user::UpdateUserPayload,
        )
    ),
    tags(
        (name = "Movies", description = "Catálogo de Filmes"),
        (name = "Theaters", description = "Salas de Exibição"),
        (name = "Sessions", description = "Sessões (Filme + Sala + Horário)"),
        (name = "Tickets", description = "Venda de Ingressos"),
        (name = "Users", description = "Usuários do Sistema")
    )
)]
pub struct ApiDoc;
