// src/routes.rs

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers};

fn movie_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::movies::list_movies).post(handlers::movies::create_movie),
        )
        .route(
            "/{id}",
            get(handlers::movies::get_movie)
                .patch(handlers::movies::update_movie)
                .delete(handlers::movies::delete_movie),
        )
}

fn theater_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::theaters::list_theaters).post(handlers::theaters::create_theater),
        )
        .route(
            "/{id}",
            get(handlers::theaters::get_theater)
                .patch(handlers::theaters::update_theater)
                .delete(handlers::theaters::delete_theater),
        )
}

fn session_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::sessions::list_sessions).post(handlers::sessions::create_session),
        )
        .route(
            "/{id}",
            get(handlers::sessions::get_session)
                .patch(handlers::sessions::update_session)
                .delete(handlers::sessions::delete_session),
        )
}

fn ticket_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::tickets::list_tickets).post(handlers::tickets::create_ticket),
        )
        .route(
            "/purchase",
            axum::routing::post(handlers::tickets::purchase_tickets),
        )
        .route(
            "/{id}",
            get(handlers::tickets::get_ticket)
                .patch(handlers::tickets::update_ticket)
                .delete(handlers::tickets::delete_ticket),
        )
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route(
            "/{id}",
            get(handlers::users::get_user)
                .patch(handlers::users::update_user)
                .delete(handlers::users::delete_user),
        )
}

/// Monta o router principal. Os caminhos no singular (`/theater`, `/session`, ...)
/// continuam aceitos porque o painel antigo os usa.
pub fn app(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .nest("/movies", movie_routes())
        .nest("/theaters", theater_routes())
        .nest("/theater", theater_routes())
        .nest("/sessions", session_routes())
        .nest("/session", session_routes())
        .nest("/tickets", ticket_routes())
        .nest("/ticket", ticket_routes())
        .nest("/users", user_routes())
        .nest("/user", user_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
