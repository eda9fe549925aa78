pub mod repository;
pub use repository::{MovieStore, SessionStore, TheaterStore, TicketStore, UserStore};

pub mod memory;
pub use memory::MemoryStore;

pub mod movie_repo;
pub use movie_repo::MovieRepository;
pub mod theater_repo;
pub use theater_repo::TheaterRepository;
pub mod session_repo;
pub use session_repo::SessionRepository;
pub mod ticket_repo;
pub use ticket_repo::TicketRepository;
pub mod user_repo;
pub use user_repo::UserRepository;

use crate::common::error::AppError;

// ---
// Helpers de tradução de erros do Postgres
// ---

/// Nome da constraint violada, se o erro for de chave estrangeira.
pub(crate) fn foreign_key_constraint(e: &sqlx::Error) -> Option<String> {
    match e {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            Some(db_err.constraint().unwrap_or_default().to_string())
        }
        _ => None,
    }
}

/// DELETE barrado por ON DELETE RESTRICT vira conflito.
pub(crate) fn map_restricted_delete(e: sqlx::Error, message: &str) -> AppError {
    if foreign_key_constraint(&e).is_some() {
        return AppError::Conflict(message.to_string());
    }
    e.into()
}
