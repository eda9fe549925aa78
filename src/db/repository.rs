// src/db/repository.rs

use async_trait::async_trait;

use crate::{
    common::error::AppError,
    models::{
        movie::{Movie, MovieChanges, NewMovie},
        session::{NewSession, Session, SessionChanges, SessionDetail},
        theater::{NewTheater, Theater, TheaterChanges},
        ticket::{NewTicket, Ticket, TicketChanges},
        user::{NewUser, User, UserChanges},
    },
};

// Contratos de persistência. Existem duas implementações: Postgres (sqlx) e
// MemoryStore. `update` e `delete` devolvem `None` quando o ID não existe.

#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Ordenado por `created_at` decrescente.
    async fn list(&self) -> Result<Vec<Movie>, AppError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, AppError>;
    async fn insert(&self, movie: NewMovie) -> Result<Movie, AppError>;
    async fn update(&self, id: i32, changes: MovieChanges) -> Result<Option<Movie>, AppError>;
    async fn delete(&self, id: i32) -> Result<Option<Movie>, AppError>;
}

#[async_trait]
pub trait TheaterStore: Send + Sync {
    /// Ordenado pelo número da sala.
    async fn list(&self) -> Result<Vec<Theater>, AppError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Theater>, AppError>;
    async fn insert(&self, theater: NewTheater) -> Result<Theater, AppError>;
    async fn update(
        &self,
        id: i32,
        changes: TheaterChanges,
    ) -> Result<Option<Theater>, AppError>;
    async fn delete(&self, id: i32) -> Result<Option<Theater>, AppError>;
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Ordenado por `date_time` crescente, com filme e sala embutidos.
    async fn list_detailed(&self) -> Result<Vec<SessionDetail>, AppError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Session>, AppError>;
    async fn find_detailed(&self, id: i32) -> Result<Option<SessionDetail>, AppError>;
    /// Referência inexistente (filme/sala) falha com `NotFound`.
    async fn insert(&self, session: NewSession) -> Result<Session, AppError>;
    async fn update(&self, id: i32, changes: SessionChanges)
        -> Result<Option<Session>, AppError>;
    async fn delete(&self, id: i32) -> Result<Option<Session>, AppError>;
}

#[async_trait]
pub trait TicketStore: Send + Sync {
    /// Ordenado por `purchase_time` decrescente.
    async fn list(&self) -> Result<Vec<Ticket>, AppError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Ticket>, AppError>;
    async fn insert(&self, ticket: NewTicket) -> Result<Ticket, AppError>;
    /// Tudo ou nada.
    async fn insert_many(&self, tickets: Vec<NewTicket>) -> Result<Vec<Ticket>, AppError>;
    async fn update(&self, id: i32, changes: TicketChanges) -> Result<Option<Ticket>, AppError>;
    async fn delete(&self, id: i32) -> Result<Option<Ticket>, AppError>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Ordenado por `created_at` decrescente.
    async fn list(&self) -> Result<Vec<User>, AppError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError>;
    /// E-mail duplicado falha com `Conflict`.
    async fn insert(&self, user: NewUser) -> Result<User, AppError>;
    async fn update(&self, id: i32, changes: UserChanges) -> Result<Option<User>, AppError>;
    async fn delete(&self, id: i32) -> Result<Option<User>, AppError>;
}
