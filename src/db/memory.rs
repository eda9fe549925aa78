// src/db/memory.rs

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    common::error::{AppError, Resource},
    db::{MovieStore, SessionStore, TheaterStore, TicketStore, UserStore},
    models::{
        movie::{Movie, MovieChanges, NewMovie},
        session::{NewSession, Session, SessionChanges, SessionDetail},
        theater::{NewTheater, Theater, TheaterChanges},
        ticket::{NewTicket, Ticket, TicketChanges},
        user::{NewUser, User, UserChanges},
    },
};

/// Armazenamento em memória com as mesmas regras do esquema Postgres
/// (chaves estrangeiras, ON DELETE RESTRICT, e-mail único).
/// Usado com `STORAGE_BACKEND=memory` e nos testes.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

#[derive(Default)]
struct Tables {
    movies: BTreeMap<i32, Movie>,
    theaters: BTreeMap<i32, Theater>,
    sessions: BTreeMap<i32, Session>,
    tickets: BTreeMap<i32, Ticket>,
    users: BTreeMap<i32, User>,
    last_id: LastIds,
}

// Equivalente às sequências SERIAL
#[derive(Default)]
struct LastIds {
    movie: i32,
    theater: i32,
    session: i32,
    ticket: i32,
    user: i32,
}

fn next(counter: &mut i32) -> i32 {
    *counter += 1;
    *counter
}

fn replace<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tables {
    fn detail(&self, session: &Session) -> Option<SessionDetail> {
        Some(SessionDetail {
            movie: self.movies.get(&session.movie_id)?.clone(),
            theater: self.theaters.get(&session.theater_id)?.clone(),
            session: session.clone(),
        })
    }

    fn check_session_refs(&self, movie_id: i32, theater_id: i32) -> Result<(), AppError> {
        if !self.movies.contains_key(&movie_id) {
            return Err(AppError::not_found(Resource::Movie, movie_id));
        }
        if !self.theaters.contains_key(&theater_id) {
            return Err(AppError::not_found(Resource::Theater, theater_id));
        }
        Ok(())
    }

    fn check_ticket_refs(&self, session_id: i32, user_id: Option<i32>) -> Result<(), AppError> {
        if !self.sessions.contains_key(&session_id) {
            return Err(AppError::not_found(Resource::Session, session_id));
        }
        if let Some(user_id) = user_id {
            if !self.users.contains_key(&user_id) {
                return Err(AppError::not_found(Resource::User, user_id));
            }
        }
        Ok(())
    }

    fn email_taken(&self, email: &str, except: Option<i32>) -> bool {
        self.users
            .values()
            .any(|u| u.email == email && Some(u.id) != except)
    }

    fn build_ticket(&mut self, ticket: NewTicket) -> Ticket {
        Ticket {
            id: next(&mut self.last_id.ticket),
            session_id: ticket.session_id,
            user_id: ticket.user_id,
            customer_name: ticket.customer_name,
            cpf: ticket.cpf,
            seat: ticket.seat,
            payment_type: ticket.payment_type,
            purchase_time: Utc::now(),
        }
    }
}

#[async_trait]
impl MovieStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Movie>, AppError> {
        let tables = self.tables.read().await;
        let mut movies: Vec<Movie> = tables.movies.values().cloned().collect();
        movies.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(movies)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, AppError> {
        Ok(self.tables.read().await.movies.get(&id).cloned())
    }

    async fn insert(&self, movie: NewMovie) -> Result<Movie, AppError> {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let created = Movie {
            id: next(&mut tables.last_id.movie),
            title: movie.title,
            genre: movie.genre,
            rating: movie.rating,
            duration: movie.duration,
            release_date: movie.release_date,
            description: movie.description,
            poster: movie.poster,
            created_at: now,
            updated_at: now,
        };
        tables.movies.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, id: i32, changes: MovieChanges) -> Result<Option<Movie>, AppError> {
        let mut tables = self.tables.write().await;
        let Some(movie) = tables.movies.get_mut(&id) else {
            return Ok(None);
        };
        replace(&mut movie.title, changes.title);
        replace(&mut movie.genre, changes.genre);
        replace(&mut movie.rating, changes.rating);
        replace(&mut movie.duration, changes.duration);
        replace(&mut movie.release_date, changes.release_date);
        if changes.description.is_some() {
            movie.description = changes.description;
        }
        if changes.poster.is_some() {
            movie.poster = changes.poster;
        }
        movie.updated_at = Utc::now();
        Ok(Some(movie.clone()))
    }

    async fn delete(&self, id: i32) -> Result<Option<Movie>, AppError> {
        let mut tables = self.tables.write().await;
        if tables.sessions.values().any(|s| s.movie_id == id) {
            return Err(AppError::Conflict("O filme possui sessões cadastradas.".into()));
        }
        Ok(tables.movies.remove(&id))
    }
}

#[async_trait]
impl TheaterStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Theater>, AppError> {
        let tables = self.tables.read().await;
        let mut theaters: Vec<Theater> = tables.theaters.values().cloned().collect();
        theaters.sort_by(|a, b| a.number.cmp(&b.number).then(a.id.cmp(&b.id)));
        Ok(theaters)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Theater>, AppError> {
        Ok(self.tables.read().await.theaters.get(&id).cloned())
    }

    async fn insert(&self, theater: NewTheater) -> Result<Theater, AppError> {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let created = Theater {
            id: next(&mut tables.last_id.theater),
            name: theater.name,
            number: theater.number,
            capacity: theater.capacity,
            theater_type: theater.theater_type,
            created_at: now,
            updated_at: now,
        };
        tables.theaters.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: i32,
        changes: TheaterChanges,
    ) -> Result<Option<Theater>, AppError> {
        let mut tables = self.tables.write().await;
        let Some(theater) = tables.theaters.get_mut(&id) else {
            return Ok(None);
        };
        replace(&mut theater.name, changes.name);
        replace(&mut theater.number, changes.number);
        replace(&mut theater.capacity, changes.capacity);
        replace(&mut theater.theater_type, changes.theater_type);
        theater.updated_at = Utc::now();
        Ok(Some(theater.clone()))
    }

    async fn delete(&self, id: i32) -> Result<Option<Theater>, AppError> {
        let mut tables = self.tables.write().await;
        if tables.sessions.values().any(|s| s.theater_id == id) {
            return Err(AppError::Conflict("A sala possui sessões cadastradas.".into()));
        }
        Ok(tables.theaters.remove(&id))
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn list_detailed(&self) -> Result<Vec<SessionDetail>, AppError> {
        let tables = self.tables.read().await;
        let mut sessions: Vec<&Session> = tables.sessions.values().collect();
        sessions.sort_by(|a, b| a.date_time.cmp(&b.date_time).then(a.id.cmp(&b.id)));
        Ok(sessions.into_iter().filter_map(|s| tables.detail(s)).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Session>, AppError> {
        Ok(self.tables.read().await.sessions.get(&id).cloned())
    }

    async fn find_detailed(&self, id: i32) -> Result<Option<SessionDetail>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.sessions.get(&id).and_then(|s| tables.detail(s)))
    }

    async fn insert(&self, session: NewSession) -> Result<Session, AppError> {
        let mut tables = self.tables.write().await;
        tables.check_session_refs(session.movie_id, session.theater_id)?;

        let now = Utc::now();
        let created = Session {
            id: next(&mut tables.last_id.session),
            date_time: session.date_time,
            price: session.price,
            format: session.format,
            language: session.language,
            movie_id: session.movie_id,
            theater_id: session.theater_id,
            created_at: now,
            updated_at: now,
        };
        tables.sessions.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: i32,
        changes: SessionChanges,
    ) -> Result<Option<Session>, AppError> {
        let mut tables = self.tables.write().await;
        let Some(current) = tables.sessions.get(&id) else {
            return Ok(None);
        };
        tables.check_session_refs(
            changes.movie_id.unwrap_or(current.movie_id),
            changes.theater_id.unwrap_or(current.theater_id),
        )?;

        let Some(session) = tables.sessions.get_mut(&id) else {
            return Ok(None);
        };
        replace(&mut session.date_time, changes.date_time);
        replace(&mut session.price, changes.price);
        replace(&mut session.format, changes.format);
        replace(&mut session.language, changes.language);
        replace(&mut session.movie_id, changes.movie_id);
        replace(&mut session.theater_id, changes.theater_id);
        session.updated_at = Utc::now();
        Ok(Some(session.clone()))
    }

    async fn delete(&self, id: i32) -> Result<Option<Session>, AppError> {
        let mut tables = self.tables.write().await;
        if tables.tickets.values().any(|t| t.session_id == id) {
            return Err(AppError::Conflict("A sessão possui ingressos vendidos.".into()));
        }
        Ok(tables.sessions.remove(&id))
    }
}

#[async_trait]
impl TicketStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Ticket>, AppError> {
        let tables = self.tables.read().await;
        let mut tickets: Vec<Ticket> = tables.tickets.values().cloned().collect();
        tickets.sort_by(|a, b| b.purchase_time.cmp(&a.purchase_time).then(b.id.cmp(&a.id)));
        Ok(tickets)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Ticket>, AppError> {
        Ok(self.tables.read().await.tickets.get(&id).cloned())
    }

    async fn insert(&self, ticket: NewTicket) -> Result<Ticket, AppError> {
        let mut tables = self.tables.write().await;
        tables.check_ticket_refs(ticket.session_id, ticket.user_id)?;

        let created = tables.build_ticket(ticket);
        tables.tickets.insert(created.id, created.clone());
        Ok(created)
    }

    async fn insert_many(&self, tickets: Vec<NewTicket>) -> Result<Vec<Ticket>, AppError> {
        let mut tables = self.tables.write().await;
        // Valida tudo antes de gravar qualquer linha
        for ticket in &tickets {
            tables.check_ticket_refs(ticket.session_id, ticket.user_id)?;
        }

        let mut created = Vec::with_capacity(tickets.len());
        for ticket in tickets {
            let ticket = tables.build_ticket(ticket);
            tables.tickets.insert(ticket.id, ticket.clone());
            created.push(ticket);
        }
        Ok(created)
    }

    async fn update(&self, id: i32, changes: TicketChanges) -> Result<Option<Ticket>, AppError> {
        let mut tables = self.tables.write().await;
        let Some(current) = tables.tickets.get(&id) else {
            return Ok(None);
        };
        tables.check_ticket_refs(
            changes.session_id.unwrap_or(current.session_id),
            changes.user_id.or(current.user_id),
        )?;

        let Some(ticket) = tables.tickets.get_mut(&id) else {
            return Ok(None);
        };
        replace(&mut ticket.session_id, changes.session_id);
        replace(&mut ticket.customer_name, changes.customer_name);
        replace(&mut ticket.seat, changes.seat);
        replace(&mut ticket.payment_type, changes.payment_type);
        if changes.user_id.is_some() {
            ticket.user_id = changes.user_id;
        }
        if changes.cpf.is_some() {
            ticket.cpf = changes.cpf;
        }
        Ok(Some(ticket.clone()))
    }

    async fn delete(&self, id: i32) -> Result<Option<Ticket>, AppError> {
        Ok(self.tables.write().await.tickets.remove(&id))
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        let tables = self.tables.read().await;
        let mut users: Vec<User> = tables.users.values().cloned().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(users)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User, AppError> {
        let mut tables = self.tables.write().await;
        if tables.email_taken(&user.email, None) {
            return Err(AppError::Conflict("Este e-mail já está em uso.".into()));
        }

        let now = Utc::now();
        let created = User {
            id: next(&mut tables.last_id.user),
            email: user.email,
            name: user.name,
            password_hash: user.password_hash,
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, id: i32, changes: UserChanges) -> Result<Option<User>, AppError> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&id) {
            return Ok(None);
        }
        if let Some(email) = &changes.email {
            if tables.email_taken(email, Some(id)) {
                return Err(AppError::Conflict("Este e-mail já está em uso.".into()));
            }
        }

        let Some(user) = tables.users.get_mut(&id) else {
            return Ok(None);
        };
        replace(&mut user.email, changes.email);
        replace(&mut user.password_hash, changes.password_hash);
        if changes.name.is_some() {
            user.name = changes.name;
        }
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: i32) -> Result<Option<User>, AppError> {
        let mut tables = self.tables.write().await;
        if tables.tickets.values().any(|t| t.user_id == Some(id)) {
            return Err(AppError::Conflict("O usuário possui ingressos vinculados.".into()));
        }
        Ok(tables.users.remove(&id))
    }
}
