// src/db/ticket_repo.rs

use async_trait::async_trait;
use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::{AppError, Resource},
    db::{foreign_key_constraint, TicketStore},
    models::ticket::{NewTicket, Ticket, TicketChanges},
};

fn map_reference_error(e: sqlx::Error, session_id: Option<i32>, user_id: Option<i32>) -> AppError {
    match foreign_key_constraint(&e).as_deref() {
        Some("tickets_session_id_fkey") => {
            AppError::not_found(Resource::Session, session_id.unwrap_or_default())
        }
        Some("tickets_user_id_fkey") => {
            AppError::not_found(Resource::User, user_id.unwrap_or_default())
        }
        _ => e.into(),
    }
}

#[derive(Clone)]
pub struct TicketRepository {
    pool: PgPool,
}

impl TicketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Aceita pool ou transação
    async fn insert_with<'e, E>(&self, executor: E, ticket: &NewTicket) -> Result<Ticket, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Ticket>(
            r#"
            INSERT INTO tickets (session_id, user_id, customer_name, cpf, seat, payment_type)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(ticket.session_id)
        .bind(ticket.user_id)
        .bind(&ticket.customer_name)
        .bind(&ticket.cpf)
        .bind(&ticket.seat)
        .bind(ticket.payment_type)
        .fetch_one(executor)
        .await
        .map_err(|e| map_reference_error(e, Some(ticket.session_id), ticket.user_id))
    }
}

#[async_trait]
impl TicketStore for TicketRepository {
    async fn list(&self) -> Result<Vec<Ticket>, AppError> {
        let tickets = sqlx::query_as::<_, Ticket>(
            "SELECT * FROM tickets ORDER BY purchase_time DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(tickets)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Ticket>, AppError> {
        let ticket = sqlx::query_as::<_, Ticket>("SELECT * FROM tickets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(ticket)
    }

    async fn insert(&self, ticket: NewTicket) -> Result<Ticket, AppError> {
        self.insert_with(&self.pool, &ticket).await
    }

    async fn insert_many(&self, tickets: Vec<NewTicket>) -> Result<Vec<Ticket>, AppError> {
        // --- INÍCIO DA TRANSAÇÃO ---
        let mut tx = self.pool.begin().await?;

        let mut created = Vec::with_capacity(tickets.len());
        for ticket in &tickets {
            // Se falhar aqui, o tx sofre rollback automático ao sair do escopo (drop)
            created.push(self.insert_with(&mut *tx, ticket).await?);
        }

        tx.commit().await?;
        Ok(created)
    }

    async fn update(&self, id: i32, changes: TicketChanges) -> Result<Option<Ticket>, AppError> {
        let (session_id, user_id) = (changes.session_id, changes.user_id);
        sqlx::query_as::<_, Ticket>(
            r#"
            UPDATE tickets SET
                session_id    = COALESCE($2, session_id),
                user_id       = COALESCE($3, user_id),
                customer_name = COALESCE($4, customer_name),
                cpf           = COALESCE($5, cpf),
                seat          = COALESCE($6, seat),
                payment_type  = COALESCE($7, payment_type)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(session_id)
        .bind(user_id)
        .bind(changes.customer_name)
        .bind(changes.cpf)
        .bind(changes.seat)
        .bind(changes.payment_type)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_reference_error(e, session_id, user_id))
    }

    async fn delete(&self, id: i32) -> Result<Option<Ticket>, AppError> {
        let deleted = sqlx::query_as::<_, Ticket>("DELETE FROM tickets WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(deleted)
    }
}
