// src/services/ticket_service.rs

use std::sync::Arc;

use validator::Validate;

use crate::{
    common::{
        error::{AppError, Resource},
        validation::optional_cpf,
    },
    db::{SessionStore, TicketStore, UserStore},
    models::ticket::{
        CreateTicketPayload, NewTicket, PurchaseTicketsPayload, Ticket, TicketChanges,
        UpdateTicketPayload,
    },
};

#[derive(Clone)]
pub struct TicketService {
    tickets: Arc<dyn TicketStore>,
    sessions: Arc<dyn SessionStore>,
    users: Arc<dyn UserStore>,
}

impl TicketService {
    pub fn new(
        tickets: Arc<dyn TicketStore>,
        sessions: Arc<dyn SessionStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            tickets,
            sessions,
            users,
        }
    }

    async fn ensure_references(
        &self,
        session_id: Option<i32>,
        user_id: Option<i32>,
    ) -> Result<(), AppError> {
        if let Some(session_id) = session_id {
            if self.sessions.find_by_id(session_id).await?.is_none() {
                return Err(AppError::not_found(Resource::Session, session_id));
            }
        }
        if let Some(user_id) = user_id {
            if self.users.find_by_id(user_id).await?.is_none() {
                return Err(AppError::not_found(Resource::User, user_id));
            }
        }
        Ok(())
    }

    pub async fn create(&self, payload: CreateTicketPayload) -> Result<Ticket, AppError> {
        payload.validate()?;
        let cpf = optional_cpf(payload.cpf.as_deref())?;
        self.ensure_references(Some(payload.session_id), payload.user_id)
            .await?;

        let ticket = self
            .tickets
            .insert(NewTicket {
                session_id: payload.session_id,
                user_id: payload.user_id,
                customer_name: payload.customer_name.trim().to_string(),
                cpf,
                seat: payload.seat.trim().to_string(),
                payment_type: payload.payment_type,
            })
            .await?;

        tracing::info!(
            ticket_id = ticket.id,
            session_id = ticket.session_id,
            "🎫 Ingresso emitido (assento {})",
            ticket.seat
        );
        Ok(ticket)
    }

    /// Emite `quantity` ingressos de uma vez; os assentos recebem o sufixo "-1", "-2", ...
    pub async fn purchase(&self, payload: PurchaseTicketsPayload) -> Result<Vec<Ticket>, AppError> {
        payload.validate()?;
        let cpf = optional_cpf(payload.cpf.as_deref())?;
        self.ensure_references(Some(payload.session_id), payload.user_id)
            .await?;

        let customer_name = payload.customer_name.trim();
        let seat = payload.seat.trim();
        let batch = (1..=payload.quantity)
            .map(|n| NewTicket {
                session_id: payload.session_id,
                user_id: payload.user_id,
                customer_name: customer_name.to_string(),
                cpf: cpf.clone(),
                seat: format!("{seat}-{n}"),
                payment_type: payload.payment_type,
            })
            .collect();

        let tickets = self.tickets.insert_many(batch).await?;
        tracing::info!(
            session_id = payload.session_id,
            "🎫 {} ingressos emitidos para {}",
            tickets.len(),
            customer_name
        );
        Ok(tickets)
    }

    pub async fn find_all(&self) -> Result<Vec<Ticket>, AppError> {
        self.tickets.list().await
    }

    pub async fn find_one(&self, id: i32) -> Result<Ticket, AppError> {
        self.tickets
            .find_by_id(id)
            .await?
            .ok_or(AppError::not_found(Resource::Ticket, id))
    }

    pub async fn update(&self, id: i32, payload: UpdateTicketPayload) -> Result<Ticket, AppError> {
        self.find_one(id).await?;

        payload.validate()?;
        let cpf = optional_cpf(payload.cpf.as_deref())?;
        self.ensure_references(payload.session_id, payload.user_id)
            .await?;

        let changes = TicketChanges {
            session_id: payload.session_id,
            user_id: payload.user_id,
            customer_name: payload.customer_name.map(|name| name.trim().to_string()),
            cpf,
            seat: payload.seat.map(|seat| seat.trim().to_string()),
            payment_type: payload.payment_type,
        };
        self.tickets
            .update(id, changes)
            .await?
            .ok_or(AppError::not_found(Resource::Ticket, id))
    }

    pub async fn remove(&self, id: i32) -> Result<Ticket, AppError> {
        let ticket = self
            .tickets
            .delete(id)
            .await?
            .ok_or(AppError::not_found(Resource::Ticket, id))?;
        tracing::info!(ticket_id = id, "🗑️ Ingresso cancelado");
        Ok(ticket)
    }
}
