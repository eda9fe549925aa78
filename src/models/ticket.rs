// src/models/ticket.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::validation::validate_not_blank;

// Mapeia o CREATE TYPE payment_type do banco
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "payment_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Credit,
    Debit,
    Pix,
    Cash,
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Credit => "credit",
            PaymentType::Debit => "debit",
            PaymentType::Pix => "pix",
            PaymentType::Cash => "cash",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    #[schema(example = 1)]
    pub id: i32,
    pub session_id: i32,
    pub user_id: Option<i32>,
    #[schema(example = "Maria Souza")]
    pub customer_name: String,
    /// Somente dígitos
    #[schema(example = "12345678909")]
    pub cpf: Option<String>,
    #[schema(example = "F7")]
    pub seat: String,
    pub payment_type: PaymentType,
    pub purchase_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketPayload {
    pub session_id: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,

    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "Maria Souza")]
    pub customer_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "123.456.789-09")]
    pub cpf: Option<String>,

    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "F7")]
    pub seat: String,

    pub payment_type: PaymentType,
}

/// Compra de vários ingressos de uma vez para o mesmo cliente.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseTicketsPayload {
    pub session_id: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,

    #[validate(custom(function = "validate_not_blank"))]
    pub customer_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,

    /// Prefixo do assento; cada ingresso recebe o sufixo "-N"
    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "F")]
    pub seat: String,

    pub payment_type: PaymentType,

    #[validate(range(min = 1, max = 20, message = "A quantidade deve estar entre 1 e 20."))]
    #[schema(example = 2)]
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTicketPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,

    #[validate(custom(function = "validate_not_blank"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,

    #[validate(custom(function = "validate_not_blank"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,
}

#[derive(Debug, Clone)]
pub struct NewTicket {
    pub session_id: i32,
    pub user_id: Option<i32>,
    pub customer_name: String,
    pub cpf: Option<String>,
    pub seat: String,
    pub payment_type: PaymentType,
}

#[derive(Debug, Clone, Default)]
pub struct TicketChanges {
    pub session_id: Option<i32>,
    pub user_id: Option<i32>,
    pub customer_name: Option<String>,
    pub cpf: Option<String>,
    pub seat: Option<String>,
    pub payment_type: Option<PaymentType>,
}
