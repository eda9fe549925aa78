// Payloads de exemplo compartilhados pelos testes

use rust_decimal::Decimal;

use crate::models::{
    movie::CreateMoviePayload,
    session::CreateSessionPayload,
    theater::{CreateTheaterPayload, TheaterType},
    ticket::{CreateTicketPayload, PaymentType},
};

pub fn movie_payload(title: &str) -> CreateMoviePayload {
    CreateMoviePayload {
        title: title.to_string(),
        genre: "Drama".to_string(),
        rating: "PG".to_string(),
        duration: 120,
        release_date: "2024-01-01".to_string(),
        description: None,
        poster: None,
    }
}

pub fn theater_payload(number: i32) -> CreateTheaterPayload {
    CreateTheaterPayload {
        name: format!("Sala {number}"),
        number,
        capacity: 100,
        theater_type: TheaterType::TwoD,
    }
}

pub fn session_payload(movie_id: i32, theater_id: i32) -> CreateSessionPayload {
    CreateSessionPayload {
        date_time: "2024-02-01T20:00:00Z".to_string(),
        price: Decimal::new(100, 1),
        format: "2D".to_string(),
        language: "EN".to_string(),
        movie_id,
        theater_id,
    }
}

pub fn ticket_payload(session_id: i32) -> CreateTicketPayload {
    CreateTicketPayload {
        session_id,
        user_id: None,
        customer_name: "Maria Souza".to_string(),
        cpf: None,
        seat: "F7".to_string(),
        payment_type: PaymentType::Credit,
    }
}
