// src/admin/pages.rs
//
// Colunas de cada listagem do painel.

use crate::models::{movie::Movie, session::SessionDetail, theater::Theater, ticket::Ticket, user::User};

use super::listing::{Column, ListingConfig};

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

pub fn movie_listing_config() -> ListingConfig<Movie> {
    ListingConfig {
        entity_name: "movie",
        label: "Movies",
        columns: vec![
            Column::new("ID", |m: &Movie| m.id.to_string()),
            Column::new("Title", |m: &Movie| m.title.clone()),
            Column::new("Genre", |m: &Movie| m.genre.clone()),
            Column::new("Rating", |m: &Movie| m.rating.clone()),
            Column::new("Duration", |m: &Movie| format!("{} min", m.duration)),
            Column::new("Release date", |m: &Movie| m.release_date.to_string()),
        ],
    }
}

pub fn theater_listing_config() -> ListingConfig<Theater> {
    ListingConfig {
        entity_name: "theater",
        label: "Theaters",
        columns: vec![
            Column::new("ID", |t: &Theater| t.id.to_string()),
            Column::new("Name", |t: &Theater| t.name.clone()),
            Column::new("Number", |t: &Theater| t.number.to_string()),
            Column::new("Capacity", |t: &Theater| t.capacity.to_string()),
            Column::new("Type", |t: &Theater| t.theater_type.as_str().to_string()),
        ],
    }
}

pub fn session_listing_config() -> ListingConfig<SessionDetail> {
    ListingConfig {
        entity_name: "session",
        label: "Sessions",
        columns: vec![
            Column::new("ID", |s: &SessionDetail| s.session.id.to_string()),
            Column::new("Movie", |s: &SessionDetail| s.movie.title.clone()),
            Column::new("Theater", |s: &SessionDetail| s.theater.name.clone()),
            Column::new("Date/time", |s: &SessionDetail| {
                s.session.date_time.format(DATE_TIME_FORMAT).to_string()
            }),
            Column::new("Price", |s: &SessionDetail| format!("{:.2}", s.session.price)),
            Column::new("Format", |s: &SessionDetail| s.session.format.clone()),
            Column::new("Language", |s: &SessionDetail| s.session.language.clone()),
        ],
    }
}

pub fn ticket_listing_config() -> ListingConfig<Ticket> {
    ListingConfig {
        entity_name: "ticket",
        label: "Tickets",
        columns: vec![
            Column::new("ID", |t: &Ticket| t.id.to_string()),
            Column::new("Session", |t: &Ticket| t.session_id.to_string()),
            Column::new("Customer", |t: &Ticket| t.customer_name.clone()),
            Column::new("CPF", |t: &Ticket| or_dash(t.cpf.as_deref())),
            Column::new("Seat", |t: &Ticket| t.seat.clone()),
            Column::new("Payment", |t: &Ticket| t.payment_type.as_str().to_string()),
            Column::new("Purchased", |t: &Ticket| {
                t.purchase_time.format(DATE_TIME_FORMAT).to_string()
            }),
        ],
    }
}

pub fn user_listing_config() -> ListingConfig<User> {
    ListingConfig {
        entity_name: "user",
        label: "Users",
        columns: vec![
            Column::new("ID", |u: &User| u.id.to_string()),
            Column::new("Email", |u: &User| u.email.clone()),
            Column::new("Name", |u: &User| or_dash(u.name.as_deref())),
        ],
    }
}
