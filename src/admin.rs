// src/admin.rs
//
// Painel administrativo em linha de comando: cliente HTTP da API e as
// listagens genéricas (busca, cadastro, edição e remoção) de cada entidade.

pub mod api;
pub mod listing;
pub mod overview;
pub mod pages;

pub use api::{ApiResource, ClientError, CrudApi, HttpApi, Movies, Sessions, Theaters, Tickets, Users};
pub use listing::{Column, EntityListing, ListingConfig};
pub use overview::{load_overview, Overview};
