// src/admin/overview.rs

use std::fmt::Write;

use chrono::{DateTime, Utc};

use super::api::{ClientError, CrudApi, Movies, Sessions, Theaters};
use crate::models::{movie::Movie, session::SessionDetail, theater::Theater};

/// Resumo da tela inicial: catálogo, salas e próximas sessões.
#[derive(Debug, Clone)]
pub struct Overview {
    pub movies: Vec<Movie>,
    pub sessions: Vec<SessionDetail>,
    pub theaters: Vec<Theater>,
}

/// Busca filmes, sessões e salas em paralelo. Qualquer falha cancela o resumo.
pub async fn load_overview<M, S, T>(
    movies: &M,
    sessions: &S,
    theaters: &T,
) -> Result<Overview, ClientError>
where
    M: CrudApi<Movies>,
    S: CrudApi<Sessions>,
    T: CrudApi<Theaters>,
{
    let (movies, sessions, theaters) =
        tokio::try_join!(movies.list(), sessions.list(), theaters.list())?;

    Ok(Overview {
        movies,
        sessions,
        theaters,
    })
}

impl Overview {
    /// Sessões a partir de `now`, da mais próxima para a mais distante.
    pub fn upcoming_sessions(&self, now: DateTime<Utc>) -> Vec<&SessionDetail> {
        let mut upcoming: Vec<&SessionDetail> = self
            .sessions
            .iter()
            .filter(|s| s.session.date_time >= now)
            .collect();
        upcoming.sort_by_key(|s| (s.session.date_time, s.session.id));
        upcoming
    }

    pub fn render(&self, now: DateTime<Utc>) -> String {
        let upcoming = self.upcoming_sessions(now);

        let mut out = String::new();
        let _ = writeln!(out, "Movies:   {}", self.movies.len());
        let _ = writeln!(out, "Theaters: {}", self.theaters.len());
        let _ = writeln!(out, "Sessions: {} ({} upcoming)", self.sessions.len(), upcoming.len());

        for detail in upcoming {
            let _ = writeln!(
                out,
                "  {}  {} @ {} ({}, {}) {:.2}",
                detail.session.date_time.format("%Y-%m-%d %H:%M"),
                detail.movie.title,
                detail.theater.name,
                detail.session.format,
                detail.session.language,
                detail.session.price,
            );
        }
        out
    }
}
