// src/config.rs

use std::{env, str::FromStr, sync::Arc, time::Duration};

use anyhow::{bail, Context};
use sqlx::postgres::PgPoolOptions;

use crate::{
    db::{
        MemoryStore, MovieRepository, MovieStore, SessionRepository, SessionStore,
        TheaterRepository, TheaterStore, TicketRepository, TicketStore, UserRepository,
        UserStore,
    },
    services::{MovieService, SessionService, TheaterService, TicketService, UserService},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" => Ok(StorageBackend::Memory),
            other => bail!("STORAGE_BACKEND inválido: '{other}' (use 'postgres' ou 'memory')"),
        }
    }
}

/// Configuração lida do ambiente (e do arquivo .env, se existir).
#[derive(Debug, Clone)]
pub struct Settings {
    pub storage: StorageBackend,
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub bind_addr: String,
    pub bcrypt_cost: u32,
}

fn parse_var<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{name} inválida ('{raw}'): {e}")),
        Err(_) => Ok(default),
    }
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let storage = parse_var("STORAGE_BACKEND", StorageBackend::Postgres)?;
        let database_url = env::var("DATABASE_URL").ok();
        if storage == StorageBackend::Postgres && database_url.is_none() {
            bail!("DATABASE_URL deve ser definida quando STORAGE_BACKEND=postgres");
        }

        let bcrypt_cost = parse_var("BCRYPT_COST", bcrypt::DEFAULT_COST)?;
        if !(4..=31).contains(&bcrypt_cost) {
            bail!("BCRYPT_COST deve estar entre 4 e 31");
        }

        Ok(Self {
            storage,
            database_url,
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS", 5)?,
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            bcrypt_cost,
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub movie_service: MovieService,
    pub theater_service: TheaterService,
    pub session_service: SessionService,
    pub ticket_service: TicketService,
    pub user_service: UserService,
}

impl AppState {
    pub async fn new(settings: &Settings) -> anyhow::Result<Self> {
        match settings.storage {
            StorageBackend::Memory => {
                tracing::warn!("⚠️ Usando armazenamento em memória: os dados somem ao reiniciar.");
                Ok(Self::in_memory(settings.bcrypt_cost))
            }
            StorageBackend::Postgres => {
                let database_url = settings
                    .database_url
                    .as_deref()
                    .context("DATABASE_URL deve ser definida")?;

                // Conecta ao banco de dados, usando '?' para propagar erros
                let db_pool = PgPoolOptions::new()
                    .max_connections(settings.max_connections)
                    .acquire_timeout(Duration::from_secs(3))
                    .connect(database_url)
                    .await
                    .context("Falha ao conectar ao banco de dados")?;

                tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

                sqlx::migrate!()
                    .run(&db_pool)
                    .await
                    .context("Falha ao rodar as migrações do banco de dados")?;

                tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

                Ok(Self::from_stores(
                    Arc::new(MovieRepository::new(db_pool.clone())),
                    Arc::new(TheaterRepository::new(db_pool.clone())),
                    Arc::new(SessionRepository::new(db_pool.clone())),
                    Arc::new(TicketRepository::new(db_pool.clone())),
                    Arc::new(UserRepository::new(db_pool)),
                    settings.bcrypt_cost,
                ))
            }
        }
    }

    pub fn in_memory(bcrypt_cost: u32) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::from_stores(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store,
            bcrypt_cost,
        )
    }

    // --- Monta o gráfico de dependências ---
    pub fn from_stores(
        movies: Arc<dyn MovieStore>,
        theaters: Arc<dyn TheaterStore>,
        sessions: Arc<dyn SessionStore>,
        tickets: Arc<dyn TicketStore>,
        users: Arc<dyn UserStore>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            movie_service: MovieService::new(movies.clone()),
            theater_service: TheaterService::new(theaters.clone()),
            session_service: SessionService::new(sessions.clone(), movies, theaters),
            ticket_service: TicketService::new(tickets, sessions, users.clone()),
            user_service: UserService::new(users, bcrypt_cost),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_backend_parses_case_insensitively() {
        assert_eq!(
            "Postgres".parse::<StorageBackend>().unwrap(),
            StorageBackend::Postgres
        );
        assert_eq!(
            " memory ".parse::<StorageBackend>().unwrap(),
            StorageBackend::Memory
        );
        assert!("redis".parse::<StorageBackend>().is_err());
    }
}
