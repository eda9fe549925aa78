// src/admin/api.rs

use std::{marker::PhantomData, sync::Arc};

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::models::{
    movie::{CreateMoviePayload, Movie, UpdateMoviePayload},
    session::{CreateSessionPayload, SessionDetail, UpdateSessionPayload},
    theater::{CreateTheaterPayload, Theater, UpdateTheaterPayload},
    ticket::{CreateTicketPayload, Ticket, UpdateTicketPayload},
    user::{CreateUserPayload, UpdateUserPayload, User},
};

#[derive(Debug, Error)]
pub enum ClientError {
    /// A API respondeu com status de erro; `message` vem do campo "error" do corpo.
    #[error("HTTP {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("Falha de comunicação com a API: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Um recurso REST da API: caminho base e os tipos trafegados.
pub trait ApiResource: Send + Sync + 'static {
    const PATH: &'static str;

    type Record: DeserializeOwned + Clone + Send + Sync;
    type Create: Serialize + Send + Sync;
    type Update: Serialize + Send + Sync;
}

pub struct Movies;
pub struct Theaters;
pub struct Sessions;
pub struct Tickets;
pub struct Users;

impl ApiResource for Movies {
    const PATH: &'static str = "/movies";
    type Record = Movie;
    type Create = CreateMoviePayload;
    type Update = UpdateMoviePayload;
}

impl ApiResource for Theaters {
    const PATH: &'static str = "/theaters";
    type Record = Theater;
    type Create = CreateTheaterPayload;
    type Update = UpdateTheaterPayload;
}

// A listagem de sessões já vem com filme e sala embutidos
impl ApiResource for Sessions {
    const PATH: &'static str = "/sessions";
    type Record = SessionDetail;
    type Create = CreateSessionPayload;
    type Update = UpdateSessionPayload;
}

impl ApiResource for Tickets {
    const PATH: &'static str = "/tickets";
    type Record = Ticket;
    type Create = CreateTicketPayload;
    type Update = UpdateTicketPayload;
}

impl ApiResource for Users {
    const PATH: &'static str = "/users";
    type Record = User;
    type Create = CreateUserPayload;
    type Update = UpdateUserPayload;
}

/// As quatro operações que toda listagem do painel usa.
#[async_trait]
pub trait CrudApi<R: ApiResource>: Send + Sync {
    async fn list(&self) -> Result<Vec<R::Record>, ClientError>;
    async fn create(&self, draft: &R::Create) -> Result<(), ClientError>;
    async fn update(&self, id: i32, patch: &R::Update) -> Result<(), ClientError>;
    async fn remove(&self, id: i32) -> Result<(), ClientError>;
}

#[async_trait]
impl<R: ApiResource, T: CrudApi<R> + ?Sized> CrudApi<R> for Arc<T> {
    async fn list(&self) -> Result<Vec<R::Record>, ClientError> {
        (**self).list().await
    }

    async fn create(&self, draft: &R::Create) -> Result<(), ClientError> {
        (**self).create(draft).await
    }

    async fn update(&self, id: i32, patch: &R::Update) -> Result<(), ClientError> {
        (**self).update(id, patch).await
    }

    async fn remove(&self, id: i32) -> Result<(), ClientError> {
        (**self).remove(id).await
    }
}

pub struct HttpApi<R> {
    client: Client,
    base_url: String,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for HttpApi<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: ApiResource> HttpApi<R> {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Reaproveita um `reqwest::Client` (e seu pool de conexões) entre recursos.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            _resource: PhantomData,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, R::PATH)
    }

    fn item_url(&self, id: i32) -> String {
        format!("{}{}/{}", self.base_url, R::PATH, id)
    }
}

// Converte respostas não-2xx em ClientError::Api, usando a mensagem do corpo
async fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| json.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("erro desconhecido").to_string()
            } else {
                body.trim().to_string()
            }
        });

    tracing::debug!(%status, %message, "API respondeu com erro");
    Err(ClientError::Api { status, message })
}

#[async_trait]
impl<R: ApiResource> CrudApi<R> for HttpApi<R> {
    async fn list(&self) -> Result<Vec<R::Record>, ClientError> {
        let response = self.client.get(self.collection_url()).send().await?;
        let records = ensure_success(response).await?.json().await?;
        Ok(records)
    }

    async fn create(&self, draft: &R::Create) -> Result<(), ClientError> {
        let response = self
            .client
            .post(self.collection_url())
            .json(draft)
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn update(&self, id: i32, patch: &R::Update) -> Result<(), ClientError> {
        let response = self
            .client
            .patch(self.item_url(id))
            .json(patch)
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn remove(&self, id: i32) -> Result<(), ClientError> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}
