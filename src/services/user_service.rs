// src/services/user_service.rs

use std::sync::Arc;

use bcrypt::hash;
use validator::Validate;

use crate::{
    common::error::{AppError, Resource},
    db::UserStore,
    models::user::{CreateUserPayload, NewUser, UpdateUserPayload, User, UserChanges},
};

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserStore>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserStore>, bcrypt_cost: u32) -> Self {
        Self { repo, bcrypt_cost }
    }

    // O bcrypt é caro: roda numa thread de bloqueio para não travar o runtime
    async fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let password_clone = password.to_owned();
        let cost = self.bcrypt_cost;
        let hashed = tokio::task::spawn_blocking(move || hash(&password_clone, cost))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;
        Ok(hashed)
    }

    pub async fn create(&self, payload: CreateUserPayload) -> Result<User, AppError> {
        payload.validate()?;
        let password_hash = self.hash_password(&payload.password).await?;

        let user = self
            .repo
            .insert(NewUser {
                email: payload.email.trim().to_lowercase(),
                name: payload.name,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = user.id, "👤 Usuário criado: {}", user.email);
        Ok(user)
    }

    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        self.repo.list().await
    }

    pub async fn find_one(&self, id: i32) -> Result<User, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::not_found(Resource::User, id))
    }

    pub async fn update(&self, id: i32, payload: UpdateUserPayload) -> Result<User, AppError> {
        self.find_one(id).await?;
        payload.validate()?;

        let password_hash = match payload.password.as_deref() {
            Some(password) => Some(self.hash_password(password).await?),
            None => None,
        };

        let changes = UserChanges {
            email: payload.email.map(|email| email.trim().to_lowercase()),
            name: payload.name,
            password_hash,
        };
        self.repo
            .update(id, changes)
            .await?
            .ok_or(AppError::not_found(Resource::User, id))
    }

    pub async fn remove(&self, id: i32) -> Result<User, AppError> {
        let user = self
            .repo
            .delete(id)
            .await?
            .ok_or(AppError::not_found(Resource::User, id))?;
        tracing::info!(user_id = id, "🗑️ Usuário removido");
        Ok(user)
    }
}
