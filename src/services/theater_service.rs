// src/services/theater_service.rs

use std::sync::Arc;

use validator::Validate;

use crate::{
    common::error::{AppError, Resource},
    db::TheaterStore,
    models::theater::{
        CreateTheaterPayload, NewTheater, Theater, TheaterChanges, UpdateTheaterPayload,
    },
};

#[derive(Clone)]
pub struct TheaterService {
    repo: Arc<dyn TheaterStore>,
}

impl TheaterService {
    pub fn new(repo: Arc<dyn TheaterStore>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, payload: CreateTheaterPayload) -> Result<Theater, AppError> {
        payload.validate()?;
        let theater = self
            .repo
            .insert(NewTheater {
                name: payload.name.trim().to_string(),
                number: payload.number,
                capacity: payload.capacity,
                theater_type: payload.theater_type,
            })
            .await?;
        tracing::info!(theater_id = theater.id, "🏛️ Sala cadastrada: {}", theater.name);
        Ok(theater)
    }

    pub async fn find_all(&self) -> Result<Vec<Theater>, AppError> {
        self.repo.list().await
    }

    pub async fn find_one(&self, id: i32) -> Result<Theater, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::not_found(Resource::Theater, id))
    }

    pub async fn update(
        &self,
        id: i32,
        payload: UpdateTheaterPayload,
    ) -> Result<Theater, AppError> {
        payload.validate()?;
        let changes = TheaterChanges {
            name: payload.name.map(|name| name.trim().to_string()),
            number: payload.number,
            capacity: payload.capacity,
            theater_type: payload.theater_type,
        };
        self.repo
            .update(id, changes)
            .await?
            .ok_or(AppError::not_found(Resource::Theater, id))
    }

    pub async fn remove(&self, id: i32) -> Result<Theater, AppError> {
        let theater = self
            .repo
            .delete(id)
            .await?
            .ok_or(AppError::not_found(Resource::Theater, id))?;
        tracing::info!(theater_id = id, "🗑️ Sala removida: {}", theater.name);
        Ok(theater)
    }
}
