// src/services/movie_service.rs

use std::sync::Arc;

use validator::Validate;

use crate::{
    common::{
        dates::parse_date,
        error::{AppError, Resource},
    },
    db::MovieStore,
    models::movie::{CreateMoviePayload, Movie, MovieChanges, NewMovie, UpdateMoviePayload},
};

#[derive(Clone)]
pub struct MovieService {
    repo: Arc<dyn MovieStore>,
}

impl MovieService {
    pub fn new(repo: Arc<dyn MovieStore>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, payload: CreateMoviePayload) -> Result<Movie, AppError> {
        // Valida campos obrigatórios, duração e formato do pôster
        payload.validate()?;
        let release_date = parse_date(&payload.release_date)?;

        let movie = self
            .repo
            .insert(NewMovie {
                title: payload.title,
                genre: payload.genre,
                rating: payload.rating,
                duration: payload.duration,
                release_date,
                description: payload.description,
                poster: payload.poster,
            })
            .await?;

        tracing::info!(movie_id = movie.id, "🎬 Filme cadastrado: {}", movie.title);
        Ok(movie)
    }

    pub async fn find_all(&self) -> Result<Vec<Movie>, AppError> {
        self.repo.list().await
    }

    pub async fn find_one(&self, id: i32) -> Result<Movie, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::not_found(Resource::Movie, id))
    }

    pub async fn update(&self, id: i32, payload: UpdateMoviePayload) -> Result<Movie, AppError> {
        self.find_one(id).await?;

        payload.validate()?;
        let release_date = payload
            .release_date
            .as_deref()
            .map(parse_date)
            .transpose()?;

        let changes = MovieChanges {
            title: payload.title,
            genre: payload.genre,
            rating: payload.rating,
            duration: payload.duration,
            release_date,
            description: payload.description,
            poster: payload.poster,
        };

        self.repo
            .update(id, changes)
            .await?
            .ok_or(AppError::not_found(Resource::Movie, id))
    }

    /// Remove e devolve o estado anterior do filme.
    pub async fn remove(&self, id: i32) -> Result<Movie, AppError> {
        let movie = self
            .repo
            .delete(id)
            .await?
            .ok_or(AppError::not_found(Resource::Movie, id))?;

        tracing::info!(movie_id = id, "🗑️ Filme removido: {}", movie.title);
        Ok(movie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db::MemoryStore, services::fixtures};
    use chrono::NaiveDate;

    fn service() -> MovieService {
        MovieService::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn create_echoes_the_input_fields() {
        let service = service();
        let mut payload = fixtures::movie_payload("Central do Brasil");
        payload.description = Some("Uma ex-professora escreve cartas na estação.".into());
        payload.poster = Some("data:image/png;base64,iVBORw0KGgo=".into());

        let movie = service.create(payload.clone()).await.unwrap();

        assert!(movie.id > 0);
        assert_eq!(movie.title, payload.title);
        assert_eq!(movie.genre, payload.genre);
        assert_eq!(movie.rating, payload.rating);
        assert_eq!(movie.duration, payload.duration);
        assert_eq!(movie.release_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(movie.description, payload.description);
        assert_eq!(movie.poster, payload.poster);
    }

    #[tokio::test]
    async fn create_rejects_a_poster_that_is_not_an_image() {
        let service = service();
        let mut payload = fixtures::movie_payload("X");
        payload.poster = Some("not-an-image".into());

        let err = service.create(payload).await.unwrap_err();
        match err {
            AppError::ValidationError(errors) => {
                assert!(errors.field_errors().contains_key("poster"));
            }
            other => panic!("esperava erro de validação, veio {other:?}"),
        }
        assert!(service.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_rejects_bad_dates_and_durations() {
        let service = service();

        let mut bad_date = fixtures::movie_payload("X");
        bad_date.release_date = "01/01/2024".into();
        assert!(matches!(
            service.create(bad_date).await,
            Err(AppError::InvalidInput(_))
        ));

        let mut bad_duration = fixtures::movie_payload("X");
        bad_duration.duration = 0;
        assert!(matches!(
            service.create(bad_duration).await,
            Err(AppError::ValidationError(_))
        ));

        let mut blank_title = fixtures::movie_payload("   ");
        blank_title.genre = "Drama".into();
        assert!(matches!(
            service.create(blank_title).await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn find_all_returns_newest_first() {
        let service = service();
        let first = service.create(fixtures::movie_payload("Primeiro")).await.unwrap();
        let second = service.create(fixtures::movie_payload("Segundo")).await.unwrap();

        let ids: Vec<i32> = service.find_all().await.unwrap().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[tokio::test]
    async fn find_one_of_a_missing_id_is_not_found() {
        let err = service().find_one(42).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::NotFound { resource: Resource::Movie, id: 42 }
        ));
    }

    #[tokio::test]
    async fn update_replaces_only_the_given_fields() {
        let service = service();
        let movie = service.create(fixtures::movie_payload("X")).await.unwrap();

        let updated = service
            .update(
                movie.id,
                UpdateMoviePayload {
                    rating: Some("14".into()),
                    release_date: Some("2024-05-20T00:00:00Z".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "X");
        assert_eq!(updated.rating, "14");
        assert_eq!(updated.release_date, NaiveDate::from_ymd_opt(2024, 5, 20).unwrap());
    }

    #[tokio::test]
    async fn update_revalidates_poster_and_checks_existence() {
        let service = service();
        let movie = service.create(fixtures::movie_payload("X")).await.unwrap();

        let bad_poster = UpdateMoviePayload {
            poster: Some("not-an-image".into()),
            ..Default::default()
        };
        assert!(matches!(
            service.update(movie.id, bad_poster).await,
            Err(AppError::ValidationError(_))
        ));
        assert_eq!(service.find_one(movie.id).await.unwrap().poster, None);

        assert!(matches!(
            service.update(999, UpdateMoviePayload::default()).await,
            Err(AppError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn remove_twice_succeeds_then_fails() {
        let service = service();
        let movie = service.create(fixtures::movie_payload("X")).await.unwrap();

        let removed = service.remove(movie.id).await.unwrap();
        assert_eq!(removed, movie);

        assert!(matches!(
            service.remove(movie.id).await,
            Err(AppError::NotFound { resource: Resource::Movie, .. })
        ));
    }
}
