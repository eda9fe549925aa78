// src/services/session_service.rs

use std::sync::Arc;

use validator::Validate;

use crate::{
    common::{
        dates::parse_date_time,
        error::{AppError, Resource},
    },
    db::{MovieStore, SessionStore, TheaterStore},
    models::session::{
        CreateSessionPayload, NewSession, Session, SessionChanges, SessionDetail,
        UpdateSessionPayload,
    },
};

/// Sessões referenciam um filme e uma sala; toda escrita que toca essas
/// referências é precedida de uma checagem de existência.
#[derive(Clone)]
pub struct SessionService {
    sessions: Arc<dyn SessionStore>,
    movies: Arc<dyn MovieStore>,
    theaters: Arc<dyn TheaterStore>,
}

impl SessionService {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        movies: Arc<dyn MovieStore>,
        theaters: Arc<dyn TheaterStore>,
    ) -> Self {
        Self {
            sessions,
            movies,
            theaters,
        }
    }

    async fn ensure_movie(&self, movie_id: i32) -> Result<(), AppError> {
        match self.movies.find_by_id(movie_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found(Resource::Movie, movie_id)),
        }
    }

    async fn ensure_theater(&self, theater_id: i32) -> Result<(), AppError> {
        match self.theaters.find_by_id(theater_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found(Resource::Theater, theater_id)),
        }
    }

    pub async fn create(&self, payload: CreateSessionPayload) -> Result<Session, AppError> {
        payload.validate()?;
        let date_time = parse_date_time(&payload.date_time)?;

        self.ensure_movie(payload.movie_id).await?;
        self.ensure_theater(payload.theater_id).await?;

        let session = self
            .sessions
            .insert(NewSession {
                date_time,
                price: payload.price,
                format: payload.format,
                language: payload.language,
                movie_id: payload.movie_id,
                theater_id: payload.theater_id,
            })
            .await?;

        tracing::info!(
            session_id = session.id,
            movie_id = session.movie_id,
            theater_id = session.theater_id,
            "🎟️ Sessão agendada para {}",
            session.date_time
        );
        Ok(session)
    }

    pub async fn find_all(&self) -> Result<Vec<SessionDetail>, AppError> {
        self.sessions.list_detailed().await
    }

    pub async fn find_one(&self, id: i32) -> Result<SessionDetail, AppError> {
        self.sessions
            .find_detailed(id)
            .await?
            .ok_or(AppError::not_found(Resource::Session, id))
    }

    pub async fn update(
        &self,
        id: i32,
        payload: UpdateSessionPayload,
    ) -> Result<SessionDetail, AppError> {
        if self.sessions.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found(Resource::Session, id));
        }

        payload.validate()?;
        let date_time = payload
            .date_time
            .as_deref()
            .map(parse_date_time)
            .transpose()?;

        if let Some(movie_id) = payload.movie_id {
            self.ensure_movie(movie_id).await?;
        }
        if let Some(theater_id) = payload.theater_id {
            self.ensure_theater(theater_id).await?;
        }

        let changes = SessionChanges {
            date_time,
            price: payload.price,
            format: payload.format,
            language: payload.language,
            movie_id: payload.movie_id,
            theater_id: payload.theater_id,
        };
        self.sessions
            .update(id, changes)
            .await?
            .ok_or(AppError::not_found(Resource::Session, id))?;

        self.find_one(id).await
    }

    pub async fn remove(&self, id: i32) -> Result<Session, AppError> {
        if self.sessions.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found(Resource::Session, id));
        }

        let session = self
            .sessions
            .delete(id)
            .await?
            .ok_or(AppError::not_found(Resource::Session, id))?;
        tracing::info!(session_id = id, "🗑️ Sessão removida");
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::MemoryStore,
        models::{movie::Movie, theater::Theater},
        services::{fixtures, MovieService, TheaterService},
    };
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    struct Fixture {
        sessions: SessionService,
        movies: MovieService,
        theaters: TheaterService,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(MemoryStore::new());
        Fixture {
            sessions: SessionService::new(store.clone(), store.clone(), store.clone()),
            movies: MovieService::new(store.clone()),
            theaters: TheaterService::new(store),
        }
    }

    async fn seed(f: &Fixture) -> (Movie, Theater) {
        let theater = f.theaters.create(fixtures::theater_payload(1)).await.unwrap();
        let movie = f.movies.create(fixtures::movie_payload("X")).await.unwrap();
        (movie, theater)
    }

    #[tokio::test]
    async fn end_to_end_session_embeds_movie_and_theater() {
        let f = fixture();
        let (movie, theater) = seed(&f).await;

        let session = f
            .sessions
            .create(fixtures::session_payload(movie.id, theater.id))
            .await
            .unwrap();
        assert_eq!(session.date_time, Utc.with_ymd_and_hms(2024, 2, 1, 20, 0, 0).unwrap());
        assert_eq!(session.price, Decimal::new(100, 1));
        assert_eq!(session.format, "2D");
        assert_eq!(session.language, "EN");

        let detail = f.sessions.find_one(session.id).await.unwrap();
        assert_eq!(detail.session, session);
        assert_eq!(detail.movie, movie);
        assert_eq!(detail.theater, theater);
    }

    #[tokio::test]
    async fn create_with_missing_movie_is_not_found_and_persists_nothing() {
        let f = fixture();
        let (_, theater) = seed(&f).await;

        let err = f
            .sessions
            .create(fixtures::session_payload(404, theater.id))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::NotFound { resource: Resource::Movie, id: 404 }
        ));
        assert!(f.sessions.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_with_missing_theater_is_not_found_and_persists_nothing() {
        let f = fixture();
        let (movie, _) = seed(&f).await;

        let err = f
            .sessions
            .create(fixtures::session_payload(movie.id, 77))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::NotFound { resource: Resource::Theater, id: 77 }
        ));
        assert!(f.sessions.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_rejects_bad_date_time_and_negative_price() {
        let f = fixture();
        let (movie, theater) = seed(&f).await;

        let mut bad_date = fixtures::session_payload(movie.id, theater.id);
        bad_date.date_time = "sexta às 20h".into();
        assert!(matches!(
            f.sessions.create(bad_date).await,
            Err(AppError::InvalidInput(_))
        ));

        let mut negative = fixtures::session_payload(movie.id, theater.id);
        negative.price = Decimal::new(-500, 2);
        assert!(matches!(
            f.sessions.create(negative).await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn prices_outside_the_price_column_are_rejected() {
        let f = fixture();
        let (movie, theater) = seed(&f).await;

        let mut huge = fixtures::session_payload(movie.id, theater.id);
        huge.price = Decimal::new(123_456_789_012_345, 3);
        match f.sessions.create(huge).await {
            Err(AppError::ValidationError(errors)) => {
                assert!(errors.field_errors().contains_key("price"));
            }
            other => panic!("esperava erro de validação, veio {other:?}"),
        }

        let mut three_places = fixtures::session_payload(movie.id, theater.id);
        three_places.price = Decimal::new(10_005, 3);
        assert!(matches!(
            f.sessions.create(three_places).await,
            Err(AppError::ValidationError(_))
        ));
        assert!(f.sessions.find_all().await.unwrap().is_empty());

        let session = f
            .sessions
            .create(fixtures::session_payload(movie.id, theater.id))
            .await
            .unwrap();
        let patch = UpdateSessionPayload {
            price: Some(Decimal::new(1_000_000_000, 0)),
            ..Default::default()
        };
        assert!(matches!(
            f.sessions.update(session.id, patch).await,
            Err(AppError::ValidationError(_))
        ));
        assert_eq!(f.sessions.find_one(session.id).await.unwrap().session.price, session.price);
    }

    #[tokio::test]
    async fn update_to_missing_movie_leaves_session_untouched() {
        let f = fixture();
        let (movie, theater) = seed(&f).await;
        let session = f
            .sessions
            .create(fixtures::session_payload(movie.id, theater.id))
            .await
            .unwrap();

        let err = f
            .sessions
            .update(
                session.id,
                UpdateSessionPayload {
                    movie_id: Some(999),
                    price: Some(Decimal::new(1, 0)),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::NotFound { resource: Resource::Movie, id: 999 }
        ));

        let stored = f.sessions.find_one(session.id).await.unwrap();
        assert_eq!(stored.session, session);
    }

    #[tokio::test]
    async fn update_to_missing_theater_is_not_found() {
        let f = fixture();
        let (movie, theater) = seed(&f).await;
        let session = f
            .sessions
            .create(fixtures::session_payload(movie.id, theater.id))
            .await
            .unwrap();

        let err = f
            .sessions
            .update(
                session.id,
                UpdateSessionPayload {
                    theater_id: Some(31),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::NotFound { resource: Resource::Theater, id: 31 }
        ));
    }

    #[tokio::test]
    async fn update_moves_session_to_another_movie() {
        let f = fixture();
        let (movie, theater) = seed(&f).await;
        let other = f.movies.create(fixtures::movie_payload("Y")).await.unwrap();
        let session = f
            .sessions
            .create(fixtures::session_payload(movie.id, theater.id))
            .await
            .unwrap();

        let detail = f
            .sessions
            .update(
                session.id,
                UpdateSessionPayload {
                    movie_id: Some(other.id),
                    language: Some("PT".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(detail.session.movie_id, other.id);
        assert_eq!(detail.movie.title, "Y");
        assert_eq!(detail.session.language, "PT");
        assert_eq!(detail.session.price, session.price);
    }

    #[tokio::test]
    async fn update_of_missing_session_is_not_found() {
        let f = fixture();
        assert!(matches!(
            f.sessions.update(3, UpdateSessionPayload::default()).await,
            Err(AppError::NotFound { resource: Resource::Session, id: 3 })
        ));
    }

    #[tokio::test]
    async fn remove_twice_succeeds_then_fails() {
        let f = fixture();
        let (movie, theater) = seed(&f).await;
        let session = f
            .sessions
            .create(fixtures::session_payload(movie.id, theater.id))
            .await
            .unwrap();

        assert_eq!(f.sessions.remove(session.id).await.unwrap(), session);
        assert!(matches!(
            f.sessions.remove(session.id).await,
            Err(AppError::NotFound { resource: Resource::Session, .. })
        ));
    }

    #[tokio::test]
    async fn referenced_movie_cannot_be_removed() {
        let f = fixture();
        let (movie, theater) = seed(&f).await;
        f.sessions
            .create(fixtures::session_payload(movie.id, theater.id))
            .await
            .unwrap();

        assert!(matches!(
            f.movies.remove(movie.id).await,
            Err(AppError::Conflict(_))
        ));
        assert!(f.movies.find_one(movie.id).await.is_ok());
    }

    #[tokio::test]
    async fn find_all_orders_by_showtime() {
        let f = fixture();
        let (movie, theater) = seed(&f).await;

        let mut late = fixtures::session_payload(movie.id, theater.id);
        late.date_time = "2024-02-01T22:30:00Z".into();
        let late = f.sessions.create(late).await.unwrap();
        let early = f
            .sessions
            .create(fixtures::session_payload(movie.id, theater.id))
            .await
            .unwrap();

        let ids: Vec<i32> = f
            .sessions
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|d| d.session.id)
            .collect();
        assert_eq!(ids, vec![early.id, late.id]);
    }
}
