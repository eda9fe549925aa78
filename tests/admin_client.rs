// Painel administrativo contra um servidor de verdade (armazenamento em memória)

use chrono::Utc;
use rust_decimal::Decimal;
use tokio::net::TcpListener;

use cinema_backend::{
    admin::{
        load_overview,
        pages::{movie_listing_config, session_listing_config, theater_listing_config},
        ClientError, CrudApi, EntityListing, HttpApi, Movies, Sessions, Theaters,
    },
    config::AppState,
    models::{
        movie::{CreateMoviePayload, UpdateMoviePayload},
        session::CreateSessionPayload,
        theater::{CreateTheaterPayload, TheaterType},
    },
    routes,
};

async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = routes::app(AppState::in_memory(4));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn movie(title: &str) -> CreateMoviePayload {
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

fn theater(number: i32) -> CreateTheaterPayload {
    CreateTheaterPayload {
        name: format!("Sala {number}"),
        number,
        capacity: 100,
        theater_type: TheaterType::TwoD,
    }
}

#[tokio::test]
async fn listings_round_trip_through_the_api() {
    let base_url = spawn_server().await;

    let mut movies = EntityListing::new(movie_listing_config(), HttpApi::<Movies>::new(&base_url));
    assert!(movies.load().await);
    assert!(movies.rows().is_empty());

    assert!(movies.save_new(&movie("Central do Brasil")).await);
    assert!(movies.save_new(&movie("Cidade de Deus")).await);
    assert_eq!(movies.rows().len(), 2);

    movies.set_search("cidade");
    assert_eq!(movies.filtered().len(), 1);
    assert!(movies.render().contains("Cidade de Deus"));

    let id = movies.filtered()[0].id;
    let patch = UpdateMoviePayload {
        duration: Some(130),
        ..Default::default()
    };
    assert!(movies.save_existing(id, &patch).await);
    assert_eq!(movies.filtered()[0].duration, 130);

    assert!(movies.delete(id).await);
    assert_eq!(movies.rows().len(), 1);

    // segunda remoção do mesmo ID: 404 vira alerta
    assert!(!movies.delete(id).await);
    let alert = movies.alert().unwrap();
    assert!(alert.starts_with("Failed to delete movie: HTTP 404"), "{alert}");
    assert!(alert.contains(&format!("Filme com ID #{id} não encontrado")));
}

#[tokio::test]
async fn backend_validation_errors_become_alerts() {
    let base_url = spawn_server().await;
    let mut movies = EntityListing::new(movie_listing_config(), HttpApi::<Movies>::new(&base_url));

    let mut draft = movie("X");
    draft.poster = Some("not-an-image".to_string());
    assert!(!movies.save_new(&draft).await);
    assert!(movies.alert().unwrap().contains("HTTP 400"));

    movies.dismiss_alert();
    assert!(movies.alert().is_none());
    assert!(movies.rows().is_empty());
}

#[tokio::test]
async fn sessions_list_with_movie_and_theater() {
    let base_url = spawn_server().await;

    let mut theaters =
        EntityListing::new(theater_listing_config(), HttpApi::<Theaters>::new(&base_url));
    assert!(theaters.save_new(&theater(1)).await);
    let theater_id = theaters.rows()[0].id;

    let movie_api = HttpApi::<Movies>::new(&base_url);
    movie_api.create(&movie("X")).await.unwrap();
    let movie_id = movie_api.list().await.unwrap()[0].id;

    let mut sessions =
        EntityListing::new(session_listing_config(), HttpApi::<Sessions>::new(&base_url));
    let draft = CreateSessionPayload {
        date_time: "2099-02-01T20:00:00Z".to_string(),
        price: Decimal::new(100, 1),
        format: "2D".to_string(),
        language: "EN".to_string(),
        movie_id,
        theater_id,
    };
    assert!(sessions.save_new(&draft).await);

    let detail = &sessions.rows()[0];
    assert_eq!(detail.movie.title, "X");
    assert_eq!(detail.theater.theater_type, TheaterType::TwoD);
    assert_eq!(detail.session.price, Decimal::new(100, 1));

    sessions.set_search("sala 1");
    assert_eq!(sessions.filtered().len(), 1);

    // filme com sessão não pode ser removido
    let mut movies = EntityListing::new(movie_listing_config(), movie_api);
    assert!(!movies.delete(movie_id).await);
    assert!(movies.alert().unwrap().contains("HTTP 409"));

    let overview = load_overview(
        &HttpApi::<Movies>::new(&base_url),
        &HttpApi::<Sessions>::new(&base_url),
        &HttpApi::<Theaters>::new(&base_url),
    )
    .await
    .unwrap();
    assert_eq!(overview.movies.len(), 1);
    assert_eq!(overview.theaters.len(), 1);
    assert_eq!(overview.upcoming_sessions(Utc::now()).len(), 1);
}

#[tokio::test]
async fn unreachable_api_keeps_previous_rows() {
    // porta reservada e liberada: ninguém escuta nela
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpApi::<Theaters>::new(&format!("http://{addr}"));
    assert!(matches!(api.list().await, Err(ClientError::Transport(_))));

    let mut theaters = EntityListing::new(theater_listing_config(), api);
    assert!(!theaters.load().await);
    assert!(theaters.rows().is_empty());
    assert!(theaters
        .alert()
        .unwrap()
        .starts_with("Could not load Theaters data:"));
}
