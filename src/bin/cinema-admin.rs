// src/bin/cinema-admin.rs
//
// Uso:
//   cinema-admin overview
//   cinema-admin <movies|theaters|sessions|tickets|users> [busca]
//   cinema-admin delete <entidade> <id>
//
// A URL da API vem de CINEMA_API_URL (padrão: http://localhost:3000).

use std::env;

use anyhow::{bail, Context};
use chrono::Utc;
use reqwest::Client;
use tracing_subscriber::EnvFilter;

use cinema_backend::admin::{
    load_overview,
    pages::{
        movie_listing_config, session_listing_config, theater_listing_config,
        ticket_listing_config, user_listing_config,
    },
    ApiResource, CrudApi, EntityListing, HttpApi, ListingConfig, Movies, Sessions, Theaters,
    Tickets, Users,
};

const DEFAULT_API_URL: &str = "http://localhost:3000";

const USAGE: &str = "uso: cinema-admin [overview | <movies|theaters|sessions|tickets|users> [busca] | delete <entidade> <id>]";

enum Command {
    Overview,
    List { entity: String, search: Option<String> },
    Delete { entity: String, id: i32 },
}

fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    match args {
        [] => Ok(Command::Overview),
        [cmd] if cmd == "overview" => Ok(Command::Overview),
        [cmd, entity, id] if cmd == "delete" => {
            let id = id
                .parse()
                .with_context(|| format!("ID inválido: '{id}'"))?;
            Ok(Command::Delete {
                entity: entity.clone(),
                id,
            })
        }
        [entity] => Ok(Command::List {
            entity: entity.clone(),
            search: None,
        }),
        [entity, search @ ..] if entity != "delete" => Ok(Command::List {
            entity: entity.clone(),
            search: Some(search.join(" ")),
        }),
        _ => bail!("{USAGE}"),
    }
}

async fn run_listing<R, A>(
    config: ListingConfig<R::Record>,
    api: A,
    search: Option<String>,
) -> anyhow::Result<()>
where
    R: ApiResource,
    A: CrudApi<R>,
{
    let mut listing: EntityListing<R, A> = EntityListing::new(config, api);
    let loaded = listing.load().await;
    if let Some(term) = search {
        listing.set_search(term);
    }
    print!("{}", listing.render());

    if !loaded {
        bail!("não foi possível carregar os dados");
    }
    Ok(())
}

async fn run_delete<R, A>(config: ListingConfig<R::Record>, api: A, id: i32) -> anyhow::Result<()>
where
    R: ApiResource,
    A: CrudApi<R>,
{
    let entity_name = config.entity_name;
    let mut listing: EntityListing<R, A> = EntityListing::new(config, api);
    if !listing.delete(id).await {
        bail!("{}", listing.alert().unwrap_or("falha ao remover o registro"));
    }

    println!("{entity_name} #{id} removido.");
    print!("{}", listing.render());
    Ok(())
}

async fn dispatch(client: Client, base_url: &str, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Overview => {
            let overview = load_overview(
                &HttpApi::<Movies>::with_client(client.clone(), base_url),
                &HttpApi::<Sessions>::with_client(client.clone(), base_url),
                &HttpApi::<Theaters>::with_client(client, base_url),
            )
            .await
            .context("Falha ao carregar o resumo")?;
            print!("{}", overview.render(Utc::now()));
            Ok(())
        }
        Command::List { entity, search } => match entity.as_str() {
            "movies" => {
                let api = HttpApi::<Movies>::with_client(client, base_url);
                run_listing::<Movies, _>(movie_listing_config(), api, search).await
            }
            "theaters" => {
                let api = HttpApi::<Theaters>::with_client(client, base_url);
                run_listing::<Theaters, _>(theater_listing_config(), api, search).await
            }
            "sessions" => {
                let api = HttpApi::<Sessions>::with_client(client, base_url);
                run_listing::<Sessions, _>(session_listing_config(), api, search).await
            }
            "tickets" => {
                let api = HttpApi::<Tickets>::with_client(client, base_url);
                run_listing::<Tickets, _>(ticket_listing_config(), api, search).await
            }
            "users" => {
                let api = HttpApi::<Users>::with_client(client, base_url);
                run_listing::<Users, _>(user_listing_config(), api, search).await
            }
            other => bail!("entidade desconhecida: '{other}'\n{USAGE}"),
        },
        Command::Delete { entity, id } => match entity.as_str() {
            "movies" => {
                let api = HttpApi::<Movies>::with_client(client, base_url);
                run_delete::<Movies, _>(movie_listing_config(), api, id).await
            }
            "theaters" => {
                let api = HttpApi::<Theaters>::with_client(client, base_url);
                run_delete::<Theaters, _>(theater_listing_config(), api, id).await
            }
            "sessions" => {
                let api = HttpApi::<Sessions>::with_client(client, base_url);
                run_delete::<Sessions, _>(session_listing_config(), api, id).await
            }
            "tickets" => {
                let api = HttpApi::<Tickets>::with_client(client, base_url);
                run_delete::<Tickets, _>(ticket_listing_config(), api, id).await
            }
            "users" => {
                let api = HttpApi::<Users>::with_client(client, base_url);
                run_delete::<Users, _>(user_listing_config(), api, id).await
            }
            other => bail!("entidade desconhecida: '{other}'\n{USAGE}"),
        },
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    dotenvy::dotenv().ok();
    let base_url = env::var("CINEMA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

    let args: Vec<String> = env::args().skip(1).collect();
    let command = parse_args(&args)?;

    dispatch(Client::new(), &base_url, command).await
}
