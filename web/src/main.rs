use axum::{response::Json, routing::get, Router};
use common::{SiteIdentity, TERMS_OF_USE_PATH};
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

mod controllers;

use controllers::AppState;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_STATIC_DIR: &str = "web/static";

#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: Option<String>,
    pub bind_addr: SocketAddr,
    pub static_dir: String,
}

impl Config {
    fn from_env() -> Result<Self, String> {
        let mut config =
            Self::from_values(env::var("PUBLIC_BASE_URL").ok(), env::var("BIND_ADDR").ok())?;
        if let Ok(static_dir) = env::var("STATIC_DIR") {
            config.static_dir = static_dir;
        }
        Ok(config)
    }

    fn from_values(base_url: Option<String>, bind_addr: Option<String>) -> Result<Self, String> {
        let base_url = base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        if base_url.is_none() {
            log::warn!("PUBLIC_BASE_URL not set, canonical links will be relative");
        }

        let bind_addr = bind_addr.unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .map_err(|e| format!("BIND_ADDR {} is not a socket address: {}", bind_addr, e))?;

        Ok(Config {
            base_url,
            bind_addr,
            static_dir: DEFAULT_STATIC_DIR.to_string(),
        })
    }
}

fn app(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.static_dir);
    Router::new()
        .route(TERMS_OF_USE_PATH, get(controllers::pages::terms_of_use))
        .route("/health", get(health))
        .nest_service("/static", static_dir)
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    dotenv::dotenv().ok();

    log::info!("Starting workplacify web server");

    let config = Config::from_env().map_err(|e| {
        log::error!("Failed to parse environment variables: {}", e);
        e
    })?;

    let bind_addr = config.bind_addr;
    let state = AppState {
        config,
        identity: SiteIdentity::default(),
    };

    let listener = TcpListener::bind(bind_addr).await?;
    log::info!("Server running on http://{}", bind_addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "workplacify-web"
    }))
}
