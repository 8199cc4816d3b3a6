mod activities;
mod datatypes;
mod registry;
mod settings;

use crate::registry::ActivityRegistry;
use crate::settings::Settings;
use axum::http::{header, Method};
use axum::response::Redirect;
use axum::routing::{get, post};
use axum::{Extension, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("activities_api=debug,tower_http=info")),
        )
        .init();

    let config = Settings::new("config.toml")?;

    info!(?config, "configuration loaded");

    let registry = Arc::new(ActivityRegistry::new());
    let app = app(registry, &config);

    let listener = TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;

    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

fn app(registry: Arc<ActivityRegistry>, settings: &Settings) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/", get(root))
        .route("/activities", get(activities::list_activities))
        .route("/activities/:activity/signup", post(activities::signup))
        .route("/activities/:activity/unsign", post(activities::unsign))
        .nest_service("/static", ServeDir::new(&settings.static_directory))
        .layer(Extension(registry))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn root() -> Redirect {
    Redirect::temporary("/static/index.html")
}
