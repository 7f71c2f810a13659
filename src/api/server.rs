use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::api::handlers::{
    get_influencer_handler, list_influencers_handler, refresh_influencers_handler,
    research_handler, search_claims_handler,
};
use crate::db;
use crate::llm::client::{ModelClient, OpenAiClient};

/// Everything a handler needs, passed explicitly instead of living in
/// module-level statics.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub model: Arc<dyn ModelClient>,
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn,hyper=warn,tower=warn")),
        )
        .with_target(false)
        .init();
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Destructive catalog refresh
        .route("/api/influencers", get(refresh_influencers_handler))
        // Reads from the store
        .route("/api/influencers/db", get(list_influencers_handler))
        .route("/api/influencers/{id}", get(get_influencer_handler))
        // Model-backed searches, not persisted
        .route("/api/search-claims", post(search_claims_handler))
        .route("/api/research", post(research_handler))
        // Health check endpoint
        .route("/health", get(health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn health_check() -> &'static str {
    "OK"
}

pub async fn run_server() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting influencer-scorer server");

    let pool = db::create_pool().await?;
    db::run_migrations(&pool).await?;

    let model = Arc::new(
        OpenAiClient::from_env().context("OPENAI_API_KEY environment variable must be set")?,
    );
    let app = create_app(AppState { pool, model });

    let port = env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()?;
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("Server listening on {}", addr);

    let shutdown = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C signal handler");
        info!("Shutting down gracefully...");
    };

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
