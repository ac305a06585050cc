//! HTTP server using axum
//!
//! Exposes the compiler over JSON:
//! - `GET /health` liveness probe with a UTC timestamp
//! - `GET /models` registered model ids grouped by modality
//! - `POST /generate` validate, sanitize and compile a prompt
//!
//! Every route is also mounted under `/api`.

#![cfg(feature = "http-server")]

mod error;
mod handlers;


pub use error::ApiError;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use promptsmith_config::{LimitsConfig, PromptsmithConfig, ServerConfig};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::compiler::PromptCompiler;

/// Shared state handed to every handler
#[derive(Debug, Clone)]
pub struct ServerState {
    pub compiler: PromptCompiler,
    pub limits: Arc<LimitsConfig>,
}

impl ServerState {
    pub fn new(compiler: PromptCompiler, limits: LimitsConfig) -> Self {
        Self {
            compiler,
            limits: Arc::new(limits),
        }
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new(PromptCompiler::default(), LimitsConfig::default())
    }
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/models", get(handlers::models))
        .route("/generate", post(handlers::generate))
        .method_not_allowed_fallback(handlers::method_not_allowed)
}

/// Create the HTTP router
pub fn create_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .merge(routes())
        .nest("/api", routes())
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// CORS policy for the configured origins; `"*"` allows any origin
pub fn cors_layer(config: &ServerConfig) -> Result<CorsLayer> {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if config.allows_any_origin() {
        return Ok(base.allow_origin(AllowOrigin::any()));
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid allowed origin '{origin}'"))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(base.allow_origin(AllowOrigin::list(origins)))
}

/// Bind `addr` and serve until the process is stopped
pub async fn run(config: &PromptsmithConfig, addr: SocketAddr) -> Result<()> {
    let state = ServerState::new(PromptCompiler::default(), config.limits);
    let router = create_router(state, cors_layer(&config.server)?);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(%addr, "promptsmith server listening");
    axum::serve(listener, router)
        .await
        .context("HTTP server terminated unexpectedly")?;
    Ok(())
}
