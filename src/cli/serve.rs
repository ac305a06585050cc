use anyhow::{Context, Result};
use promptsmith_config::PromptsmithConfig;
use promptsmith_core::server;

/// Resolve the configured bind address and run the HTTP server
pub async fn handle_serve_command(config: &PromptsmithConfig) -> Result<()> {
    let bind_address = config.server.bind_address();
    let addr = tokio::net::lookup_host(&bind_address)
        .await
        .with_context(|| format!("Failed to resolve bind address {bind_address}"))?
        .next()
        .with_context(|| format!("No socket address found for {bind_address}"))?;

    tracing::info!(
        origins = %config.server.allowed_origins.join(","),
        max_text_length = config.limits.max_text_length,
        max_duration_seconds = config.limits.max_duration_seconds,
        "starting promptsmith server"
    );

    server::run(config, addr).await
}
