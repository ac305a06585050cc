use anyhow::{Context, Result};
use promptsmith_config::{ConfigBuilder, ConfigManager, DebugConfig};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use crate::cli::args::Cli;

/// Resolve configuration from the CLI flags, the environment and
/// `promptsmith.toml`, applying any command-line overrides last.
pub(crate) fn load_config(args: &Cli) -> Result<ConfigManager> {
    let mut builder = ConfigBuilder::new();
    if let Some(workspace) = &args.workspace {
        builder = builder.workspace(workspace.clone());
    }
    if let Some(config) = &args.config {
        builder = builder.config_file(config.clone());
    }
    for (key, value) in args.command.config_overrides() {
        builder = builder.runtime_override(key, value);
    }

    builder.build().context("Failed to load promptsmith configuration")
}

/// `RUST_LOG` takes precedence; otherwise the `[debug]` section builds the filter.
/// Logs go to stderr so `compile` output stays clean on stdout.
pub(crate) fn initialize_tracing(debug: &DebugConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(debug.filter_directives())
            .context("Invalid tracing filter in [debug] configuration")?,
    };

    let span_events = if debug.enable_tracing {
        FmtSpan::FULL
    } else {
        FmtSpan::NONE
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(span_events)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to initialize tracing: {err}"))?;

    if debug.enable_tracing {
        let directives = debug.filter_directives();
        tracing::info!(%directives, "Debug tracing enabled");
    }

    Ok(())
}
