//! promptsmith - compile structured prompts into model-specific prompt text
//!
//! Thin binary entry point that delegates to the CLI handlers.

use anyhow::Result;
use clap::Parser;
use promptsmith_config::load_dotenv;

mod cli;
mod main_helpers;

use cli::args::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env (non-fatal if missing)
    load_dotenv().ok();

    let args = Cli::parse();
    let manager = main_helpers::load_config(&args)?;
    let config = manager.config();

    main_helpers::initialize_tracing(&config.debug).ok();
    if let Some(path) = manager.config_path() {
        tracing::debug!(path = %path.display(), "loaded configuration");
    }

    match &args.command {
        #[cfg(feature = "http-server")]
        Commands::Serve { .. } => cli::handle_serve_command(config).await,
        Commands::Models { json } => cli::handle_models_command(*json),
        Commands::Compile(compile_args) => cli::handle_compile_command(config, compile_args),
    }
}
