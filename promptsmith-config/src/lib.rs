//! # promptsmith-config
//!
//! Shared identifiers and configuration loading for promptsmith.
//!
//! - `models`: the closed set of target model identifiers ([`ModelId`]) and
//!   the [`Modality`] each one belongs to.
//! - `constants`: model id strings and server/limit defaults.
//! - `loader`: layered `promptsmith.toml` loading with environment and
//!   runtime overrides ([`ConfigManager`], [`ConfigBuilder`]).

pub mod constants;
pub mod debug;
pub mod limits;
pub mod loader;
pub mod models;
pub mod server;

pub use debug::{DebugConfig, TraceLevel};
pub use limits::LimitsConfig;
pub use loader::{ConfigBuilder, ConfigManager, PromptsmithConfig};
pub use models::{Modality, ModelId, ModelParseError};
pub use server::ServerConfig;

/// Load `.env` from the current directory when present.
pub fn load_dotenv() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded environment file");
            Ok(())
        }
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(anyhow::anyhow!("Failed to load .env file: {err}")),
    }
}
