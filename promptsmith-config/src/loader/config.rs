use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::debug::DebugConfig;
use crate::limits::LimitsConfig;
use crate::server::ServerConfig;

/// Root of `promptsmith.toml`
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct PromptsmithConfig {
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Request input limits
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Debug and tracing settings
    #[serde(default)]
    pub debug: DebugConfig,
}

impl PromptsmithConfig {
    pub fn validate(&self) -> Result<()> {
        self.server
            .validate()
            .context("Invalid server configuration")?;

        self.limits
            .validate()
            .context("Invalid limits configuration")?;

        Ok(())
    }
}
