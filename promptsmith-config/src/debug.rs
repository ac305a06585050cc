//! Debug and tracing configuration

use serde::{Deserialize, Serialize};

use crate::constants::defaults;

/// Trace level for structured logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TraceLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl TraceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            "trace" => Some(Self::Trace),
            _ => None,
        }
    }
}

impl std::fmt::Display for TraceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Unknown levels fall back to the default instead of failing the whole file.
impl<'de> Deserialize<'de> for TraceLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw).unwrap_or_default())
    }
}

/// Debug and tracing configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DebugConfig {
    /// Enable structured logging for development and troubleshooting
    #[serde(default)]
    pub enable_tracing: bool,

    /// Trace level (error, warn, info, debug, trace)
    #[serde(default)]
    pub trace_level: TraceLevel,

    /// Tracing targets the level applies to.
    /// Examples: "promptsmith", "promptsmith_core::server"
    #[serde(default = "default_trace_targets")]
    pub trace_targets: Vec<String>,
}

fn default_trace_targets() -> Vec<String> {
    defaults::DEFAULT_TRACE_TARGETS
        .iter()
        .map(|target| (*target).to_string())
        .collect()
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            enable_tracing: false,
            trace_level: TraceLevel::Info,
            trace_targets: default_trace_targets(),
        }
    }
}

impl DebugConfig {
    /// Render the configured level and targets as an `EnvFilter` directive string,
    /// e.g. `promptsmith=debug,promptsmith_core=debug`.
    pub fn filter_directives(&self) -> String {
        let level = self.trace_level.as_str();
        if self.trace_targets.is_empty() {
            return level.to_string();
        }
        self.trace_targets
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}
