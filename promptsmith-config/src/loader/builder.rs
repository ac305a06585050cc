use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::loader::layers::{ConfigLayerEntry, ConfigLayerSource};
use crate::loader::manager::ConfigManager;

/// Builder for creating a [`ConfigManager`] with custom overrides.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    workspace: Option<PathBuf>,
    config_file: Option<PathBuf>,
    runtime_overrides: Vec<(String, toml::Value)>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the workspace directory searched for `promptsmith.toml`.
    pub fn workspace(mut self, path: PathBuf) -> Self {
        self.workspace = Some(path);
        self
    }

    /// Use a specific configuration file instead of the workspace config.
    ///
    /// `PROMPTSMITH_CONFIG_PATH` still wins when it is set.
    pub fn config_file(mut self, path: PathBuf) -> Self {
        self.config_file = Some(path);
        self
    }

    /// Add a runtime override (e.g., `"server.port"`, `8080`).
    pub fn runtime_override(mut self, key: impl Into<String>, value: toml::Value) -> Self {
        self.runtime_overrides.push((key.into(), value));
        self
    }

    /// Add runtime overrides from string pairs.
    ///
    /// Values are parsed as TOML. If parsing fails, they are treated as strings.
    pub fn runtime_overrides(mut self, overrides: &[(String, String)]) -> Self {
        for (key, value) in overrides {
            let toml_value = value
                .parse::<toml::Value>()
                .unwrap_or_else(|_| toml::Value::String(value.clone()));
            self.runtime_overrides.push((key.clone(), toml_value));
        }
        self
    }

    /// Build the [`ConfigManager`].
    pub fn build(self) -> Result<ConfigManager> {
        let mut manager = match ConfigManager::env_config_path().or(self.config_file) {
            Some(config_file) => ConfigManager::load_from_file(config_file)?,
            None => {
                let workspace = match self.workspace {
                    Some(workspace) => workspace,
                    None => std::env::current_dir()
                        .context("Failed to resolve current directory")?,
                };
                ConfigManager::load_from_workspace(workspace)?
            }
        };

        if !self.runtime_overrides.is_empty() {
            let mut runtime_toml = toml::Table::new();
            for (key, value) in self.runtime_overrides {
                Self::insert_dotted_key(&mut runtime_toml, &key, value);
            }

            manager.layer_stack.push(ConfigLayerEntry::new(
                ConfigLayerSource::Runtime,
                toml::Value::Table(runtime_toml),
            ));

            manager.config = ConfigManager::resolve(&manager.layer_stack)
                .context("Configuration failed validation after runtime overrides")?;
        }

        Ok(manager)
    }

    pub(crate) fn insert_dotted_key(table: &mut toml::Table, key: &str, value: toml::Value) {
        let mut parts = key.split('.').peekable();
        let mut current = table;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                current.insert(part.to_string(), value);
                return;
            }

            let entry = current
                .entry(part.to_string())
                .or_insert(toml::Value::Table(toml::Table::new()));
            if !entry.is_table() {
                *entry = toml::Value::Table(toml::Table::new());
            }
            let toml::Value::Table(next) = entry else {
                return;
            };
            current = next;
        }
    }
}
