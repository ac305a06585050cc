use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::constants::{defaults, env};
use crate::loader::config::PromptsmithConfig;
use crate::loader::layers::{ConfigLayerEntry, ConfigLayerSource, ConfigLayerStack};

/// Configuration manager for loading and validating configurations
#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub(crate) config: PromptsmithConfig,
    config_path: Option<PathBuf>,
    workspace_root: Option<PathBuf>,
    pub(crate) layer_stack: ConfigLayerStack,
}

impl ConfigManager {
    /// Load configuration from the default locations
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::env_config_path() {
            return Self::load_from_file(&config_path).with_context(|| {
                format!(
                    "Failed to load configuration from {}={}",
                    env::CONFIG_PATH,
                    config_path.display()
                )
            });
        }

        let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
        Self::load_from_workspace(cwd)
    }

    /// Path named by `PROMPTSMITH_CONFIG_PATH`, when set and non-empty
    pub fn env_config_path() -> Option<PathBuf> {
        std::env::var(env::CONFIG_PATH)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    /// Load configuration from a workspace directory.
    ///
    /// A missing `promptsmith.toml` is not an error: defaults apply.
    pub fn load_from_workspace(workspace: impl AsRef<Path>) -> Result<Self> {
        let workspace_root = workspace.as_ref().to_path_buf();
        let mut layer_stack = ConfigLayerStack::default();

        let workspace_config_path = workspace_root.join(defaults::CONFIG_FILE_NAME);
        if workspace_config_path.is_file() {
            let toml = Self::load_toml_from_file(&workspace_config_path)?;
            layer_stack.push(ConfigLayerEntry::new(
                ConfigLayerSource::Workspace {
                    file: workspace_config_path,
                },
                toml,
            ));
        }

        Self::from_layers(layer_stack, Some(workspace_root))
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut layer_stack = ConfigLayerStack::default();

        let toml = Self::load_toml_from_file(path)?;
        layer_stack.push(ConfigLayerEntry::new(
            ConfigLayerSource::File {
                file: path.to_path_buf(),
            },
            toml,
        ));

        Self::from_layers(layer_stack, path.parent().map(Path::to_path_buf))
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    fn from_layers(
        mut layer_stack: ConfigLayerStack,
        workspace_root: Option<PathBuf>,
    ) -> Result<Self> {
        if let Some(overrides) = Self::environment_layer(|key| std::env::var(key).ok())? {
            layer_stack.push(ConfigLayerEntry::new(
                ConfigLayerSource::Environment,
                overrides,
            ));
        }

        let config = Self::resolve(&layer_stack)?;
        let config_path = layer_stack.last_file().map(Path::to_path_buf);

        tracing::debug!(
            layers = layer_stack.layers().len(),
            config_path = ?config_path,
            workspace_root = ?workspace_root,
            "configuration loaded"
        );

        Ok(Self {
            config,
            config_path,
            workspace_root,
            layer_stack,
        })
    }

    /// Deserialize and validate the merged view of `layer_stack`.
    pub(crate) fn resolve(layer_stack: &ConfigLayerStack) -> Result<PromptsmithConfig> {
        let config: PromptsmithConfig = layer_stack
            .effective_config()
            .try_into()
            .context("Failed to deserialize effective configuration")?;

        config
            .validate()
            .context("Configuration failed validation")?;

        Ok(config)
    }

    /// Build the `PROMPTSMITH_*` override table from `lookup`.
    ///
    /// Returns `None` when no override variable is set.
    pub(crate) fn environment_layer<F>(lookup: F) -> Result<Option<toml::Value>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut server = toml::Table::new();

        if let Some(host) = read(env::HOST) {
            server.insert("host".to_string(), toml::Value::String(host));
        }

        if let Some(raw_port) = read(env::PORT) {
            let port: u16 = raw_port
                .parse()
                .with_context(|| format!("Invalid {} value '{raw_port}'", env::PORT))?;
            server.insert("port".to_string(), toml::Value::Integer(i64::from(port)));
        }

        if let Some(raw_origins) = read(env::ALLOWED_ORIGINS) {
            let origins = raw_origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(|origin| toml::Value::String(origin.to_string()))
                .collect();
            server.insert("allowed_origins".to_string(), toml::Value::Array(origins));
        }

        if server.is_empty() {
            return Ok(None);
        }

        let mut root = toml::Table::new();
        root.insert("server".to_string(), toml::Value::Table(server));
        Ok(Some(toml::Value::Table(root)))
    }

    fn load_toml_from_file(path: &Path) -> Result<toml::Value> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let value: toml::Value = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(value)
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &PromptsmithConfig {
        &self.config
    }

    /// Get the configuration file path (if loaded from file)
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    #[cfg(test)]
    pub(crate) fn workspace_root(&self) -> Option<&Path> {
        self.workspace_root.as_deref()
    }

    /// Get the configuration layer stack
    pub fn layer_stack(&self) -> &ConfigLayerStack {
        &self.layer_stack
    }
}
