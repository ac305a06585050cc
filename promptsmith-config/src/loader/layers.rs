use std::path::{Path, PathBuf};

use toml::Value as TomlValue;

use crate::loader::merge_toml_values;

/// Where a configuration layer came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLayerSource {
    /// `promptsmith.toml` found in the workspace root
    Workspace { file: PathBuf },
    /// Explicit file from `--config` or `PROMPTSMITH_CONFIG_PATH`
    File { file: PathBuf },
    /// `PROMPTSMITH_*` environment overrides
    Environment,
    /// Programmatic or CLI-flag overrides
    Runtime,
}

impl ConfigLayerSource {
    /// Backing file of the layer, if any
    pub fn file(&self) -> Option<&Path> {
        match self {
            Self::Workspace { file } | Self::File { file } => Some(file),
            Self::Environment | Self::Runtime => None,
        }
    }
}

/// A single layer of configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigLayerEntry {
    pub source: ConfigLayerSource,
    pub config: TomlValue,
}

impl ConfigLayerEntry {
    pub fn new(source: ConfigLayerSource, config: TomlValue) -> Self {
        Self { source, config }
    }
}

/// Layers ordered from lowest to highest precedence.
#[derive(Debug, Clone, Default)]
pub struct ConfigLayerStack {
    layers: Vec<ConfigLayerEntry>,
}

impl ConfigLayerStack {
    pub fn push(&mut self, layer: ConfigLayerEntry) {
        self.layers.push(layer);
    }

    /// Merge all layers into a single effective table.
    pub fn effective_config(&self) -> TomlValue {
        let mut merged = TomlValue::Table(toml::Table::new());
        for layer in &self.layers {
            merge_toml_values(&mut merged, &layer.config);
        }
        merged
    }

    pub fn layers(&self) -> &[ConfigLayerEntry] {
        &self.layers
    }

    /// File of the highest-precedence file-backed layer
    pub fn last_file(&self) -> Option<&Path> {
        self.layers
            .iter()
            .rev()
            .find_map(|layer| layer.source.file())
    }
}
