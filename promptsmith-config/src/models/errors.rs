use std::fmt;

use super::{Modality, ModelId};

/// Error type for model and modality parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelParseError {
    InvalidModel(String),
    InvalidModality(String),
}

impl fmt::Display for ModelParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelParseError::InvalidModel(model) => {
                let supported = ModelId::all_models()
                    .iter()
                    .map(ModelId::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "Invalid model identifier: '{model}'. Supported models: {supported}"
                )
            }
            ModelParseError::InvalidModality(modality) => {
                let supported = Modality::ALL
                    .iter()
                    .map(|m| m.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "Invalid modality: {modality}. Must be one of: {supported}"
                )
            }
        }
    }
}

impl std::error::Error for ModelParseError {}
