//! Error types for prompt construction, compilation and request validation

use promptsmith_config::Modality;
use thiserror::Error;

/// Errors raised while building or compiling a canonical prompt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The model is not registered, or is registered under another modality.
    #[error("Unknown model '{model}' for modality '{modality}'")]
    UnknownModel { model: String, modality: Modality },

    /// The payload could not be turned into a prompt of the requested modality.
    #[error("{0}")]
    MalformedPrompt(String),
}

impl CompileError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedPrompt(message.into())
    }
}

/// Rejections produced while validating a generate request.
///
/// `Display` yields the exact message returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Request body is required")]
    MissingBody,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid modality: {0}. Must be one of: text, image, video, audio")]
    InvalidModality(String),

    #[error("Invalid model '{model}' for modality '{modality}'. Available models: {available}")]
    InvalidModel {
        model: String,
        modality: Modality,
        available: String,
    },

    #[error("Payload must be a dictionary")]
    PayloadNotObject,

    #[error("Field '{field}' exceeds maximum length of {max}")]
    FieldTooLong { field: String, max: usize },

    #[error("duration_seconds must be a valid integer")]
    InvalidDuration,

    #[error("duration_seconds must be between {min} and {max}")]
    DurationOutOfRange { min: u32, max: u32 },
}

/// Everything that can go wrong between a raw request and a compiled prompt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error(transparent)]
    Compile(CompileError),
}

impl From<CompileError> for GenerateError {
    fn from(err: CompileError) -> Self {
        match err {
            CompileError::MalformedPrompt(message) => Self::InvalidPayload(message),
            other => Self::Compile(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn validation_messages_are_client_facing() {
        assert_eq!(
            ValidationError::MissingField("payload").to_string(),
            "Missing required field: payload"
        );
        assert_eq!(
            ValidationError::InvalidModel {
                model: "sora".into(),
                modality: Modality::Text,
                available: "gpt-4, claude".into(),
            }
            .to_string(),
            "Invalid model 'sora' for modality 'text'. Available models: gpt-4, claude"
        );
        assert_eq!(
            ValidationError::DurationOutOfRange { min: 1, max: 60 }.to_string(),
            "duration_seconds must be between 1 and 60"
        );
    }

    #[test]
    fn malformed_prompt_becomes_invalid_payload() {
        let err: GenerateError = CompileError::malformed("unexpected field 'foo'").into();
        assert_eq!(err.to_string(), "Invalid payload: unexpected field 'foo'");

        let err: GenerateError = CompileError::UnknownModel {
            model: "nope".into(),
            modality: Modality::Audio,
        }
        .into();
        assert_eq!(err.to_string(), "Unknown model 'nope' for modality 'audio'");
    }
}
