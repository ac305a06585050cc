//! Generate request validation and sanitization
//!
//! Untrusted input arrives as raw JSON. [`GenerateRequest::from_body`] checks
//! it in a fixed order and stops at the first problem, so clients always see
//! the same message for the same mistake:
//!
//! 1. body present and a non-empty JSON object
//! 2. `modality` present and one of `text`, `image`, `video`, `audio`
//! 3. `model` present and registered under that modality
//! 4. `payload` present and an object
//! 5. every string value within the configured length
//! 6. for video, `duration_seconds` an integer within range
//!
//! Accepted payloads are then sanitized before a prompt is built from them.

use promptsmith_config::{LimitsConfig, Modality};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::compiler::PromptCompiler;
use crate::errors::{GenerateError, ValidationError};
use crate::registry::AdapterRegistry;
use crate::schema::CanonicalPrompt;

const DURATION_FIELD: &str = "duration_seconds";

/// A validated, sanitized generate request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub modality: Modality,
    pub model: String,
    /// Sanitized payload; a video duration is normalized to a JSON integer
    pub payload: Map<String, Value>,
}

/// Successful generate result, serialized as the response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateResponse {
    pub prompt: String,
    pub model: String,
    pub modality: Modality,
}

impl GenerateRequest {
    /// Validate a raw request body.
    ///
    /// An empty or unparseable body is reported as a missing body.
    pub fn from_body(body: &[u8], limits: &LimitsConfig) -> Result<Self, ValidationError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(ValidationError::MissingBody);
        }
        let value: Value =
            serde_json::from_slice(body).map_err(|_| ValidationError::MissingBody)?;
        Self::from_value(value, limits)
    }

    pub fn from_value(value: Value, limits: &LimitsConfig) -> Result<Self, ValidationError> {
        let Value::Object(mut data) = value else {
            return Err(ValidationError::MissingBody);
        };
        if data.is_empty() {
            return Err(ValidationError::MissingBody);
        }

        let modality = match data.get("modality") {
            Some(value) if !is_falsy(value) => parse_modality(value)?,
            _ => return Err(ValidationError::MissingField("modality")),
        };

        let model = match data.get("model") {
            Some(value) if !is_falsy(value) => validate_model(value, modality)?,
            _ => return Err(ValidationError::MissingField("model")),
        };

        let mut payload = match data.remove("payload") {
            Some(Value::Object(payload)) if !payload.is_empty() => payload,
            Some(value) if !is_falsy(&value) => return Err(ValidationError::PayloadNotObject),
            _ => return Err(ValidationError::MissingField("payload")),
        };

        check_lengths(&payload, limits.max_text_length)?;

        if modality == Modality::Video
            && let Some(raw) = payload.get(DURATION_FIELD)
        {
            let seconds = parse_duration(raw, limits)?;
            payload.insert(DURATION_FIELD.to_string(), Value::from(seconds));
        }

        sanitize_payload(&mut payload, limits.max_text_length);

        Ok(Self {
            modality,
            model,
            payload,
        })
    }

    /// Build the canonical prompt described by the payload
    pub fn prompt(&self) -> Result<CanonicalPrompt, GenerateError> {
        Ok(CanonicalPrompt::from_payload(
            self.modality,
            self.payload.clone(),
        )?)
    }
}

/// Build and compile the prompt for a validated request
pub fn generate(
    request: &GenerateRequest,
    compiler: &PromptCompiler,
) -> Result<GenerateResponse, GenerateError> {
    let prompt = request.prompt()?;
    let compiled = compiler.compile(&prompt, &request.model)?;
    Ok(GenerateResponse {
        prompt: compiled,
        model: request.model.clone(),
        modality: request.modality,
    })
}

/// Values a client may send to mean "not provided"
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Scalars render bare in messages; everything else as JSON
fn describe(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn parse_modality(value: &Value) -> Result<Modality, ValidationError> {
    value
        .as_str()
        .and_then(|text| text.parse().ok())
        .ok_or_else(|| ValidationError::InvalidModality(describe(value)))
}

fn validate_model(value: &Value, modality: Modality) -> Result<String, ValidationError> {
    let available = AdapterRegistry::global().models_for(modality);
    match value.as_str() {
        Some(model) if available.contains(&model) => Ok(model.to_string()),
        _ => Err(ValidationError::InvalidModel {
            model: describe(value),
            modality,
            available: available.join(", "),
        }),
    }
}

fn check_lengths(payload: &Map<String, Value>, max: usize) -> Result<(), ValidationError> {
    for (key, value) in payload {
        if let Value::String(text) = value
            && text.chars().count() > max
        {
            return Err(ValidationError::FieldTooLong {
                field: key.clone(),
                max,
            });
        }
    }
    Ok(())
}

/// Accepts integers, floats (truncated) and numeric strings.
fn parse_duration(value: &Value, limits: &LimitsConfig) -> Result<u32, ValidationError> {
    let seconds: i128 = match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                i128::from(int)
            } else if let Some(int) = number.as_u64() {
                i128::from(int)
            } else {
                match number.as_f64() {
                    Some(float) if float.is_finite() => float.trunc() as i128,
                    _ => return Err(ValidationError::InvalidDuration),
                }
            }
        }
        Value::String(text) => text
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidDuration)?,
        _ => return Err(ValidationError::InvalidDuration),
    };

    let min = limits.min_duration_seconds();
    let max = limits.max_duration_seconds;
    if seconds < i128::from(min) || seconds > i128::from(max) {
        return Err(ValidationError::DurationOutOfRange { min, max });
    }
    u32::try_from(seconds).map_err(|_| ValidationError::DurationOutOfRange { min, max })
}

/// Trim, drop control characters other than newline and tab, and cap every
/// string (top level and inside lists) at `max` characters.
pub fn sanitize_payload(payload: &mut Map<String, Value>, max: usize) {
    for value in payload.values_mut() {
        match value {
            Value::String(text) => *text = sanitize_text(text, max),
            Value::Array(items) => {
                for item in items {
                    if let Value::String(text) = item {
                        *text = sanitize_text(text, max);
                    }
                }
            }
            _ => {}
        }
    }
}

fn sanitize_text(text: &str, max: usize) -> String {
    let cleaned: String = text
        .chars()
        .filter(|ch| !ch.is_control() || matches!(ch, '\n' | '\t'))
        .collect();
    cleaned.trim().chars().take(max).collect()
}
