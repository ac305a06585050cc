//! Canonical prompt model
//!
//! A canonical prompt describes *what* the user wants independently of any
//! target model. Each modality extends the shared [`PromptBase`] with its own
//! optional attributes; [`CanonicalPrompt`] tags a prompt with its modality so
//! the compiler can refuse to route it to an adapter of another kind.
//!
//! Optional attributes follow one rule everywhere: `None`, an empty string and
//! an empty list all mean "absent", and adapters omit the matching clause.

use promptsmith_config::Modality;
use promptsmith_config::constants::defaults;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::errors::CompileError;

/// Keys shared by every prompt payload
pub const BASE_FIELDS: &[&str] = &[
    "goal",
    "subject",
    "style",
    "constraints",
    "negative_constraints",
    "quality_level",
];

pub const TEXT_FIELDS: &[&str] = &["task_type", "tone", "format", "length", "context"];

pub const IMAGE_FIELDS: &[&str] = &["environment", "lighting", "camera", "mood", "aspect_ratio"];

pub const VIDEO_FIELDS: &[&str] = &[
    "scene",
    "action",
    "camera_motion",
    "lighting",
    "duration_seconds",
    "realism_level",
];

pub const VOICE_FIELDS: &[&str] = &[
    "voice_gender",
    "age_range",
    "accent",
    "emotion",
    "pace",
    "use_case",
];

/// Attributes shared by prompts of every modality
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptBase {
    /// What the output should accomplish. Required for text prompts.
    #[serde(default, deserialize_with = "null_as_default")]
    pub goal: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subject: String,
    #[serde(default)]
    pub style: Option<String>,
    /// Things the output must contain, in order
    #[serde(default, deserialize_with = "null_as_default")]
    pub constraints: Vec<String>,
    /// Things the output must avoid, in order
    #[serde(default, deserialize_with = "null_as_default")]
    pub negative_constraints: Vec<String>,
    #[serde(default)]
    pub quality_level: Option<String>,
}

impl PromptBase {
    pub fn new(goal: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            goal: goal.into(),
            subject: subject.into(),
            ..Self::default()
        }
    }
}

/// Prompt for text / LLM models
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPrompt {
    #[serde(flatten)]
    pub base: PromptBase,
    /// e.g. "creative writing", "code generation", "analysis"
    #[serde(default)]
    pub task_type: Option<String>,
    /// e.g. "formal", "casual", "technical"
    #[serde(default)]
    pub tone: Option<String>,
    /// e.g. "markdown", "json", "plain text"
    #[serde(default)]
    pub format: Option<String>,
    /// e.g. "short", "medium", "long"
    #[serde(default)]
    pub length: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
}

/// Prompt for image generation models
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePrompt {
    #[serde(flatten)]
    pub base: PromptBase,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub lighting: Option<String>,
    #[serde(default)]
    pub camera: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub aspect_ratio: Option<String>,
}

/// Prompt for video generation models
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoPrompt {
    #[serde(flatten)]
    pub base: PromptBase,
    /// The scene being filmed. Every video adapter emits it.
    #[serde(default, deserialize_with = "null_as_default")]
    pub scene: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(default)]
    pub camera_motion: Option<String>,
    #[serde(default)]
    pub lighting: Option<String>,
    #[serde(default = "default_duration_seconds")]
    pub duration_seconds: u32,
    #[serde(default)]
    pub realism_level: Option<String>,
}

fn default_duration_seconds() -> u32 {
    defaults::DEFAULT_DURATION_SECONDS
}

impl Default for VideoPrompt {
    fn default() -> Self {
        Self {
            base: PromptBase::default(),
            scene: String::new(),
            action: String::new(),
            camera_motion: None,
            lighting: None,
            duration_seconds: default_duration_seconds(),
            realism_level: None,
        }
    }
}

/// Prompt for speech synthesis models
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoicePrompt {
    #[serde(flatten)]
    pub base: PromptBase,
    #[serde(default)]
    pub voice_gender: Option<String>,
    #[serde(default)]
    pub age_range: Option<String>,
    #[serde(default)]
    pub accent: Option<String>,
    #[serde(default)]
    pub emotion: Option<String>,
    #[serde(default)]
    pub pace: Option<String>,
    #[serde(default)]
    pub use_case: Option<String>,
}

/// A prompt tagged with the modality it targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalPrompt {
    Text(TextPrompt),
    Image(ImagePrompt),
    Video(VideoPrompt),
    Audio(VoicePrompt),
}

impl CanonicalPrompt {
    pub fn modality(&self) -> Modality {
        match self {
            Self::Text(_) => Modality::Text,
            Self::Image(_) => Modality::Image,
            Self::Video(_) => Modality::Video,
            Self::Audio(_) => Modality::Audio,
        }
    }

    pub fn base(&self) -> &PromptBase {
        match self {
            Self::Text(prompt) => &prompt.base,
            Self::Image(prompt) => &prompt.base,
            Self::Video(prompt) => &prompt.base,
            Self::Audio(prompt) => &prompt.base,
        }
    }

    /// Payload keys accepted for `modality`, excluding the shared base keys
    pub fn fields_for(modality: Modality) -> &'static [&'static str] {
        match modality {
            Modality::Text => TEXT_FIELDS,
            Modality::Image => IMAGE_FIELDS,
            Modality::Video => VIDEO_FIELDS,
            Modality::Audio => VOICE_FIELDS,
        }
    }

    /// Build a typed prompt of `modality` from a JSON object.
    ///
    /// Unknown keys, a `modality` key naming another modality, wrongly typed
    /// values and missing required fields (`goal` for text, `scene` for video)
    /// all fail with [`CompileError::MalformedPrompt`].
    pub fn from_payload(
        modality: Modality,
        mut payload: Map<String, Value>,
    ) -> Result<Self, CompileError> {
        if let Some(tag) = payload.remove("modality")
            && tag.as_str() != Some(modality.as_str())
        {
            return Err(CompileError::malformed(format!(
                "modality {tag} does not match requested modality '{modality}'"
            )));
        }

        let accepted = Self::fields_for(modality);
        if let Some(key) = payload
            .keys()
            .find(|key| !BASE_FIELDS.contains(&key.as_str()) && !accepted.contains(&key.as_str()))
        {
            return Err(CompileError::malformed(format!("unexpected field '{key}'")));
        }

        let value = Value::Object(payload);
        let prompt = match modality {
            Modality::Text => Self::Text(parse(value)?),
            Modality::Image => Self::Image(parse(value)?),
            Modality::Video => Self::Video(parse(value)?),
            Modality::Audio => Self::Audio(parse(value)?),
        };

        match &prompt {
            Self::Text(text) if text.base.goal.trim().is_empty() => Err(missing("goal")),
            Self::Video(video) if video.scene.trim().is_empty() => Err(missing("scene")),
            _ => Ok(prompt),
        }
    }
}

fn parse<T: for<'de> Deserialize<'de>>(value: Value) -> Result<T, CompileError> {
    serde_json::from_value(value).map_err(|err| CompileError::malformed(err.to_string()))
}

fn missing(field: &str) -> CompileError {
    CompileError::malformed(format!("missing required field '{field}'"))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<TextPrompt> for CanonicalPrompt {
    fn from(prompt: TextPrompt) -> Self {
        Self::Text(prompt)
    }
}

impl From<ImagePrompt> for CanonicalPrompt {
    fn from(prompt: ImagePrompt) -> Self {
        Self::Image(prompt)
    }
}

impl From<VideoPrompt> for CanonicalPrompt {
    fn from(prompt: VideoPrompt) -> Self {
        Self::Video(prompt)
    }
}

impl From<VoicePrompt> for CanonicalPrompt {
    fn from(prompt: VoicePrompt) -> Self {
        Self::Audio(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn builds_text_prompt_from_payload() {
        let prompt = CanonicalPrompt::from_payload(
            Modality::Text,
            object(json!({
                "goal": "Explain recursion",
                "subject": "stacks",
                "tone": "friendly",
                "constraints": ["base case", "call stack"],
                "negative_constraints": null,
            })),
        )
        .unwrap();

        let CanonicalPrompt::Text(text) = prompt else {
            panic!("expected a text prompt");
        };
        assert_eq!(text.base.goal, "Explain recursion");
        assert_eq!(text.tone.as_deref(), Some("friendly"));
        assert_eq!(text.base.constraints, vec!["base case", "call stack"]);
        assert!(text.base.negative_constraints.is_empty());
    }

    #[test]
    fn video_defaults_apply() {
        let prompt =
            CanonicalPrompt::from_payload(Modality::Video, object(json!({"scene": "a harbor"})))
                .unwrap();
        let CanonicalPrompt::Video(video) = prompt else {
            panic!("expected a video prompt");
        };
        assert_eq!(video.duration_seconds, 5);
        assert_eq!(video.action, "");
        assert_eq!(video.base.goal, "");
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = CanonicalPrompt::from_payload(
            Modality::Image,
            object(json!({"subject": "a cat", "tone": "formal"})),
        )
        .unwrap_err();
        assert_eq!(err, CompileError::malformed("unexpected field 'tone'"));
    }

    #[test]
    fn requires_goal_for_text_and_scene_for_video() {
        let err = CanonicalPrompt::from_payload(Modality::Text, object(json!({"subject": "x"})))
            .unwrap_err();
        assert_eq!(err, CompileError::malformed("missing required field 'goal'"));

        let err = CanonicalPrompt::from_payload(Modality::Video, object(json!({"scene": "  "})))
            .unwrap_err();
        assert_eq!(err, CompileError::malformed("missing required field 'scene'"));

        // image and audio prompts may be entirely empty
        assert!(CanonicalPrompt::from_payload(Modality::Image, Map::new()).is_ok());
        assert!(CanonicalPrompt::from_payload(Modality::Audio, Map::new()).is_ok());
    }

    #[test]
    fn modality_key_must_match() {
        let ok = CanonicalPrompt::from_payload(
            Modality::Audio,
            object(json!({"modality": "audio", "emotion": "calm"})),
        )
        .unwrap();
        assert_eq!(ok.modality(), Modality::Audio);

        let err = CanonicalPrompt::from_payload(
            Modality::Audio,
            object(json!({"modality": "video"})),
        )
        .unwrap_err();
        assert!(matches!(err, CompileError::MalformedPrompt(message) if message.contains("does not match")));
    }

    #[test]
    fn wrong_types_are_malformed() {
        let err = CanonicalPrompt::from_payload(
            Modality::Video,
            object(json!({"scene": "x", "duration_seconds": "ten"})),
        )
        .unwrap_err();
        assert!(matches!(err, CompileError::MalformedPrompt(_)));

        let err = CanonicalPrompt::from_payload(
            Modality::Text,
            object(json!({"goal": "x", "constraints": "not a list"})),
        )
        .unwrap_err();
        assert!(matches!(err, CompileError::MalformedPrompt(_)));
    }

    #[test]
    fn modality_and_base_accessors() {
        let prompt: CanonicalPrompt = ImagePrompt {
            base: PromptBase::new("", "lighthouse"),
            ..ImagePrompt::default()
        }
        .into();
        assert_eq!(prompt.modality(), Modality::Image);
        assert_eq!(prompt.base().subject, "lighthouse");
    }
}
