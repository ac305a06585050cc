//! Speech generation adapters

use promptsmith_config::ModelId;

use super::{PromptAdapter, join_or, present, sentences};
use crate::schema::VoicePrompt;

/// Natural-language voice direction shared by the OpenAI speech models
pub(crate) fn natural_voice_description(p: &VoicePrompt) -> String {
    let gender = present(&p.voice_gender);
    let mut parts = Vec::new();

    match (present(&p.emotion), gender) {
        (Some(emotion), Some(gender)) => parts.push(format!("Use a {emotion} {gender} voice")),
        (Some(emotion), None) => parts.push(format!("Use a {emotion} voice")),
        (None, Some(gender)) => parts.push(format!("Use a {gender} voice")),
        (None, None) => {}
    }
    if let Some(accent) = present(&p.accent) {
        parts.push(format!("with a {accent} accent"));
    }
    if let Some(pace) = present(&p.pace) {
        parts.push(format!("Pace: {pace}"));
    }
    if let Some(use_case) = present(&p.use_case) {
        parts.push(format!("Purpose: {use_case}"));
    }
    if let Some(age_range) = present(&p.age_range) {
        parts.push(format!("Age range: {age_range}"));
    }

    if parts.is_empty() {
        "Generate natural voice.".to_string()
    } else {
        sentences(&parts)
    }
}

/// OpenAI TTS
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAIAudioAdapter;

impl PromptAdapter<VoicePrompt> for OpenAIAudioAdapter {
    fn model(&self) -> ModelId {
        ModelId::OpenAIAudio
    }

    fn compile(&self, p: &VoicePrompt) -> String {
        natural_voice_description(p)
    }
}

/// ElevenLabs: labeled lines followed by fixed voice settings
#[derive(Debug, Clone, Copy, Default)]
pub struct ElevenLabsAdapter;

impl PromptAdapter<VoicePrompt> for ElevenLabsAdapter {
    fn model(&self) -> ModelId {
        ModelId::ElevenLabs
    }

    fn compile(&self, p: &VoicePrompt) -> String {
        let mut lines: Vec<String> = [
            present(&p.voice_gender).map(|gender| format!("Voice: {gender}")),
            present(&p.accent).map(|accent| format!("Accent: {accent}")),
            present(&p.emotion).map(|emotion| format!("Emotion: {emotion}")),
            present(&p.pace).map(|pace| format!("Pace: {pace}")),
            present(&p.age_range).map(|age| format!("Age: {age}")),
        ]
        .into_iter()
        .flatten()
        .collect();

        lines.push("Stability: 70%".to_string());
        lines.push("Clarity: High".to_string());
        lines.join("\n")
    }
}

/// Meta SeamlessM4T, multilingual speech
#[derive(Debug, Clone, Copy, Default)]
pub struct SeamlessM4TAdapter;

impl PromptAdapter<VoicePrompt> for SeamlessM4TAdapter {
    fn model(&self) -> ModelId {
        ModelId::SeamlessM4T
    }

    fn compile(&self, p: &VoicePrompt) -> String {
        let parts: Vec<String> = [
            present(&p.accent).map(|accent| format!("Language/Accent: {accent}")),
            present(&p.voice_gender).map(|gender| format!("Voice type: {gender}")),
            present(&p.emotion).map(|emotion| format!("Emotional expression: {emotion}")),
            present(&p.pace).map(|pace| format!("Speech rate: {pace}")),
            present(&p.use_case).map(|use_case| format!("Application: {use_case}")),
            present(&p.base.style).map(|style| format!("Speaking style: {style}")),
        ]
        .into_iter()
        .flatten()
        .collect();

        join_or(&parts, " | ", "Generate multilingual speech")
    }
}

/// AI4Bharat Indic TTS. The accent field names the target language.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndicTtsAdapter;

impl PromptAdapter<VoicePrompt> for IndicTtsAdapter {
    fn model(&self) -> ModelId {
        ModelId::IndicTts
    }

    fn compile(&self, p: &VoicePrompt) -> String {
        let lines: Vec<String> = [
            present(&p.accent).map(|accent| format!("Language: {accent}")),
            present(&p.voice_gender).map(|gender| format!("Voice: {gender}")),
            present(&p.age_range).map(|age| format!("Age group: {age}")),
            present(&p.emotion).map(|emotion| format!("Emotion: {emotion}")),
            present(&p.pace).map(|pace| format!("Speaking pace: {pace}")),
            present(&p.use_case).map(|use_case| format!("Use case: {use_case}")),
            present(&p.base.style).map(|style| format!("Style: {style}")),
        ]
        .into_iter()
        .flatten()
        .collect();

        join_or(&lines, "\n", "Generate Indic language speech")
    }
}

/// Coqui TTS
#[derive(Debug, Clone, Copy, Default)]
pub struct CoquiTtsAdapter;

impl PromptAdapter<VoicePrompt> for CoquiTtsAdapter {
    fn model(&self) -> ModelId {
        ModelId::CoquiTts
    }

    fn compile(&self, p: &VoicePrompt) -> String {
        let mut parts = vec!["Coqui TTS Configuration".to_string()];

        let voice: Vec<String> = [
            present(&p.voice_gender).map(str::to_string),
            present(&p.age_range).map(|age| format!("age {age}")),
            present(&p.accent).map(|accent| format!("{accent} accent")),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !voice.is_empty() {
            parts.push(format!("Voice: {}", voice.join(", ")));
        }

        parts.extend(
            [
                present(&p.emotion).map(|emotion| format!("Emotion: {emotion}")),
                present(&p.pace).map(|pace| format!("Speed: {pace}")),
                present(&p.base.style).map(|style| format!("Style: {style}")),
                present(&p.use_case).map(|use_case| format!("Target use: {use_case}")),
            ]
            .into_iter()
            .flatten(),
        );

        parts.join(" | ")
    }
}
