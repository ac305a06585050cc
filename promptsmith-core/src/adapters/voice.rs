//! Voice synthesis platform adapters
//!
//! These share [`VoicePrompt`] with the speech adapters in [`super::audio`]
//! and are served under the audio modality.

use promptsmith_config::ModelId;

use super::audio::natural_voice_description;
use super::{PromptAdapter, join_or, present};
use crate::schema::VoicePrompt;

/// OpenAI voice, identical in output to the `openai-audio` adapter
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAIVoiceAdapter;

impl PromptAdapter<VoicePrompt> for OpenAIVoiceAdapter {
    fn model(&self) -> ModelId {
        ModelId::OpenAIVoice
    }

    fn compile(&self, p: &VoicePrompt) -> String {
        natural_voice_description(p)
    }
}

/// Play.ht
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayHtAdapter;

impl PromptAdapter<VoicePrompt> for PlayHtAdapter {
    fn model(&self) -> ModelId {
        ModelId::PlayHt
    }

    fn compile(&self, p: &VoicePrompt) -> String {
        let characteristics: Vec<String> = [
            present(&p.voice_gender).map(str::to_string),
            present(&p.age_range).map(str::to_string),
            present(&p.accent).map(|accent| format!("{accent} accent")),
        ]
        .into_iter()
        .flatten()
        .collect();

        let mut parts = Vec::new();
        if !characteristics.is_empty() {
            parts.push(format!("Voice: {}", characteristics.join(", ")));
        }
        parts.extend(
            [
                present(&p.emotion).map(|emotion| format!("Emotional tone: {emotion}")),
                present(&p.pace).map(|pace| format!("Speaking pace: {pace}")),
                present(&p.use_case).map(|use_case| format!("Use case: {use_case}")),
                present(&p.base.style).map(|style| format!("Style: {style}")),
            ]
            .into_iter()
            .flatten(),
        );

        join_or(&parts, " | ", "Generate natural voice")
    }
}

/// Azure Speech Services: `key=value` voice specs
#[derive(Debug, Clone, Copy, Default)]
pub struct AzureVoiceAdapter;

impl PromptAdapter<VoicePrompt> for AzureVoiceAdapter {
    fn model(&self) -> ModelId {
        ModelId::AzureVoice
    }

    fn compile(&self, p: &VoicePrompt) -> String {
        let specs: Vec<String> = [
            present(&p.voice_gender).map(|gender| format!("gender={gender}")),
            present(&p.age_range).map(|age| format!("age={age}")),
            present(&p.accent).map(|accent| format!("locale={accent}")),
            present(&p.emotion).map(|emotion| format!("style={emotion}")),
            present(&p.pace).map(|pace| format!("rate={pace}")),
        ]
        .into_iter()
        .flatten()
        .collect();

        let mut prompt = format!("Voice characteristics: {}", join_or(&specs, ", ", "natural"));
        if let Some(use_case) = present(&p.use_case) {
            prompt.push_str(" | Purpose: ");
            prompt.push_str(use_case);
        }
        prompt
    }
}

/// Murf.AI: a single comma-separated voiceover brief
#[derive(Debug, Clone, Copy, Default)]
pub struct MurfAiAdapter;

impl PromptAdapter<VoicePrompt> for MurfAiAdapter {
    fn model(&self) -> ModelId {
        ModelId::MurfAi
    }

    fn compile(&self, p: &VoicePrompt) -> String {
        let mut parts = vec!["Professional voiceover".to_string()];
        parts.extend(
            [
                present(&p.voice_gender).map(|gender| format!("{gender} voice")),
                present(&p.age_range).map(|age| format!("age {age}")),
                present(&p.accent).map(|accent| format!("with {accent} accent")),
                present(&p.emotion).map(|emotion| format!("expressing {emotion}")),
                present(&p.pace).map(|pace| format!("at {pace} pace")),
                present(&p.use_case).map(|use_case| format!("for {use_case}")),
            ]
            .into_iter()
            .flatten(),
        );

        format!("{}.", parts.join(", "))
    }
}

/// WellSaid Labs
#[derive(Debug, Clone, Copy, Default)]
pub struct WellSaidAdapter;

impl PromptAdapter<VoicePrompt> for WellSaidAdapter {
    fn model(&self) -> ModelId {
        ModelId::WellSaid
    }

    fn compile(&self, p: &VoicePrompt) -> String {
        let profile: Vec<String> = [
            present(&p.voice_gender).map(str::to_string),
            present(&p.age_range).map(|age| format!("aged {age}")),
        ]
        .into_iter()
        .flatten()
        .collect();

        let mut lines = Vec::new();
        if !profile.is_empty() {
            lines.push(format!("Voice Profile: {}", profile.join(" ")));
        }
        lines.extend(
            [
                present(&p.accent).map(|accent| format!("Accent: {accent}")),
                present(&p.emotion).map(|emotion| format!("Emotional delivery: {emotion}")),
                present(&p.pace).map(|pace| format!("Delivery pace: {pace}")),
                present(&p.base.style).map(|style| format!("Speaking style: {style}")),
                present(&p.use_case).map(|use_case| format!("Application: {use_case}")),
            ]
            .into_iter()
            .flatten(),
        );
        lines.push("Audio quality: Studio".to_string());

        lines.join("\n")
    }
}
