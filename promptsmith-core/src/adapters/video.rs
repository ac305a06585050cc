//! Video generation adapters

use promptsmith_config::ModelId;

use super::{PromptAdapter, listed, non_empty, present, sentences};
use crate::schema::VideoPrompt;

/// Frame rate assumed when converting a duration to a frame count
pub const FRAMES_PER_SECOND: u32 = 24;

const DEFAULT_NEGATIVE_PROMPT: &str = "low quality, blurry, artifacts";

/// OpenAI Sora
#[derive(Debug, Clone, Copy, Default)]
pub struct SoraAdapter;

impl PromptAdapter<VideoPrompt> for SoraAdapter {
    fn model(&self) -> ModelId {
        ModelId::Sora
    }

    fn compile(&self, p: &VideoPrompt) -> String {
        let mut parts = vec![format!(
            "A coherent {}-second cinematic video of {}",
            p.duration_seconds, p.scene
        )];

        if let Some(action) = non_empty(&p.action) {
            parts.push(format!("The subject is {action}"));
        }
        if let Some(camera_motion) = present(&p.camera_motion) {
            parts.push(format!("The camera {camera_motion}"));
        }
        if let Some(lighting) = present(&p.lighting) {
            parts.push(format!("Lighting is {lighting}"));
        }
        if let Some(style) = present(&p.base.style) {
            parts.push(format!("Style: {style}"));
        }

        sentences(&parts)
    }
}

/// Runway Gen-2 / Gen-3
#[derive(Debug, Clone, Copy, Default)]
pub struct RunwayAdapter;

impl PromptAdapter<VideoPrompt> for RunwayAdapter {
    fn model(&self) -> ModelId {
        ModelId::Runway
    }

    fn compile(&self, p: &VideoPrompt) -> String {
        let mut parts = vec![format!(
            "A {}-second cinematic scene of {}",
            p.duration_seconds, p.scene
        )];

        if let Some(action) = non_empty(&p.action) {
            parts.push(format!("Action: {action}"));
        }
        if let Some(camera_motion) = present(&p.camera_motion) {
            parts.push(format!("Camera: {camera_motion}"));
        }
        if let Some(lighting) = present(&p.lighting) {
            parts.push(format!("Lighting: {lighting}"));
        }
        parts.push("Realistic motion".to_string());

        sentences(&parts)
    }
}

/// Pika Labs
#[derive(Debug, Clone, Copy, Default)]
pub struct PikaAdapter;

impl PromptAdapter<VideoPrompt> for PikaAdapter {
    fn model(&self) -> ModelId {
        ModelId::Pika
    }

    fn compile(&self, p: &VideoPrompt) -> String {
        let mut lines = vec![format!("Scene: {}", p.scene)];

        if let Some(action) = non_empty(&p.action) {
            lines.push(format!("Action: {action}"));
        }
        if let Some(camera_motion) = present(&p.camera_motion) {
            lines.push(format!("Camera movement: {camera_motion}"));
        }
        if let Some(style) = present(&p.base.style) {
            lines.push(format!("Style: {style}"));
        }
        lines.push(format!("Duration: {}s", p.duration_seconds));

        lines.join("\n")
    }
}

/// Google Veo
#[derive(Debug, Clone, Copy, Default)]
pub struct VeoAdapter;

impl PromptAdapter<VideoPrompt> for VeoAdapter {
    fn model(&self) -> ModelId {
        ModelId::Veo
    }

    fn compile(&self, p: &VideoPrompt) -> String {
        let mut parts = vec![
            format!("Generate {}s video", p.duration_seconds),
            format!("Scene: {}", p.scene),
        ];

        if let Some(action) = non_empty(&p.action) {
            parts.push(format!("Action: {action}"));
        }
        if let Some(camera_motion) = present(&p.camera_motion) {
            parts.push(format!("Camera: {camera_motion}"));
        }
        if let Some(lighting) = present(&p.lighting) {
            parts.push(format!("Lighting: {lighting}"));
        }
        if let Some(style) = present(&p.base.style) {
            parts.push(format!("Visual style: {style}"));
        }
        if let Some(realism) = present(&p.realism_level) {
            parts.push(format!("Realism: {realism}"));
        }

        parts.join(" | ")
    }
}

/// Stable Video Diffusion.
///
/// Unlike every other adapter, an absent negative list is replaced by a
/// default negative prompt rather than omitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct StableVideoDiffusionAdapter;

impl PromptAdapter<VideoPrompt> for StableVideoDiffusionAdapter {
    fn model(&self) -> ModelId {
        ModelId::StableVideoDiffusion
    }

    fn compile(&self, p: &VideoPrompt) -> String {
        let mut positive = vec![p.scene.clone()];

        if let Some(action) = non_empty(&p.action) {
            positive.push(action.to_string());
        }
        if let Some(style) = present(&p.base.style) {
            positive.push(style.to_string());
        }
        if let Some(lighting) = present(&p.lighting) {
            positive.push(lighting.to_string());
        }
        if let Some(camera_motion) = present(&p.camera_motion) {
            positive.push(format!("camera {camera_motion}"));
        }

        let negative = listed(&p.base.negative_constraints, ", ")
            .unwrap_or_else(|| DEFAULT_NEGATIVE_PROMPT.to_string());
        let frames = p.duration_seconds.saturating_mul(FRAMES_PER_SECOND);

        format!(
            "Positive: {}\nNegative: {negative}\nFrames: {frames}",
            positive.join(", ")
        )
    }
}
