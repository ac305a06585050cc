//! Image generation adapters

use promptsmith_config::ModelId;

use super::{PromptAdapter, join_or, listed, non_empty, present, sentences};
use crate::schema::ImagePrompt;

/// Comma-joined descriptor list shared by the tag-style image models
fn descriptors(p: &ImagePrompt) -> Vec<String> {
    let mut parts: Vec<String> = [
        non_empty(&p.base.subject),
        present(&p.base.style),
        present(&p.environment),
        present(&p.lighting),
        present(&p.camera),
        present(&p.mood),
        present(&p.base.quality_level),
    ]
    .into_iter()
    .flatten()
    .map(str::to_string)
    .collect();
    parts.extend(p.base.constraints.iter().filter(|c| !c.is_empty()).cloned());
    parts
}

/// OpenAI DALL·E: plain descriptive sentences
#[derive(Debug, Clone, Copy, Default)]
pub struct DalleAdapter;

impl PromptAdapter<ImagePrompt> for DalleAdapter {
    fn model(&self) -> ModelId {
        ModelId::Dalle
    }

    fn compile(&self, p: &ImagePrompt) -> String {
        let parts: Vec<String> = [
            non_empty(&p.base.subject).map(|subject| format!("An image of {subject}")),
            present(&p.base.style).map(|style| format!("Rendered in {style} style")),
            present(&p.environment).map(|environment| format!("Set in {environment}")),
            present(&p.lighting).map(|lighting| format!("Lighting: {lighting}")),
            present(&p.camera).map(|camera| format!("Shot with {camera}")),
            present(&p.mood).map(|mood| format!("The mood is {mood}")),
            present(&p.base.quality_level).map(|quality| format!("Quality: {quality}")),
            listed(&p.base.constraints, ", ").map(|items| format!("Must include: {items}")),
            listed(&p.base.negative_constraints, ", ").map(|items| format!("Avoid: {items}")),
            present(&p.aspect_ratio).map(|ratio| format!("Aspect ratio: {ratio}")),
        ]
        .into_iter()
        .flatten()
        .collect();

        if parts.is_empty() {
            "Generate a detailed image.".to_string()
        } else {
            sentences(&parts)
        }
    }
}

/// Stable Diffusion: positive / negative prompt lines
#[derive(Debug, Clone, Copy, Default)]
pub struct StableDiffusionAdapter;

impl PromptAdapter<ImagePrompt> for StableDiffusionAdapter {
    fn model(&self) -> ModelId {
        ModelId::StableDiffusion
    }

    fn compile(&self, p: &ImagePrompt) -> String {
        let positive = join_or(&descriptors(p), ", ", "masterpiece, best quality");
        let mut lines = vec![format!("Positive: {positive}")];

        if let Some(negatives) = listed(&p.base.negative_constraints, ", ") {
            lines.push(format!("Negative: {negatives}"));
        }
        if let Some(ratio) = present(&p.aspect_ratio) {
            lines.push(format!("Aspect ratio: {ratio}"));
        }

        lines.join("\n")
    }
}

/// Midjourney: descriptors followed by `--ar` / `--no` parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct MidjourneyAdapter;

impl PromptAdapter<ImagePrompt> for MidjourneyAdapter {
    fn model(&self) -> ModelId {
        ModelId::Midjourney
    }

    fn compile(&self, p: &ImagePrompt) -> String {
        let mut prompt = join_or(&descriptors(p), ", ", "highly detailed artwork");

        if let Some(ratio) = present(&p.aspect_ratio) {
            prompt.push_str(" --ar ");
            prompt.push_str(ratio);
        }
        if let Some(negatives) = listed(&p.base.negative_constraints, ", ") {
            prompt.push_str(" --no ");
            prompt.push_str(&negatives);
        }

        prompt
    }
}

/// Google Imagen: one labeled attribute per line
#[derive(Debug, Clone, Copy, Default)]
pub struct ImagenAdapter;

impl PromptAdapter<ImagePrompt> for ImagenAdapter {
    fn model(&self) -> ModelId {
        ModelId::Imagen
    }

    fn compile(&self, p: &ImagePrompt) -> String {
        let lines: Vec<String> = [
            non_empty(&p.base.subject).map(|subject| format!("Subject: {subject}")),
            present(&p.base.style).map(|style| format!("Style: {style}")),
            present(&p.environment).map(|environment| format!("Environment: {environment}")),
            present(&p.lighting).map(|lighting| format!("Lighting: {lighting}")),
            present(&p.camera).map(|camera| format!("Camera: {camera}")),
            present(&p.mood).map(|mood| format!("Mood: {mood}")),
            present(&p.aspect_ratio).map(|ratio| format!("Aspect ratio: {ratio}")),
            present(&p.base.quality_level).map(|quality| format!("Quality: {quality}")),
            listed(&p.base.constraints, ", ").map(|items| format!("Include: {items}")),
            listed(&p.base.negative_constraints, ", ").map(|items| format!("Exclude: {items}")),
        ]
        .into_iter()
        .flatten()
        .collect();

        join_or(&lines, "\n", "Generate a photorealistic image.")
    }
}

/// Adobe Firefly: pipe-delimited attributes
#[derive(Debug, Clone, Copy, Default)]
pub struct FireflyAdapter;

impl PromptAdapter<ImagePrompt> for FireflyAdapter {
    fn model(&self) -> ModelId {
        ModelId::Firefly
    }

    fn compile(&self, p: &ImagePrompt) -> String {
        let parts: Vec<String> = [
            non_empty(&p.base.subject).map(str::to_string),
            present(&p.base.style).map(|style| format!("Style: {style}")),
            present(&p.environment).map(|environment| format!("Setting: {environment}")),
            present(&p.lighting).map(|lighting| format!("Lighting: {lighting}")),
            present(&p.camera).map(|camera| format!("Camera: {camera}")),
            present(&p.mood).map(|mood| format!("Mood: {mood}")),
            present(&p.aspect_ratio).map(|ratio| format!("Aspect ratio: {ratio}")),
            listed(&p.base.constraints, ", ").map(|items| format!("Must include: {items}")),
            listed(&p.base.negative_constraints, ", ").map(|items| format!("Avoid: {items}")),
        ]
        .into_iter()
        .flatten()
        .collect();

        join_or(&parts, " | ", "Generate a commercially safe image")
    }
}
