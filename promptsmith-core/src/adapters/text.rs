//! Text generation adapters for LLMs

use promptsmith_config::ModelId;

use super::{PromptAdapter, listed, present, title_case};
use crate::schema::TextPrompt;

/// OpenAI GPT-4 / GPT-4.1 / GPT-4o
#[derive(Debug, Clone, Copy, Default)]
pub struct Gpt4Adapter;

impl PromptAdapter<TextPrompt> for Gpt4Adapter {
    fn model(&self) -> ModelId {
        ModelId::Gpt4
    }

    fn compile(&self, p: &TextPrompt) -> String {
        let mut prompt = format!("{}: {}", p.base.goal, p.base.subject);

        let mut details = Vec::new();
        if let Some(task_type) = present(&p.task_type) {
            details.push(format!("Type: {task_type}"));
        }
        if let Some(context) = present(&p.context) {
            details.push(format!("Context: {context}"));
        }
        if let Some(style) = present(&p.base.style) {
            details.push(format!("Style: {style}"));
        }
        if let Some(tone) = present(&p.tone) {
            details.push(format!("Tone: {tone}"));
        }
        if let Some(format) = present(&p.format) {
            details.push(format!("Format: {format}"));
        }
        if let Some(length) = present(&p.length) {
            details.push(format!("Length: {length}"));
        }
        if let Some(constraints) = listed(&p.base.constraints, ", ") {
            details.push(format!("Must include: {constraints}"));
        }

        if !details.is_empty() {
            prompt.push_str("\n\n");
            prompt.push_str(&details.join("\n"));
        }

        if let Some(negatives) = listed(&p.base.negative_constraints, ", ") {
            prompt.push_str("\n\nDo not: ");
            prompt.push_str(&negatives);
        }

        prompt
    }
}

/// Meta LLaMA 3, wrapped in `[INST]` instruction tags
#[derive(Debug, Clone, Copy, Default)]
pub struct LlamaAdapter;

impl PromptAdapter<TextPrompt> for LlamaAdapter {
    fn model(&self) -> ModelId {
        ModelId::Llama3
    }

    fn compile(&self, p: &TextPrompt) -> String {
        let mut lines = vec![format!("[INST] {}", p.base.goal), String::new()];
        lines.push(format!("Topic: {}", p.base.subject));

        if let Some(task_type) = present(&p.task_type) {
            lines.push(format!("Task: {task_type}"));
        }
        if let Some(context) = present(&p.context) {
            lines.push(format!("Background: {context}"));
        }
        lines.push(String::new());

        let guidelines: Vec<String> = [
            present(&p.base.style).map(|style| format!("- Use {style} style")),
            present(&p.tone).map(|tone| format!("- Maintain {tone} tone")),
            present(&p.format).map(|format| format!("- Output in {format} format")),
            present(&p.length).map(|length| format!("- Keep it {length}")),
        ]
        .into_iter()
        .flatten()
        .collect();

        if !guidelines.is_empty() {
            lines.push("Guidelines:".to_string());
            lines.extend(guidelines);
        }

        if let Some(constraints) = listed(&p.base.constraints, ", ") {
            lines.push(String::new());
            lines.push(format!("Must include: {constraints}"));
        }
        if let Some(negatives) = listed(&p.base.negative_constraints, ", ") {
            lines.push(format!("Avoid: {negatives}"));
        }

        // the closing tag follows a trailing newline
        let mut instruction = lines.join("\n");
        instruction.push('\n');
        instruction.push_str(" [/INST]");
        instruction
    }
}

/// Mistral / Mixtral: short, direct prompts with compact specs
#[derive(Debug, Clone, Copy, Default)]
pub struct MistralAdapter;

impl PromptAdapter<TextPrompt> for MistralAdapter {
    fn model(&self) -> ModelId {
        ModelId::Mistral
    }

    fn compile(&self, p: &TextPrompt) -> String {
        let mut parts = vec![match present(&p.task_type) {
            Some(task_type) => format!("{}: {}", title_case(task_type), p.base.goal),
            None => p.base.goal.clone(),
        }];

        parts.push(format!("\nTopic: {}", p.base.subject));

        if let Some(context) = present(&p.context) {
            parts.push(format!("\n{context}"));
        }

        let specs: Vec<String> = [
            present(&p.base.style).map(|style| format!("style={style}")),
            present(&p.tone).map(|tone| format!("tone={tone}")),
            present(&p.format).map(|format| format!("format={format}")),
            present(&p.length).map(|length| format!("length={length}")),
        ]
        .into_iter()
        .flatten()
        .collect();

        if !specs.is_empty() {
            parts.push(format!("\n[{}]", specs.join(", ")));
        }
        if let Some(constraints) = listed(&p.base.constraints, "; ") {
            parts.push(format!("\nInclude: {constraints}"));
        }
        if let Some(negatives) = listed(&p.base.negative_constraints, "; ") {
            parts.push(format!("\nExclude: {negatives}"));
        }

        parts.concat()
    }
}

/// Google Gemini: markdown sections
#[derive(Debug, Clone, Copy, Default)]
pub struct GeminiAdapter;

impl PromptAdapter<TextPrompt> for GeminiAdapter {
    fn model(&self) -> ModelId {
        ModelId::Gemini
    }

    fn compile(&self, p: &TextPrompt) -> String {
        let mut parts = vec![
            format!("## {}", p.base.goal),
            format!("**Subject:** {}", p.base.subject),
        ];

        if let Some(task_type) = present(&p.task_type) {
            parts.push(format!("**Task Type:** {task_type}"));
        }
        if let Some(context) = present(&p.context) {
            parts.push(format!("**Context:**\n{context}"));
        }

        let specifications: Vec<String> = [
            present(&p.base.style).map(|style| format!("- Style: {style}")),
            present(&p.tone).map(|tone| format!("- Tone: {tone}")),
            present(&p.format).map(|format| format!("- Format: {format}")),
            present(&p.length).map(|length| format!("- Length: {length}")),
            present(&p.base.quality_level).map(|quality| format!("- Quality: {quality}")),
        ]
        .into_iter()
        .flatten()
        .collect();

        if !specifications.is_empty() {
            parts.push("**Specifications:**".to_string());
            parts.extend(specifications);
        }
        if let Some(constraints) = listed(&p.base.constraints, ", ") {
            parts.push(format!("**Requirements:** {constraints}"));
        }
        if let Some(negatives) = listed(&p.base.negative_constraints, ", ") {
            parts.push(format!("**Exclude:** {negatives}"));
        }

        parts.join("\n")
    }
}

/// Anthropic Claude: labeled lines, task first
#[derive(Debug, Clone, Copy, Default)]
pub struct ClaudeAdapter;

impl PromptAdapter<TextPrompt> for ClaudeAdapter {
    fn model(&self) -> ModelId {
        ModelId::Claude
    }

    fn compile(&self, p: &TextPrompt) -> String {
        let mut parts = Vec::new();

        if let Some(task_type) = present(&p.task_type) {
            parts.push(format!("Task: {task_type}"));
        }
        parts.push(format!("Goal: {}", p.base.goal));
        parts.push(format!("Subject: {}", p.base.subject));

        if let Some(context) = present(&p.context) {
            parts.push(format!("Context: {context}"));
        }
        if let Some(style) = present(&p.base.style) {
            parts.push(format!("Style: {style}"));
        }
        if let Some(tone) = present(&p.tone) {
            parts.push(format!("Tone: {tone}"));
        }
        if let Some(constraints) = listed(&p.base.constraints, ", ") {
            parts.push(format!("Requirements: {constraints}"));
        }
        if let Some(format) = present(&p.format) {
            parts.push(format!("Output format: {format}"));
        }
        if let Some(length) = present(&p.length) {
            parts.push(format!("Length: {length}"));
        }
        if let Some(quality) = present(&p.base.quality_level) {
            parts.push(format!("Quality: {quality}"));
        }
        if let Some(negatives) = listed(&p.base.negative_constraints, ", ") {
            parts.push(format!("Avoid: {negatives}"));
        }

        parts.join("\n")
    }
}
