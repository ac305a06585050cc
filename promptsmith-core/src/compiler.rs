//! Prompt compilation dispatch

use crate::errors::CompileError;
use crate::registry::{AdapterRegistry, RegisteredAdapter};
use crate::schema::CanonicalPrompt;

/// Resolves a model id to its adapter and formats a prompt with it.
///
/// Lookup is an exact match on the id. A model registered under a different
/// modality than the prompt is treated the same as an unregistered one.
#[derive(Debug, Clone, Copy)]
pub struct PromptCompiler {
    registry: &'static AdapterRegistry,
}

impl Default for PromptCompiler {
    fn default() -> Self {
        Self::new(AdapterRegistry::global())
    }
}

impl PromptCompiler {
    pub fn new(registry: &'static AdapterRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'static AdapterRegistry {
        self.registry
    }

    pub fn compile(&self, prompt: &CanonicalPrompt, model: &str) -> Result<String, CompileError> {
        let unknown = || CompileError::UnknownModel {
            model: model.to_string(),
            modality: prompt.modality(),
        };

        let adapter = self.registry.get(model).ok_or_else(unknown)?;
        match (adapter, prompt) {
            (RegisteredAdapter::Text(adapter), CanonicalPrompt::Text(p)) => Ok(adapter.compile(p)),
            (RegisteredAdapter::Image(adapter), CanonicalPrompt::Image(p)) => {
                Ok(adapter.compile(p))
            }
            (RegisteredAdapter::Video(adapter), CanonicalPrompt::Video(p)) => {
                Ok(adapter.compile(p))
            }
            (RegisteredAdapter::Audio(adapter), CanonicalPrompt::Audio(p)) => {
                Ok(adapter.compile(p))
            }
            _ => Err(unknown()),
        }
    }
}

/// Compile `prompt` for `model` using the global registry
pub fn compile(prompt: &CanonicalPrompt, model: &str) -> Result<String, CompileError> {
    PromptCompiler::default().compile(prompt, model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ImagePrompt, PromptBase, TextPrompt, VideoPrompt, VoicePrompt};
    use pretty_assertions::assert_eq;
    use promptsmith_config::Modality;

    fn text(goal: &str, subject: &str) -> CanonicalPrompt {
        TextPrompt {
            base: PromptBase::new(goal, subject),
            ..TextPrompt::default()
        }
        .into()
    }

    #[test]
    fn dispatches_to_the_named_adapter() {
        let prompt = text("Explain recursion", "stacks");
        let compiled = compile(&prompt, "gpt-4").unwrap();
        assert!(compiled.starts_with("Explain recursion: stacks"));

        let llama = compile(&prompt, "llama-3").unwrap();
        assert!(llama.starts_with("[INST] Explain recursion"));
    }

    #[test]
    fn unregistered_model_is_unknown() {
        let err = compile(&text("a", "b"), "gpt-5").unwrap_err();
        assert_eq!(
            err,
            CompileError::UnknownModel {
                model: "gpt-5".into(),
                modality: Modality::Text,
            }
        );
    }

    #[test]
    fn modality_mismatch_is_unknown() {
        let video: CanonicalPrompt = VideoPrompt {
            scene: "a beach".into(),
            ..VideoPrompt::default()
        }
        .into();
        let err = compile(&video, "gpt-4").unwrap_err();
        assert_eq!(
            err,
            CompileError::UnknownModel {
                model: "gpt-4".into(),
                modality: Modality::Video,
            }
        );

        let image: CanonicalPrompt = ImagePrompt::default().into();
        assert!(compile(&image, "elevenlabs").is_err());
    }

    #[test]
    fn compile_is_deterministic() {
        let prompt: CanonicalPrompt = VoicePrompt {
            emotion: Some("calm".into()),
            ..VoicePrompt::default()
        }
        .into();
        let compiler = PromptCompiler::default();
        for model in compiler.registry().models_for(Modality::Audio) {
            assert_eq!(
                compiler.compile(&prompt, model).unwrap(),
                compiler.compile(&prompt, model).unwrap()
            );
        }
    }
}
