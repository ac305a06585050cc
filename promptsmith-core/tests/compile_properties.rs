use pretty_assertions::assert_eq;
use promptsmith_core::{
    AdapterRegistry, CanonicalPrompt, CompileError, ImagePrompt, Modality, PromptBase,
    PromptCompiler, TextPrompt, VideoPrompt, VoicePrompt, compile,
    get_available_models_by_modality,
};
use std::collections::HashSet;

fn empty_prompt(modality: Modality) -> CanonicalPrompt {
    match modality {
        Modality::Text => TextPrompt::default().into(),
        Modality::Image => ImagePrompt::default().into(),
        Modality::Video => VideoPrompt::default().into(),
        Modality::Audio => VoicePrompt::default().into(),
    }
}

#[test]
fn every_model_is_listed_under_exactly_one_modality() {
    let grouped = get_available_models_by_modality();
    let mut seen = HashSet::new();
    for models in grouped.values() {
        for model in models {
            assert!(seen.insert(*model), "{model} listed twice");
        }
    }
    assert_eq!(seen.len(), AdapterRegistry::global().len());
}

#[test]
fn every_adapter_produces_output_for_an_empty_prompt() {
    for (modality, models) in get_available_models_by_modality() {
        let prompt = empty_prompt(modality);
        for model in models {
            let compiled = compile(&prompt, model).unwrap();
            assert!(!compiled.trim().is_empty(), "{model} produced empty output");
        }
    }
}

#[test]
fn models_reject_every_other_modality() {
    let compiler = PromptCompiler::default();
    for (modality, models) in get_available_models_by_modality() {
        for other in Modality::ALL.into_iter().filter(|m| *m != modality) {
            let prompt = empty_prompt(other);
            for model in &models {
                let err = compiler.compile(&prompt, model).unwrap_err();
                assert_eq!(
                    err,
                    CompileError::UnknownModel {
                        model: model.to_string(),
                        modality: other,
                    }
                );
            }
        }
    }
}

#[test]
fn text_prompt_leads_with_goal_and_subject() {
    let prompt: CanonicalPrompt = TextPrompt {
        base: PromptBase::new("Explain recursion", "stacks"),
        ..TextPrompt::default()
    }
    .into();
    assert!(
        compile(&prompt, "gpt-4")
            .unwrap()
            .starts_with("Explain recursion: stacks")
    );
}

#[test]
fn stable_video_diffusion_counts_frames() {
    let prompt: CanonicalPrompt = VideoPrompt {
        scene: "a lighthouse at dusk".into(),
        duration_seconds: 10,
        ..VideoPrompt::default()
    }
    .into();
    assert!(
        compile(&prompt, "stable-video-diffusion")
            .unwrap()
            .contains("Frames: 240")
    );
}

#[test]
fn empty_voice_prompt_uses_natural_voice_fallback() {
    let prompt: CanonicalPrompt = VoicePrompt::default().into();
    assert_eq!(
        compile(&prompt, "openai-voice").unwrap(),
        "Generate natural voice."
    );
    assert_eq!(
        compile(&prompt, "openai-audio").unwrap(),
        "Generate natural voice."
    );
}

#[test]
fn absent_fields_never_leak_into_output() {
    let prompt: CanonicalPrompt = ImagePrompt {
        base: PromptBase::new("", "a lantern"),
        lighting: Some(String::new()),
        ..ImagePrompt::default()
    }
    .into();
    for model in AdapterRegistry::global().models_for(Modality::Image) {
        let compiled = compile(&prompt, model).unwrap();
        assert!(compiled.contains("a lantern"), "{model}: {compiled}");
        assert!(!compiled.contains("Lighting"), "{model}: {compiled}");
        assert!(!compiled.contains("None"), "{model}: {compiled}");
    }
}
