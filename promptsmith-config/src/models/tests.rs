use super::*;
use crate::constants::models;
use std::collections::HashSet;
use std::str::FromStr;

#[test]
fn test_model_string_conversion() {
    assert_eq!(ModelId::Gpt4.as_str(), models::text::GPT_4);
    assert_eq!(ModelId::Llama3.as_str(), models::text::LLAMA_3);
    assert_eq!(ModelId::StableDiffusion.as_str(), models::image::STABLE_DIFFUSION);
    assert_eq!(
        ModelId::StableVideoDiffusion.as_str(),
        models::video::STABLE_VIDEO_DIFFUSION
    );
    assert_eq!(ModelId::SeamlessM4T.as_str(), models::audio::SEAMLESS_M4T);
    assert_eq!(ModelId::OpenAIVoice.as_str(), models::audio::OPENAI_VOICE);
}

#[test]
fn test_model_from_string_round_trips_every_model() {
    for model in ModelId::all_models() {
        assert_eq!(ModelId::from_str(model.as_str()).unwrap(), model);
    }
}

#[test]
fn test_model_from_string_is_exact_match() {
    assert!(ModelId::from_str("GPT-4").is_err());
    assert!(ModelId::from_str(" gpt-4").is_err());
    assert!(ModelId::from_str("gpt-4o").is_err());

    let err = ModelId::from_str("unknown-model").unwrap_err();
    assert_eq!(err, ModelParseError::InvalidModel("unknown-model".to_string()));
    assert!(err.to_string().contains("Supported models: gpt-4, llama-3"));
}

#[test]
fn test_model_ids_are_unique() {
    let all = ModelId::all_models();
    let ids: HashSet<&str> = all.iter().map(ModelId::as_str).collect();
    assert_eq!(ids.len(), all.len());
    assert_eq!(all.len(), 25);
}

#[test]
fn test_modality_grouping_matches_constants() {
    let group = |modality| {
        ModelId::models_for_modality(modality)
            .iter()
            .map(ModelId::as_str)
            .collect::<Vec<_>>()
    };

    assert_eq!(group(Modality::Text), models::text::SUPPORTED_MODELS);
    assert_eq!(group(Modality::Image), models::image::SUPPORTED_MODELS);
    assert_eq!(group(Modality::Video), models::video::SUPPORTED_MODELS);
    assert_eq!(group(Modality::Audio), models::audio::SUPPORTED_MODELS);
}

#[test]
fn test_default_models_belong_to_their_modality() {
    for modality in Modality::ALL {
        assert_eq!(ModelId::default_for(modality).modality(), modality);
    }
    assert_eq!(
        ModelId::default_for(Modality::Text).as_str(),
        models::text::DEFAULT_MODEL
    );
    assert_eq!(
        ModelId::default_for(Modality::Audio).as_str(),
        models::audio::DEFAULT_MODEL
    );
}

#[test]
fn test_modality_parsing() {
    assert_eq!("text".parse::<Modality>().unwrap(), Modality::Text);
    assert_eq!("audio".parse::<Modality>().unwrap(), Modality::Audio);
    assert!("Text".parse::<Modality>().is_err());

    let err = "voice".parse::<Modality>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid modality: voice. Must be one of: text, image, video, audio"
    );
}

#[test]
fn test_model_id_serde_uses_wire_names() {
    let encoded = toml::Value::try_from(ModelId::CoquiTts).unwrap();
    assert_eq!(encoded.as_str(), Some("coqui-tts"));

    #[derive(serde::Deserialize)]
    struct Wrapper {
        model: ModelId,
    }
    let decoded: Wrapper = toml::from_str("model = \"indic-tts\"").unwrap();
    assert_eq!(decoded.model, ModelId::IndicTts);
    assert!(toml::from_str::<Wrapper>("model = \"nope\"").is_err());
}

#[test]
fn test_every_model_has_display_metadata() {
    for model in ModelId::all_models() {
        assert!(!model.display_name().is_empty());
        assert!(!model.description().is_empty());
    }
}
