use crate::models::Modality;

use super::ModelId;

impl ModelId {
    /// Get all available models, grouped by modality in listing order
    pub fn all_models() -> Vec<ModelId> {
        vec![
            // Text models
            ModelId::Gpt4,
            ModelId::Llama3,
            ModelId::Mistral,
            ModelId::Gemini,
            ModelId::Claude,
            // Image models
            ModelId::Dalle,
            ModelId::StableDiffusion,
            ModelId::Midjourney,
            ModelId::Imagen,
            ModelId::Firefly,
            // Video models
            ModelId::Sora,
            ModelId::Runway,
            ModelId::Pika,
            ModelId::Veo,
            ModelId::StableVideoDiffusion,
            // Audio models
            ModelId::OpenAIAudio,
            ModelId::ElevenLabs,
            ModelId::SeamlessM4T,
            ModelId::IndicTts,
            ModelId::CoquiTts,
            ModelId::OpenAIVoice,
            ModelId::PlayHt,
            ModelId::AzureVoice,
            ModelId::MurfAi,
            ModelId::WellSaid,
        ]
    }

    /// Get all models that produce prompts for the given modality
    pub fn models_for_modality(modality: Modality) -> Vec<ModelId> {
        Self::all_models()
            .into_iter()
            .filter(|model| model.modality() == modality)
            .collect()
    }

    /// The modality this model's adapter formats prompts for
    pub fn modality(&self) -> Modality {
        match self {
            ModelId::Gpt4
            | ModelId::Llama3
            | ModelId::Mistral
            | ModelId::Gemini
            | ModelId::Claude => Modality::Text,
            ModelId::Dalle
            | ModelId::StableDiffusion
            | ModelId::Midjourney
            | ModelId::Imagen
            | ModelId::Firefly => Modality::Image,
            ModelId::Sora
            | ModelId::Runway
            | ModelId::Pika
            | ModelId::Veo
            | ModelId::StableVideoDiffusion => Modality::Video,
            ModelId::OpenAIAudio
            | ModelId::ElevenLabs
            | ModelId::SeamlessM4T
            | ModelId::IndicTts
            | ModelId::CoquiTts
            | ModelId::OpenAIVoice
            | ModelId::PlayHt
            | ModelId::AzureVoice
            | ModelId::MurfAi
            | ModelId::WellSaid => Modality::Audio,
        }
    }

    /// Default model for a modality
    pub fn default_for(modality: Modality) -> ModelId {
        match modality {
            Modality::Text => ModelId::Gpt4,
            Modality::Image => ModelId::Dalle,
            Modality::Video => ModelId::Sora,
            Modality::Audio => ModelId::OpenAIAudio,
        }
    }
}
