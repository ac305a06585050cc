use std::str::FromStr;

use crate::models::ModelParseError;

use super::ModelId;

impl FromStr for ModelId {
    type Err = ModelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use crate::constants::models;
        match s {
            // Text models
            s if s == models::text::GPT_4 => Ok(ModelId::Gpt4),
            s if s == models::text::LLAMA_3 => Ok(ModelId::Llama3),
            s if s == models::text::MISTRAL => Ok(ModelId::Mistral),
            s if s == models::text::GEMINI => Ok(ModelId::Gemini),
            s if s == models::text::CLAUDE => Ok(ModelId::Claude),
            // Image models
            s if s == models::image::DALLE => Ok(ModelId::Dalle),
            s if s == models::image::STABLE_DIFFUSION => Ok(ModelId::StableDiffusion),
            s if s == models::image::MIDJOURNEY => Ok(ModelId::Midjourney),
            s if s == models::image::IMAGEN => Ok(ModelId::Imagen),
            s if s == models::image::FIREFLY => Ok(ModelId::Firefly),
            // Video models
            s if s == models::video::SORA => Ok(ModelId::Sora),
            s if s == models::video::RUNWAY => Ok(ModelId::Runway),
            s if s == models::video::PIKA => Ok(ModelId::Pika),
            s if s == models::video::VEO => Ok(ModelId::Veo),
            s if s == models::video::STABLE_VIDEO_DIFFUSION => Ok(ModelId::StableVideoDiffusion),
            // Audio models
            s if s == models::audio::OPENAI_AUDIO => Ok(ModelId::OpenAIAudio),
            s if s == models::audio::ELEVENLABS => Ok(ModelId::ElevenLabs),
            s if s == models::audio::SEAMLESS_M4T => Ok(ModelId::SeamlessM4T),
            s if s == models::audio::INDIC_TTS => Ok(ModelId::IndicTts),
            s if s == models::audio::COQUI_TTS => Ok(ModelId::CoquiTts),
            s if s == models::audio::OPENAI_VOICE => Ok(ModelId::OpenAIVoice),
            s if s == models::audio::PLAYHT => Ok(ModelId::PlayHt),
            s if s == models::audio::AZURE_VOICE => Ok(ModelId::AzureVoice),
            s if s == models::audio::MURFAI => Ok(ModelId::MurfAi),
            s if s == models::audio::WELLSAID => Ok(ModelId::WellSaid),
            _ => Err(ModelParseError::InvalidModel(s.to_string())),
        }
    }
}
