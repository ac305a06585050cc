use super::ModelId;

impl ModelId {
    /// Convert the model identifier to the string used on the wire
    /// and in model listings
    pub fn as_str(&self) -> &'static str {
        use crate::constants::models;
        match self {
            // Text models
            ModelId::Gpt4 => models::text::GPT_4,
            ModelId::Llama3 => models::text::LLAMA_3,
            ModelId::Mistral => models::text::MISTRAL,
            ModelId::Gemini => models::text::GEMINI,
            ModelId::Claude => models::text::CLAUDE,
            // Image models
            ModelId::Dalle => models::image::DALLE,
            ModelId::StableDiffusion => models::image::STABLE_DIFFUSION,
            ModelId::Midjourney => models::image::MIDJOURNEY,
            ModelId::Imagen => models::image::IMAGEN,
            ModelId::Firefly => models::image::FIREFLY,
            // Video models
            ModelId::Sora => models::video::SORA,
            ModelId::Runway => models::video::RUNWAY,
            ModelId::Pika => models::video::PIKA,
            ModelId::Veo => models::video::VEO,
            ModelId::StableVideoDiffusion => models::video::STABLE_VIDEO_DIFFUSION,
            // Audio models
            ModelId::OpenAIAudio => models::audio::OPENAI_AUDIO,
            ModelId::ElevenLabs => models::audio::ELEVENLABS,
            ModelId::SeamlessM4T => models::audio::SEAMLESS_M4T,
            ModelId::IndicTts => models::audio::INDIC_TTS,
            ModelId::CoquiTts => models::audio::COQUI_TTS,
            ModelId::OpenAIVoice => models::audio::OPENAI_VOICE,
            ModelId::PlayHt => models::audio::PLAYHT,
            ModelId::AzureVoice => models::audio::AZURE_VOICE,
            ModelId::MurfAi => models::audio::MURFAI,
            ModelId::WellSaid => models::audio::WELLSAID,
        }
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
