use super::ModelId;

impl ModelId {
    /// Get the display name for the model (human-readable)
    pub fn display_name(&self) -> &'static str {
        match self {
            // Text models
            ModelId::Gpt4 => "GPT-4 / GPT-4.1 / GPT-4o",
            ModelId::Llama3 => "Meta LLaMA 3",
            ModelId::Mistral => "Mistral / Mixtral",
            ModelId::Gemini => "Google Gemini",
            ModelId::Claude => "Anthropic Claude",
            // Image models
            ModelId::Dalle => "DALL·E",
            ModelId::StableDiffusion => "Stable Diffusion",
            ModelId::Midjourney => "Midjourney",
            ModelId::Imagen => "Google Imagen",
            ModelId::Firefly => "Adobe Firefly",
            // Video models
            ModelId::Sora => "OpenAI Sora",
            ModelId::Runway => "Runway Gen-2 / Gen-3",
            ModelId::Pika => "Pika Labs Pika",
            ModelId::Veo => "Google Veo",
            ModelId::StableVideoDiffusion => "Stable Video Diffusion",
            // Audio models
            ModelId::OpenAIAudio => "OpenAI Whisper + TTS",
            ModelId::ElevenLabs => "ElevenLabs",
            ModelId::SeamlessM4T => "Meta SeamlessM4T",
            ModelId::IndicTts => "AI4Bharat Indic TTS/STT",
            ModelId::CoquiTts => "Coqui TTS",
            ModelId::OpenAIVoice => "OpenAI Voice",
            ModelId::PlayHt => "Play.ht",
            ModelId::AzureVoice => "Azure Speech Services",
            ModelId::MurfAi => "Murf.AI",
            ModelId::WellSaid => "WellSaid Labs",
        }
    }
}
