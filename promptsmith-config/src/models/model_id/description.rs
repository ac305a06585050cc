use super::ModelId;

impl ModelId {
    /// Get a short description of the model
    pub fn description(&self) -> &'static str {
        match self {
            // Text models
            ModelId::Gpt4 => "OpenAI's most capable model",
            ModelId::Llama3 => "Open-source powerhouse",
            ModelId::Mistral => "Efficient European AI",
            ModelId::Gemini => "Multimodal intelligence",
            ModelId::Claude => "Advanced reasoning and analysis",
            // Image models
            ModelId::Dalle => "OpenAI's image generator",
            ModelId::StableDiffusion => "Open-source, customizable",
            ModelId::Midjourney => "High-quality artistic images",
            ModelId::Imagen => "Photorealistic generations",
            ModelId::Firefly => "Commercial-safe content",
            // Video models
            ModelId::Sora => "Advanced coherent videos",
            ModelId::Runway => "Cinematic video generation",
            ModelId::Pika => "Easy-to-use video creator",
            ModelId::Veo => "High-quality video generation",
            ModelId::StableVideoDiffusion => "Open-source video AI",
            // Audio models
            ModelId::OpenAIAudio => "Speech recognition & synthesis",
            ModelId::ElevenLabs => "Ultra-realistic voices",
            ModelId::SeamlessM4T => "Multilingual translation & speech",
            ModelId::IndicTts => "Indian language support",
            ModelId::CoquiTts => "Open-source TTS",
            ModelId::OpenAIVoice => "Natural language voice descriptions",
            ModelId::PlayHt => "AI voice generation platform",
            ModelId::AzureVoice => "Microsoft's TTS platform",
            ModelId::MurfAi => "Professional voiceover platform",
            ModelId::WellSaid => "Enterprise voice synthesis",
        }
    }
}
