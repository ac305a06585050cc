use serde::{Deserialize, Serialize};

mod as_str;
mod collection;
mod description;
mod display;
mod parse;

/// Centralized enum for every model a prompt can be compiled for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ModelId {
    // Text models
    /// OpenAI GPT-4 / GPT-4.1 / GPT-4o
    Gpt4,
    /// Meta LLaMA 3
    Llama3,
    /// Mistral / Mixtral
    Mistral,
    /// Google Gemini
    Gemini,
    /// Anthropic Claude
    Claude,

    // Image models
    /// OpenAI DALL·E
    Dalle,
    /// Stable Diffusion
    StableDiffusion,
    /// Midjourney
    Midjourney,
    /// Google Imagen
    Imagen,
    /// Adobe Firefly
    Firefly,

    // Video models
    /// OpenAI Sora
    Sora,
    /// Runway Gen-2 / Gen-3
    Runway,
    /// Pika Labs
    Pika,
    /// Google Veo
    Veo,
    /// Stable Video Diffusion
    StableVideoDiffusion,

    // Audio models
    /// OpenAI Whisper + TTS
    OpenAIAudio,
    /// ElevenLabs
    ElevenLabs,
    /// Meta SeamlessM4T
    SeamlessM4T,
    /// AI4Bharat Indic TTS
    IndicTts,
    /// Coqui TTS
    CoquiTts,
    /// OpenAI voice descriptions
    OpenAIVoice,
    /// Play.ht
    PlayHt,
    /// Azure Speech Services
    AzureVoice,
    /// Murf.AI
    MurfAi,
    /// WellSaid Labs
    WellSaid,
}

impl TryFrom<String> for ModelId {
    type Error = super::ModelParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ModelId> for String {
    fn from(model: ModelId) -> Self {
        model.as_str().to_string()
    }
}
