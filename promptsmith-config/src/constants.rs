/// Model ID constants, grouped by the modality each adapter targets
pub mod models {
    // Text / LLM models
    pub mod text {
        pub const DEFAULT_MODEL: &str = "gpt-4";
        pub const SUPPORTED_MODELS: &[&str] = &[GPT_4, LLAMA_3, MISTRAL, GEMINI, CLAUDE];

        pub const GPT_4: &str = "gpt-4";
        pub const LLAMA_3: &str = "llama-3";
        pub const MISTRAL: &str = "mistral";
        pub const GEMINI: &str = "gemini";
        pub const CLAUDE: &str = "claude";
    }

    // Image generation models
    pub mod image {
        pub const DEFAULT_MODEL: &str = "dalle";
        pub const SUPPORTED_MODELS: &[&str] =
            &[DALLE, STABLE_DIFFUSION, MIDJOURNEY, IMAGEN, FIREFLY];

        pub const DALLE: &str = "dalle";
        pub const STABLE_DIFFUSION: &str = "stable-diffusion";
        pub const MIDJOURNEY: &str = "midjourney";
        pub const IMAGEN: &str = "imagen";
        pub const FIREFLY: &str = "firefly";
    }

    // Video generation models
    pub mod video {
        pub const DEFAULT_MODEL: &str = "sora";
        pub const SUPPORTED_MODELS: &[&str] = &[SORA, RUNWAY, PIKA, VEO, STABLE_VIDEO_DIFFUSION];

        pub const SORA: &str = "sora";
        pub const RUNWAY: &str = "runway";
        pub const PIKA: &str = "pika";
        pub const VEO: &str = "veo";
        pub const STABLE_VIDEO_DIFFUSION: &str = "stable-video-diffusion";
    }

    // Speech synthesis models
    pub mod audio {
        pub const DEFAULT_MODEL: &str = "openai-audio";
        pub const SUPPORTED_MODELS: &[&str] = &[
            OPENAI_AUDIO,
            ELEVENLABS,
            SEAMLESS_M4T,
            INDIC_TTS,
            COQUI_TTS,
            OPENAI_VOICE,
            PLAYHT,
            AZURE_VOICE,
            MURFAI,
            WELLSAID,
        ];

        pub const OPENAI_AUDIO: &str = "openai-audio";
        pub const ELEVENLABS: &str = "elevenlabs";
        pub const SEAMLESS_M4T: &str = "seamless-m4t";
        pub const INDIC_TTS: &str = "indic-tts";
        pub const COQUI_TTS: &str = "coqui-tts";

        // Voice platform adapters
        pub const OPENAI_VOICE: &str = "openai-voice";
        pub const PLAYHT: &str = "playht";
        pub const AZURE_VOICE: &str = "azure-voice";
        pub const MURFAI: &str = "murfai";
        pub const WELLSAID: &str = "wellsaid";
    }
}

/// Server, limit and file-name defaults
pub mod defaults {
    pub const CONFIG_FILE_NAME: &str = "promptsmith.toml";

    pub const DEFAULT_HOST: &str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 5000;
    pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

    pub const MAX_TEXT_LENGTH: usize = 2000;
    pub const MIN_DURATION_SECONDS: u32 = 1;
    pub const MAX_DURATION_SECONDS: u32 = 60;
    pub const DEFAULT_DURATION_SECONDS: u32 = 5;

    pub const DEFAULT_TRACE_TARGETS: &[&str] = &["promptsmith", "promptsmith_core"];
}

/// Environment variables read by the config loader
pub mod env {
    pub const CONFIG_PATH: &str = "PROMPTSMITH_CONFIG_PATH";
    pub const HOST: &str = "PROMPTSMITH_HOST";
    pub const PORT: &str = "PROMPTSMITH_PORT";
    pub const ALLOWED_ORIGINS: &str = "PROMPTSMITH_ALLOWED_ORIGINS";
}
