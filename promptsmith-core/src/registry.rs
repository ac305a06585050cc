//! Model id to adapter registry

use std::sync::LazyLock;

use indexmap::IndexMap;
use promptsmith_config::{Modality, ModelId};

use crate::adapters::PromptAdapter;
use crate::adapters::audio::{
    CoquiTtsAdapter, ElevenLabsAdapter, IndicTtsAdapter, OpenAIAudioAdapter, SeamlessM4TAdapter,
};
use crate::adapters::image::{
    DalleAdapter, FireflyAdapter, ImagenAdapter, MidjourneyAdapter, StableDiffusionAdapter,
};
use crate::adapters::text::{
    ClaudeAdapter, GeminiAdapter, Gpt4Adapter, LlamaAdapter, MistralAdapter,
};
use crate::adapters::video::{
    PikaAdapter, RunwayAdapter, SoraAdapter, StableVideoDiffusionAdapter, VeoAdapter,
};
use crate::adapters::voice::{
    AzureVoiceAdapter, MurfAiAdapter, OpenAIVoiceAdapter, PlayHtAdapter, WellSaidAdapter,
};
use crate::schema::{ImagePrompt, TextPrompt, VideoPrompt, VoicePrompt};

/// An adapter tagged with the prompt type it accepts
pub enum RegisteredAdapter {
    Text(Box<dyn PromptAdapter<TextPrompt>>),
    Image(Box<dyn PromptAdapter<ImagePrompt>>),
    Video(Box<dyn PromptAdapter<VideoPrompt>>),
    Audio(Box<dyn PromptAdapter<VoicePrompt>>),
}

impl RegisteredAdapter {
    pub fn model(&self) -> ModelId {
        match self {
            Self::Text(adapter) => adapter.model(),
            Self::Image(adapter) => adapter.model(),
            Self::Video(adapter) => adapter.model(),
            Self::Audio(adapter) => adapter.model(),
        }
    }

    pub fn modality(&self) -> Modality {
        match self {
            Self::Text(_) => Modality::Text,
            Self::Image(_) => Modality::Image,
            Self::Video(_) => Modality::Video,
            Self::Audio(_) => Modality::Audio,
        }
    }
}

impl std::fmt::Debug for RegisteredAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredAdapter")
            .field("model", &self.model())
            .field("modality", &self.modality())
            .finish()
    }
}

macro_rules! register_adapters {
    ($registry:expr, $( $variant:ident => $adapter:expr ),+ $(,)?) => {
        $(
            $registry.register(RegisteredAdapter::$variant(Box::new($adapter)));
        )+
    };
}

/// Every compiled-in adapter, keyed by model id in registration order
#[derive(Debug)]
pub struct AdapterRegistry {
    adapters: IndexMap<ModelId, RegisteredAdapter>,
}

static REGISTRY: LazyLock<AdapterRegistry> = LazyLock::new(AdapterRegistry::new);

impl AdapterRegistry {
    fn new() -> Self {
        let mut registry = Self {
            adapters: IndexMap::new(),
        };

        register_adapters!(
            registry,
            Text => Gpt4Adapter,
            Text => LlamaAdapter,
            Text => MistralAdapter,
            Text => GeminiAdapter,
            Text => ClaudeAdapter,
            Image => DalleAdapter,
            Image => StableDiffusionAdapter,
            Image => MidjourneyAdapter,
            Image => ImagenAdapter,
            Image => FireflyAdapter,
            Video => SoraAdapter,
            Video => RunwayAdapter,
            Video => PikaAdapter,
            Video => VeoAdapter,
            Video => StableVideoDiffusionAdapter,
            Audio => OpenAIAudioAdapter,
            Audio => ElevenLabsAdapter,
            Audio => SeamlessM4TAdapter,
            Audio => IndicTtsAdapter,
            Audio => CoquiTtsAdapter,
            Audio => OpenAIVoiceAdapter,
            Audio => PlayHtAdapter,
            Audio => AzureVoiceAdapter,
            Audio => MurfAiAdapter,
            Audio => WellSaidAdapter,
        );

        registry
    }

    fn register(&mut self, adapter: RegisteredAdapter) {
        self.adapters.insert(adapter.model(), adapter);
    }

    /// The process-wide registry
    pub fn global() -> &'static AdapterRegistry {
        &REGISTRY
    }

    /// Exact-match lookup; ids are case sensitive
    pub fn get(&self, model: &str) -> Option<&RegisteredAdapter> {
        let id = model.parse::<ModelId>().ok()?;
        self.adapters.get(&id)
    }

    pub fn contains(&self, model: &str) -> bool {
        self.get(model).is_some()
    }

    /// Model ids registered under `modality`, in registration order
    pub fn models_for(&self, modality: Modality) -> Vec<&'static str> {
        self.adapters
            .values()
            .filter(|adapter| adapter.modality() == modality)
            .map(|adapter| adapter.model().as_str())
            .collect()
    }

    pub fn model_ids(&self) -> impl Iterator<Item = ModelId> + '_ {
        self.adapters.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

/// Registered model ids grouped by modality (text, image, video, audio)
pub fn get_available_models_by_modality() -> IndexMap<Modality, Vec<&'static str>> {
    let registry = AdapterRegistry::global();
    Modality::ALL
        .into_iter()
        .map(|modality| (modality, registry.models_for(modality)))
        .collect()
}
