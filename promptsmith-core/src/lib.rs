//! # promptsmith-core - prompt compilation for promptsmith
//!
//! `promptsmith-core` turns a structured, modality-specific description of
//! what a user wants into the prompt text a particular model expects.
//!
//! ## Architecture Overview
//!
//! - `schema`: the canonical prompt types ([`TextPrompt`], [`ImagePrompt`],
//!   [`VideoPrompt`], [`VoicePrompt`]) and [`CanonicalPrompt`], which tags a
//!   prompt with its modality.
//! - `adapters`: one stateless formatter per target model, each implementing
//!   [`PromptAdapter`] for exactly one prompt type.
//! - `registry`: the process-wide table from model id to adapter, and the
//!   per-modality model listing.
//! - `compiler`: exact-match dispatch that refuses to hand a prompt to an
//!   adapter of another modality.
//! - `request`: validation and sanitization of untrusted generate requests,
//!   shared by the HTTP server and the CLI.
//! - `server` (feature `http-server`): the axum boundary.
//!
//! ## Quickstart
//!
//! ```rust,ignore
//! use promptsmith_core::{CanonicalPrompt, TextPrompt, compile};
//!
//! let mut prompt = TextPrompt::default();
//! prompt.base.goal = "Explain recursion".into();
//! prompt.base.subject = "stacks".into();
//!
//! let text = compile(&CanonicalPrompt::Text(prompt), "gpt-4")?;
//! assert!(text.starts_with("Explain recursion: stacks"));
//! ```

pub mod adapters;
pub mod compiler;
pub mod errors;
pub mod registry;
pub mod request;
pub mod schema;

#[cfg(feature = "http-server")]
pub mod server;

pub use adapters::PromptAdapter;
pub use compiler::{PromptCompiler, compile};
pub use errors::{CompileError, GenerateError, ValidationError};
pub use registry::{AdapterRegistry, RegisteredAdapter, get_available_models_by_modality};
pub use request::{GenerateRequest, GenerateResponse, generate};
pub use schema::{CanonicalPrompt, ImagePrompt, PromptBase, TextPrompt, VideoPrompt, VoicePrompt};

pub use promptsmith_config::{Modality, ModelId};
