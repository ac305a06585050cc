//! CLI argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for promptsmith
#[derive(Parser, Debug)]
#[command(
    name = "promptsmith",
    version,
    about = "Compile structured text, image, video and audio prompts into model-specific prompt text"
)]
pub struct Cli {
    /// Configuration file path; defaults to <workspace>/promptsmith.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Workspace directory searched for promptsmith.toml; defaults to the current directory
    #[arg(long, global = true)]
    pub workspace: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    #[cfg(feature = "http-server")]
    Serve {
        /// Address to bind, overriding [server] host
        #[arg(long)]
        host: Option<String>,

        /// Port to bind, overriding [server] port
        #[arg(long)]
        port: Option<u16>,
    },

    /// List the supported models grouped by modality
    Models {
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compile a single prompt and print it
    Compile(CompileArgs),
}

impl Commands {
    /// Configuration values set directly on the command line
    #[cfg_attr(not(feature = "http-server"), allow(unused_mut))]
    pub fn config_overrides(&self) -> Vec<(&'static str, toml::Value)> {
        let mut overrides = Vec::new();
        #[cfg(feature = "http-server")]
        if let Self::Serve { host, port } = self {
            if let Some(host) = host {
                overrides.push(("server.host", toml::Value::String(host.clone())));
            }
            if let Some(port) = port {
                overrides.push(("server.port", toml::Value::Integer(i64::from(*port))));
            }
        }
        overrides
    }
}

/// Options for the `compile` command
#[derive(Args, Debug, Clone)]
pub struct CompileArgs {
    /// Prompt modality (text, image, video, audio)
    #[arg(long)]
    pub modality: String,

    /// Target model id, e.g. gpt-4 or stable-video-diffusion
    #[arg(long)]
    pub model: String,

    /// Prompt payload as a JSON object
    #[arg(long, required_unless_present = "payload_file", conflicts_with = "payload_file")]
    pub payload: Option<String>,

    /// Read the JSON payload from a file
    #[arg(long)]
    pub payload_file: Option<PathBuf>,

    /// Print the full response object as JSON
    #[arg(long)]
    pub json: bool,
}
