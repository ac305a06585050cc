use std::fs;

use anyhow::{Context, Result};
use promptsmith_config::PromptsmithConfig;
use promptsmith_core::{GenerateRequest, PromptCompiler, generate};
use serde_json::{Value, json};

use super::args::CompileArgs;

/// Validate and compile one prompt the same way `POST /generate` does
pub fn handle_compile_command(config: &PromptsmithConfig, args: &CompileArgs) -> Result<()> {
    let payload = read_payload(args)?;
    let raw = json!({
        "modality": args.modality,
        "model": args.model,
        "payload": payload,
    });

    let request = GenerateRequest::from_value(raw, &config.limits)?;
    let response = generate(&request, &PromptCompiler::default())?;
    tracing::debug!(model = %response.model, modality = %response.modality, "compiled prompt");

    if args.json {
        let rendered = serde_json::to_string_pretty(&response)
            .context("Failed to serialize compiled prompt")?;
        println!("{rendered}");
    } else {
        println!("{}", response.prompt);
    }
    Ok(())
}

fn read_payload(args: &CompileArgs) -> Result<Value> {
    let (source, text) = match (&args.payload, &args.payload_file) {
        (Some(inline), _) => ("--payload".to_string(), inline.clone()),
        (None, Some(path)) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read payload file {}", path.display()))?;
            (path.display().to_string(), text)
        }
        (None, None) => anyhow::bail!("Provide --payload or --payload-file"),
    };

    serde_json::from_str(&text).with_context(|| format!("Payload in {source} is not valid JSON"))
}
