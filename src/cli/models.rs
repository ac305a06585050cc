use anyhow::{Context, Result};
use promptsmith_core::{ModelId, get_available_models_by_modality};
use serde_json::json;

/// Print the supported models, grouped by modality
pub fn handle_models_command(json: bool) -> Result<()> {
    let grouped = get_available_models_by_modality();

    if json {
        let rendered = serde_json::to_string_pretty(&json!({ "models": grouped }))
            .context("Failed to serialize model listing")?;
        println!("{rendered}");
        return Ok(());
    }

    for (modality, models) in &grouped {
        println!("{} ({})", modality.label(), models.len());
        for model in models {
            match model.parse::<ModelId>() {
                Ok(id) => println!("  {model:<24} {}: {}", id.display_name(), id.description()),
                Err(_) => println!("  {model}"),
            }
        }
        println!();
    }

    Ok(())
}
