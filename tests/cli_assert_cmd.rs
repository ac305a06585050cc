use anyhow::Result;
use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A `promptsmith` command isolated from the caller's environment and config files
fn promptsmith(workspace: &TempDir) -> Result<Command> {
    let mut cmd = Command::cargo_bin("promptsmith")?;
    cmd.current_dir(workspace.path())
        .env_remove("RUST_LOG")
        .env_remove("PROMPTSMITH_CONFIG_PATH")
        .env_remove("PROMPTSMITH_HOST")
        .env_remove("PROMPTSMITH_PORT")
        .env_remove("PROMPTSMITH_ALLOWED_ORIGINS");
    Ok(cmd)
}

#[test]
fn help_lists_commands() -> Result<()> {
    let workspace = TempDir::new()?;
    promptsmith(&workspace)?
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("compile"))
        .stdout(predicate::str::contains("models"));
    Ok(())
}

#[test]
fn models_json_lists_every_modality() -> Result<()> {
    let workspace = TempDir::new()?;
    let output = promptsmith(&workspace)?
        .args(["models", "--json"])
        .output()?;
    assert!(output.status.success());

    let listing: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let models = &listing["models"];
    assert_eq!(models["text"][0], "gpt-4");
    assert_eq!(models["image"][1], "stable-diffusion");
    assert_eq!(models["video"][4], "stable-video-diffusion");
    assert_eq!(models["audio"].as_array().map(Vec::len), Some(10));
    Ok(())
}

#[test]
fn models_text_output_groups_by_modality() -> Result<()> {
    let workspace = TempDir::new()?;
    promptsmith(&workspace)?
        .arg("models")
        .assert()
        .success()
        .stdout(predicate::str::contains("Text (5)"))
        .stdout(predicate::str::contains("Audio (10)"))
        .stdout(predicate::str::contains("wellsaid"));
    Ok(())
}

#[test]
fn compile_prints_the_prompt() -> Result<()> {
    let workspace = TempDir::new()?;
    promptsmith(&workspace)?
        .args([
            "compile",
            "--modality",
            "text",
            "--model",
            "gpt-4",
            "--payload",
            r#"{"goal": "Explain recursion", "subject": "stacks"}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Explain recursion: stacks"));
    Ok(())
}

#[test]
fn compile_reads_payload_file() -> Result<()> {
    let workspace = TempDir::new()?;
    let temp = assert_fs::TempDir::new()?;
    let payload = temp.child("payload.json");
    payload.write_str(r#"{"scene": "a desert road", "duration_seconds": 10}"#)?;

    promptsmith(&workspace)?
        .args([
            "compile",
            "--modality",
            "video",
            "--model",
            "stable-video-diffusion",
            "--json",
            "--payload-file",
        ])
        .arg(payload.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Frames: 240"))
        .stdout(predicate::str::contains(r#""modality": "video""#));
    Ok(())
}

#[test]
fn compile_reports_validation_errors() -> Result<()> {
    let workspace = TempDir::new()?;
    promptsmith(&workspace)?
        .args([
            "compile",
            "--modality",
            "text",
            "--model",
            "sora",
            "--payload",
            r#"{"goal": "x"}"#,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid model 'sora' for modality 'text'. Available models: gpt-4",
        ));

    promptsmith(&workspace)?
        .args([
            "compile",
            "--modality",
            "video",
            "--model",
            "pika",
            "--payload",
            r#"{"scene": "x", "duration_seconds": 90}"#,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "duration_seconds must be between 1 and 60",
        ));
    Ok(())
}

#[test]
fn workspace_limits_apply_to_compile() -> Result<()> {
    let workspace = TempDir::new()?;
    fs::write(
        workspace.path().join("promptsmith.toml"),
        "[limits]\nmax_duration_seconds = 8\n",
    )?;

    promptsmith(&workspace)?
        .args([
            "compile",
            "--modality",
            "video",
            "--model",
            "veo",
            "--payload",
            r#"{"scene": "x", "duration_seconds": 10}"#,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "duration_seconds must be between 1 and 8",
        ));
    Ok(())
}

#[test]
fn invalid_config_file_fails() -> Result<()> {
    let workspace = TempDir::new()?;
    let config_path = workspace.path().join("custom.toml");
    fs::write(&config_path, "[server]\nport = 0\n")?;

    promptsmith(&workspace)?
        .arg("--config")
        .arg(&config_path)
        .arg("models")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load promptsmith configuration"));
    Ok(())
}

#[test]
fn debug_tracing_logs_filter_to_stderr() -> Result<()> {
    let workspace = TempDir::new()?;
    fs::write(
        workspace.path().join("promptsmith.toml"),
        "[debug]\nenable_tracing = true\ntrace_level = \"info\"\n",
    )?;

    promptsmith(&workspace)?
        .arg("models")
        .assert()
        .success()
        .stdout(predicate::str::contains("Text (5)"))
        .stderr(predicate::str::contains("Debug tracing enabled"))
        .stderr(predicate::str::contains("promptsmith=info"));
    Ok(())
}
