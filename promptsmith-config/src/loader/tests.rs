use super::*;

use crate::constants::env;
use crate::loader::layers::ConfigLayerSource;
use crate::TraceLevel;
use pretty_assertions::assert_eq;
use serial_test::serial;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

const ENV_KEYS: [&str; 4] = [env::CONFIG_PATH, env::HOST, env::PORT, env::ALLOWED_ORIGINS];

fn clear_env() {
    for key in ENV_KEYS {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

fn set_env(key: &str, value: &str) {
    unsafe {
        std::env::set_var(key, value);
    }
}

#[test]
#[serial]
fn test_defaults_when_no_config_file() {
    clear_env();
    let workspace = assert_fs::TempDir::new().expect("failed to create workspace");

    let manager =
        ConfigManager::load_from_workspace(workspace.path()).expect("failed to load config");

    assert_eq!(manager.config(), &PromptsmithConfig::default());
    assert!(manager.config_path().is_none());
    assert!(manager.layer_stack().layers().is_empty());
    assert_eq!(manager.workspace_root(), Some(workspace.path()));
}

#[test]
#[serial]
fn test_workspace_file_overrides_defaults() {
    clear_env();
    let workspace = assert_fs::TempDir::new().expect("failed to create workspace");
    let config_path = workspace.path().join("promptsmith.toml");
    fs::write(
        &config_path,
        r#"
            [server]
            port = 8080

            [limits]
            max_text_length = 500

            [debug]
            trace_level = "debug"
        "#,
    )
    .expect("failed to write workspace config");

    let manager =
        ConfigManager::load_from_workspace(workspace.path()).expect("failed to load config");
    let config = manager.config();

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.limits.max_text_length, 500);
    assert_eq!(config.limits.max_duration_seconds, 60);
    assert_eq!(config.debug.trace_level, TraceLevel::Debug);
    assert_eq!(manager.config_path(), Some(config_path.as_path()));

    let layers = manager.layer_stack().layers();
    assert_eq!(layers.len(), 1);
    assert!(matches!(
        layers[0].source,
        ConfigLayerSource::Workspace { .. }
    ));
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    clear_env();
    let mut file = NamedTempFile::new().expect("failed to create temp config");
    writeln!(
        file,
        "[server]\nhost = \"0.0.0.0\"\nport = 7000\nallowed_origins = [\"https://a.example\"]"
    )
    .expect("failed to write temp config");

    set_env(env::PORT, "9100");
    set_env(env::ALLOWED_ORIGINS, "https://b.example, https://c.example ,");

    let result = ConfigManager::load_from_file(file.path());
    clear_env();
    let manager = result.expect("failed to load config");

    let server = &manager.config().server;
    assert_eq!(server.host, "0.0.0.0");
    assert_eq!(server.port, 9100);
    assert_eq!(
        server.allowed_origins,
        vec!["https://b.example", "https://c.example"]
    );

    let layers = manager.layer_stack().layers();
    assert_eq!(layers.len(), 2);
    assert!(matches!(layers[0].source, ConfigLayerSource::File { .. }));
    assert!(matches!(layers[1].source, ConfigLayerSource::Environment));
}

#[test]
#[serial]
fn test_config_path_env_takes_precedence() {
    clear_env();
    let workspace = assert_fs::TempDir::new().expect("failed to create workspace");
    fs::write(
        workspace.path().join("promptsmith.toml"),
        "[server]\nport = 6000",
    )
    .expect("failed to write workspace config");

    let explicit = workspace.path().join("explicit.toml");
    fs::write(&explicit, "[server]\nport = 6500").expect("failed to write explicit config");
    set_env(env::CONFIG_PATH, explicit.to_str().expect("utf-8 path"));

    let result = ConfigBuilder::new()
        .workspace(workspace.path().to_path_buf())
        .build();
    clear_env();

    let manager = result.expect("failed to build config");
    assert_eq!(manager.config().server.port, 6500);
    assert_eq!(manager.config_path(), Some(explicit.as_path()));
}

#[test]
#[serial]
fn test_invalid_env_port_is_rejected() {
    clear_env();
    set_env(env::PORT, "not-a-port");
    let workspace = assert_fs::TempDir::new().expect("failed to create workspace");

    let result = ConfigManager::load_from_workspace(workspace.path());
    clear_env();

    let err = result.expect_err("invalid port should fail");
    assert!(format!("{err:#}").contains("PROMPTSMITH_PORT"));
}

#[test]
#[serial]
fn test_invalid_values_fail_validation() {
    clear_env();
    for contents in [
        "[server]\nport = 0",
        "[server]\nallowed_origins = []",
        "[limits]\nmax_duration_seconds = 0",
    ] {
        let mut file = NamedTempFile::new().expect("failed to create temp config");
        file.write_all(contents.as_bytes())
            .expect("failed to write temp config");

        let err = ConfigManager::load_from_file(file.path())
            .expect_err("invalid config should be rejected");
        assert!(
            format!("{err:#}").contains("validation"),
            "unexpected error for {contents:?}: {err:#}"
        );
    }
}

#[test]
#[serial]
fn test_malformed_toml_is_reported() {
    clear_env();
    let workspace = assert_fs::TempDir::new().expect("failed to create workspace");
    fs::write(workspace.path().join("promptsmith.toml"), "[server\nport = ")
        .expect("failed to write workspace config");

    let err = ConfigManager::load_from_workspace(workspace.path())
        .expect_err("malformed toml should fail");
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
#[serial]
fn test_config_builder_runtime_overrides() {
    clear_env();
    let workspace = assert_fs::TempDir::new().expect("failed to create workspace");
    fs::write(
        workspace.path().join("promptsmith.toml"),
        "[server]\nhost = \"10.0.0.1\"\nport = 6000",
    )
    .expect("failed to write workspace config");

    let manager = ConfigBuilder::new()
        .workspace(workspace.path().to_path_buf())
        .runtime_override("server.port", toml::Value::Integer(7777))
        .runtime_overrides(&[("debug.trace_level".to_string(), "trace".to_string())])
        .build()
        .expect("failed to build config");

    assert_eq!(manager.config().server.port, 7777);
    assert_eq!(manager.config().server.host, "10.0.0.1");
    assert_eq!(manager.config().debug.trace_level, TraceLevel::Trace);

    let layers = manager.layer_stack().layers();
    assert_eq!(layers.len(), 2);
    assert!(matches!(layers[1].source, ConfigLayerSource::Runtime));
}

#[test]
#[serial]
fn test_runtime_override_is_validated() {
    clear_env();
    let workspace = assert_fs::TempDir::new().expect("failed to create workspace");

    let result = ConfigBuilder::new()
        .workspace(workspace.path().to_path_buf())
        .runtime_override("server.port", toml::Value::Integer(0))
        .build();

    assert!(result.is_err());
}

#[test]
fn test_environment_layer_ignores_blank_values() {
    let layer = ConfigManager::environment_layer(|key| match key {
        k if k == env::HOST => Some("   ".to_string()),
        _ => None,
    })
    .expect("blank values are not an error");
    assert!(layer.is_none());
}

#[test]
fn test_insert_dotted_key() {
    let mut table = toml::Table::new();
    table.insert("a".to_string(), toml::Value::Integer(1));
    ConfigBuilder::insert_dotted_key(&mut table, "a.b.c", toml::Value::String("value".into()));

    let c = table["a"]["b"]["c"].as_str().unwrap();
    assert_eq!(c, "value");
}

#[test]
fn test_merge_toml_values() {
    let mut base = toml::from_str::<toml::Value>(
        r#"
            [server]
            host = "127.0.0.1"
            allowed_origins = ["http://localhost:3000", "http://localhost:5173"]
            [limits]
            max_text_length = 2000
        "#,
    )
    .unwrap();

    let overlay = toml::from_str::<toml::Value>(
        r#"
            [server]
            port = 8080
            allowed_origins = ["*"]
        "#,
    )
    .unwrap();

    merge_toml_values(&mut base, &overlay);

    let server = base["server"].as_table().unwrap();
    assert_eq!(server["host"].as_str(), Some("127.0.0.1"));
    assert_eq!(server["port"].as_integer(), Some(8080));
    assert_eq!(server["allowed_origins"].as_array().unwrap().len(), 1);
    assert_eq!(base["limits"]["max_text_length"].as_integer(), Some(2000));
}
