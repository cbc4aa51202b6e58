use gemini_relay::{
    Error,
    config::{self, ApiKey},
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 3000
  path: /api/gemini
  allowed_origins:
    - https://infographic.example
  logs:
    level: debug
gemini:
  api_key: from-file
  voice_name: Puck
"#;

async fn write_config(dir: &TempDir, content: &str) -> String {
    let config_path = dir.path().join("config.yaml");
    tokio::fs::write(&config_path, content).await.unwrap();
    config_path.to_string_lossy().to_string()
}

#[tokio::test]
async fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_config(&dir, SAMPLE_CONFIG_YAML).await;

    let config = config::load_from(&config_path).await.unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.path, "/api/gemini");
    assert_eq!(config.server.allowed_origins, vec!["https://infographic.example"]);
    assert_eq!(config.server.logs.level, "debug");
    assert_eq!(config.gemini.voice_name, "Puck");
    assert_eq!(config.gemini.speech_model, "gemini-2.5-flash-preview-tts");
    assert_eq!(config.gemini.resolve_api_key(), Some(ApiKey::new("from-file")));
}

#[tokio::test]
async fn test_load_from_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.yaml");

    let result = config::load_from(&missing.to_string_lossy()).await;

    assert!(matches!(result, Err(Error::Io(_))));
}

#[tokio::test]
async fn test_load_from_invalid_yaml_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_config(&dir, "server:\n  port: not-a-number\n").await;

    let result = config::load_from(&config_path).await;

    assert!(matches!(result, Err(Error::Yaml(_))));
}

#[test]
fn test_unset_env_variable_means_no_key() {
    let config = config::from_yaml_str(
        r#"
gemini:
  api_key_env: GEMINI_RELAY_INTEGRATION_UNSET_VARIABLE
"#,
    )
    .unwrap();

    assert_eq!(config.gemini.resolve_api_key(), None);
}
