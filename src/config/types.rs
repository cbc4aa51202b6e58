use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub gemini: GeminiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_path")]
    pub path: String,
    /// Browser origins allowed to call the relay. Empty disables CORS.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    /// Larger POST bodies are answered with a 500 before reaching Gemini.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<ApiKey>,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_text_model")]
    pub text_model: String,
    #[serde(default = "default_speech_model")]
    pub speech_model: String,
    #[serde(default = "default_voice_name")]
    pub voice_name: String,
    #[serde(default = "default_speech_prefix")]
    pub speech_prefix: String,
}

/// Secret credential for the Gemini API.
///
/// `Debug` never prints the value; use [`ApiKey::expose`] where the key has
/// to go on the wire.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

impl GeminiConfig {
    /// The key from the config file wins; otherwise it is read from the
    /// environment variable named by `api_key_env`. Blank values count as unset.
    pub fn resolve_api_key(&self) -> Option<ApiKey> {
        if let Some(key) = self.api_key.as_ref().filter(|k| !k.is_empty()) {
            return Some(key.clone());
        }

        std::env::var(&self.api_key_env)
            .ok()
            .map(ApiKey::new)
            .filter(|k| !k.is_empty())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            path: default_path(),
            allowed_origins: Vec::new(),
            max_body_bytes: default_max_body_bytes(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            api_key_env: default_api_key_env(),
            text_model: default_text_model(),
            speech_model: default_speech_model(),
            voice_name: default_voice_name(),
            speech_prefix: default_speech_prefix(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_path() -> String {
    "/".to_string()
}

fn default_max_body_bytes() -> usize {
    2 * 1024 * 1024
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_text_model() -> String {
    "gemini-2.5-flash-preview-05-20".to_string()
}

fn default_speech_model() -> String {
    "gemini-2.5-flash-preview-tts".to_string()
}

fn default_voice_name() -> String {
    "Kore".to_string()
}

fn default_speech_prefix() -> String {
    "Diga de forma clara e informativa: ".to_string()
}
