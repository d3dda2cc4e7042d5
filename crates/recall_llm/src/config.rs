//! Configuration for recall backends.
//!
//! Built once at startup by the process entry point; a missing cloud API key
//! or an unknown backend name fails here, never on first use.

use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::types::Mode;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_THINKING_MODEL: &str = "gemini-2.5-pro";
pub const DEFAULT_FAST_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://127.0.0.1:11434";
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.2";

/// Backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    #[default]
    Cloud,
    Local,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Cloud => "cloud",
            BackendKind::Local => "local",
        }
    }
}

impl FromStr for BackendKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "cloud" | "gemini" => Ok(BackendKind::Cloud),
            "local" | "ollama" => Ok(BackendKind::Local),
            other => Err(Error::config(format!("unrecognized backend: {:?}", other))),
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Cloud backend settings.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub thinking_model: String,
    pub fast_model: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            thinking_model: DEFAULT_THINKING_MODEL.to_string(),
            fast_model: DEFAULT_FAST_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_models(mut self, thinking: impl Into<String>, fast: impl Into<String>) -> Self {
        self.thinking_model = thinking.into();
        self.fast_model = fast.into();
        self
    }

    pub fn model_for(&self, mode: Mode) -> &str {
        match mode {
            Mode::Thinking => &self.thinking_model,
            Mode::Fast => &self.fast_model,
        }
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("thinking_model", &self.thinking_model)
            .field("fast_model", &self.fast_model)
            .finish()
    }
}

/// Local inference server settings.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    pub base_url: String,
    pub model: String,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OLLAMA_BASE_URL.to_string(),
            model: DEFAULT_OLLAMA_MODEL.to_string(),
        }
    }
}

impl OllamaConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Resolved backend configuration.
#[derive(Debug, Clone)]
pub enum AppConfig {
    Cloud(GeminiConfig),
    Local(OllamaConfig),
}

impl AppConfig {
    /// Create config from environment variables.
    ///
    /// Optional: `RECALL_BACKEND` (default: cloud)
    /// Required for cloud: `GEMINI_API_KEY` (or `GOOGLE_API_KEY`)
    /// Optional: `GEMINI_BASE_URL`, `GEMINI_MODEL_THINKING`, `GEMINI_MODEL_FAST`
    /// Optional: `OLLAMA_BASE_URL`, `OLLAMA_MODEL`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let kind = match var("RECALL_BACKEND") {
            Some(name) => name.parse::<BackendKind>()?,
            None => BackendKind::default(),
        };

        match kind {
            BackendKind::Cloud => {
                let api_key = var("GEMINI_API_KEY")
                    .or_else(|| var("GOOGLE_API_KEY"))
                    .ok_or_else(|| Error::config("GEMINI_API_KEY not set"))?;
                let thinking = var("GEMINI_MODEL_THINKING")
                    .unwrap_or_else(|| DEFAULT_THINKING_MODEL.to_string());
                let fast =
                    var("GEMINI_MODEL_FAST").unwrap_or_else(|| DEFAULT_FAST_MODEL.to_string());
                let mut config = GeminiConfig::new(api_key).with_models(thinking, fast);
                if let Some(base_url) = var("GEMINI_BASE_URL") {
                    config = config.with_base_url(base_url);
                }
                Ok(AppConfig::Cloud(config))
            }
            BackendKind::Local => {
                let mut config = OllamaConfig::default();
                if let Some(base_url) = var("OLLAMA_BASE_URL") {
                    config = config.with_base_url(base_url);
                }
                if let Some(model) = var("OLLAMA_MODEL") {
                    config = config.with_model(model);
                }
                Ok(AppConfig::Local(config))
            }
        }
    }

    pub fn kind(&self) -> BackendKind {
        match self {
            AppConfig::Cloud(_) => BackendKind::Cloud,
            AppConfig::Local(_) => BackendKind::Local,
        }
    }
}

/// Load env files so API keys are available to [`AppConfig::from_env`].
/// Order: 1) ~/.recall/env  2) nearest `.env` walking up from cwd.
/// Variables already set in the process win.
pub fn load_dotenv() {
    if let Some(home) = dirs::home_dir() {
        let global = home.join(".recall").join("env");
        if global.exists() {
            let _ = dotenvy::from_path(&global);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        if let Some(env_file) = find_upwards(&cwd, ".env") {
            let _ = dotenvy::from_path(&env_file);
        }
    }
}

fn find_upwards(start: &Path, name: &str) -> Option<std::path::PathBuf> {
    start
        .ancestors()
        .take(32)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.exists())
}
