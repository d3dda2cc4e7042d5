//! Backend trait and the two interchangeable transports.

mod gemini;
mod ollama;

pub use gemini::GeminiBackend;
pub use ollama::{NdjsonDecoder, OllamaBackend, read_ndjson};

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::error::Result;
use crate::types::{BackendResponse, Mode};

/// Single capability every backend exposes: prompt in, opaque response out.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Short identifier used in logs ("gemini", "ollama").
    fn backend_id(&self) -> &str;

    /// Model name used for the given mode.
    fn model_for(&self, mode: Mode) -> String;

    async fn generate_content(&self, model: &str, prompt: &str) -> Result<BackendResponse>;
}

/// Build the configured backend. Called once at startup.
pub fn build_backend(config: &AppConfig) -> Result<Arc<dyn Backend>> {
    let backend: Arc<dyn Backend> = match config {
        AppConfig::Cloud(c) => Arc::new(GeminiBackend::new(c.clone())?),
        AppConfig::Local(c) => Arc::new(OllamaBackend::new(c.clone())),
    };
    tracing::info!(
        backend = backend.backend_id(),
        kind = %config.kind(),
        "backend configured"
    );
    Ok(backend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GeminiConfig, OllamaConfig};

    #[test]
    fn test_build_local_backend() {
        let backend = build_backend(&AppConfig::Local(OllamaConfig::default())).unwrap();
        assert_eq!(backend.backend_id(), "ollama");
        assert_eq!(backend.model_for(Mode::Thinking), "llama3.2");
        assert_eq!(backend.model_for(Mode::Fast), "llama3.2");
    }

    #[test]
    fn test_build_cloud_backend_selects_models() {
        let backend = build_backend(&AppConfig::Cloud(GeminiConfig::new("key"))).unwrap();
        assert_eq!(backend.backend_id(), "gemini");
        assert_eq!(backend.model_for(Mode::Thinking), "gemini-2.5-pro");
        assert_eq!(backend.model_for(Mode::Fast), "gemini-2.5-flash");
    }

    #[test]
    fn test_build_cloud_backend_rejects_empty_key() {
        let result = build_backend(&AppConfig::Cloud(GeminiConfig::new("")));
        assert!(result.is_err());
    }
}
