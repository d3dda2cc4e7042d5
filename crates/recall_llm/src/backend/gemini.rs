//! Gemini `generateContent` client (cloud backend).

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use super::Backend;
use crate::config::GeminiConfig;
use crate::error::{Error, Result};
use crate::types::{BackendResponse, Mode};

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

/// Gemini HTTP client. One request, one response; no retry.
pub struct GeminiBackend {
    config: GeminiConfig,
    client: Client,
}

impl GeminiBackend {
    /// Header carrying the API key.
    pub const API_KEY_HEADER: &'static str = "x-goog-api-key";

    pub fn new(config: GeminiConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(Error::config("GEMINI_API_KEY not set"));
        }
        Ok(Self {
            config,
            client: Client::new(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }
}

#[async_trait]
impl Backend for GeminiBackend {
    fn backend_id(&self) -> &str {
        "gemini"
    }

    fn model_for(&self, mode: Mode) -> String {
        self.config.model_for(mode).to_string()
    }

    async fn generate_content(&self, model: &str, prompt: &str) -> Result<BackendResponse> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint(model))
            .header(Self::API_KEY_HEADER, &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: serde_json::Value = serde_json::from_str(&text)?;
        Ok(BackendResponse::from_json(parsed))
    }
}
