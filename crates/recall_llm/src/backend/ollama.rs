//! Ollama client (local inference server, default 127.0.0.1:11434).
//!
//! `/api/generate` streams newline-delimited JSON objects, each optionally
//! carrying a `response` fragment:
//! - `{"model":"llama3.2","response":"Hel","done":false}`
//! - `{"model":"llama3.2","response":"lo","done":false}`
//! - `{"model":"llama3.2","response":"","done":true}`

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{Stream, StreamExt};
use reqwest::Client;
use serde_json::Value;

use super::Backend;
use crate::config::OllamaConfig;
use crate::error::{Error, Result};
use crate::types::{BackendResponse, Mode};

/// Ollama HTTP client. No timeout, no retry: a stalled stream blocks the caller.
pub struct OllamaBackend {
    config: OllamaConfig,
    client: Client,
}

impl OllamaBackend {
    pub fn new(config: OllamaConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Backend for OllamaBackend {
    fn backend_id(&self) -> &str {
        "ollama"
    }

    /// The local server runs one fixed model whatever the mode.
    fn model_for(&self, _mode: Mode) -> String {
        self.config.model.clone()
    }

    async fn generate_content(&self, model: &str, prompt: &str) -> Result<BackendResponse> {
        let url = format!("{}/api/generate", self.config.base_url.trim_end_matches('/'));
        let body = serde_json::json!({
            "model": model,
            "prompt": prompt,
        });

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(Error::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let text = read_ndjson(response.bytes_stream()).await?;
        Ok(BackendResponse::from_text(text))
    }
}

/// Drain an NDJSON byte stream and return the concatenated, trimmed `response` fragments.
///
/// Fails with the first transport error, or with [`Error::Stream`] when a line
/// carries an `error` field.
pub async fn read_ndjson<S, E>(stream: S) -> Result<String>
where
    S: Stream<Item = std::result::Result<Bytes, E>>,
    Error: From<E>,
{
    let mut stream = std::pin::pin!(stream);
    let mut decoder = NdjsonDecoder::new();
    while let Some(chunk) = stream.next().await {
        decoder.push(&chunk?);
    }
    decoder.finish()
}

/// Incremental NDJSON decoder.
///
/// Bytes are buffered until a newline arrives, so a line (or a UTF-8 sequence)
/// split across chunks is decoded whole. Complete lines that are not valid
/// JSON are skipped. The first line carrying an `error` field is kept and
/// returned by [`NdjsonDecoder::finish`].
#[derive(Debug, Default)]
pub struct NdjsonDecoder {
    pending: Vec<u8>,
    // Prefix of `pending` already known to hold no newline.
    scanned: usize,
    text: String,
    skipped: usize,
    error: Option<String>,
}

impl NdjsonDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk as delivered by the transport.
    pub fn push(&mut self, chunk: &[u8]) {
        self.pending.extend_from_slice(chunk);
        let mut start = 0;
        let mut from = self.scanned;
        while let Some(offset) = self.pending[from..].iter().position(|&b| b == b'\n') {
            let end = from + offset;
            let line = String::from_utf8_lossy(&self.pending[start..end]).into_owned();
            self.consume_line(&line);
            start = end + 1;
            from = start;
        }
        self.pending.drain(..start);
        self.scanned = self.pending.len();
    }

    /// Fragments collected so far, untrimmed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of complete lines that failed to parse.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// First error the server reported in-band, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Flush a trailing line without newline and return the trimmed text.
    pub fn finish(mut self) -> Result<String> {
        if !self.pending.is_empty() {
            let rest = std::mem::take(&mut self.pending);
            let line = String::from_utf8_lossy(&rest).into_owned();
            self.consume_line(&line);
        }
        if self.skipped > 0 {
            tracing::debug!(skipped = self.skipped, "skipped unparseable stream lines");
        }
        match self.error {
            Some(message) => Err(Error::Stream(message)),
            None => Ok(self.text.trim().to_string()),
        }
    }

    fn consume_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        match serde_json::from_str::<Value>(line) {
            Ok(obj) => {
                if let Some(fragment) = obj.get("response").and_then(Value::as_str) {
                    self.text.push_str(fragment);
                }
                if let Some(err) = obj.get("error").and_then(Value::as_str) {
                    tracing::warn!(error = %err, "ollama reported an error mid-stream");
                    self.error.get_or_insert_with(|| err.to_string());
                }
            }
            Err(_) => self.skipped += 1,
        }
    }
}
