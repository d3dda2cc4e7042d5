//! Common test utilities: scripted backend and NDJSON bodies.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use recall_llm::{Backend, BackendResponse, Error, Mode, Result};

/// What the scripted backend answers.
pub enum Script {
    Reply(BackendResponse),
    Fail { status: u16, body: String },
}

/// Backend that records every call and answers from a script.
pub struct ScriptedBackend {
    script: Script,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedBackend {
    pub fn replying(response: BackendResponse) -> Self {
        Self {
            script: Script::Reply(response),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16, body: &str) -> Self {
        Self {
            script: Script::Fail {
                status,
                body: body.to_string(),
            },
            calls: Mutex::new(Vec::new()),
        }
    }

    /// (model, prompt) pairs seen so far.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Backend for ScriptedBackend {
    fn backend_id(&self) -> &str {
        "scripted"
    }

    fn model_for(&self, mode: Mode) -> String {
        match mode {
            Mode::Thinking => "slow-smart".to_string(),
            Mode::Fast => "quick".to_string(),
        }
    }

    async fn generate_content(&self, model: &str, prompt: &str) -> Result<BackendResponse> {
        self.calls
            .lock()
            .unwrap()
            .push((model.to_string(), prompt.to_string()));
        match &self.script {
            Script::Reply(response) => Ok(response.clone()),
            Script::Fail { status, body } => Err(Error::Status {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

/// NDJSON body the way Ollama streams it: one object per fragment plus a done marker.
pub fn ndjson_body(model: &str, fragments: &[&str]) -> String {
    let mut body = String::new();
    for fragment in fragments {
        let line = serde_json::json!({ "model": model, "response": fragment, "done": false });
        body.push_str(&line.to_string());
        body.push('\n');
    }
    let done = serde_json::json!({ "model": model, "response": "", "done": true });
    body.push_str(&done.to_string());
    body.push('\n');
    body
}
