//! Request/response types shared by the prompt builder, backends and extractor.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Caller-selected mode. `Thinking` picks the higher-capability model and the
/// more elaborate instruction hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Fast,
    Thinking,
}

impl Mode {
    pub fn from_thinking(thinking: bool) -> Self {
        if thinking { Mode::Thinking } else { Mode::Fast }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Fast => "fast",
            Mode::Thinking => "thinking",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the prompt tail asks the model to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    Question(String),
    Report,
    Flashcards { count: usize },
}

impl Task {
    pub fn name(&self) -> &'static str {
        match self {
            Task::Question(_) => "ask",
            Task::Report => "report",
            Task::Flashcards { .. } => "flashcards",
        }
    }
}

/// A question/answer pair extracted from generated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// Unique within one generation batch only.
    pub id: String,
    pub question: String,
    pub answer: String,
}

/// Callable text accessor exposed by some backend result objects.
pub type TextAccessor = Arc<dyn Fn() -> String + Send + Sync>;

/// Opaque backend result. Some path through it yields a string; the
/// normalizer decides which.
#[derive(Clone, Default)]
pub struct BackendResponse {
    pub(crate) accessor: Option<TextAccessor>,
    pub(crate) body: Value,
}

impl BackendResponse {
    /// Response whose text is produced by calling `f`.
    pub fn from_accessor<F>(f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self {
            accessor: Some(Arc::new(f)),
            body: Value::Null,
        }
    }

    /// Response carrying a raw JSON body (candidate/parts or text field).
    pub fn from_json(body: Value) -> Self {
        Self {
            accessor: None,
            body,
        }
    }

    /// Response whose text is already fully assembled.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::from_json(serde_json::json!({ "text": text.into() }))
    }

    pub fn body(&self) -> &Value {
        &self.body
    }
}

impl std::fmt::Debug for BackendResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendResponse")
            .field("accessor", &self.accessor.as_ref().map(|_| "Some(TextAccessor)"))
            .field("body", &self.body)
            .finish()
    }
}
