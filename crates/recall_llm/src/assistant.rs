//! Study assistant operations: ask, report, flashcards.
//!
//! Every operation returns `Result`; failures are logged on the operation span
//! before being returned. [`reply_or_apology`] is the one place an error is
//! turned into user-facing text.

use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use recall_observability::{llm_span, record_duration, record_error};
use tracing::Instrument;

use crate::backend::{Backend, build_backend};
use crate::config::AppConfig;
use crate::error::Result;
use crate::extract::extract_flashcards;
use crate::normalize::normalize;
use crate::prompt::build_prompt;
use crate::types::{Flashcard, Mode, Task};

/// Fixed reply shown instead of a failed answer.
pub const APOLOGY: &str =
    "Sorry, I couldn't generate an answer right now. Please try again in a moment.";

/// Default number of flashcards requested.
pub const DEFAULT_FLASHCARD_COUNT: usize = 10;

/// Stateless front door over one backend. Cheap to clone and share.
#[derive(Clone)]
pub struct Assistant {
    backend: Arc<dyn Backend>,
}

impl Assistant {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Build the configured backend and wrap it.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Ok(Self::new(build_backend(config)?))
    }

    pub fn backend(&self) -> &dyn Backend {
        self.backend.as_ref()
    }

    /// Answer `question` from `source`.
    pub async fn ask(
        &self,
        question: &str,
        source: &str,
        thinking: bool,
        system_hint: Option<&str>,
    ) -> Result<String> {
        self.run(Task::Question(question.to_string()), source, thinking, system_hint)
            .await
    }

    /// Structured study report of `source`.
    pub async fn generate_report(
        &self,
        source: &str,
        thinking: bool,
        system_hint: Option<&str>,
    ) -> Result<String> {
        self.run(Task::Report, source, thinking, system_hint).await
    }

    /// Flashcards from `source`. Once the backend answered this never fails:
    /// unusable output becomes a single summary card.
    pub async fn generate_flashcards(
        &self,
        source: &str,
        count: usize,
        thinking: bool,
        system_hint: Option<&str>,
    ) -> Result<Vec<Flashcard>> {
        let raw = self
            .run(Task::Flashcards { count }, source, thinking, system_hint)
            .await?;
        let cards = extract_flashcards(&raw, batch_stamp());
        tracing::info!(requested = count, extracted = cards.len(), "flashcards generated");
        Ok(cards)
    }

    async fn run(
        &self,
        task: Task,
        source: &str,
        thinking: bool,
        system_hint: Option<&str>,
    ) -> Result<String> {
        let mode = Mode::from_thinking(thinking);
        let model = self.backend.model_for(mode);
        let prompt = build_prompt(mode, system_hint, source, &task);

        let span = llm_span!(task.name(), self.backend.backend_id(), model.as_str());
        span.record("prompt.len", prompt.len());

        async {
            tracing::debug!(mode = %mode, "sending prompt");
            let start = Instant::now();
            let result = self
                .backend
                .generate_content(&model, &prompt)
                .await
                .map(|response| normalize(&response));
            record_duration("duration_ms", start.elapsed());

            match &result {
                Ok(text) => tracing::debug!(chars = text.len(), "backend responded"),
                Err(e) => record_error(e),
            }
            result
        }
        .instrument(span)
        .await
    }
}

/// Unwrap an answer, or log the error and return [`APOLOGY`].
pub fn reply_or_apology(result: Result<String>) -> String {
    match result {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, transport = e.is_transport(), "replying with apology");
            APOLOGY.to_string()
        }
    }
}

/// Millisecond timestamp shared by every card of one batch.
fn batch_stamp() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}
