//! recall-llm: study assistant adapter over a cloud or local LLM backend.
//!
//! ## Flow
//!
//! ```text
//! caller ─▶ build_prompt ─▶ Backend::generate_content ─▶ normalize ─┬─▶ answer / report
//!                           (GeminiBackend | OllamaBackend)         └─▶ extract_flashcards
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use recall_llm::{AppConfig, Assistant, reply_or_apology};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), recall_llm::Error> {
//!     recall_llm::load_dotenv();
//!     let config = AppConfig::from_env()?;
//!     let assistant = Assistant::from_config(&config)?;
//!
//!     let answer = reply_or_apology(
//!         assistant.ask("What is X?", "X is a constant equal to 1", false, None).await,
//!     );
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```

pub mod assistant;
pub mod backend;
pub mod config;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod prompt;
pub mod types;

pub use assistant::{APOLOGY, Assistant, DEFAULT_FLASHCARD_COUNT, reply_or_apology};
pub use backend::{Backend, GeminiBackend, NdjsonDecoder, OllamaBackend, build_backend, read_ndjson};
pub use config::{AppConfig, BackendKind, GeminiConfig, OllamaConfig, load_dotenv};
pub use error::{Error, Result};
pub use extract::{FALLBACK_ANSWER_MAX_CHARS, FALLBACK_QUESTION, extract_array, extract_flashcards};
pub use normalize::normalize;
pub use prompt::{SOURCE_END, SOURCE_START, build_prompt};
pub use types::{BackendResponse, Flashcard, Mode, Task, TextAccessor};
