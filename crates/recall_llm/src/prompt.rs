//! Prompt builder: fixed section order around a delimited source block.

use crate::types::{Mode, Task};

pub const SOURCE_START: &str = "--- SOURCE ---";
pub const SOURCE_END: &str = "--- END SOURCE ---";

/// Hint for the fast path.
pub const FAST_HINT: &str = "You are a study assistant. Answer concisely and only from the source below.";

/// Hint for thinking mode.
pub const THINKING_HINT: &str = r#"You are a careful study assistant. Think the problem through step by step before answering.

Rules:
- Use only the information in the source below
- Explain the reasoning that connects the source to your answer
- Point out when the source does not contain enough information
- Prefer precise definitions and concrete examples from the source"#;

/// Assemble the full prompt: hint, optional system hint, delimited source, task tail.
///
/// `source` is copied verbatim; nothing is escaped or truncated.
pub fn build_prompt(mode: Mode, system_hint: Option<&str>, source: &str, task: &Task) -> String {
    let mut parts = Vec::new();
    parts.push(mode_hint(mode).to_string());
    if let Some(hint) = system_hint.map(str::trim).filter(|h| !h.is_empty()) {
        parts.push(hint.to_string());
    }
    parts.push(SOURCE_START.to_string());
    parts.push(source.to_string());
    parts.push(SOURCE_END.to_string());
    parts.push(task_tail(task));
    parts.join("\n")
}

pub fn mode_hint(mode: Mode) -> &'static str {
    match mode {
        Mode::Fast => FAST_HINT,
        Mode::Thinking => THINKING_HINT,
    }
}

/// Task-specific last section of the prompt.
pub fn task_tail(task: &Task) -> String {
    match task {
        Task::Question(question) => format!("Question: {}", question.trim()),
        Task::Report => "Task: Write a structured study report of the source above. \
             Include a title, a short summary, the key concepts as bullet points, \
             and a conclusion."
            .to_string(),
        Task::Flashcards { count } => format!(
            "Task: Create {} flashcards from the source above. \
             Respond with a JSON array only, no markdown or explanation outside JSON, \
             where each element is an object with \"question\" (string) and \"answer\" (string).",
            count
        ),
    }
}
