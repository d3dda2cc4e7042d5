//! Span helpers for LLM calls

/// Create a span for one LLM operation
///
/// Declares empty `prompt.len`, `duration_ms`, `error` and `error.message`
/// fields so [`record_duration`](crate::record_duration) and
/// [`record_error`](crate::record_error) can fill them in later.
///
/// # Example
///
/// ```rust
/// use recall_observability::llm_span;
///
/// let span = llm_span!("ask", "ollama", "llama3.2");
/// let _guard = span.enter();
/// // ... backend call ...
/// ```
#[macro_export]
macro_rules! llm_span {
    ($operation:expr, $backend:expr, $model:expr) => {
        ::tracing::info_span!(
            "llm.operation",
            llm.operation = $operation,
            llm.backend = $backend,
            llm.model = $model,
            prompt.len = ::tracing::field::Empty,
            duration_ms = ::tracing::field::Empty,
            error = ::tracing::field::Empty,
            error.message = ::tracing::field::Empty,
        )
    };
}

/// Record an error on the current span and log it
///
/// # Example
///
/// ```rust
/// use recall_observability::record_error;
///
/// let err = std::io::Error::new(std::io::ErrorKind::Other, "connection refused");
/// record_error(&err);
/// ```
pub fn record_error<E: std::error::Error>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", true);
    span.record("error.message", error.to_string());
    tracing::error!(error = %error, "Operation failed");
}

/// Record latency on the current span
pub fn record_duration(key: &str, duration: std::time::Duration) {
    let span = tracing::Span::current();
    span.record(key, duration.as_millis() as u64);
}
