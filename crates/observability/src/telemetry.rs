//! Tracing subscriber initialization (console output with env filter).

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;

/// Install the global subscriber for the given configuration.
///
/// Returns `InitFailed` instead of panicking when a subscriber is already set,
/// so calling this twice (tests, embedding hosts) is harmless.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    let env_filter = build_filter(config.log_level.as_deref())?;

    let fmt_layer = config
        .enable_console
        .then(|| tracing_subscriber::fmt::layer().with_ansi(config.ansi));

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    tracing::info!(
        service.name = %config.service_name,
        "Tracing initialized (console only)"
    );
    Ok(())
}

/// Initialize with configuration from environment variables
pub fn init_from_env() -> Result<(), ObservabilityError> {
    init(ObservabilityConfig::from_env())
}

/// Filter from an explicit directive, else `RUST_LOG`, else "info".
pub fn build_filter(level: Option<&str>) -> Result<EnvFilter, ObservabilityError> {
    match level {
        Some(directives) => EnvFilter::try_new(directives)
            .map_err(|e| ObservabilityError::Config(format!("invalid log filter {:?}: {}", directives, e))),
        None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_accepts_directives() {
        assert!(build_filter(Some("info,recall_llm=debug")).is_ok());
        assert!(build_filter(None).is_ok());
    }

    #[test]
    fn test_build_filter_rejects_bad_level() {
        let err = build_filter(Some("recall_llm=loudest")).unwrap_err();
        assert!(matches!(err, ObservabilityError::Config(_)));
    }

    #[test]
    fn test_second_init_fails_without_panicking() {
        let config = ObservabilityConfig::new("recall-test").with_log_level("warn");
        let _ = init(config.clone());
        assert!(init(config).is_err());
    }
}
