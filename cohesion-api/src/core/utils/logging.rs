use serde::{Deserialize, Serialize};
use tracing_subscriber::{
    fmt, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

#[derive(Debug, Deserialize, PartialEq, Clone, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_level: String,
}

impl LoggingConfig {
    /// Installs the global subscriber at the configured level, see [`init_global_logger`].
    pub fn init(&self) {
        init_global_logger(self.log_level.clone())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "INFO".to_string(),
        }
    }
}

/// `RUST_LOG` takes precedence over the given level.
pub fn get_log_env(log_level: String) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

/// Installs a global fmt subscriber. Does nothing if a subscriber is already set.
pub fn init_global_logger(log_level: String) {
    let _ = tracing_subscriber::registry()
        .with(get_log_env(log_level))
        .with(fmt::layer().with_span_events(FmtSpan::CLOSE))
        .try_init();
}

pub fn global_info_logger() {
    LoggingConfig::default().init()
}

#[cfg(test)]
mod logging_test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn config_defaults_to_info() {
        let config: LoggingConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, LoggingConfig::default());
        assert_eq!(config.log_level, "INFO");

        let config: LoggingConfig = serde_json::from_str(r#"{"log_level": "DEBUG"}"#).unwrap();
        assert_eq!(config.log_level, "DEBUG");
    }

    #[test]
    fn config_installs_logger_once() {
        let config: LoggingConfig = serde_json::from_str(r#"{"log_level": "DEBUG"}"#).unwrap();
        config.init();
        // a second subscriber is ignored
        global_info_logger();
        tracing::debug!(level = %config.log_level, "logger installed");
    }
}
