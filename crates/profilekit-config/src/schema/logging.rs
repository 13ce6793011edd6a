use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

impl LoggingConfig {
    /// `tracing_subscriber` filter directive covering every profilekit crate.
    pub fn directive(&self) -> String {
        format!("profilekit={}", self.level.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_uses_crate_prefix() {
        let logging = LoggingConfig {
            level: LogLevel::Debug,
        };
        assert_eq!(logging.directive(), "profilekit=debug");
    }

    #[test]
    fn level_parses_lowercase() {
        let logging: LoggingConfig = toml::from_str("level = \"warn\"").unwrap();
        assert_eq!(logging.level, LogLevel::Warn);
    }

    #[test]
    fn level_rejects_unknown() {
        let result: Result<LoggingConfig, _> = toml::from_str("level = \"loud\"");
        assert!(result.is_err());
    }
}
