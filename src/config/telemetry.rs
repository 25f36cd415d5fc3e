//! Telemetry configuration

use serde::Deserialize;

use super::ValidationError;

/// Log output settings consumed by [`crate::telemetry::init`].
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Filter directive, e.g. `info` or `event_ticketing=debug,info`.
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

impl TelemetryConfig {
    /// Validate telemetry configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.log_level.trim().is_empty() {
            return Err(ValidationError::MissingRequired("telemetry.log_level"));
        }
        tracing_subscriber::EnvFilter::try_new(&self.log_level)
            .map_err(|e| ValidationError::InvalidLogFilter(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_plain_info() {
        let config = TelemetryConfig::default();
        assert_eq!(config.log_level, "info");
        assert!(!config.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_log_level_is_rejected() {
        let config = TelemetryConfig {
            log_level: "  ".to_string(),
            json: false,
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("telemetry.log_level"))
        );
    }

    #[test]
    fn module_directives_are_accepted() {
        let config = TelemetryConfig {
            log_level: "event_ticketing=debug,warn".to_string(),
            json: true,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: TelemetryConfig = serde_json::from_str(r#"{"json": true}"#).unwrap();
        assert_eq!(config.log_level, "info");
        assert!(config.json);
    }
}
