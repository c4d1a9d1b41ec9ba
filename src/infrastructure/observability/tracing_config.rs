use crate::presentation::config::{Environment, LoggingSettings};

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub level: String,
    pub json_format: bool,
}

impl TracingConfig {
    /// `LOG_FORMAT=json` forces JSON output regardless of settings.
    pub fn from_settings(logging: &LoggingSettings, environment: Environment) -> Self {
        let json_env = std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Self {
            environment: environment.to_string(),
            level: logging.level.clone(),
            json_format: logging.enable_json || json_env,
        }
    }

    pub fn default_directives(&self) -> String {
        format!("{},rubric_grader=debug,tower_http=debug", self.level)
    }
}
