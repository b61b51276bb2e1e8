use std::env;
use std::fmt;

use rust_decimal::Decimal;

use crate::rentcheck::ValidationConfig;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub validation: ValidationConfig,
}

impl AppConfig {
    /// Reads the environment (after loading a `.env` file when present).
    /// The engine defaults are only overridden where an operator explicitly
    /// sets a value.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("MIETCHECK_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("MIETCHECK_LOG").unwrap_or_else(|_| "info".to_string());

        let mut validation = ValidationConfig::default();
        if let Ok(raw) = env::var("MIETCHECK_TOLERANCE_CHF") {
            let tolerance = raw
                .trim()
                .parse::<Decimal>()
                .map_err(|_| ConfigError::InvalidTolerance { value: raw.clone() })?;
            if tolerance < Decimal::ZERO {
                return Err(ConfigError::InvalidTolerance { value: raw });
            }
            validation.tolerance_chf = tolerance;
        }

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            validation,
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidTolerance { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance { value } => {
                write!(
                    f,
                    "MIETCHECK_TOLERANCE_CHF must be a non-negative decimal, found '{}'",
                    value
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
