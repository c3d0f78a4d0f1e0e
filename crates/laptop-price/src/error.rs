//! Error types for laptop-price

use laptop_features::FeatureError;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PriceError>;

/// Main error type for the price pipeline
#[derive(Error, Debug)]
pub enum PriceError {
    /// The raw record could not be normalized
    #[error("Feature error: {0}")]
    Feature(#[from] FeatureError),

    /// The injected predictor failed
    #[error("Prediction error: {0}")]
    Prediction(#[from] PredictionError),

    /// A batch row was rejected and the batch was configured to stop
    #[error("Row {line} rejected: {source}")]
    Row {
        line: u64,
        #[source]
        source: FeatureError,
    },

    /// CSV read/write error
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON read/write error
    #[error("JSON error: {0}")]
    Json(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Failure reported by a predictor implementation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    /// The model produced no usable number
    #[error("Model returned a non-finite estimate: {0}")]
    NonFinite(f64),

    /// Anything else the model backend reports
    #[error("{0}")]
    Backend(String),
}

/// Configuration loading/validation error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("Invalid value for {field}: {message}")]
    Invalid { field: String, message: String },

    #[error("Could not read {path}: {message}")]
    Read { path: String, message: String },
}

impl From<csv::Error> for PriceError {
    fn from(err: csv::Error) -> Self {
        PriceError::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for PriceError {
    fn from(err: serde_json::Error) -> Self {
        PriceError::Json(err.to_string())
    }
}

impl From<std::io::Error> for PriceError {
    fn from(err: std::io::Error) -> Self {
        PriceError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
