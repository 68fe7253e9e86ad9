use thiserror::Error;

/// Rejected seed values.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SeedError {
    #[error("seed must be a finite number, got {0}")]
    NonFinite(f64),
}

/// Errors raised while reading a [`GeneratorConfig`](crate::config::GeneratorConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid generator config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}
