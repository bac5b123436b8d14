//! Error types for resolution operations.
//!
//! These errors never escape the public `resolve_*` entry points; they exist
//! so the tiers inside the chain can report why they were skipped.

/// Error types for resolution operations
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("not supported: {0}")]
    Unsupported(String),
}

/// Result type for resolution operations
pub type ResolveResult<T> = Result<T, ResolveError>;
