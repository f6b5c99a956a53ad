use thiserror::Error;

/// Fatal errors surfaced to the caller. Generation misses and rejected
/// mutations are handled locally and never appear here.
#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid configuration detected before any simulation work begins.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Structurally invalid persisted data.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
