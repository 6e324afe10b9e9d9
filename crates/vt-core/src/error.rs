use thiserror::Error;

/// Failures of the few host operations that can fail at all.
///
/// Interaction handlers never return these; a missing element is a no-op,
/// not an error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("preference storage failed: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, Error>;
