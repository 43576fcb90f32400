use thiserror::Error;

/// Core error type shared across fixtura crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested class is not present in the catalog.
    #[error("class not found: {0}")]
    ClassNotFound(String),
    /// The catalog violates internal invariants.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results returned by fixtura crates.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure to read a member of a [`crate::DynamicObject`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("no such method: {class}.{method}")]
    NoSuchMethod { class: String, method: String },
    /// The member exists but may not be read.
    #[error("access denied: {0}")]
    Denied(String),
    /// The member was read or invoked but raised an error.
    #[error("invocation failed: {0}")]
    Failed(String),
}
