use thiserror::Error;

/// Errors emitted while introspecting a class or loading introspection options.
#[derive(Debug, Error)]
pub enum IntrospectError {
    /// The target class is not present in the catalog.
    #[error("class not found: {0}")]
    ClassNotFound(String),
    /// The target class exists but its members may not be reflected into.
    #[error("class is not accessible: {0}")]
    Inaccessible(String),
    #[error("invalid accessor pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for introspection operations.
pub type IntrospectResult<T> = std::result::Result<T, IntrospectError>;
