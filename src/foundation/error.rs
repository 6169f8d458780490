/// Result alias used throughout the crate.
pub type ScrollreelResult<T> = Result<T, ScrollreelError>;

/// Error type shared by configuration, loading and rendering.
#[derive(thiserror::Error, Debug)]
pub enum ScrollreelError {
    /// Invalid configuration or argument.
    #[error("validation error: {0}")]
    Validation(String),

    /// A frame or asset could not be loaded or decoded.
    #[error("load error: {0}")]
    Load(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its source chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollreelError {
    /// Build a [`ScrollreelError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollreelError::Load`].
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// Build a [`ScrollreelError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
