/// Convenience result type used across Flicker.
pub type FlickerResult<T> = Result<T, FlickerError>;

/// Top-level error taxonomy used by scheduler and surface APIs.
#[derive(thiserror::Error, Debug)]
pub enum FlickerError {
    /// Invalid user-provided configuration (frame rate, canvas size, settings).
    #[error("validation error: {0}")]
    Validation(String),

    /// The drawing surface could not be created or read back.
    #[error("surface error: {0}")]
    Surface(String),

    /// Errors while handing rendered frames to a sink.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlickerError {
    /// Build a [`FlickerError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FlickerError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`FlickerError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
