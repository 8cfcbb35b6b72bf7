/// Convenience result type used across bloomfield.
pub type BloomResult<T> = Result<T, BloomError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum BloomError {
    /// Invalid user-provided data (phrase, options, font bytes).
    #[error("validation error: {0}")]
    Validation(String),

    /// Internal invariant violations in the pixel-mask sampling path.
    ///
    /// These indicate a sampling coordinate escaped its clamp range and are
    /// treated as unreachable in a correct build, not recovered.
    #[error("sampling error: {0}")]
    Sampling(String),

    /// Errors raised by the rasterization backend or surface setup.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BloomError {
    /// Build a [`BloomError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BloomError::Sampling`] value.
    pub fn sampling(msg: impl Into<String>) -> Self {
        Self::Sampling(msg.into())
    }

    /// Build a [`BloomError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
