pub type VaultResult<T> = Result<T, VaultError>;

/// Errors produced by the share-card pipeline.
///
/// Only [`VaultError::Canvas`] and [`VaultError::Encode`] escape a render call; thumbnail decode
/// failures are recovered inside the renderer and logged.
#[derive(thiserror::Error, Debug)]
pub enum VaultError {
    /// Invalid record, link, path or argument.
    #[error("validation error: {0}")]
    Validation(String),

    /// Canvas allocation or overlay rasterization failed.
    #[error("canvas error: {0}")]
    Canvas(String),

    /// Final image encode failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Thumbnail bytes could not be decoded as an image.
    #[error("thumbnail decode error: {0}")]
    ThumbnailDecode(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, usually IO with context attached.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VaultError {
    /// Build a [`VaultError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VaultError::Canvas`].
    pub fn canvas(msg: impl Into<String>) -> Self {
        Self::Canvas(msg.into())
    }

    /// Build a [`VaultError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`VaultError::ThumbnailDecode`].
    pub fn thumbnail_decode(msg: impl Into<String>) -> Self {
        Self::ThumbnailDecode(msg.into())
    }

    /// Build a [`VaultError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// True for the unrecoverable render failures callers map to a server error.
    pub fn is_render_failure(&self) -> bool {
        matches!(self, Self::Canvas(_) | Self::Encode(_))
    }
}

impl From<serde_json::Error> for VaultError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
