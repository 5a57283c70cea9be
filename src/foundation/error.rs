/// Crate-wide result alias.
pub type StudioResult<T> = Result<T, StudioError>;

/// Error type for the fallible building blocks of the studio core.
///
/// The contract operations (`StudioStore::open`, `StudioStore::patch`, `codec::encode`,
/// `codec::decode`) never surface these; they log and fall back instead.
#[derive(thiserror::Error, Debug)]
pub enum StudioError {
    /// A value failed a format or range check.
    #[error("validation error: {0}")]
    Validation(String),

    /// A share token could not be encoded or decoded.
    #[error("codec error: {0}")]
    Codec(String),

    /// Persisted storage could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StudioError {
    /// Build a [`StudioError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StudioError::Codec`].
    pub fn codec(msg: impl Into<String>) -> Self {
        Self::Codec(msg.into())
    }

    /// Build a [`StudioError::Storage`].
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Build a [`StudioError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for StudioError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
