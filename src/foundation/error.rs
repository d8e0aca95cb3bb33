/// Result alias used across the crate.
pub type VidgenResult<T> = Result<T, VidgenError>;

/// Error type for configuration, planning and external-process failures.
#[derive(thiserror::Error, Debug)]
pub enum VidgenError {
    /// Invalid input values (fps, duration, frame indices).
    #[error("validation error: {0}")]
    Validation(String),

    /// An external command could not be spawned or exited unsuccessfully.
    #[error("process error: {0}")]
    Process(String),

    /// Filesystem operation on a frame artifact failed.
    #[error("io error: {0}")]
    Io(String),

    /// Configuration file could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VidgenError {
    /// Build a [`VidgenError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VidgenError::Process`].
    pub fn process(msg: impl Into<String>) -> Self {
        Self::Process(msg.into())
    }

    /// Build a [`VidgenError::Io`].
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Build a [`VidgenError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
