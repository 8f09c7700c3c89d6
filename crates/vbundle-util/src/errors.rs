use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all vbundle operations.
#[derive(Debug, Error, Diagnostic)]
pub enum VbundleError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A bundle, a bundle history, or an aggregated group broke an invariant.
    #[error("Invalid bundle: {message}")]
    #[diagnostic(help("Fix the bundle definition and run `vbundle validate` again"))]
    InvalidBundle { message: String },

    /// A bundle definition or config file could not be read or parsed.
    #[error("Definition error: {message}")]
    Definition { message: String },

    /// A version or health collaborator was configured incorrectly.
    #[error("Service error: {message}")]
    Service { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

impl VbundleError {
    pub fn invalid_bundle(message: impl Into<String>) -> Self {
        Self::InvalidBundle {
            message: message.into(),
        }
    }

    pub fn is_invalid_bundle(&self) -> bool {
        matches!(self, Self::InvalidBundle { .. })
    }
}

/// Convenience alias for `miette::Result<T>`.
pub type VbundleResult<T> = miette::Result<T>;
