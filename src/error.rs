//! Unified error handling for the campwatch crate
//!
//! Domain errors stay close to the code that raises them (see
//! [`crate::utils::error`]); this module wraps them together with I/O, JSON and
//! configuration failures into a single [`Error`].

use std::io;
use thiserror::Error;

pub use crate::utils::error::ScrapeError;

/// Common interface for campwatch error types
pub trait Classify: std::error::Error {
    /// Check if this error is recoverable (can be retried)
    fn is_recoverable(&self) -> bool;

    /// Get the error category for handling strategies
    fn category(&self) -> ErrorCategory;
}

/// Classification of errors for handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Page could not be reached or loaded
    Network,
    /// Browser launch or automation failures
    Browser,
    /// Expected markup never appeared
    Markup,
    /// Configuration and validation errors
    Config,
    /// I/O and serialization errors
    Io,
    /// Other/unknown errors
    Other,
}

impl Classify for ScrapeError {
    fn is_recoverable(&self) -> bool {
        ScrapeError::is_recoverable(self)
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Navigation { .. } => ErrorCategory::Network,
            Self::SelectorTimeout { .. } => ErrorCategory::Markup,
            Self::Browser(_) => ErrorCategory::Browser,
            Self::InvalidRequest(_) => ErrorCategory::Config,
        }
    }
}

/// Unified error type for the campwatch crate
#[derive(Error, Debug)]
pub enum Error {
    /// Scrape attempt errors
    #[error("Scrape error: {0}")]
    Scrape(#[from] ScrapeError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}")]
    Other {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Classify for Error {
    fn is_recoverable(&self) -> bool {
        match self {
            Self::Scrape(e) => e.is_recoverable(),
            Self::Io(_) => true,
            Self::Json(_) | Self::Config(_) | Self::Other { .. } => false,
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Scrape(e) => e.category(),
            Self::Io(_) | Self::Json(_) => ErrorCategory::Io,
            Self::Config(_) => ErrorCategory::Config,
            Self::Other { .. } => ErrorCategory::Other,
        }
    }
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a generic error with context and source
    pub fn with_source(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Other {
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Conversion from anyhow::Error
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other {
            context: format!("{err:#}"),
            source: None,
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
