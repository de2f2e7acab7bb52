//! # Booth Error Handling
//!
//! Domain error type for the cartoon-booth pipeline, with classification
//! traits that tell callers how to react.
//!
//! ## Error Classification
//!
//! Errors are classified using traits:
//!
//! - `Retryable`: the same call may succeed if repeated (network, timeout)
//! - `Recoverable`: the flow can continue in a degraded form (no QR payload,
//!   default caption) instead of failing the whole pipeline
//!
//! Decode failures and service refusals are neither: they are terminal for
//! the current pass, and the caller resets to a retry-capable capture state.

use std::{error::Error as StdError, fmt};

/// Base error type for the booth pipeline.
#[derive(Debug)]
pub enum BoothError {
    /// Configuration validation errors
    Config {
        field: String,
        value: String,
        reason: String,
    },
    /// An image reference could not be decoded or loaded
    ImageLoad {
        operation: String,
        reason: String,
    },
    /// An offscreen rendering surface could not be acquired
    RenderSurface {
        reason: String,
    },
    /// The generative service returned an unusable response
    Service {
        operation: String,
        reason: String,
    },
    /// The generative service refused the request outright
    Blocked {
        reason: String,
    },
    /// A share payload exceeded the optical-scan ceiling
    PayloadTooLarge {
        len: usize,
        limit: usize,
    },
    /// Transport-level failures talking to the generative service
    Network {
        operation: String,
        source: reqwest::Error,
    },
    /// I/O errors reading captures or writing artifacts
    Io {
        operation: String,
        source: std::io::Error,
    },
}

impl BoothError {
    /// Create a configuration error
    pub fn config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Config {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an image load/decode error
    pub fn image_load(operation: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self::ImageLoad {
            operation: operation.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a rendering-surface error
    pub fn render_surface(reason: impl Into<String>) -> Self {
        Self::RenderSurface {
            reason: reason.into(),
        }
    }

    /// Create a service error
    pub fn service(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Service {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create a refusal error from the service's block reason
    pub fn blocked(reason: impl Into<String>) -> Self {
        Self::Blocked {
            reason: reason.into(),
        }
    }

    /// Create a network error
    pub fn network(operation: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            operation: operation.into(),
            source,
        }
    }

    /// Create an I/O error
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }

    /// Get the error category as a string
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config { .. } => "config",
            Self::ImageLoad { .. } => "image_load",
            Self::RenderSurface { .. } => "render_surface",
            Self::Service { .. } => "service",
            Self::Blocked { .. } => "blocked",
            Self::PayloadTooLarge { .. } => "payload_too_large",
            Self::Network { .. } => "network",
            Self::Io { .. } => "io",
        }
    }
}

impl fmt::Display for BoothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoothError::Config {
                field,
                value,
                reason,
            } => {
                write!(
                    f,
                    "Configuration error in '{}': {} (value: {})",
                    field, reason, value
                )
            }
            BoothError::ImageLoad { operation, reason } => {
                write!(f, "Failed to load image for {}: {}", operation, reason)
            }
            BoothError::RenderSurface { reason } => {
                write!(f, "Rendering surface unavailable: {}", reason)
            }
            BoothError::Service { operation, reason } => {
                write!(f, "Generative service failed during {}: {}", operation, reason)
            }
            BoothError::Blocked { reason } => {
                write!(f, "Generation was blocked: {}. Please try a different photo.", reason)
            }
            BoothError::PayloadTooLarge { len, limit } => {
                write!(f, "Share payload is {} chars, over the {} limit", len, limit)
            }
            BoothError::Network { operation, source } => {
                write!(f, "Network error during {}: {}", operation, source)
            }
            BoothError::Io { operation, source } => {
                write!(f, "I/O error during {}: {}", operation, source)
            }
        }
    }
}

impl StdError for BoothError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Network { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BoothError {
    fn from(error: std::io::Error) -> Self {
        Self::io("unknown", error)
    }
}

/// Result type alias using our custom error type
pub type BoothResult<T> = Result<T, BoothError>;

/// Trait for errors that can be retried
pub trait Retryable {
    /// Check if this error can be retried
    fn is_retryable(&self) -> bool;
}

impl Retryable for BoothError {
    fn is_retryable(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Io { .. })
    }
}

/// Trait for errors the flow can absorb by degrading instead of failing
pub trait Recoverable {
    /// Check if this error can be recovered from
    fn is_recoverable(&self) -> bool;
}

impl Recoverable for BoothError {
    fn is_recoverable(&self) -> bool {
        matches!(self, Self::PayloadTooLarge { .. })
    }
}
