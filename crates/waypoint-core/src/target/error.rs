//! Error type for target URL validation.

use thiserror::Error;

/// Why a configured target URL was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    /// Unset or whitespace-only value.
    #[error("target URL is empty")]
    Empty,
    /// Syntactically invalid, or contains characters that cannot be placed in a
    /// header or attribute as-is.
    #[error("target URL {url:?} is malformed: {reason}")]
    Malformed { url: String, reason: String },
    /// Absolute URL whose scheme is not http or https (e.g. `javascript:`).
    #[error("target URL {url:?} uses unsupported scheme {scheme:?} (expected http or https)")]
    UnsupportedScheme { url: String, scheme: String },
}
