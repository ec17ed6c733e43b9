//! Target URL modeling and validation.
//!
//! The configured target is validated once at startup and then kept exactly
//! as written: the `Location` header, the fallback link and the timer script
//! all carry the same bytes. Parsing through `url` is used for validation
//! only, never for normalisation (`Url` would append a trailing slash to
//! `http://localhost:8080`).

mod error;

pub use error::TargetError;

use std::fmt;
use url::{ParseError, Url};

/// Base used to check that relative references resolve.
const RELATIVE_BASE: &str = "http://localhost/";

/// Characters that are never valid in a URL and would need escaping in a header.
const FORBIDDEN_CHARS: &[char] = &['"', '<', '>', '\\', '`', '{', '}', '|', '^'];

/// Whether the target carries its own scheme and host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// `http://...` or `https://...`.
    Absolute,
    /// Path, query or scheme-relative reference resolved by the client.
    Relative,
}

/// A validated redirect destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetUrl {
    raw: String,
    kind: TargetKind,
}

impl TargetUrl {
    /// Validates `raw` and keeps it byte-for-byte.
    ///
    /// # Examples
    ///
    /// - `TargetUrl::parse("http://localhost:8080")` → absolute, `as_str() == "http://localhost:8080"`
    /// - `TargetUrl::parse("app_for_hosting.py")` → relative
    /// - `TargetUrl::parse("javascript:alert(1)")` → `TargetError::UnsupportedScheme`
    pub fn parse(raw: &str) -> Result<Self, TargetError> {
        if raw.trim().is_empty() {
            return Err(TargetError::Empty);
        }
        if let Some(c) = raw.chars().find(|c| c.is_whitespace() || c.is_control()) {
            return Err(malformed(
                raw,
                format!("contains whitespace or control character {c:?}"),
            ));
        }
        if let Some(c) = raw.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
            return Err(malformed(raw, format!("contains forbidden character {c:?}")));
        }

        match Url::parse(raw) {
            Ok(url) => {
                let scheme = url.scheme();
                if scheme != "http" && scheme != "https" {
                    return Err(TargetError::UnsupportedScheme {
                        url: raw.to_string(),
                        scheme: scheme.to_string(),
                    });
                }
                if url.host_str().map_or(true, str::is_empty) {
                    return Err(malformed(raw, "missing host".to_string()));
                }
                Ok(Self {
                    raw: raw.to_string(),
                    kind: TargetKind::Absolute,
                })
            }
            Err(ParseError::RelativeUrlWithoutBase) => {
                let base = Url::parse(RELATIVE_BASE).map_err(|e| malformed(raw, e.to_string()))?;
                base.join(raw).map_err(|e| malformed(raw, e.to_string()))?;
                Ok(Self {
                    raw: raw.to_string(),
                    kind: TargetKind::Relative,
                })
            }
            Err(e) => Err(malformed(raw, e.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> TargetKind {
        self.kind
    }
}

impl fmt::Display for TargetUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for TargetUrl {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn malformed(raw: &str, reason: String) -> TargetError {
    TargetError::Malformed {
        url: raw.to_string(),
        reason,
    }
}
