//! Unified error types for the domain layer

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A resource URL did not carry the `/<kind>/<id>/` identifier segment
    #[error("Malformed {kind} reference: {url}")]
    MalformedReference { kind: &'static str, url: String },
}

impl DomainError {
    /// Create a malformed reference error for a URL that was expected to
    /// identify a resource of `kind`.
    pub fn malformed_reference(kind: &'static str, url: impl Into<String>) -> Self {
        Self::MalformedReference {
            kind,
            url: url.into(),
        }
    }
}
