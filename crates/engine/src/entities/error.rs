//! Catalog operation errors.

use pokedex_domain::DomainError;

use crate::infrastructure::ports::UpstreamError;

/// Errors surfaced by the factory, the chain resolver and the catalog use
/// cases.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Upstream answered 404 for a requested resource.
    #[error("{resource} not found: {key}")]
    EntityNotFound { resource: &'static str, key: String },

    /// Upstream kept rate limiting us through the whole retry budget.
    #[error("Upstream rate limit exceeded for {resource} after {attempts} attempts")]
    RateLimitExceeded { resource: &'static str, attempts: u32 },

    /// Transport failure, unexpected status or undecodable payload.
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// A resource URL did not carry the id the next call needed.
    #[error("Malformed reference: {0}")]
    MalformedReference(String),
}

impl CatalogError {
    /// Check if this is an EntityNotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::EntityNotFound { .. })
    }
}

impl From<UpstreamError> for CatalogError {
    fn from(e: UpstreamError) -> Self {
        match e {
            UpstreamError::NotFound { resource, key } => Self::EntityNotFound { resource, key },
            UpstreamError::RateLimitExceeded { resource, attempts } => {
                Self::RateLimitExceeded { resource, attempts }
            }
            UpstreamError::Status {
                resource,
                status: 429,
            } => Self::RateLimitExceeded {
                resource,
                attempts: 1,
            },
            other @ (UpstreamError::Status { .. }
            | UpstreamError::Transport { .. }
            | UpstreamError::InvalidPayload { .. }
            | UpstreamError::Unavailable { .. }) => Self::UpstreamUnavailable(other.to_string()),
        }
    }
}

impl From<DomainError> for CatalogError {
    fn from(e: DomainError) -> Self {
        Self::MalformedReference(e.to_string())
    }
}
