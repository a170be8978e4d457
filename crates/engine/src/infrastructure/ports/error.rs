//! Error types for port operations.

/// Upstream (PokeAPI) call failures.
///
/// The first four variants describe a single attempt; `RateLimitExceeded` and
/// `Unavailable` are produced once the retry budget is spent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpstreamError {
    /// Upstream answered 404 for this resource.
    #[error("{resource} not found: {key}")]
    NotFound { resource: &'static str, key: String },

    /// Upstream answered with a non-success status other than 404.
    #[error("Upstream returned status {status} for {resource}")]
    Status { resource: &'static str, status: u16 },

    /// The request never produced a response (connect, timeout, reset).
    #[error("Request for {resource} failed: {message}")]
    Transport {
        resource: &'static str,
        message: String,
    },

    /// The response body did not match the expected payload shape.
    #[error("Invalid {resource} payload: {message}")]
    InvalidPayload {
        resource: &'static str,
        message: String,
    },

    /// Still rate limited after every allowed attempt.
    #[error("Rate limit exceeded for {resource} after {attempts} attempts")]
    RateLimitExceeded { resource: &'static str, attempts: u32 },

    /// Still failing after every allowed attempt.
    #[error("{resource} unavailable after {attempts} attempts: {message}")]
    Unavailable {
        resource: &'static str,
        attempts: u32,
        message: String,
    },
}

impl UpstreamError {
    /// Create a NotFound error with resource kind and lookup key.
    pub fn not_found(resource: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            resource,
            key: key.to_string(),
        }
    }

    /// Create a Transport error.
    pub fn transport(resource: &'static str, message: impl ToString) -> Self {
        Self::Transport {
            resource,
            message: message.to_string(),
        }
    }

    /// Create an InvalidPayload error.
    pub fn invalid_payload(resource: &'static str, message: impl ToString) -> Self {
        Self::InvalidPayload {
            resource,
            message: message.to_string(),
        }
    }

    /// The kind of upstream resource the failed call was for.
    pub fn resource(&self) -> &'static str {
        match self {
            Self::NotFound { resource, .. }
            | Self::Status { resource, .. }
            | Self::Transport { resource, .. }
            | Self::InvalidPayload { resource, .. }
            | Self::RateLimitExceeded { resource, .. }
            | Self::Unavailable { resource, .. } => *resource,
        }
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
