//! Upstream resource references and identifier extraction.
//!
//! Every upstream listing hands out `{name, url}` pairs where the URL is
//! self-referential and ends in `/<resource-kind>/<id>/`. The numeric id is
//! the key for every follow-up request.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A `{name, url}` pair pointing at another upstream resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceRef {
    pub name: String,
    pub url: String,
}

impl ResourceRef {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Numeric id carried by the URL, failing with a descriptive error when
    /// the URL does not identify a resource.
    pub fn require_id(&self, kind: &'static str) -> Result<u32, DomainError> {
        require_id_from_url(kind, &self.url)
    }
}

/// Extract the numeric id from a URL shaped like `.../<resource-kind>/<id>/`.
///
/// The trailing slash is optional. Returns `None` when the last segment is
/// not a positive integer or when no resource-kind segment precedes it.
pub fn extract_id_from_url(url: &str) -> Option<u32> {
    let mut segments = url.trim_end_matches('/').rsplit('/');

    let id = segments.next()?.parse::<u32>().ok().filter(|id| *id > 0)?;

    let kind = segments.next()?;
    if kind.is_empty() || kind.parse::<u64>().is_ok() {
        return None;
    }

    Some(id)
}

/// Like [`extract_id_from_url`], but absence is an error naming the kind of
/// resource the caller needed.
pub fn require_id_from_url(kind: &'static str, url: &str) -> Result<u32, DomainError> {
    extract_id_from_url(url).ok_or_else(|| DomainError::malformed_reference(kind, url))
}
