//! Cross-origin access for browser front-ends.

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Origins allowed to read the API from a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<HeaderValue>),
}

impl AllowedOrigins {
    /// Parse a comma-separated origin list. A `*` entry allows any origin.
    ///
    /// Entries that are not valid header values are skipped. Returns `None`
    /// when nothing usable remains, which leaves CORS off.
    pub fn parse(raw: &str) -> Option<Self> {
        let entries: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .collect();
        if entries.contains(&"*") {
            return Some(Self::Any);
        }

        let origins: Vec<HeaderValue> = entries
            .into_iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();

        (!origins.is_empty()).then_some(Self::List(origins))
    }

    /// Layer granting these origins read access (GET and preflight).
    pub fn into_layer(self) -> CorsLayer {
        let allow_origin = match self {
            Self::Any => AllowOrigin::any(),
            Self::List(origins) => AllowOrigin::list(origins),
        };

        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    }
}
