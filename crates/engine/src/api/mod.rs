//! API layer - HTTP entry points.

pub mod cors;
pub mod http;
