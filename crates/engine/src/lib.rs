//! Pokedex Engine library.
//!
//! Read-only aggregation over the public PokeAPI.
//!
//! ## Structure
//!
//! - `entities/` - Pokemon factory and evolution chain resolution
//! - `use_cases/` - Catalog queries orchestrated across entities
//! - `infrastructure/` - Upstream port and its HTTP implementations
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod entities;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
