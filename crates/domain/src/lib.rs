extern crate self as pokedex_domain;

pub mod entities;
pub mod error;
pub mod ids;
pub mod resource;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{Generation, Pokemon, PokemonType, StatKind, StatRecord};

pub use error::DomainError;

// Re-export ID types
pub use ids::{EvolutionChainId, GenerationId, PokemonId, TypeId};

pub use resource::{extract_id_from_url, require_id_from_url, ResourceRef};
