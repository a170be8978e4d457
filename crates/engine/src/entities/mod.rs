//! Entity modules - Pokemon construction and evolution chains.
//!
//! They depend on the upstream port and provide the building blocks for use cases.

pub mod error;
pub mod evolution;
pub mod pokemon_factory;

pub use error::CatalogError;
pub use evolution::{evolution_chain_id, flatten_chain, EvolutionChainResolver};
pub use pokemon_factory::{ApiPokemonFactory, PokemonFactoryPort};
