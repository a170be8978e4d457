//! Domain entities - Core business objects with identity

mod generation;
mod pokemon;
mod pokemon_type;

pub use generation::Generation;
pub use pokemon::{Pokemon, StatKind, StatRecord};
pub use pokemon_type::PokemonType;
