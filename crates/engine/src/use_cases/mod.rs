//! Use cases - Query orchestration.
//!
//! Use cases orchestrate across entity modules to answer the public queries.

pub mod catalog;
pub mod generations;
pub mod types;

use std::sync::Arc;

pub use catalog::{CatalogConfig, CatalogError, PokemonCatalog};
pub use generations::GetGenerations;
pub use types::GetTypes;

/// Container for the query use cases.
pub struct QueryUseCases {
    pub catalog: Arc<PokemonCatalog>,
    pub generations: Arc<GetGenerations>,
    pub types: Arc<GetTypes>,
}

impl QueryUseCases {
    pub fn new(
        catalog: Arc<PokemonCatalog>,
        generations: Arc<GetGenerations>,
        types: Arc<GetTypes>,
    ) -> Self {
        Self {
            catalog,
            generations,
            types,
        }
    }
}
