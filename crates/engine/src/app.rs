//! Application state and composition.

use std::sync::Arc;

use crate::entities::{ApiPokemonFactory, EvolutionChainResolver, PokemonFactoryPort};
use crate::infrastructure::ports::PokeApiPort;
use crate::use_cases::{self, CatalogConfig};

/// Main application state.
///
/// Holds the use cases, each built once with its dependencies injected.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub queries: use_cases::QueryUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    ///
    /// `api` is the upstream port every use case reads through; in the
    /// server it is the retrying client.
    pub fn new(api: Arc<dyn PokeApiPort>, config: CatalogConfig) -> Self {
        let factory: Arc<dyn PokemonFactoryPort> = Arc::new(ApiPokemonFactory::new(api.clone()));
        let resolver = Arc::new(EvolutionChainResolver::new(api.clone(), factory.clone()));

        let catalog = Arc::new(use_cases::PokemonCatalog::new(
            api.clone(),
            factory,
            resolver,
            config,
        ));
        let generations = Arc::new(use_cases::GetGenerations::new(api.clone()));
        let types = Arc::new(use_cases::GetTypes::new(api));

        Self {
            use_cases: UseCases {
                queries: use_cases::QueryUseCases::new(catalog, generations, types),
            },
        }
    }
}
