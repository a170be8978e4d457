//! Port traits for infrastructure boundaries.
//!
//! The upstream API is the only external dependency, so this is the only
//! port. Everything above it is concrete types.

mod error;
mod upstream;

// =============================================================================
// Upstream Port
// =============================================================================
pub use upstream::{
    CatalogResponse, ChainLink, EvolutionChainResponse, GenerationListResponse,
    GenerationResponse, PokeApiPort, PokemonResponse, SpeciesResponse, Sprites, StatEntry,
    TypeSlot, UrlRef, CATALOG_PAGE_LIMIT,
};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use upstream::MockPokeApiPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::UpstreamError;
