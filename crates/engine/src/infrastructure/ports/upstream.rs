//! Upstream PokeAPI port and payload shapes.
//!
//! Payload structs mirror only the fields the engine reads; everything else in
//! the upstream JSON is ignored on decode.

use async_trait::async_trait;
use pokedex_domain::{EvolutionChainId, GenerationId, PokemonId, ResourceRef};
use serde::{Deserialize, Serialize};

use super::error::UpstreamError;

/// Page size for the catalog listing, large enough to return every known
/// Pokemon in one page.
pub const CATALOG_PAGE_LIMIT: u32 = 10_000;

// =============================================================================
// Port
// =============================================================================

/// Read access to the upstream API. Callers pass ids or names, never URLs;
/// URL construction belongs to the implementation.
///
/// Species ids and Pokemon ids share one numbering for default forms, so both
/// take a [`PokemonId`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PokeApiPort: Send + Sync {
    async fn get_generations(&self) -> Result<GenerationListResponse, UpstreamError>;
    async fn get_generation(&self, id: GenerationId) -> Result<GenerationResponse, UpstreamError>;
    async fn get_species(&self, id: PokemonId) -> Result<SpeciesResponse, UpstreamError>;
    async fn get_species_by_name(&self, name: &str) -> Result<SpeciesResponse, UpstreamError>;
    async fn get_evolution_chain(
        &self,
        id: EvolutionChainId,
    ) -> Result<EvolutionChainResponse, UpstreamError>;
    async fn get_pokemon(&self, id: PokemonId) -> Result<PokemonResponse, UpstreamError>;
    async fn get_pokemon_by_name(&self, name: &str) -> Result<PokemonResponse, UpstreamError>;
    /// Every Pokemon as `{name, url}`, in one page of [`CATALOG_PAGE_LIMIT`].
    async fn get_catalog(&self) -> Result<CatalogResponse, UpstreamError>;
}

// =============================================================================
// Payloads
// =============================================================================

/// `GET /generation`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationListResponse {
    pub count: u32,
    pub results: Vec<ResourceRef>,
}

/// `GET /generation/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub id: u32,
    pub name: String,
    /// The generation's roster
    pub pokemon_species: Vec<ResourceRef>,
    /// Types introduced in this generation
    #[serde(default)]
    pub types: Vec<ResourceRef>,
}

/// `GET /pokemon-species/{id|name}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesResponse {
    pub generation: ResourceRef,
    pub evolution_chain: UrlRef,
}

/// A reference that carries only a URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlRef {
    pub url: String,
}

/// `GET /evolution-chain/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionChainResponse {
    pub id: u32,
    pub chain: ChainLink,
}

/// One node of the evolution tree. Siblings in `evolves_to` are alternate
/// evolutions of the same species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainLink {
    pub species: ResourceRef,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

/// `GET /pokemon/{id|name}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,
    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u32,
    pub r#type: ResourceRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub effort: u32,
    pub stat: ResourceRef,
}

/// `GET /pokemon?limit=N`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub count: u32,
    pub results: Vec<ResourceRef>,
}
