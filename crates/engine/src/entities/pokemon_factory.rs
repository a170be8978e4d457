//! Pokemon factory - builds one entity from the details and species payloads.

use std::sync::Arc;

use async_trait::async_trait;
use pokedex_domain::{
    Generation, Pokemon, PokemonId, PokemonType, StatKind, StatRecord,
};

use super::error::CatalogError;
use crate::infrastructure::ports::{PokeApiPort, PokemonResponse, SpeciesResponse};

/// Builds fully-populated [`Pokemon`] values, with an empty evolution chain.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PokemonFactoryPort: Send + Sync {
    async fn create_by_id(&self, id: PokemonId) -> Result<Pokemon, CatalogError>;
    async fn create_by_name(&self, name: &str) -> Result<Pokemon, CatalogError>;
}

/// Factory backed by the upstream API.
pub struct ApiPokemonFactory {
    api: Arc<dyn PokeApiPort>,
}

impl ApiPokemonFactory {
    pub fn new(api: Arc<dyn PokeApiPort>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl PokemonFactoryPort for ApiPokemonFactory {
    async fn create_by_id(&self, id: PokemonId) -> Result<Pokemon, CatalogError> {
        let fetched = async {
            let details = self.api.get_pokemon(id).await?;
            let species = self.api.get_species(id).await?;
            assemble(details, species)
        }
        .await;

        fetched.inspect_err(|e| {
            tracing::warn!(error = %e, pokemon_id = %id, "Failed to create pokemon by id");
        })
    }

    async fn create_by_name(&self, name: &str) -> Result<Pokemon, CatalogError> {
        let fetched = async {
            let details = self.api.get_pokemon_by_name(name).await?;
            let species = self.api.get_species_by_name(name).await?;
            assemble(details, species)
        }
        .await;

        fetched.inspect_err(|e| {
            tracing::warn!(error = %e, pokemon_name = %name, "Failed to create pokemon by name");
        })
    }
}

/// Combine the two upstream payloads into one entity.
///
/// The id comes from the details payload, not from whatever the caller
/// looked it up by.
fn assemble(details: PokemonResponse, species: SpeciesResponse) -> Result<Pokemon, CatalogError> {
    let types = details
        .types
        .iter()
        .map(|slot| PokemonType::from_ref(&slot.r#type))
        .collect::<Result<Vec<_>, _>>()?;

    let generation = Generation::from_ref(&species.generation)?;

    let stats = details
        .stats
        .into_iter()
        .map(|entry| StatRecord {
            base_stat: entry.base_stat,
            effort: entry.effort,
            stat: StatKind {
                name: entry.stat.name,
                url: entry.stat.url,
            },
        })
        .collect();

    Ok(Pokemon {
        id: PokemonId::new(details.id),
        name: details.name,
        image: details.sprites.front_default.unwrap_or_default(),
        types,
        generation,
        stats,
        evolution_chain_url: species.evolution_chain.url,
        evolution_chain: Vec::new(),
    })
}
