//! Evolution chain resolution.
//!
//! A chain is fetched as a tree, flattened depth-first (pre-order) into the
//! display order, and each member is hydrated through the factory. Members
//! are never chain-resolved themselves.

use std::sync::Arc;

use pokedex_domain::{require_id_from_url, EvolutionChainId, Pokemon, PokemonId, ResourceRef};

use super::error::CatalogError;
use super::pokemon_factory::PokemonFactoryPort;
use crate::infrastructure::ports::{ChainLink, PokeApiPort};

/// Flatten a chain tree into its species references, root first, then each
/// child's subtree in upstream order.
///
/// For eevee → [vaporeon, jolteon, flareon] this yields
/// `[eevee, vaporeon, jolteon, flareon]`; for a linear chain it is the
/// evolution line in order.
pub fn flatten_chain(root: &ChainLink) -> Vec<&ResourceRef> {
    let mut species = Vec::new();
    let mut stack = vec![root];

    while let Some(link) = stack.pop() {
        species.push(&link.species);
        // Reverse so the first child is popped first
        stack.extend(link.evolves_to.iter().rev());
    }

    species
}

/// Id of the evolution chain a Pokemon belongs to.
pub fn evolution_chain_id(pokemon: &Pokemon) -> Result<EvolutionChainId, CatalogError> {
    let id = require_id_from_url("evolution-chain", &pokemon.evolution_chain_url)?;
    Ok(EvolutionChainId::new(id))
}

/// Resolves an evolution chain id into hydrated chain members.
pub struct EvolutionChainResolver {
    api: Arc<dyn PokeApiPort>,
    factory: Arc<dyn PokemonFactoryPort>,
}

impl EvolutionChainResolver {
    pub fn new(api: Arc<dyn PokeApiPort>, factory: Arc<dyn PokemonFactoryPort>) -> Self {
        Self { api, factory }
    }

    /// Fetch, flatten and hydrate one chain.
    ///
    /// Members are hydrated one after another in traversal order. Any member
    /// failing fails the whole chain.
    pub async fn resolve(&self, chain_id: EvolutionChainId) -> Result<Vec<Pokemon>, CatalogError> {
        let chain = self
            .api
            .get_evolution_chain(chain_id)
            .await
            .map_err(CatalogError::from)
            .inspect_err(|e| {
                tracing::warn!(error = %e, chain_id = %chain_id, "Failed to fetch evolution chain");
            })?;

        let species = flatten_chain(&chain.chain);
        let mut members = Vec::with_capacity(species.len());

        for reference in species {
            let id = reference.require_id("pokemon-species")?;
            let member = self
                .factory
                .create_by_id(PokemonId::new(id))
                .await
                .inspect_err(|e| {
                    tracing::warn!(
                        error = %e,
                        chain_id = %chain_id,
                        species = %reference.name,
                        "Failed to hydrate evolution chain member"
                    );
                })?;
            members.push(member);
        }

        Ok(members)
    }

    /// Resolve the chain of `pokemon` and attach it.
    pub async fn attach(&self, pokemon: Pokemon) -> Result<Pokemon, CatalogError> {
        let chain_id = evolution_chain_id(&pokemon)?;
        let chain = self.resolve(chain_id).await?;
        Ok(pokemon.with_evolution_chain(chain))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Chain tree builders shared by the entity and use case tests.

    use pokedex_domain::ResourceRef;

    use crate::infrastructure::ports::{ChainLink, EvolutionChainResponse};

    pub fn link(id: u32, name: &str, evolves_to: Vec<ChainLink>) -> ChainLink {
        ChainLink {
            species: ResourceRef::new(
                name,
                format!("https://pokeapi.co/api/v2/pokemon-species/{id}/"),
            ),
            evolves_to,
        }
    }

    pub fn chain_response(id: u32, chain: ChainLink) -> EvolutionChainResponse {
        EvolutionChainResponse { id, chain }
    }
}
