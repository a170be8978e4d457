//! Pokemon catalog use cases.
//!
//! Every operation hydrates its entities through the factory, attaches each
//! entity's evolution chain, and returns them sorted by id with duplicate ids
//! removed.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use futures_util::stream::{self, StreamExt};
use pokedex_domain::{GenerationId, Pokemon, PokemonId, ResourceRef};

use crate::entities::{EvolutionChainResolver, PokemonFactoryPort};
use crate::infrastructure::ports::PokeApiPort;

pub use crate::entities::CatalogError;

/// Default cap on per-species pipelines in flight for one operation.
pub const DEFAULT_MAX_CONCURRENT_HYDRATIONS: usize = 16;

/// Tuning for catalog fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogConfig {
    pub max_concurrent_hydrations: usize,
}

impl CatalogConfig {
    /// Override the fan-out cap. Values below 1 are raised to 1.
    pub fn with_max_concurrent_hydrations(mut self, max: usize) -> Self {
        self.max_concurrent_hydrations = max.max(1);
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_concurrent_hydrations: DEFAULT_MAX_CONCURRENT_HYDRATIONS,
        }
    }
}

/// How a single pipeline looks its Pokemon up.
#[derive(Debug, Clone)]
enum Lookup {
    Id(PokemonId),
    Name(String),
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// Aggregates upstream resources into fully hydrated Pokemon.
pub struct PokemonCatalog {
    api: Arc<dyn PokeApiPort>,
    factory: Arc<dyn PokemonFactoryPort>,
    resolver: Arc<EvolutionChainResolver>,
    config: CatalogConfig,
}

impl PokemonCatalog {
    pub fn new(
        api: Arc<dyn PokeApiPort>,
        factory: Arc<dyn PokemonFactoryPort>,
        resolver: Arc<EvolutionChainResolver>,
        config: CatalogConfig,
    ) -> Self {
        Self {
            api,
            factory,
            resolver,
            config,
        }
    }

    /// Every Pokemon in a generation's roster.
    pub async fn list_by_generation(
        &self,
        generation_id: GenerationId,
    ) -> Result<Vec<Pokemon>, CatalogError> {
        let generation = self
            .api
            .get_generation(generation_id)
            .await
            .map_err(CatalogError::from)
            .inspect_err(|e| {
                tracing::error!(
                    error = %e,
                    operation = "list_by_generation",
                    generation_id = %generation_id,
                    "Failed to fetch generation roster"
                );
            })?;

        let lookups = species_lookups(&generation.pokemon_species)?;
        tracing::debug!(
            generation_id = %generation_id,
            roster_size = lookups.len(),
            "Hydrating generation roster"
        );

        self.hydrate_many("list_by_generation", lookups).await
    }

    /// One Pokemon with its evolution chain.
    pub async fn details(&self, id: PokemonId) -> Result<Pokemon, CatalogError> {
        self.hydrate(&Lookup::Id(id)).await.inspect_err(|e| {
            tracing::warn!(error = %e, operation = "details", pokemon_id = %id, "Failed to load pokemon");
        })
    }

    /// Every Pokemon whose name contains `fragment`.
    ///
    /// Matching is case-sensitive; callers normalise the fragment first. An
    /// empty fragment matches nothing, as does a fragment no name contains.
    pub async fn details_by_name(&self, fragment: &str) -> Result<Vec<Pokemon>, CatalogError> {
        if fragment.is_empty() {
            tracing::debug!("Empty name fragment, skipping search");
            return Ok(Vec::new());
        }

        let catalog = self
            .api
            .get_catalog()
            .await
            .map_err(CatalogError::from)
            .inspect_err(|e| {
                tracing::error!(error = %e, operation = "details_by_name", fragment, "Failed to fetch catalog");
            })?;

        let lookups: Vec<Lookup> = catalog
            .results
            .into_iter()
            .filter(|entry| entry.name.contains(fragment))
            .map(|entry| Lookup::Name(entry.name))
            .collect();

        tracing::debug!(fragment, matches = lookups.len(), "Name search matched catalog entries");
        if lookups.is_empty() {
            return Ok(Vec::new());
        }

        self.hydrate_many("details_by_name", lookups).await
    }

    /// Every Pokemon of every generation.
    ///
    /// Rosters are fetched concurrently and unioned by species name, keeping
    /// the first occurrence in generation order.
    pub async fn all(&self) -> Result<Vec<Pokemon>, CatalogError> {
        let generations = self
            .api
            .get_generations()
            .await
            .map_err(CatalogError::from)
            .inspect_err(|e| {
                tracing::error!(error = %e, operation = "all", "Failed to fetch generation list");
            })?;

        let generation_ids = generations
            .results
            .iter()
            .map(|generation| generation.require_id("generation").map(GenerationId::new))
            .collect::<Result<Vec<_>, _>>()?;

        let rosters: Vec<_> = stream::iter(generation_ids)
            .map(|generation_id| async move {
                let roster = self.api.get_generation(generation_id).await;
                (generation_id, roster)
            })
            .buffered(self.config.max_concurrent_hydrations)
            .collect()
            .await;

        let mut seen = HashSet::new();
        let mut species = Vec::new();
        for (generation_id, roster) in rosters {
            let roster = roster.map_err(CatalogError::from).inspect_err(|e| {
                tracing::error!(
                    error = %e,
                    operation = "all",
                    generation_id = %generation_id,
                    "Failed to fetch generation roster"
                );
            })?;
            for entry in roster.pokemon_species {
                if seen.insert(entry.name.clone()) {
                    species.push(entry);
                }
            }
        }

        let lookups = species_lookups(&species)?;
        tracing::debug!(species = lookups.len(), "Hydrating every generation");

        self.hydrate_many("all", lookups).await
    }

    /// Factory, then chain resolution, for one Pokemon.
    async fn hydrate(&self, lookup: &Lookup) -> Result<Pokemon, CatalogError> {
        let pokemon = match lookup {
            Lookup::Id(id) => self.factory.create_by_id(*id).await?,
            Lookup::Name(name) => self.factory.create_by_name(name).await?,
        };
        self.resolver.attach(pokemon).await
    }

    /// Run one pipeline per lookup, at most `max_concurrent_hydrations` at a
    /// time, and join them all.
    ///
    /// Every pipeline runs to completion. If any failed, the failure earliest
    /// in lookup order is returned.
    async fn hydrate_many(
        &self,
        operation: &'static str,
        lookups: Vec<Lookup>,
    ) -> Result<Vec<Pokemon>, CatalogError> {
        let mut results: Vec<(usize, Lookup, Result<Pokemon, CatalogError>)> =
            stream::iter(lookups.into_iter().enumerate())
                .map(|(index, lookup)| async move {
                    let result = self.hydrate(&lookup).await;
                    (index, lookup, result)
                })
                .buffer_unordered(self.config.max_concurrent_hydrations)
                .collect()
                .await;
        results.sort_by_key(|(index, _, _)| *index);

        let mut pokemon = Vec::with_capacity(results.len());
        for (_, lookup, result) in results {
            let hydrated = result.inspect_err(|e| {
                tracing::error!(error = %e, operation, key = %lookup, "Failed to hydrate pokemon");
            })?;
            pokemon.push(hydrated);
        }

        pokemon.sort_by_key(|p| p.id);
        pokemon.dedup_by_key(|p| p.id);

        tracing::info!(operation, count = pokemon.len(), "Hydrated pokemon");
        Ok(pokemon)
    }
}

/// Species references to id lookups.
fn species_lookups(species: &[ResourceRef]) -> Result<Vec<Lookup>, CatalogError> {
    species
        .iter()
        .map(|entry| {
            entry
                .require_id("pokemon-species")
                .map(|id| Lookup::Id(PokemonId::new(id)))
                .map_err(CatalogError::from)
        })
        .collect()
}
