//! Type list use case.

use std::sync::Arc;

use pokedex_domain::{GenerationId, PokemonType};

use crate::entities::CatalogError;
use crate::infrastructure::ports::PokeApiPort;

/// Lists the types introduced in one generation.
pub struct GetTypes {
    api: Arc<dyn PokeApiPort>,
}

impl GetTypes {
    pub fn new(api: Arc<dyn PokeApiPort>) -> Self {
        Self { api }
    }

    pub async fn execute(
        &self,
        generation_id: GenerationId,
    ) -> Result<Vec<PokemonType>, CatalogError> {
        let generation = self
            .api
            .get_generation(generation_id)
            .await
            .map_err(CatalogError::from)
            .inspect_err(|e| {
                tracing::error!(
                    error = %e,
                    operation = "types",
                    generation_id = %generation_id,
                    "Failed to fetch generation types"
                );
            })?;

        let types = generation
            .types
            .iter()
            .map(PokemonType::from_ref)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(types)
    }
}
