//! Generation list use case.

use std::sync::Arc;

use pokedex_domain::Generation;

use crate::entities::CatalogError;
use crate::infrastructure::ports::PokeApiPort;

/// Lists every generation known upstream, in upstream order.
pub struct GetGenerations {
    api: Arc<dyn PokeApiPort>,
}

impl GetGenerations {
    pub fn new(api: Arc<dyn PokeApiPort>) -> Self {
        Self { api }
    }

    pub async fn execute(&self) -> Result<Vec<Generation>, CatalogError> {
        let listing = self
            .api
            .get_generations()
            .await
            .map_err(CatalogError::from)
            .inspect_err(|e| {
                tracing::error!(error = %e, operation = "generations", "Failed to list generations");
            })?;

        let generations = listing
            .results
            .iter()
            .map(Generation::from_ref)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(generations)
    }
}
