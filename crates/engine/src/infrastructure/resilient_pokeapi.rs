//! Resilient PokeAPI client wrapper with fixed-delay retry
//!
//! Wraps any PokeApiPort implementation and retries rate-limited and
//! transient failures. Attempts are sequential and block the calling
//! operation until one succeeds or the budget is spent.

use async_trait::async_trait;
use pokedex_domain::{EvolutionChainId, GenerationId, PokemonId};
use std::sync::Arc;
use std::time::Duration;

use crate::infrastructure::ports::{
    CatalogResponse, EvolutionChainResponse, GenerationListResponse, GenerationResponse,
    PokeApiPort, PokemonResponse, SpeciesResponse, UpstreamError,
};

/// HTTP status the upstream uses to signal rate limiting.
pub const RATE_LIMIT_STATUS: u16 = 429;

/// Configuration for retry behavior
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts per call, including the first one
    pub max_attempts: u32,
    /// Fixed wait between attempts
    pub delay: Duration,
    /// Upstream statuses worth another attempt
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(2),
            retryable_statuses: vec![RATE_LIMIT_STATUS],
        }
    }
}

impl RetryPolicy {
    /// Determine if an error is retryable
    fn is_retryable(&self, error: &UpstreamError) -> bool {
        match error {
            UpstreamError::Transport { .. } => true,
            UpstreamError::Status { status, .. } => self.retryable_statuses.contains(status),
            UpstreamError::NotFound { .. }
            | UpstreamError::InvalidPayload { .. }
            | UpstreamError::RateLimitExceeded { .. }
            | UpstreamError::Unavailable { .. } => false,
        }
    }
}

/// Wrapper that adds retry logic to any upstream client
pub struct ResilientPokeApiClient {
    inner: Arc<dyn PokeApiPort>,
    policy: RetryPolicy,
}

impl ResilientPokeApiClient {
    /// Create a new resilient wrapper around an existing upstream client
    pub fn new(inner: Arc<dyn PokeApiPort>, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    async fn execute_with_retry<T, F, Fut>(
        &self,
        operation_name: &'static str,
        operation: F,
    ) -> Result<T, UpstreamError>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<T, UpstreamError>>,
    {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut last_error = None;

        for attempt in 1..=max_attempts {
            match operation().await {
                Ok(response) => {
                    if attempt > 1 {
                        tracing::info!(
                            attempt,
                            operation = operation_name,
                            "Upstream request succeeded after retry"
                        );
                    }
                    return Ok(response);
                }
                Err(e) if !self.policy.is_retryable(&e) => {
                    if !e.is_not_found() {
                        tracing::error!(
                            error = %e,
                            operation = operation_name,
                            "Upstream request failed with non-retryable error"
                        );
                    }
                    return Err(e);
                }
                Err(e) => {
                    if attempt < max_attempts {
                        tracing::warn!(
                            attempt,
                            max_attempts,
                            delay_ms = self.policy.delay.as_millis() as u64,
                            error = %e,
                            operation = operation_name,
                            "Upstream request failed, retrying..."
                        );
                        tokio::time::sleep(self.policy.delay).await;
                    }
                    last_error = Some(e);
                }
            }
        }

        let error = match last_error {
            Some(UpstreamError::Status { resource, status }) if status == RATE_LIMIT_STATUS => {
                UpstreamError::RateLimitExceeded {
                    resource,
                    attempts: max_attempts,
                }
            }
            Some(e) => UpstreamError::Unavailable {
                resource: e.resource(),
                attempts: max_attempts,
                message: e.to_string(),
            },
            None => UpstreamError::Unavailable {
                resource: operation_name,
                attempts: max_attempts,
                message: "no attempt completed".to_string(),
            },
        };
        tracing::error!(
            attempts = max_attempts,
            error = %error,
            operation = operation_name,
            "Upstream request failed after all retry attempts"
        );
        Err(error)
    }
}

#[async_trait]
impl PokeApiPort for ResilientPokeApiClient {
    async fn get_generations(&self) -> Result<GenerationListResponse, UpstreamError> {
        self.execute_with_retry("get_generations", || self.inner.get_generations())
            .await
    }

    async fn get_generation(&self, id: GenerationId) -> Result<GenerationResponse, UpstreamError> {
        self.execute_with_retry("get_generation", || self.inner.get_generation(id))
            .await
    }

    async fn get_species(&self, id: PokemonId) -> Result<SpeciesResponse, UpstreamError> {
        self.execute_with_retry("get_species", || self.inner.get_species(id))
            .await
    }

    async fn get_species_by_name(&self, name: &str) -> Result<SpeciesResponse, UpstreamError> {
        self.execute_with_retry("get_species_by_name", || {
            self.inner.get_species_by_name(name)
        })
        .await
    }

    async fn get_evolution_chain(
        &self,
        id: EvolutionChainId,
    ) -> Result<EvolutionChainResponse, UpstreamError> {
        self.execute_with_retry("get_evolution_chain", || {
            self.inner.get_evolution_chain(id)
        })
        .await
    }

    async fn get_pokemon(&self, id: PokemonId) -> Result<PokemonResponse, UpstreamError> {
        self.execute_with_retry("get_pokemon", || self.inner.get_pokemon(id))
            .await
    }

    async fn get_pokemon_by_name(&self, name: &str) -> Result<PokemonResponse, UpstreamError> {
        self.execute_with_retry("get_pokemon_by_name", || {
            self.inner.get_pokemon_by_name(name)
        })
        .await
    }

    async fn get_catalog(&self) -> Result<CatalogResponse, UpstreamError> {
        self.execute_with_retry("get_catalog", || self.inner.get_catalog())
            .await
    }
}
