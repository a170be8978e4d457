//! PokeAPI REST client
//!
//! Implements the PokeApiPort trait over reqwest. One attempt per call;
//! retries live in `resilient_pokeapi`.

use async_trait::async_trait;
use pokedex_domain::{EvolutionChainId, GenerationId, PokemonId};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::infrastructure::ports::{
    CatalogResponse, EvolutionChainResponse, GenerationListResponse, GenerationResponse,
    PokeApiPort, PokemonResponse, SpeciesResponse, UpstreamError, CATALOG_PAGE_LIMIT,
};

/// Base URL of the public PokeAPI.
pub const DEFAULT_POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Client for the PokeAPI REST endpoints
#[derive(Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET `{base_url}/{path}` and decode the body as `T`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        key: &str,
        path: &str,
    ) -> Result<T, UpstreamError> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(url = %url, resource, "Fetching upstream resource");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| UpstreamError::transport(resource, e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(UpstreamError::not_found(resource, key));
        }
        if !status.is_success() {
            return Err(UpstreamError::Status {
                resource,
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| UpstreamError::invalid_payload(resource, e))
    }
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_POKEAPI_BASE_URL)
    }
}

#[async_trait]
impl PokeApiPort for PokeApiClient {
    async fn get_generations(&self) -> Result<GenerationListResponse, UpstreamError> {
        self.get_json("generation", "all", "generation").await
    }

    async fn get_generation(&self, id: GenerationId) -> Result<GenerationResponse, UpstreamError> {
        self.get_json("generation", &id.to_string(), &format!("generation/{id}"))
            .await
    }

    async fn get_species(&self, id: PokemonId) -> Result<SpeciesResponse, UpstreamError> {
        self.get_json(
            "pokemon-species",
            &id.to_string(),
            &format!("pokemon-species/{id}"),
        )
        .await
    }

    async fn get_species_by_name(&self, name: &str) -> Result<SpeciesResponse, UpstreamError> {
        self.get_json("pokemon-species", name, &format!("pokemon-species/{name}"))
            .await
    }

    async fn get_evolution_chain(
        &self,
        id: EvolutionChainId,
    ) -> Result<EvolutionChainResponse, UpstreamError> {
        self.get_json(
            "evolution-chain",
            &id.to_string(),
            &format!("evolution-chain/{id}"),
        )
        .await
    }

    async fn get_pokemon(&self, id: PokemonId) -> Result<PokemonResponse, UpstreamError> {
        self.get_json("pokemon", &id.to_string(), &format!("pokemon/{id}"))
            .await
    }

    async fn get_pokemon_by_name(&self, name: &str) -> Result<PokemonResponse, UpstreamError> {
        self.get_json("pokemon", name, &format!("pokemon/{name}"))
            .await
    }

    async fn get_catalog(&self) -> Result<CatalogResponse, UpstreamError> {
        self.get_json(
            "pokemon",
            "all",
            &format!("pokemon?limit={CATALOG_PAGE_LIMIT}"),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Path, Query},
        http::StatusCode as AxumStatus,
        response::IntoResponse,
        routing::get,
        Json, Router,
    };
    use std::collections::HashMap;
    use std::net::SocketAddr;

    fn pikachu() -> serde_json::Value {
        serde_json::json!({
            "id": 25,
            "name": "pikachu",
            "sprites": { "front_default": "https://img.example/25.png" },
            "types": [
                { "slot": 1, "type": { "name": "electric", "url": "https://pokeapi.co/api/v2/type/13/" } }
            ],
            "stats": [
                { "base_stat": 35, "effort": 0, "stat": { "name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/" } }
            ]
        })
    }

    async fn pokemon_handler(Path(key): Path<String>) -> impl IntoResponse {
        match key.as_str() {
            "25" | "pikachu" => (AxumStatus::OK, Json(pikachu())).into_response(),
            _ => (AxumStatus::NOT_FOUND, "Not Found").into_response(),
        }
    }

    async fn catalog_handler(Query(params): Query<HashMap<String, String>>) -> Json<serde_json::Value> {
        // Echo the requested page size back as the count
        let limit: u32 = params
            .get("limit")
            .and_then(|l| l.parse().ok())
            .unwrap_or_default();
        Json(serde_json::json!({
            "count": limit,
            "results": [
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" }
            ]
        }))
    }

    async fn spawn_upstream() -> SocketAddr {
        let router = Router::new()
            .route("/api/v2/pokemon", get(catalog_handler))
            .route("/api/v2/pokemon/{key}", get(pokemon_handler))
            .route(
                "/api/v2/generation/{id}",
                get(|| async { (AxumStatus::TOO_MANY_REQUESTS, "slow down") }),
            )
            .route(
                "/api/v2/evolution-chain/{id}",
                get(|| async { Json(serde_json::json!({ "id": "not-a-number" })) }),
            )
            .route(
                "/api/v2/pokemon-species/{key}",
                get(|| async { (AxumStatus::INTERNAL_SERVER_ERROR, "boom") }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    fn client_for(addr: SocketAddr) -> PokeApiClient {
        PokeApiClient::new(&format!("http://{addr}/api/v2/"))
    }

    #[tokio::test]
    async fn fetches_pokemon_by_id_and_name() {
        let client = client_for(spawn_upstream().await);

        let by_id = client.get_pokemon(PokemonId::new(25)).await.unwrap();
        let by_name = client.get_pokemon_by_name("pikachu").await.unwrap();

        assert_eq!(by_id, by_name);
        assert_eq!(by_id.name, "pikachu");
        assert_eq!(
            by_id.sprites.front_default.as_deref(),
            Some("https://img.example/25.png")
        );
    }

    #[tokio::test]
    async fn maps_404_to_not_found() {
        let client = client_for(spawn_upstream().await);

        let err = client.get_pokemon_by_name("missingno").await.unwrap_err();

        assert_eq!(err, UpstreamError::not_found("pokemon", "missingno"));
    }

    #[tokio::test]
    async fn surfaces_rate_limit_status() {
        let client = client_for(spawn_upstream().await);

        let err = client.get_generation(GenerationId::new(1)).await.unwrap_err();

        assert_eq!(
            err,
            UpstreamError::Status {
                resource: "generation",
                status: 429
            }
        );
    }

    #[tokio::test]
    async fn surfaces_server_errors_as_status() {
        let client = client_for(spawn_upstream().await);

        let err = client.get_species(PokemonId::new(1)).await.unwrap_err();

        assert!(matches!(
            err,
            UpstreamError::Status {
                resource: "pokemon-species",
                status: 500
            }
        ));
    }

    #[tokio::test]
    async fn rejects_unexpected_payload_shape() {
        let client = client_for(spawn_upstream().await);

        let err = client
            .get_evolution_chain(EvolutionChainId::new(1))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            UpstreamError::InvalidPayload {
                resource: "evolution-chain",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn catalog_requests_single_large_page() {
        let client = client_for(spawn_upstream().await);

        let catalog = client.get_catalog().await.unwrap();

        assert_eq!(catalog.count, CATALOG_PAGE_LIMIT);
        assert_eq!(catalog.results[0].name, "bulbasaur");
    }

    #[tokio::test]
    async fn unreachable_host_is_transport_error() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client_for(addr).get_generations().await.unwrap_err();

        assert!(matches!(
            err,
            UpstreamError::Transport {
                resource: "generation",
                ..
            }
        ));
    }
}
