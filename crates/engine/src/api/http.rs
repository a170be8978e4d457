//! HTTP routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use pokedex_domain::{Generation, GenerationId, Pokemon, PokemonId, PokemonType};
use serde::Deserialize;
use std::sync::Arc;

use crate::app::App;
use crate::entities::CatalogError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/generations", get(list_generations))
        .route("/api/generations/{id}/types", get(list_types))
        .route("/api/generations/{id}/pokemon", get(list_generation_pokemon))
        .route("/api/pokemon", get(list_all_pokemon))
        .route("/api/pokemon/search", get(search_pokemon))
        .route("/api/pokemon/{id}", get(get_pokemon))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Generations
// =============================================================================

async fn list_generations(State(app): State<Arc<App>>) -> Result<Json<Vec<Generation>>, ApiError> {
    let generations = app.use_cases.queries.generations.execute().await?;
    Ok(Json(generations))
}

async fn list_types(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<PokemonType>>, ApiError> {
    let generation_id = GenerationId::new(parse_id(&id)?);
    let types = app.use_cases.queries.types.execute(generation_id).await?;
    Ok(Json(types))
}

async fn list_generation_pokemon(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Pokemon>>, ApiError> {
    let generation_id = GenerationId::new(parse_id(&id)?);
    let pokemon = app
        .use_cases
        .queries
        .catalog
        .list_by_generation(generation_id)
        .await?;
    Ok(Json(pokemon))
}

// =============================================================================
// Pokemon
// =============================================================================

#[derive(Debug, Deserialize)]
struct SearchParams {
    name: Option<String>,
}

async fn list_all_pokemon(State(app): State<Arc<App>>) -> Result<Json<Vec<Pokemon>>, ApiError> {
    let pokemon = app.use_cases.queries.catalog.all().await?;
    Ok(Json(pokemon))
}

async fn get_pokemon(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Pokemon>, ApiError> {
    let pokemon_id = PokemonId::new(parse_id(&id)?);
    let pokemon = app.use_cases.queries.catalog.details(pokemon_id).await?;
    Ok(Json(pokemon))
}

async fn search_pokemon(
    State(app): State<Arc<App>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Pokemon>>, ApiError> {
    let name = params
        .name
        .ok_or_else(|| ApiError::BadRequest("Missing name parameter".to_string()))?;
    let fragment = name.trim().to_lowercase();

    let pokemon = app
        .use_cases
        .queries
        .catalog
        .details_by_name(&fragment)
        .await?;
    Ok(Json(pokemon))
}

/// Parse a positive numeric path id.
fn parse_id(raw: &str) -> Result<u32, ApiError> {
    match raw.parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::BadRequest(format!("Invalid id: {raw}"))),
    }
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    /// Upstream failed in a way the caller cannot fix; detail stays in the logs.
    Upstream,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "not found".to_string()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Upstream => (
                StatusCode::BAD_GATEWAY,
                "upstream unavailable".to_string(),
            ),
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::EntityNotFound { .. } => ApiError::NotFound,
            CatalogError::RateLimitExceeded { .. }
            | CatalogError::UpstreamUnavailable(_)
            | CatalogError::MalformedReference(_) => {
                tracing::error!(error = %e, "Request failed upstream");
                ApiError::Upstream
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::evolution::fixtures::{chain_response, link};
    use crate::entities::pokemon_factory::fixtures::{pokemon_response, species_response};
    use crate::infrastructure::ports::{
        CatalogResponse, GenerationListResponse, MockPokeApiPort, UpstreamError,
    };
    use crate::use_cases::CatalogConfig;
    use axum::{body::Body, http::Request};
    use pokedex_domain::ResourceRef;
    use tower::ServiceExt;

    fn router(api: MockPokeApiPort) -> Router {
        let app = App::new(Arc::new(api), CatalogConfig::default());
        routes().with_state(Arc::new(app))
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    fn pikachu_upstream(api: &mut MockPokeApiPort) {
        api.expect_get_pokemon_by_name()
            .withf(|name| name == "pikachu")
            .returning(|_| Ok(pokemon_response(25, "pikachu")));
        api.expect_get_species_by_name()
            .returning(|_| Ok(species_response(1, 10)));
        api.expect_get_pokemon()
            .withf(|id| *id == PokemonId::new(25))
            .returning(|_| Ok(pokemon_response(25, "pikachu")));
        api.expect_get_species()
            .returning(|_| Ok(species_response(1, 10)));
        api.expect_get_evolution_chain()
            .returning(|_| Ok(chain_response(10, link(25, "pikachu", vec![]))));
    }

    #[tokio::test]
    async fn health_is_ok() {
        let request = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();
        let response = router(MockPokeApiPort::new())
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn lists_generations() {
        let mut api = MockPokeApiPort::new();
        api.expect_get_generations().returning(|| {
            Ok(GenerationListResponse {
                count: 1,
                results: vec![ResourceRef::new(
                    "generation-i",
                    "https://pokeapi.co/api/v2/generation/1/",
                )],
            })
        });

        let (status, body) = get(router(api), "/api/generations").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["id"], 1);
        assert_eq!(body[0]["name"], "generation-i");
    }

    #[tokio::test]
    async fn pokemon_details_serialize_camel_case_chain() {
        let mut api = MockPokeApiPort::new();
        pikachu_upstream(&mut api);

        let (status, body) = get(router(api), "/api/pokemon/25").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "pikachu");
        assert_eq!(
            body["evolutionChainUrl"],
            "https://pokeapi.co/api/v2/evolution-chain/10/"
        );
        assert_eq!(body["evolutionChain"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["stats"][0]["base_stat"], 39);
    }

    #[tokio::test]
    async fn unknown_pokemon_is_404() {
        let mut api = MockPokeApiPort::new();
        api.expect_get_pokemon()
            .returning(|id| Err(UpstreamError::not_found("pokemon", id)));

        let (status, body) = get(router(api), "/api/pokemon/99999").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({ "error": "not found" }));
    }

    #[tokio::test]
    async fn non_numeric_id_is_400() {
        let (status, _) = get(router(MockPokeApiPort::new()), "/api/pokemon/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = get(router(MockPokeApiPort::new()), "/api/generations/0/types").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn upstream_failure_is_502_without_detail() {
        let mut api = MockPokeApiPort::new();
        api.expect_get_generations().returning(|| {
            Err(UpstreamError::RateLimitExceeded {
                resource: "generation",
                attempts: 3,
            })
        });

        let (status, body) = get(router(api), "/api/generations").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body, serde_json::json!({ "error": "upstream unavailable" }));
    }

    #[test]
    fn catalog_errors_map_to_api_errors() {
        let not_found = ApiError::from(CatalogError::EntityNotFound {
            resource: "pokemon",
            key: "0".to_string(),
        });
        let malformed = ApiError::from(CatalogError::MalformedReference("bad url".to_string()));
        let limited = ApiError::from(CatalogError::RateLimitExceeded {
            resource: "pokemon",
            attempts: 3,
        });

        assert!(matches!(not_found, ApiError::NotFound));
        assert!(matches!(malformed, ApiError::Upstream));
        assert!(matches!(limited, ApiError::Upstream));
        assert_eq!(malformed.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn search_normalises_the_fragment() {
        let mut api = MockPokeApiPort::new();
        api.expect_get_catalog().returning(|| {
            Ok(CatalogResponse {
                count: 2,
                results: vec![
                    ResourceRef::new("bulbasaur", "https://pokeapi.co/api/v2/pokemon/1/"),
                    ResourceRef::new("pikachu", "https://pokeapi.co/api/v2/pokemon/25/"),
                ],
            })
        });
        pikachu_upstream(&mut api);

        let (status, body) = get(router(api), "/api/pokemon/search?name=%20PIKA%20").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(1));
        assert_eq!(body[0]["name"], "pikachu");
    }

    #[tokio::test]
    async fn search_without_match_is_empty_list() {
        let mut api = MockPokeApiPort::new();
        api.expect_get_catalog().returning(|| {
            Ok(CatalogResponse {
                count: 1,
                results: vec![ResourceRef::new(
                    "pikachu",
                    "https://pokeapi.co/api/v2/pokemon/25/",
                )],
            })
        });

        let (status, body) = get(router(api), "/api/pokemon/search?name=zzz").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn search_requires_name() {
        let (status, body) = get(router(MockPokeApiPort::new()), "/api/pokemon/search").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing name parameter");
    }
}
