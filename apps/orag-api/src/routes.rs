use axum::{
	Json, Router,
	extract::{Query, State},
	http::{HeaderMap, HeaderValue, Method, StatusCode},
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use orag_domain::identity::{CallerIdentity, resolve_clearance, resolve_domain, resolve_identity};
use orag_service::{QueryRequest, QueryResponse, RawNeighborsResponse, RetrievalResponse};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	let cors = cors_layer(&state.service.cfg.service.cors_allowed_origins);

	Router::new()
		.route("/health", get(health))
		.route("/query", post(query))
		.route("/debug/raw_chunks", get(raw_chunks))
		.route("/debug/retrieval", get(debug_retrieval))
		.layer(cors)
		.with_state(state)
}

async fn health() -> Json<serde_json::Value> {
	Json(json!({ "status": "ok" }))
}

async fn query(
	State(state): State<AppState>,
	headers: HeaderMap,
	Json(payload): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
	let caller = authorize(&state, &headers)?;
	let response = state.service.answer(&caller, &payload.query).await?;

	Ok(Json(response))
}

#[derive(Debug, Deserialize)]
struct RawChunksParams {
	q: String,
	#[serde(default = "default_raw_k")]
	k: u64,
}

fn default_raw_k() -> u64 {
	5
}

async fn raw_chunks(
	State(state): State<AppState>,
	headers: HeaderMap,
	Query(params): Query<RawChunksParams>,
) -> Result<Json<RawNeighborsResponse>, ApiError> {
	authorize(&state, &headers)?;

	let response = state.service.inspect_neighbors(&params.q, params.k).await?;

	Ok(Json(response))
}

#[derive(Debug, Deserialize)]
struct RetrievalParams {
	q: String,
	#[serde(default = "default_retrieval_domain")]
	domain: String,
	#[serde(default = "default_retrieval_clearance")]
	clr: String,
}

fn default_retrieval_domain() -> String {
	"finance".to_string()
}

fn default_retrieval_clearance() -> String {
	"2".to_string()
}

async fn debug_retrieval(
	State(state): State<AppState>,
	headers: HeaderMap,
	Query(params): Query<RetrievalParams>,
) -> Result<Json<RetrievalResponse>, ApiError> {
	let identity = authorize(&state, &headers)?;
	// The identity check gates access; the inspected domain and clearance come
	// from the query parameters, coerced the same way headers are.
	let caller = CallerIdentity {
		email: identity.email,
		domain: resolve_domain(Some(&params.domain)),
		clearance: resolve_clearance(Some(&params.clr)),
	};
	let response = state.service.debug_retrieval(&params.q, &caller).await?;

	Ok(Json(response))
}

fn authorize(state: &AppState, headers: &HeaderMap) -> Result<CallerIdentity, ApiError> {
	if header_str(headers, "x-api-key") != Some(state.service.cfg.auth.api_key.as_str()) {
		return Err(json_error(StatusCode::UNAUTHORIZED, "unauthorized", "Invalid API key."));
	}

	Ok(resolve_identity(
		header_str(headers, "x-user-email"),
		header_str(headers, "x-user-domain"),
		header_str(headers, "x-user-clearance"),
	))
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
	headers.get(name).and_then(|value| value.to_str().ok())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
	let layer = CorsLayer::new().allow_methods([Method::GET, Method::POST]).allow_headers(Any);

	if origins.is_empty() {
		return layer.allow_origin(Any);
	}

	let mut parsed = Vec::new();

	for origin in origins {
		match HeaderValue::from_str(origin) {
			Ok(value) => parsed.push(value),
			Err(err) => {
				tracing::warn!(origin = %origin, error = %err, "Ignoring invalid CORS origin.");
			},
		}
	}

	layer.allow_origin(parsed)
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}

pub fn json_error(status: StatusCode, code: &str, message: impl Into<String>) -> ApiError {
	ApiError::new(status, code, message)
}

impl From<orag_service::Error> for ApiError {
	fn from(err: orag_service::Error) -> Self {
		match err {
			orag_service::Error::Provider { message } =>
				json_error(StatusCode::BAD_GATEWAY, "provider_error", message),
			orag_service::Error::Index { message } =>
				json_error(StatusCode::BAD_GATEWAY, "index_error", message),
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
