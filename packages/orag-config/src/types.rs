use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub auth: Auth,
	pub index: Index,
	#[serde(default)]
	pub retrieval: Retrieval,
	pub providers: Providers,
	#[serde(default)]
	pub routing: Routing,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
	/// Optional. Origins allowed by the CORS layer; an empty list permits any origin.
	#[serde(default)]
	pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct Auth {
	pub api_key: String,
}

#[derive(Debug, Deserialize)]
pub struct Index {
	pub url: String,
	pub collection: String,
	pub vector_dim: u32,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Retrieval {
	pub neighbor_k: u32,
}
impl Default for Retrieval {
	fn default() -> Self {
		Self { neighbor_k: 8 }
	}
}

#[derive(Debug, Deserialize)]
pub struct Providers {
	pub embedding: EmbeddingProviderConfig,
	pub generation: GenerationProviderConfig,
	pub planner: PlannerProviderConfig,
}

#[derive(Debug, Deserialize)]
pub struct EmbeddingProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub model: String,
	pub dimensions: u32,
	pub timeout_ms: u64,
	pub default_headers: Map<String, Value>,
}

/// The generation model is not configured here; the router decides it per request.
#[derive(Debug, Deserialize)]
pub struct GenerationProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub timeout_ms: u64,
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct PlannerProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub model: String,
	pub temperature: f32,
	pub timeout_ms: u64,
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Routing {
	pub finance: RouteParams,
	pub hr: RouteParams,
	pub legal: RouteParams,
	pub general: RouteParams,
	pub engineering: RouteParams,
}
impl Default for Routing {
	fn default() -> Self {
		Self {
			finance: RouteParams {
				model_id: "gemini-2.5-pro".to_string(),
				temperature: 0.2,
				max_output_tokens: 1_536,
			},
			hr: RouteParams {
				model_id: "gemini-2.5-flash".to_string(),
				temperature: 0.2,
				max_output_tokens: 1_024,
			},
			legal: RouteParams {
				model_id: "gemini-2.5-pro".to_string(),
				temperature: 0.2,
				max_output_tokens: 1_536,
			},
			general: RouteParams {
				model_id: "gemini-2.5-flash".to_string(),
				temperature: 0.2,
				max_output_tokens: 1_024,
			},
			engineering: RouteParams {
				model_id: "gemini-2.5-pro".to_string(),
				temperature: 0.2,
				max_output_tokens: 1_536,
			},
		}
	}
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RouteParams {
	pub model_id: String,
	pub temperature: f32,
	pub max_output_tokens: u32,
}
