use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use orag_config::Config;

const SAMPLE_CONFIG_TEMPLATE_TOML: &str = include_str!("fixtures/sample_config.template.toml");

fn sample_toml_with_auth_key(api_key: &str) -> String {
	let mut value: Value =
		toml::from_str(SAMPLE_CONFIG_TEMPLATE_TOML).expect("Failed to parse template config.");
	let root = value.as_table_mut().expect("Template config must be a table.");
	let auth = root
		.get_mut("auth")
		.and_then(Value::as_table_mut)
		.expect("Template config must include [auth].");

	auth.insert("api_key".to_string(), Value::String(api_key.to_string()));

	toml::to_string(&value).expect("Failed to render template config.")
}

fn sample_toml_with_embedding_api_base(api_base: &str) -> String {
	let mut value: Value =
		toml::from_str(SAMPLE_CONFIG_TEMPLATE_TOML).expect("Failed to parse template config.");
	let root = value.as_table_mut().expect("Template config must be a table.");
	let embedding = root
		.get_mut("providers")
		.and_then(Value::as_table_mut)
		.and_then(|providers| providers.get_mut("embedding"))
		.and_then(Value::as_table_mut)
		.expect("Template config must include [providers.embedding].");

	embedding.insert("api_base".to_string(), Value::String(api_base.to_string()));

	toml::to_string(&value).expect("Failed to render template config.")
}

fn sample_toml_with_cors(origins: &[&str]) -> String {
	let mut value: Value =
		toml::from_str(SAMPLE_CONFIG_TEMPLATE_TOML).expect("Failed to parse template config.");
	let root = value.as_table_mut().expect("Template config must be a table.");
	let service = root
		.get_mut("service")
		.and_then(Value::as_table_mut)
		.expect("Template config must include [service].");
	let origins =
		origins.iter().map(|origin| Value::String(origin.to_string())).collect::<Vec<_>>();

	service.insert("cors_allowed_origins".to_string(), Value::Array(origins));

	toml::to_string(&value).expect("Failed to render template config.")
}

fn sample_toml_with_finance_route(model_id: &str) -> String {
	let mut value: Value =
		toml::from_str(SAMPLE_CONFIG_TEMPLATE_TOML).expect("Failed to parse template config.");
	let root = value.as_table_mut().expect("Template config must be a table.");
	let mut finance = toml::Table::new();

	finance.insert("model_id".to_string(), Value::String(model_id.to_string()));
	finance.insert("temperature".to_string(), Value::Float(0.0));
	finance.insert("max_output_tokens".to_string(), Value::Integer(512));

	let mut routing = toml::Table::new();

	routing.insert("finance".to_string(), Value::Table(finance));
	root.insert("routing".to_string(), Value::Table(routing));

	toml::to_string(&value).expect("Failed to render template config.")
}

fn write_temp_config(payload: String) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be valid.")
		.as_nanos();
	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let pid = std::process::id();
	let mut path = env::temp_dir();

	path.push(format!("orag_config_test_{nanos}_{pid}_{ordinal}.toml"));

	fs::write(&path, payload).expect("Failed to write test config.");

	path
}

fn base_config() -> Config {
	toml::from_str(SAMPLE_CONFIG_TEMPLATE_TOML).expect("Failed to parse test config.")
}

#[test]
fn registry_defaults_apply_when_routing_absent() {
	let cfg = base_config();

	assert_eq!(cfg.routing.finance.model_id, "gemini-2.5-pro");
	assert_eq!(cfg.routing.finance.max_output_tokens, 1_536);
	assert_eq!(cfg.routing.hr.model_id, "gemini-2.5-flash");
	assert_eq!(cfg.routing.hr.max_output_tokens, 1_024);
	assert_eq!(cfg.routing.legal.model_id, "gemini-2.5-pro");
	assert_eq!(cfg.routing.general.model_id, "gemini-2.5-flash");
	assert_eq!(cfg.routing.engineering.model_id, "gemini-2.5-pro");
}

#[test]
fn neighbor_k_defaults_to_eight() {
	let cfg = base_config();

	assert_eq!(cfg.retrieval.neighbor_k, 8);
}

#[test]
fn routing_override_merges_with_registry_defaults() {
	let payload = sample_toml_with_finance_route("gpt-4o-mini");
	let cfg: Config = toml::from_str(&payload).expect("Failed to parse test config.");

	assert_eq!(cfg.routing.finance.model_id, "gpt-4o-mini");
	assert_eq!(cfg.routing.finance.max_output_tokens, 512);
	assert_eq!(cfg.routing.hr.model_id, "gemini-2.5-flash");
	assert_eq!(cfg.routing.engineering.model_id, "gemini-2.5-pro");
}

#[test]
fn auth_api_key_must_be_non_empty() {
	let payload = sample_toml_with_auth_key("   ");
	let path = write_temp_config(payload);
	let result = orag_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	let err = result.expect_err("Expected auth api_key validation error.");

	assert!(
		err.to_string().contains("auth.api_key must be non-empty."),
		"Unexpected error: {err}"
	);
}

#[test]
fn embedding_dimensions_must_match_index_vector_dim() {
	let mut cfg = base_config();

	cfg.providers.embedding.dimensions = 8;

	let err = orag_config::validate(&cfg).expect_err("Expected dimension validation error.");

	assert!(
		err.to_string().contains("providers.embedding.dimensions must match index.vector_dim."),
		"Unexpected error: {err}"
	);
}

#[test]
fn neighbor_k_must_be_positive() {
	let mut cfg = base_config();

	cfg.retrieval.neighbor_k = 0;

	let err = orag_config::validate(&cfg).expect_err("Expected neighbor_k validation error.");

	assert!(
		err.to_string().contains("retrieval.neighbor_k must be greater than zero."),
		"Unexpected error: {err}"
	);
}

#[test]
fn provider_api_key_must_be_non_empty() {
	let mut cfg = base_config();

	cfg.providers.generation.api_key = " ".to_string();

	let err = orag_config::validate(&cfg).expect_err("Expected provider api_key validation error.");

	assert!(
		err.to_string().contains("providers.generation.api_key must be non-empty."),
		"Unexpected error: {err}"
	);
}

#[test]
fn routing_model_id_must_be_non_empty() {
	let mut cfg = base_config();

	cfg.routing.hr.model_id = String::new();

	let err = orag_config::validate(&cfg).expect_err("Expected routing model_id validation error.");

	assert!(
		err.to_string().contains("routing.hr.model_id must be non-empty."),
		"Unexpected error: {err}"
	);
}

#[test]
fn routing_temperature_must_be_finite() {
	let mut cfg = base_config();

	cfg.routing.finance.temperature = f32::NAN;

	let err =
		orag_config::validate(&cfg).expect_err("Expected routing temperature validation error.");

	assert!(
		err.to_string().contains("routing.finance.temperature must be a finite number."),
		"Unexpected error: {err}"
	);
}

#[test]
fn routing_max_output_tokens_must_be_positive() {
	let mut cfg = base_config();

	cfg.routing.general.max_output_tokens = 0;

	let err = orag_config::validate(&cfg)
		.expect_err("Expected routing max_output_tokens validation error.");

	assert!(
		err.to_string().contains("routing.general.max_output_tokens must be greater than zero."),
		"Unexpected error: {err}"
	);
}

#[test]
fn api_base_trailing_slashes_are_trimmed() {
	let payload = sample_toml_with_embedding_api_base("https://api.voyageai.com/v1/");
	let path = write_temp_config(payload);
	let result = orag_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	let cfg = result.expect("Expected config with a trailing slash to load.");

	assert_eq!(cfg.providers.embedding.api_base, "https://api.voyageai.com/v1");
}

#[test]
fn empty_cors_origins_are_dropped() {
	let payload = sample_toml_with_cors(&["http://localhost:3000", "   ", ""]);
	let path = write_temp_config(payload);
	let result = orag_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	let cfg = result.expect("Expected config with blank origins to load.");

	assert_eq!(cfg.service.cors_allowed_origins, vec!["http://localhost:3000".to_string()]);
}

#[test]
fn orag_example_toml_is_valid() {
	let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

	path.push("../../orag.example.toml");

	orag_config::load(&path).expect("Expected orag.example.toml to be a valid config.");
}
