mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	Auth, Config, EmbeddingProviderConfig, GenerationProviderConfig, Index,
	PlannerProviderConfig, Providers, Retrieval, RouteParams, Routing, Service,
};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::invalid("service.http_bind", "must be non-empty"));
	}
	if cfg.auth.api_key.trim().is_empty() {
		return Err(Error::invalid("auth.api_key", "must be non-empty"));
	}
	if cfg.index.url.trim().is_empty() {
		return Err(Error::invalid("index.url", "must be non-empty"));
	}
	if cfg.index.collection.trim().is_empty() {
		return Err(Error::invalid("index.collection", "must be non-empty"));
	}
	if cfg.index.vector_dim == 0 {
		return Err(Error::invalid("index.vector_dim", "must be greater than zero"));
	}
	if cfg.providers.embedding.dimensions == 0 {
		return Err(Error::invalid("providers.embedding.dimensions", "must be greater than zero"));
	}
	if cfg.providers.embedding.dimensions != cfg.index.vector_dim {
		return Err(Error::invalid("providers.embedding.dimensions", "must match index.vector_dim"));
	}
	if cfg.retrieval.neighbor_k == 0 {
		return Err(Error::invalid("retrieval.neighbor_k", "must be greater than zero"));
	}

	for (label, key) in [
		("embedding", &cfg.providers.embedding.api_key),
		("generation", &cfg.providers.generation.api_key),
		("planner", &cfg.providers.planner.api_key),
	] {
		if key.trim().is_empty() {
			return Err(Error::invalid(format!("providers.{label}.api_key"), "must be non-empty"));
		}
	}

	for (label, route) in [
		("finance", &cfg.routing.finance),
		("hr", &cfg.routing.hr),
		("legal", &cfg.routing.legal),
		("general", &cfg.routing.general),
		("engineering", &cfg.routing.engineering),
	] {
		if route.model_id.trim().is_empty() {
			return Err(Error::invalid(format!("routing.{label}.model_id"), "must be non-empty"));
		}
		if !route.temperature.is_finite() {
			return Err(Error::invalid(
				format!("routing.{label}.temperature"),
				"must be a finite number",
			));
		}
		if route.temperature < 0.0 {
			return Err(Error::invalid(
				format!("routing.{label}.temperature"),
				"must be zero or greater",
			));
		}
		if route.max_output_tokens == 0 {
			return Err(Error::invalid(
				format!("routing.{label}.max_output_tokens"),
				"must be greater than zero",
			));
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	for api_base in [
		&mut cfg.providers.embedding.api_base,
		&mut cfg.providers.generation.api_base,
		&mut cfg.providers.planner.api_base,
	] {
		while api_base.ends_with('/') {
			api_base.pop();
		}
	}

	cfg.service.cors_allowed_origins.retain(|origin| !origin.trim().is_empty());
}
