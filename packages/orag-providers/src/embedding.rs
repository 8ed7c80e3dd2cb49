use std::time::Duration;

use color_eyre::{Result, eyre};
use reqwest::Client;
use serde_json::Value;

/// Retrieval role of the text being embedded. Providers produce asymmetric
/// vectors, so queries and corpus documents must be tagged differently.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EmbedTask {
	Query,
	Document,
}

impl EmbedTask {
	fn input_type(&self) -> &'static str {
		match self {
			Self::Query => "query",
			Self::Document => "document",
		}
	}
}

pub async fn embed(
	cfg: &orag_config::EmbeddingProviderConfig,
	texts: &[String],
	task: EmbedTask,
) -> Result<Vec<Vec<f32>>> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let body = serde_json::json!({
		"model": cfg.model,
		"input": texts,
		"dimensions": cfg.dimensions,
		"input_type": task.input_type(),
	});
	let res = client
		.post(url)
		.headers(crate::auth_headers(&cfg.api_key, &cfg.default_headers)?)
		.json(&body)
		.send()
		.await?;
	let json: Value = res.error_for_status()?.json().await?;

	parse_embedding_response(json)
}

// Providers may stream results out of order; each item's `index` field says
// where it belongs, with the array position as the fallback.
fn parse_embedding_response(json: Value) -> Result<Vec<Vec<f32>>> {
	let data = json
		.get("data")
		.and_then(|value| value.as_array())
		.ok_or_else(|| eyre::eyre!("Embedding response is missing data array."))?;
	let mut indexed = Vec::with_capacity(data.len());

	for (fallback_index, item) in data.iter().enumerate() {
		let index = item
			.get("index")
			.and_then(|value| value.as_u64())
			.map(|value| value as usize)
			.unwrap_or(fallback_index);
		let values = item
			.get("embedding")
			.and_then(|value| value.as_array())
			.ok_or_else(|| eyre::eyre!("Embedding item missing embedding array."))?;
		let vector = values
			.iter()
			.map(|value| value.as_f64().map(|number| number as f32))
			.collect::<Option<Vec<_>>>()
			.ok_or_else(|| eyre::eyre!("Embedding value must be numeric."))?;

		indexed.push((index, vector));
	}

	indexed.sort_by_key(|(index, _)| *index);

	Ok(indexed.into_iter().map(|(_, vector)| vector).collect())
}
