use std::time::Duration;

use color_eyre::Result;
use reqwest::Client;
use serde_json::Value;

use orag_domain::routing::Route;

/// Runs the grounded prompt against the model the router chose. Returns
/// `Ok(None)` when the model produced no candidate text, so the caller can
/// substitute its fallback answer.
pub async fn generate(
	cfg: &orag_config::GenerationProviderConfig,
	route: &Route,
	prompt: &str,
) -> Result<Option<String>> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let body = serde_json::json!({
		"model": route.model_id,
		"temperature": route.temperature,
		"max_tokens": route.max_output_tokens,
		"messages": [
			{ "role": "user", "content": prompt }
		],
	});
	let res = client
		.post(url)
		.headers(crate::auth_headers(&cfg.api_key, &cfg.default_headers)?)
		.json(&body)
		.send()
		.await?;
	let json: Value = res.error_for_status()?.json().await?;

	Ok(parse_generation_text(&json))
}

fn parse_generation_text(json: &Value) -> Option<String> {
	let content = json
		.get("choices")
		.and_then(|v| v.as_array())
		.and_then(|arr| arr.first())
		.and_then(|choice| choice.get("message"))
		.and_then(|msg| msg.get("content"))
		.and_then(|c| c.as_str())?;
	let content = content.trim();

	if content.is_empty() { None } else { Some(content.to_string()) }
}
