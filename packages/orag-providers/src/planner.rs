use std::time::Duration;

use color_eyre::{Result, eyre};
use reqwest::Client;
use serde_json::Value;

/// Asks the routing planner for a JSON plan. One attempt only; any failure here
/// is absorbed by the caller's deterministic fallback route.
pub async fn plan(cfg: &orag_config::PlannerProviderConfig, messages: &[Value]) -> Result<Value> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let body = serde_json::json!({
		"model": cfg.model,
		"temperature": cfg.temperature,
		"response_format": { "type": "json_object" },
		"messages": messages,
	});
	let res = client
		.post(url)
		.headers(crate::auth_headers(&cfg.api_key, &cfg.default_headers)?)
		.json(&body)
		.send()
		.await?;
	let json: Value = res.error_for_status()?.json().await?;

	parse_plan_json(json)
}

fn parse_plan_json(json: Value) -> Result<Value> {
	let content = json
		.get("choices")
		.and_then(|v| v.as_array())
		.and_then(|arr| arr.first())
		.and_then(|choice| choice.get("message"))
		.and_then(|msg| msg.get("content"))
		.and_then(|c| c.as_str())
		.ok_or_else(|| eyre::eyre!("Planner response is missing JSON content."))?;
	let parsed: Value = serde_json::from_str(content)
		.map_err(|_| eyre::eyre!("Planner content is not valid JSON."))?;

	Ok(parsed)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_choice_content_json() {
		let json = serde_json::json!({
			"choices": [
				{ "message": { "content": "{\"domain\": \"finance\"}" } }
			]
		});
		let parsed = parse_plan_json(json).expect("parse failed");
		assert_eq!(parsed.get("domain").and_then(|v| v.as_str()), Some("finance"));
	}

	#[test]
	fn rejects_prose_content() {
		let json = serde_json::json!({
			"choices": [
				{ "message": { "content": "Routing to finance." } }
			]
		});
		assert!(parse_plan_json(json).is_err());
	}

	#[test]
	fn rejects_empty_choices() {
		let json = serde_json::json!({ "choices": [] });
		assert!(parse_plan_json(json).is_err());
	}
}
