use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use orag_config::Routing;
use orag_domain::{
	identity::{CallerIdentity, Domain},
	prompt::{MAX_CONTEXT_CHUNKS, build_prompt},
	routing::{Route, RouteDomain, fallback_route, route_from_plan},
};

use crate::{RagService, Result};

pub const EMPTY_QUERY_ANSWER: &str = "Please provide a question.";
pub const GENERATION_FALLBACK_ANSWER: &str = "I couldn't generate a response.";
pub const PLANNER_SYSTEM_PROMPT: &str = "You are a tiny routing planner.
Decide which domain and target model should answer the user's question.

Rules:
- Output ONLY JSON (no prose).
- If the domain_hint is present, prefer it unless the question clearly belongs elsewhere.
- Map to these domains: finance, hr, legal, engineering, general.
- Choose the least expensive model that can answer safely; escalate to 'gemini-2.5-pro' only for finance/legal/complex analytical queries.
- Keep rationale short (<= 2 sentences).
";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QueryRequest {
	pub query: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QueryResponse {
	pub answer: String,
	pub citations: Vec<Citation>,
	pub route: Option<Route>,
	pub domain: Domain,
	pub clearance: u8,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Citation {
	pub index: usize,
	pub doc_id: String,
	pub section: String,
	pub distance: f32,
}

impl RagService {
	/// Runs the full pipeline for one question: retrieve, route, prompt,
	/// generate, cite. An empty query short-circuits before any provider call.
	pub async fn answer(&self, caller: &CallerIdentity, query: &str) -> Result<QueryResponse> {
		let query = query.trim();

		if query.is_empty() {
			return Ok(QueryResponse {
				answer: EMPTY_QUERY_ANSWER.to_string(),
				citations: Vec::new(),
				route: None,
				domain: caller.domain,
				clearance: caller.clearance,
			});
		}

		let trace_id = uuid::Uuid::new_v4();
		let chunks = self.search(query, caller).await?;
		let route = self.pick_model(caller.domain.as_str(), query).await;
		let prompt = build_prompt(query, &chunks, caller.domain);
		let answer = self
			.providers
			.generation
			.generate(&self.cfg.providers.generation, &route, &prompt)
			.await?
			.unwrap_or_else(|| GENERATION_FALLBACK_ANSWER.to_string());
		let citations = chunks
			.iter()
			.take(MAX_CONTEXT_CHUNKS)
			.enumerate()
			.map(|(i, chunk)| Citation {
				index: i + 1,
				doc_id: chunk.doc_id.clone(),
				section: chunk.section.clone(),
				distance: chunk.distance,
			})
			.collect();

		tracing::info!(
			trace_id = %trace_id,
			domain = caller.domain.as_str(),
			route_domain = route.domain.as_str(),
			model_id = route.model_id.as_str(),
			chunks = chunks.len(),
			"Answered query."
		);

		Ok(QueryResponse {
			answer,
			citations,
			route: Some(route),
			domain: caller.domain,
			clearance: caller.clearance,
		})
	}

	/// Decides which model answers the query. The planner is advisory; a failed
	/// call or an unusable plan degrades to the deterministic fallback, so this
	/// always resolves to a route.
	pub async fn pick_model(&self, domain_hint: &str, query: &str) -> Route {
		let routing = &self.cfg.routing;
		let messages = planner_messages(query, domain_hint, routing);
		let plan =
			match self.providers.planner.plan(&self.cfg.providers.planner, &messages).await {
				Ok(plan) => plan,
				Err(err) => {
					tracing::warn!(error = %err, "Planner call failed.");
					return fallback_route(query, Some(domain_hint), routing);
				},
			};

		match route_from_plan(&plan, Some(domain_hint), routing) {
			Ok(route) => route,
			Err(err) => {
				tracing::warn!(error = ?err, "Planner returned an unusable plan.");
				fallback_route(query, Some(domain_hint), routing)
			},
		}
	}
}

fn planner_messages(query: &str, domain_hint: &str, routing: &Routing) -> Vec<Value> {
	let domains = RouteDomain::ALL.iter().map(RouteDomain::as_str).collect::<Vec<_>>();
	let plan_input = json!({
		"query": query.trim(),
		"domain_hint": domain_hint.to_lowercase(),
		"domains_available": domains,
		"registry_defaults": routing,
	});

	vec![
		json!({ "role": "system", "content": PLANNER_SYSTEM_PROMPT }),
		json!({ "role": "user", "content": plan_input.to_string() }),
	]
}
