use serde::{Deserialize, Serialize};
use serde_json::Value;

use orag_config::{RouteParams, Routing};

use crate::identity::Domain;

pub const FALLBACK_RATIONALE: &str = "Fallback deterministic routing.";
pub const PLANNER_RATIONALE: &str = "Planner routed using query semantics.";

/// Domains a query can be routed to. A superset of the caller domains because
/// legal documents exist even though no caller belongs to legal.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteDomain {
	Finance,
	Hr,
	Legal,
	General,
	Engineering,
}

impl RouteDomain {
	pub const ALL: [Self; 5] =
		[Self::Finance, Self::Hr, Self::Legal, Self::General, Self::Engineering];

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Finance => "finance",
			Self::Hr => "hr",
			Self::Legal => "legal",
			Self::General => "general",
			Self::Engineering => "engineering",
		}
	}

	pub fn parse(value: &str) -> Option<Self> {
		match value.to_lowercase().as_str() {
			"finance" => Some(Self::Finance),
			"hr" => Some(Self::Hr),
			"legal" => Some(Self::Legal),
			"general" => Some(Self::General),
			"engineering" => Some(Self::Engineering),
			_ => None,
		}
	}

	pub fn params<'a>(&self, routing: &'a Routing) -> &'a RouteParams {
		match self {
			Self::Finance => &routing.finance,
			Self::Hr => &routing.hr,
			Self::Legal => &routing.legal,
			Self::General => &routing.general,
			Self::Engineering => &routing.engineering,
		}
	}
}

impl From<Domain> for RouteDomain {
	fn from(domain: Domain) -> Self {
		match domain {
			Domain::Finance => Self::Finance,
			Domain::Hr => Self::Hr,
			Domain::Engineering => Self::Engineering,
			Domain::General => Self::General,
		}
	}
}

/// The routing decision returned to the caller alongside the answer.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Route {
	pub domain: RouteDomain,
	pub model_id: String,
	pub temperature: f32,
	pub max_output_tokens: u32,
	pub rationale: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlanError {
	NotAnObject,
	InvalidField { field: &'static str },
}

/// Keyword routing used when no usable planner output is available.
pub fn classify_query(query: &str) -> RouteDomain {
	let query = query.to_lowercase();
	let contains_any = |keywords: &[&str]| keywords.iter().any(|keyword| query.contains(keyword));

	if contains_any(&["invoice", "budget", "expense", "reimbursement", "p&l", "financial"]) {
		RouteDomain::Finance
	} else if contains_any(&["benefits", "leave", "vacation", "hiring", "offer", "onboarding", "i-9"])
	{
		RouteDomain::Hr
	} else if contains_any(&["contract", "nda", "compliance", "policy exception", "regulation", "gdpr"])
	{
		RouteDomain::Legal
	} else if contains_any(&["api", "deploy", "kubernetes", "service", "error", "stacktrace"]) {
		RouteDomain::Engineering
	} else {
		RouteDomain::General
	}
}

/// Deterministic route used when the planner fails. A recognized hint wins
/// outright; otherwise the query keywords decide.
pub fn fallback_route(query: &str, domain_hint: Option<&str>, routing: &Routing) -> Route {
	let hint = match domain_hint {
		Some(hint) if !hint.is_empty() => hint.to_lowercase(),
		_ => "general".to_string(),
	};
	let domain = RouteDomain::parse(&hint).unwrap_or_else(|| classify_query(query));
	let params = domain.params(routing);

	Route {
		domain,
		model_id: params.model_id.clone(),
		temperature: params.temperature,
		max_output_tokens: params.max_output_tokens,
		rationale: FALLBACK_RATIONALE.to_string(),
	}
}

/// Validates raw planner output against the expected shape. Missing fields fall
/// back to the registry entry for the resolved domain; fields of the wrong type
/// reject the whole plan.
pub fn route_from_plan(
	plan: &Value,
	domain_hint: Option<&str>,
	routing: &Routing,
) -> Result<Route, PlanError> {
	let raw = plan.as_object().ok_or(PlanError::NotAnObject)?;
	let planned_domain = match raw.get("domain") {
		None | Some(Value::Null) => None,
		Some(Value::String(domain)) if domain.is_empty() => None,
		Some(Value::String(domain)) => Some(domain.as_str()),
		Some(_) => return Err(PlanError::InvalidField { field: "domain" }),
	};
	let hint = match (planned_domain, domain_hint) {
		(Some(domain), _) => domain.to_lowercase(),
		(None, Some(hint)) if !hint.is_empty() => hint.to_lowercase(),
		_ => "general".to_string(),
	};
	// Unknown domains degrade to general here instead of re-running the keyword
	// classifier; only a planner failure reaches `fallback_route`.
	let domain = RouteDomain::parse(&hint).unwrap_or(RouteDomain::General);
	let params = domain.params(routing);
	let model_id = match raw.get("model_id") {
		None => params.model_id.clone(),
		Some(Value::String(model_id)) => model_id.clone(),
		Some(_) => return Err(PlanError::InvalidField { field: "model_id" }),
	};
	let temperature = match raw.get("temperature") {
		None => params.temperature,
		Some(value) => coerce_f32(value).ok_or(PlanError::InvalidField { field: "temperature" })?,
	};
	let max_output_tokens = match raw.get("max_output_tokens") {
		None => params.max_output_tokens,
		Some(value) =>
			coerce_u32(value).ok_or(PlanError::InvalidField { field: "max_output_tokens" })?,
	};
	let rationale = match raw.get("rationale") {
		None => PLANNER_RATIONALE.to_string(),
		Some(Value::String(rationale)) => rationale.clone(),
		Some(_) => return Err(PlanError::InvalidField { field: "rationale" }),
	};

	Ok(Route { domain, model_id, temperature, max_output_tokens, rationale })
}

fn coerce_f32(value: &Value) -> Option<f32> {
	match value {
		Value::Number(number) => number.as_f64().map(|number| number as f32),
		Value::String(text) => text.trim().parse::<f32>().ok(),
		_ => None,
	}
}

fn coerce_u32(value: &Value) -> Option<u32> {
	match value {
		Value::Number(number) => {
			if let Some(number) = number.as_u64() {
				u32::try_from(number).ok()
			} else {
				// Planners occasionally emit token counts as floats; truncate them.
				number
					.as_f64()
					.filter(|number| number.is_finite() && *number >= 0.0)
					.map(|number| number as u32)
			}
		},
		Value::String(text) => text.trim().parse::<u32>().ok(),
		_ => None,
	}
}
