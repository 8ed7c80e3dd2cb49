use serde_json::json;

use orag_config::Routing;
use orag_domain::{
	RetrievedChunk,
	access::filter_chunks,
	identity::{self, CallerIdentity, Domain},
	prompt::{self, EMPTY_CONTEXT_SENTINEL},
	routing::{self, PlanError, RouteDomain},
};

fn chunk(id: &str, domain_meta: &str, clearance_min: i64) -> RetrievedChunk {
	RetrievedChunk {
		text: format!("chunk {id}"),
		doc_id: format!("{id}.md"),
		section: "1.1".to_string(),
		domain_meta: domain_meta.to_string(),
		clearance_min,
		datapoint_id: id.to_string(),
		distance: 0.1,
	}
}

fn caller(domain: Domain, clearance: u8) -> CallerIdentity {
	CallerIdentity { email: "dev@example.com".to_string(), domain, clearance }
}

#[test]
fn missing_identity_headers_coerce_to_safe_defaults() {
	let resolved = identity::resolve_identity(None, None, None);

	assert_eq!(resolved.email, "dev@example.com");
	assert_eq!(resolved.domain, Domain::General);
	assert_eq!(resolved.clearance, 1);
}

#[test]
fn unknown_domain_header_coerces_to_general() {
	assert_eq!(identity::resolve_domain(Some("marketing")), Domain::General);
	assert_eq!(identity::resolve_domain(Some("FINANCE")), Domain::Finance);
	assert_eq!(identity::resolve_domain(Some("hr")), Domain::Hr);
	assert_eq!(identity::resolve_domain(None), Domain::General);
}

#[test]
fn clearance_header_outside_range_coerces_to_one() {
	assert_eq!(identity::resolve_clearance(Some("2")), 2);
	assert_eq!(identity::resolve_clearance(Some("3")), 3);
	assert_eq!(identity::resolve_clearance(Some("0")), 1);
	assert_eq!(identity::resolve_clearance(Some("4")), 1);
	assert_eq!(identity::resolve_clearance(Some("abc")), 1);
	assert_eq!(identity::resolve_clearance(None), 1);
}

#[test]
fn filter_never_returns_chunks_above_caller_clearance() {
	let chunks = vec![chunk("hr-1", "hr", 1), chunk("hr-2", "hr", 2), chunk("hr-3", "hr", 3)];
	let filtered = filter_chunks(chunks, &caller(Domain::Hr, 2));

	assert_eq!(filtered.len(), 2);
	assert!(filtered.iter().all(|chunk| chunk.clearance_min <= 2));
}

#[test]
fn filter_prefers_caller_domain_when_it_contributed() {
	let chunks =
		vec![chunk("fin-1", "finance", 1), chunk("hr-1", "hr", 1), chunk("fin-2", "finance", 1)];
	let filtered = filter_chunks(chunks, &caller(Domain::Hr, 1));

	assert_eq!(filtered.len(), 1);
	assert_eq!(filtered[0].datapoint_id, "hr-1");
}

#[test]
fn filter_falls_back_to_cleared_chunks_in_order() {
	let chunks = vec![
		chunk("fin-1", "finance", 1),
		chunk("eng-1", "engineering", 3),
		chunk("fin-2", "finance", 1),
	];
	let filtered = filter_chunks(chunks, &caller(Domain::Hr, 1));
	let ids = filtered.iter().map(|chunk| chunk.datapoint_id.as_str()).collect::<Vec<_>>();

	assert_eq!(ids, ["fin-1", "fin-2"]);
}

#[test]
fn filter_is_idempotent() {
	let chunks =
		vec![chunk("fin-1", "finance", 1), chunk("hr-1", "hr", 2), chunk("fin-2", "finance", 2)];
	let finance_caller = caller(Domain::Finance, 2);
	let once = filter_chunks(chunks, &finance_caller);
	let twice = filter_chunks(once.clone(), &finance_caller);

	assert_eq!(once, twice);
}

#[test]
fn keyword_classifier_covers_all_domains() {
	assert_eq!(routing::classify_query("How do I submit an invoice?"), RouteDomain::Finance);
	assert_eq!(routing::classify_query("What benefits do we get?"), RouteDomain::Hr);
	assert_eq!(routing::classify_query("Is this covered by GDPR?"), RouteDomain::Legal);
	assert_eq!(routing::classify_query("The kubernetes deploy failed"), RouteDomain::Engineering);
	assert_eq!(routing::classify_query("What time is lunch?"), RouteDomain::General);
}

#[test]
fn fallback_route_uses_recognized_hint_over_keywords() {
	let routing_cfg = Routing::default();
	let route = routing::fallback_route("what is our invoice process", Some("hr"), &routing_cfg);

	assert_eq!(route.domain, RouteDomain::Hr);
	assert_eq!(route.model_id, "gemini-2.5-flash");
	assert_eq!(route.rationale, routing::FALLBACK_RATIONALE);
}

#[test]
fn fallback_route_classifies_unknown_hints() {
	let routing_cfg = Routing::default();
	let route =
		routing::fallback_route("what is our invoice process", Some("unknownhint"), &routing_cfg);

	assert_eq!(route.domain, RouteDomain::Finance);
	assert_eq!(route.model_id, "gemini-2.5-pro");
	assert_eq!(route.max_output_tokens, 1_536);
}

#[test]
fn fallback_route_treats_empty_hint_as_general() {
	let routing_cfg = Routing::default();
	let route = routing::fallback_route("what is our invoice process", Some(""), &routing_cfg);

	assert_eq!(route.domain, RouteDomain::General);
}

#[test]
fn plan_with_all_fields_is_used_verbatim() {
	let routing_cfg = Routing::default();
	let plan = json!({
		"domain": "finance",
		"model_id": "gemini-2.5-pro",
		"temperature": 0.3,
		"max_output_tokens": 2048,
		"rationale": "Budget question.",
	});
	let route = routing::route_from_plan(&plan, None, &routing_cfg)
		.expect("Expected a valid plan to produce a route.");

	assert_eq!(route.domain, RouteDomain::Finance);
	assert_eq!(route.model_id, "gemini-2.5-pro");
	assert!((route.temperature - 0.3).abs() < f32::EPSILON);
	assert_eq!(route.max_output_tokens, 2_048);
	assert_eq!(route.rationale, "Budget question.");
}

#[test]
fn plan_missing_fields_default_from_registry() {
	let routing_cfg = Routing::default();
	let plan = json!({ "domain": "legal" });
	let route = routing::route_from_plan(&plan, None, &routing_cfg)
		.expect("Expected a sparse plan to produce a route.");

	assert_eq!(route.domain, RouteDomain::Legal);
	assert_eq!(route.model_id, "gemini-2.5-pro");
	assert_eq!(route.max_output_tokens, 1_536);
	assert_eq!(route.rationale, routing::PLANNER_RATIONALE);
}

#[test]
fn plan_with_unknown_domain_degrades_to_general() {
	let routing_cfg = Routing::default();
	let plan = json!({ "domain": "sales" });
	let route = routing::route_from_plan(&plan, Some("finance"), &routing_cfg)
		.expect("Expected an unknown planned domain to degrade.");

	assert_eq!(route.domain, RouteDomain::General);
	assert_eq!(route.model_id, "gemini-2.5-flash");
}

#[test]
fn plan_null_domain_falls_back_to_hint() {
	let routing_cfg = Routing::default();
	let plan = json!({ "domain": null });
	let route = routing::route_from_plan(&plan, Some("engineering"), &routing_cfg)
		.expect("Expected the hint to fill a null domain.");

	assert_eq!(route.domain, RouteDomain::Engineering);
}

#[test]
fn plan_with_wrong_field_types_is_rejected() {
	let routing_cfg = Routing::default();
	let err = routing::route_from_plan(&json!({ "model_id": null }), None, &routing_cfg)
		.expect_err("Expected a null model_id to be rejected.");

	assert_eq!(err, PlanError::InvalidField { field: "model_id" });

	let err = routing::route_from_plan(&json!({ "temperature": [] }), None, &routing_cfg)
		.expect_err("Expected a non-numeric temperature to be rejected.");

	assert_eq!(err, PlanError::InvalidField { field: "temperature" });

	let err = routing::route_from_plan(&json!([1, 2]), None, &routing_cfg)
		.expect_err("Expected a non-object plan to be rejected.");

	assert_eq!(err, PlanError::NotAnObject);
}

#[test]
fn plan_numeric_strings_are_coerced() {
	let routing_cfg = Routing::default();
	let plan = json!({ "temperature": "0.4", "max_output_tokens": 512.9 });
	let route = routing::route_from_plan(&plan, Some("hr"), &routing_cfg)
		.expect("Expected numeric coercions to succeed.");

	assert_eq!(route.domain, RouteDomain::Hr);
	assert!((route.temperature - 0.4).abs() < f32::EPSILON);
	assert_eq!(route.max_output_tokens, 512);
}

#[test]
fn plan_keeps_empty_strings_verbatim() {
	let routing_cfg = Routing::default();
	let plan = json!({ "model_id": "", "rationale": "" });
	let route = routing::route_from_plan(&plan, Some("finance"), &routing_cfg)
		.expect("Expected empty strings to be kept.");

	assert_eq!(route.model_id, "");
	assert_eq!(route.rationale, "");
}

#[test]
fn prompt_uses_sentinel_when_no_chunks_survive() {
	let prompt = prompt::build_prompt("anything", &[], Domain::General);

	assert!(prompt.contains(EMPTY_CONTEXT_SENTINEL));
	assert!(prompt.contains("You are the general domain assistant"));
}

#[test]
fn prompt_numbers_at_most_six_chunks() {
	let chunks =
		(0..8).map(|index| chunk(&format!("fin-{index}"), "finance", 1)).collect::<Vec<_>>();
	let prompt = prompt::build_prompt("what is the travel policy", &chunks, Domain::Finance);

	assert!(prompt.contains("[6] "));
	assert!(!prompt.contains("[7] "));
	assert!(prompt.contains("User question: what is the travel policy"));
}

#[test]
fn prompt_clips_long_chunks() {
	let mut long_chunk = chunk("fin-1", "finance", 1);

	long_chunk.text = "a".repeat(2_000);

	let prompt = prompt::build_prompt("q", &[long_chunk], Domain::Finance);

	assert!(prompt.contains(&format!("[1] {} …", "a".repeat(1_500))));
	assert!(!prompt.contains(&"a".repeat(1_501)));
}
