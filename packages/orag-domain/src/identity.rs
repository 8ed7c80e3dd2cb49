use serde::{Deserialize, Serialize};

pub const DEFAULT_EMAIL: &str = "dev@example.com";

/// Domains a caller can belong to. Documents may additionally be tagged `legal`,
/// but no caller identity resolves to it.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
	Finance,
	Hr,
	Engineering,
	General,
}

impl Domain {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Finance => "finance",
			Self::Hr => "hr",
			Self::Engineering => "engineering",
			Self::General => "general",
		}
	}

	pub fn parse(value: &str) -> Option<Self> {
		match value {
			"finance" => Some(Self::Finance),
			"hr" => Some(Self::Hr),
			"engineering" => Some(Self::Engineering),
			"general" => Some(Self::General),
			_ => None,
		}
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CallerIdentity {
	pub email: String,
	pub domain: Domain,
	pub clearance: u8,
}

/// Builds a caller identity from raw header values, coercing anything missing or
/// invalid to the safe defaults rather than rejecting the request.
pub fn resolve_identity(
	email: Option<&str>,
	domain: Option<&str>,
	clearance: Option<&str>,
) -> CallerIdentity {
	CallerIdentity {
		email: email.unwrap_or(DEFAULT_EMAIL).to_string(),
		domain: resolve_domain(domain),
		clearance: resolve_clearance(clearance),
	}
}

pub fn resolve_domain(value: Option<&str>) -> Domain {
	let value = value.unwrap_or("general").to_lowercase();

	Domain::parse(&value).unwrap_or(Domain::General)
}

pub fn resolve_clearance(value: Option<&str>) -> u8 {
	let Some(value) = value else {
		return 1;
	};

	match value.trim().parse::<u8>() {
		Ok(clearance) if (1..=3).contains(&clearance) => clearance,
		_ => 1,
	}
}
