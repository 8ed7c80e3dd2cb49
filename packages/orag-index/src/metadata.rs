use std::collections::HashMap;

use qdrant_client::qdrant::{PointId, ScoredPoint, Value, point_id::PointIdOptions, value::Kind};
use serde::{Deserialize, Serialize};

use orag_domain::RetrievedChunk;

pub const DATAPOINT_ID_KEY: &str = "datapoint_id";
pub const META_KEY: &str = "meta";
pub const META_JSON_KEY: &str = "meta_json";

/// Document metadata recovered from a point payload. Every field is optional
/// because older seed runs wrote partial payloads.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct NeighborMeta {
	pub doc_id: Option<String>,
	pub section: Option<String>,
	pub chunk: Option<String>,
	pub domain: Option<String>,
	#[serde(default, deserialize_with = "lenient_clearance")]
	pub clearance_min: Option<i64>,
}

/// A scored point reduced to what the retrieval pipeline needs.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Neighbor {
	pub id: String,
	pub distance: f32,
	pub meta: Option<NeighborMeta>,
}
impl Neighbor {
	pub fn from_point(point: &ScoredPoint) -> Self {
		let id = payload_str(&point.payload, DATAPOINT_ID_KEY)
			.or_else(|| point.id.as_ref().and_then(point_id_to_string))
			.unwrap_or_default();

		Self { id, distance: point.score, meta: extract_meta(&point.payload) }
	}
}

type MetaStrategy = fn(&HashMap<String, Value>) -> Option<NeighborMeta>;

/// Payload decodings in preference order: the nested struct written by current
/// seeders first, then the flat JSON string kept for older points.
const STRATEGIES: [MetaStrategy; 2] = [meta_from_struct, meta_from_json_string];

pub fn extract_meta(payload: &HashMap<String, Value>) -> Option<NeighborMeta> {
	STRATEGIES.iter().find_map(|strategy| strategy(payload))
}

/// Flattens a neighbor into the chunk shape the access filter and prompt
/// builder work on. A point without chunk text gets a placeholder body and
/// clearance zero, so it stays visible to every caller.
pub fn chunk_from_neighbor(neighbor: &Neighbor) -> RetrievedChunk {
	let meta = neighbor.meta.clone().unwrap_or_default();
	let text = match meta.chunk {
		Some(chunk) if !chunk.is_empty() => chunk,
		_ => format!("(no-chunk) id={}", neighbor.id),
	};

	RetrievedChunk {
		text,
		doc_id: meta.doc_id.unwrap_or_default(),
		section: meta.section.unwrap_or_default(),
		domain_meta: meta.domain.unwrap_or_default(),
		clearance_min: meta.clearance_min.unwrap_or(0),
		datapoint_id: neighbor.id.clone(),
		distance: neighbor.distance,
	}
}

fn meta_from_struct(payload: &HashMap<String, Value>) -> Option<NeighborMeta> {
	let value = payload.get(META_KEY)?;
	let fields = match &value.kind {
		Some(Kind::StructValue(object)) => &object.fields,
		_ => return None,
	};

	Some(NeighborMeta {
		doc_id: payload_str(fields, "doc_id"),
		section: payload_str(fields, "section"),
		chunk: payload_str(fields, "chunk"),
		domain: payload_str(fields, "domain"),
		clearance_min: payload_i64(fields, "clearance_min"),
	})
}

fn meta_from_json_string(payload: &HashMap<String, Value>) -> Option<NeighborMeta> {
	let value = payload.get(META_JSON_KEY)?;
	let raw = match &value.kind {
		Some(Kind::StringValue(text)) => text,
		_ => return None,
	};

	serde_json::from_str(raw).ok()
}

fn payload_str(payload: &HashMap<String, Value>, key: &str) -> Option<String> {
	let value = payload.get(key)?;
	match &value.kind {
		Some(Kind::StringValue(text)) => Some(text.clone()),
		_ => None,
	}
}

// Clearance labels arrive as integers, whole doubles, or numeric strings
// depending on which client wrote the point. Anything else reads as missing.
fn payload_i64(payload: &HashMap<String, Value>, key: &str) -> Option<i64> {
	let value = payload.get(key)?;
	match &value.kind {
		Some(Kind::IntegerValue(value)) => Some(*value),
		Some(Kind::DoubleValue(value)) => {
			if value.fract() == 0.0 {
				Some(*value as i64)
			} else {
				None
			}
		},
		Some(Kind::StringValue(text)) => text.trim().parse::<i64>().ok(),
		_ => None,
	}
}

fn lenient_clearance<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
	D: serde::Deserializer<'de>,
{
	let value = Option::<serde_json::Value>::deserialize(deserializer)?;
	let clearance = value.and_then(|value| match value {
		serde_json::Value::Number(number) => number.as_i64().or_else(|| {
			number.as_f64().filter(|number| number.fract() == 0.0).map(|number| number as i64)
		}),
		serde_json::Value::String(text) => text.trim().parse::<i64>().ok(),
		_ => None,
	});

	Ok(clearance)
}

fn point_id_to_string(point_id: &PointId) -> Option<String> {
	match &point_id.point_id_options {
		Some(PointIdOptions::Uuid(id)) => Some(id.clone()),
		Some(PointIdOptions::Num(id)) => Some(id.to_string()),
		None => None,
	}
}
