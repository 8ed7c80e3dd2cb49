pub mod access;
pub mod identity;
pub mod prompt;
pub mod routing;

use serde::{Deserialize, Serialize};

/// One retrieved chunk with the metadata needed for access filtering and citations.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RetrievedChunk {
	pub text: String,
	pub doc_id: String,
	pub section: String,
	pub domain_meta: String,
	pub clearance_min: i64,
	pub datapoint_id: String,
	pub distance: f32,
}
