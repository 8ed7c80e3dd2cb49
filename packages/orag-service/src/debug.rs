use serde::{Deserialize, Serialize};

use orag_domain::{RetrievedChunk, identity::CallerIdentity};
use orag_index::metadata::Neighbor;

use crate::{RagService, Result};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawNeighborsResponse {
	pub neighbors: Vec<Neighbor>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RetrievalResponse {
	pub count: usize,
	pub items: Vec<RetrievedChunk>,
}

impl RagService {
	/// Raw nearest neighbors for a query with decoded metadata and no access
	/// filtering. Debug surface for inspecting what the index actually holds.
	pub async fn inspect_neighbors(&self, query: &str, k: u64) -> Result<RawNeighborsResponse> {
		let neighbors = self.query_neighbors(query, k).await?;

		Ok(RawNeighborsResponse { neighbors })
	}

	/// The filtered retrieval a caller with the given identity would see.
	pub async fn debug_retrieval(
		&self,
		query: &str,
		caller: &CallerIdentity,
	) -> Result<RetrievalResponse> {
		let items = self.search(query, caller).await?;

		Ok(RetrievalResponse { count: items.len(), items })
	}
}
