use orag_domain::{RetrievedChunk, access, identity::CallerIdentity};
use orag_index::metadata::{Neighbor, chunk_from_neighbor};
use orag_providers::embedding::EmbedTask;

use crate::{Error, RagService, Result};

impl RagService {
	/// Retrieves the chunks the caller is allowed to see for a query, best match
	/// first. The clearance and domain filter runs here, after the index query,
	/// so the index itself never needs to know about callers.
	pub async fn search(
		&self,
		query: &str,
		caller: &CallerIdentity,
	) -> Result<Vec<RetrievedChunk>> {
		let k = u64::from(self.cfg.retrieval.neighbor_k);
		let neighbors = self.query_neighbors(query, k).await?;
		let chunks = neighbors.iter().map(chunk_from_neighbor).collect();

		Ok(access::filter_chunks(chunks, caller))
	}

	/// Embeds the query and returns the raw nearest neighbors with decoded
	/// metadata, unfiltered.
	pub(crate) async fn query_neighbors(&self, query: &str, k: u64) -> Result<Vec<Neighbor>> {
		let vector = self.embed_query(query).await?;
		let points = self.store.find_neighbors(vector, k).await?;

		Ok(points.iter().map(Neighbor::from_point).collect())
	}

	async fn embed_query(&self, query: &str) -> Result<Vec<f32>> {
		let vectors = self
			.providers
			.embedding
			.embed(&self.cfg.providers.embedding, &[query.to_string()], EmbedTask::Query)
			.await?;
		let vector = vectors.into_iter().next().ok_or_else(|| Error::Provider {
			message: "Embedding provider returned no vectors.".to_string(),
		})?;

		if vector.len() != self.cfg.index.vector_dim as usize {
			return Err(Error::Provider {
				message: "Embedding vector dimension mismatch.".to_string(),
			});
		}

		Ok(vector)
	}
}
