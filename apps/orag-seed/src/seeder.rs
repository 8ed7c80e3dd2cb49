use color_eyre::{Result, eyre};
use qdrant_client::{Payload, qdrant::PointStruct};
use serde_json::json;
use uuid::Uuid;

use crate::corpus::{CORPUS, SeedDoc};
use orag_config::Config;
use orag_index::{
	metadata::{DATAPOINT_ID_KEY, META_JSON_KEY, META_KEY},
	store::IndexStore,
};
use orag_providers::embedding::{self, EmbedTask};

#[derive(Clone, Debug)]
pub struct SeedReport {
	pub documents: usize,
}

/// Embeds the demo corpus and upserts it into the index collection.
pub async fn seed(cfg: &Config, store: &IndexStore) -> Result<SeedReport> {
	store.ensure_collection().await?;

	let texts = CORPUS.iter().map(|doc| doc.text.to_string()).collect::<Vec<_>>();
	// The corpus fits one embedding batch.
	let vectors = embedding::embed(&cfg.providers.embedding, &texts, EmbedTask::Document).await?;

	if vectors.len() != CORPUS.len() {
		return Err(eyre::eyre!(
			"Embedding provider returned {} vectors for {} documents.",
			vectors.len(),
			CORPUS.len()
		));
	}

	let points = CORPUS
		.iter()
		.zip(vectors)
		.map(|(doc, vector)| point_for(doc, vector))
		.collect::<Vec<_>>();

	store.upsert_points(points).await?;

	Ok(SeedReport { documents: CORPUS.len() })
}

/// Builds the point for one corpus document. Metadata is written twice, as a
/// nested payload struct and as a flat JSON string, so both decodings stay
/// exercised.
pub fn point_for(doc: &SeedDoc, vector: Vec<f32>) -> PointStruct {
	let meta = json!({
		"doc_id": doc.doc_id,
		"section": doc.section,
		"chunk": doc.text,
		"domain": doc.domain,
		"clearance_min": doc.clearance_min,
	});
	let meta_json = meta.to_string();
	let mut payload = Payload::new();

	payload.insert(DATAPOINT_ID_KEY, doc.id.to_string());
	payload.insert(META_KEY, meta);
	payload.insert(META_JSON_KEY, meta_json);

	PointStruct::new(point_id(doc.id), vector, payload)
}

/// Point ids derive from the document id, so reseeding overwrites in place.
pub fn point_id(doc_id: &str) -> String {
	Uuid::new_v5(&Uuid::NAMESPACE_OID, doc_id.as_bytes()).to_string()
}
