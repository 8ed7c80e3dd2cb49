use crate::{RetrievedChunk, identity::CallerIdentity};

/// Drops chunks above the caller's clearance, then narrows to the caller's own
/// domain when it contributed anything. Relevance order is preserved in both
/// passes.
pub fn filter_chunks(chunks: Vec<RetrievedChunk>, caller: &CallerIdentity) -> Vec<RetrievedChunk> {
	let clearance = i64::from(caller.clearance);
	let cleared =
		chunks.into_iter().filter(|chunk| chunk.clearance_min <= clearance).collect::<Vec<_>>();
	let domain = caller.domain.as_str();

	if cleared.iter().any(|chunk| chunk.domain_meta == domain) {
		cleared.into_iter().filter(|chunk| chunk.domain_meta == domain).collect()
	} else {
		cleared
	}
}
