use crate::{RetrievedChunk, identity::Domain};

pub const MAX_CONTEXT_CHUNKS: usize = 6;
pub const MAX_CHUNK_CHARS: usize = 1_500;
pub const EMPTY_CONTEXT_SENTINEL: &str = "(no domain-approved documents were retrieved)";

/// Assembles the grounded generation prompt. At most [`MAX_CONTEXT_CHUNKS`]
/// chunks are numbered into the context block, each clipped to
/// [`MAX_CHUNK_CHARS`] characters.
pub fn build_prompt(query: &str, chunks: &[RetrievedChunk], domain: Domain) -> String {
	let entries = chunks
		.iter()
		.take(MAX_CONTEXT_CHUNKS)
		.enumerate()
		.map(|(index, chunk)| format!("[{}] {}", index + 1, clip_chunk(&chunk.text)))
		.collect::<Vec<_>>();
	let context = if entries.is_empty() {
		EMPTY_CONTEXT_SENTINEL.to_string()
	} else {
		entries.join("\n\n")
	};

	format!(
		"You are the {} domain assistant for an internal org.\nUse ONLY the provided context when possible. If the answer isn't in the context, say you don't have that information.\nCite sources as [#] where # is the chunk index.\n\nContext:\n{}\n\nUser question: {}\n\nAnswer with clear, concise steps and include citations.",
		domain.as_str(),
		context,
		query,
	)
}

fn clip_chunk(text: &str) -> String {
	let text = text.trim();

	if text.chars().count() > MAX_CHUNK_CHARS {
		let clipped = text.chars().take(MAX_CHUNK_CHARS).collect::<String>();

		format!("{clipped} …")
	} else {
		text.to_string()
	}
}
