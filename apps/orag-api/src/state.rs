use std::sync::Arc;

use orag_index::store::IndexStore;
use orag_service::RagService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<RagService>,
}
impl AppState {
	pub fn new(config: orag_config::Config) -> color_eyre::Result<Self> {
		let store = IndexStore::new(&config.index)?;
		let service = RagService::new(config, store);

		Ok(Self { service: Arc::new(service) })
	}

	/// Wraps an already built service, used by tests to inject stub providers.
	pub fn with_service(service: RagService) -> Self {
		Self { service: Arc::new(service) }
	}
}
