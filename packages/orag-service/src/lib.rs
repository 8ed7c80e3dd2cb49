pub mod debug;
pub mod query;
pub mod retrieve;

mod error;

use std::{future::Future, pin::Pin, sync::Arc};

use serde_json::Value;

pub use debug::{RawNeighborsResponse, RetrievalResponse};
pub use error::{Error, Result};
use orag_config::{
	Config, EmbeddingProviderConfig, GenerationProviderConfig, PlannerProviderConfig,
};
use orag_domain::routing::Route;
use orag_index::store::IndexStore;
use orag_providers::{
	embedding::{self, EmbedTask},
	generation, planner,
};
pub use query::{Citation, QueryRequest, QueryResponse};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait EmbeddingProvider
where
	Self: Send + Sync,
{
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		texts: &'a [String],
		task: EmbedTask,
	) -> BoxFuture<'a, color_eyre::Result<Vec<Vec<f32>>>>;
}

pub trait GenerationProvider
where
	Self: Send + Sync,
{
	fn generate<'a>(
		&'a self,
		cfg: &'a GenerationProviderConfig,
		route: &'a Route,
		prompt: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Option<String>>>;
}

pub trait PlannerProvider
where
	Self: Send + Sync,
{
	fn plan<'a>(
		&'a self,
		cfg: &'a PlannerProviderConfig,
		messages: &'a [Value],
	) -> BoxFuture<'a, color_eyre::Result<Value>>;
}

#[derive(Clone)]
pub struct Providers {
	pub embedding: Arc<dyn EmbeddingProvider>,
	pub generation: Arc<dyn GenerationProvider>,
	pub planner: Arc<dyn PlannerProvider>,
}

pub struct RagService {
	pub cfg: Config,
	pub store: IndexStore,
	pub providers: Providers,
}

struct DefaultProviders;

impl EmbeddingProvider for DefaultProviders {
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		texts: &'a [String],
		task: EmbedTask,
	) -> BoxFuture<'a, color_eyre::Result<Vec<Vec<f32>>>> {
		Box::pin(embedding::embed(cfg, texts, task))
	}
}

impl GenerationProvider for DefaultProviders {
	fn generate<'a>(
		&'a self,
		cfg: &'a GenerationProviderConfig,
		route: &'a Route,
		prompt: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Option<String>>> {
		Box::pin(generation::generate(cfg, route, prompt))
	}
}

impl PlannerProvider for DefaultProviders {
	fn plan<'a>(
		&'a self,
		cfg: &'a PlannerProviderConfig,
		messages: &'a [Value],
	) -> BoxFuture<'a, color_eyre::Result<Value>> {
		Box::pin(planner::plan(cfg, messages))
	}
}

impl Providers {
	pub fn new(
		embedding: Arc<dyn EmbeddingProvider>,
		generation: Arc<dyn GenerationProvider>,
		planner: Arc<dyn PlannerProvider>,
	) -> Self {
		Self { embedding, generation, planner }
	}
}

impl Default for Providers {
	fn default() -> Self {
		let provider = Arc::new(DefaultProviders);
		Self { embedding: provider.clone(), generation: provider.clone(), planner: provider }
	}
}

impl RagService {
	pub fn new(cfg: Config, store: IndexStore) -> Self {
		Self { cfg, store, providers: Providers::default() }
	}

	pub fn with_providers(cfg: Config, store: IndexStore, providers: Providers) -> Self {
		Self { cfg, store, providers }
	}
}
