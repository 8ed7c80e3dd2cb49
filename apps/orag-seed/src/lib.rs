pub mod corpus;
pub mod seeder;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use orag_index::store::IndexStore;

#[derive(Debug, Parser)]
#[command(
	version = orag_cli::VERSION,
	rename_all = "kebab",
	styles = orag_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = orag_config::load(&args.config)?;
	init_tracing(&config)?;
	let store = IndexStore::new(&config.index)?;
	let report = seeder::seed(&config, &store).await?;

	tracing::info!(
		collection = %store.collection,
		documents = report.documents,
		"Seeded document corpus."
	);
	Ok(())
}

fn init_tracing(config: &orag_config::Config) -> color_eyre::Result<()> {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt().with_env_filter(filter).init();
	Ok(())
}
