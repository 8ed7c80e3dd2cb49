use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = orag_api::Args::parse();
	orag_api::run(args).await
}
