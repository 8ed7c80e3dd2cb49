use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = orag_seed::Args::parse();
	orag_seed::run(args).await
}
