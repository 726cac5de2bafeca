use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = memo_api::Args::parse();

	memo_api::run(args).await
}
