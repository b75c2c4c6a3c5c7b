use clap::Parser;

use s3browse::cli;
use s3browse::error::Result;
use s3browse::storage::StorageClient;

use s3browse::cli::Args;
use s3browse::config::load_storage_config;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Err(e) = run_app(args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_app(args: Args) -> Result<()> {
    let config = load_storage_config()?;
    let client = StorageClient::new(config)?;
    cli::run(args, client).await?;
    Ok(())
}
