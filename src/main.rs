use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use std::io;
use tracing::Level;

mod cli;
mod commands;
mod config;
mod s3_client;
mod store;

use cli::Cli;
use config::StorageConfig;
use s3_client::create_client;
use store::S3BucketStore;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if cli.buckets.is_empty() {
        return Ok(());
    }

    let config = StorageConfig::load_from_cli(&cli)?;
    let store = S3BucketStore::new(create_client(&config).await);

    commands::purge::purge_buckets(&cli.buckets, &store, &mut io::stdout().lock()).await
}
