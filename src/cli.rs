use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "s3-bucket-purge")]
#[command(about = "Delete S3 buckets together with every object version they hold")]
#[command(version = "1.0")]
pub struct Cli {
    /// Buckets to delete, processed in the order given
    #[arg(value_name = "BUCKET")]
    pub buckets: Vec<String>,

    /// Enable verbose output on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Storage region (overrides env STORAGE_REGION)
    #[arg(long)]
    pub region: Option<String>,

    /// Storage access key (overrides env STORAGE_ACCESS_KEY)
    #[arg(long)]
    pub access_key: Option<String>,

    /// Storage secret key (overrides env STORAGE_SECRET_KEY)
    #[arg(long)]
    pub secret_key: Option<String>,

    /// Storage endpoint URL (overrides env STORAGE_URL)
    #[arg(long)]
    pub endpoint: Option<String>,
}
