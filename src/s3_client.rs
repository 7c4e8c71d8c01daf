use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::Client;
use tracing::debug;

use crate::config::StorageConfig;

pub async fn create_client(config: &StorageConfig) -> Client {
    debug!(
        region = config.region.as_deref().unwrap_or("<default chain>"),
        endpoint = config.endpoint.as_deref().unwrap_or("<default>"),
        static_credentials = config.credentials.is_some(),
        "creating S3 client"
    );

    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = &config.region {
        loader = loader.region(Region::new(region.clone()));
    }

    if let Some(creds) = &config.credentials {
        let credentials = Credentials::new(
            creds.access_key.clone(),
            creds.secret_key.clone(),
            None,
            None,
            "custom",
        );
        loader = loader.credentials_provider(credentials);
    }

    if let Some(endpoint) = &config.endpoint {
        loader = loader.endpoint_url(endpoint);
    }

    let sdk_config: SdkConfig = loader.load().await;

    // Custom endpoints are addressed path-style.
    let client_config = aws_sdk_s3::config::Builder::from(&sdk_config)
        .force_path_style(config.endpoint.is_some())
        .build();

    Client::from_conf(client_config)
}
