use anyhow::{bail, Result};
use std::{env, fmt};

#[derive(Clone, PartialEq, Eq)]
pub struct StaticCredentials {
    pub access_key: String,
    pub secret_key: String,
}

impl fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"** redacted **")
            .finish()
    }
}

/// Connection settings for the storage service.
///
/// Every field is optional: anything left unset is resolved by the SDK's
/// default provider chains (environment, shared config files, instance role).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageConfig {
    pub region: Option<String>,
    pub credentials: Option<StaticCredentials>,
    pub endpoint: Option<String>,
}

impl StorageConfig {
    pub fn load_from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        Self::resolve(cli, |name| env::var(name).ok())
    }

    /// Resolves each setting from the CLI first, then from `lookup`.
    pub fn resolve<F>(cli: &crate::cli::Cli, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_value = |cli_value: &Option<String>, env_var: &str| {
            cli_value
                .clone()
                .or_else(|| lookup(env_var))
                .filter(|value| !value.is_empty())
        };

        let region = get_value(&cli.region, "STORAGE_REGION");
        let access_key = get_value(&cli.access_key, "STORAGE_ACCESS_KEY");
        let secret_key = get_value(&cli.secret_key, "STORAGE_SECRET_KEY");
        let endpoint = get_value(&cli.endpoint, "STORAGE_URL");

        let credentials = match (access_key, secret_key) {
            (Some(access_key), Some(secret_key)) => Some(StaticCredentials {
                access_key,
                secret_key,
            }),
            (None, None) => None,
            _ => bail!(
                "Access key and secret key must be provided together via parameters or environment variables"
            ),
        };

        Ok(StorageConfig {
            region,
            credentials,
            endpoint,
        })
    }
}
