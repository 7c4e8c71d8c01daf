use anyhow::{bail, Result};
use async_trait::async_trait;
use aws_sdk_s3::operation::list_object_versions::ListObjectVersionsOutput;
use aws_sdk_s3::types::{Delete, ObjectIdentifier};
use aws_sdk_s3::Client;
use tracing::debug;

/// Upper bound on keys accepted by a single `DeleteObjects` request.
pub const MAX_DELETE_BATCH: usize = 1000;

/// Remote bucket operations the purge driver relies on.
#[async_trait]
pub trait BucketStore: Send + Sync {
    /// Removes every object version and delete marker in `bucket`.
    ///
    /// Returns the number of entries removed.
    async fn delete_object_versions(&self, bucket: &str) -> Result<usize>;

    /// Deletes the bucket itself. The bucket must already be empty.
    async fn delete_bucket(&self, bucket: &str) -> Result<()>;
}

pub struct S3BucketStore {
    client: Client,
}

impl S3BucketStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn delete_batch(&self, bucket: &str, batch: &[ObjectIdentifier]) -> Result<()> {
        let delete = Delete::builder()
            .set_objects(Some(batch.to_vec()))
            .quiet(true)
            .build()?;

        let output = self
            .client
            .delete_objects()
            .bucket(bucket)
            .delete(delete)
            .send()
            .await?;

        if let Some(err) = output.errors().first() {
            bail!(
                "{} of {} entries could not be deleted, first failure: key {} version {}: {} ({})",
                output.errors().len(),
                batch.len(),
                err.key().unwrap_or("unknown"),
                err.version_id().unwrap_or("none"),
                err.message().unwrap_or("no message"),
                err.code().unwrap_or("no code"),
            );
        }

        Ok(())
    }
}

#[async_trait]
impl BucketStore for S3BucketStore {
    async fn delete_object_versions(&self, bucket: &str) -> Result<usize> {
        let mut key_marker: Option<String> = None;
        let mut version_id_marker: Option<String> = None;
        let mut deleted = 0;

        loop {
            let page = self
                .client
                .list_object_versions()
                .bucket(bucket)
                .set_key_marker(key_marker.take())
                .set_version_id_marker(version_id_marker.take())
                .send()
                .await?;

            let identifiers = version_identifiers(&page)?;
            for batch in identifiers.chunks(MAX_DELETE_BATCH) {
                self.delete_batch(bucket, batch).await?;
                deleted += batch.len();
                debug!(bucket, batch = batch.len(), deleted, "deleted object versions");
            }

            if !page.is_truncated().unwrap_or(false) {
                break;
            }
            key_marker = page.next_key_marker().map(str::to_string);
            version_id_marker = page.next_version_id_marker().map(str::to_string);
            if key_marker.is_none() && version_id_marker.is_none() {
                bail!("listing of {bucket} is truncated but carries no continuation marker");
            }
        }

        Ok(deleted)
    }

    async fn delete_bucket(&self, bucket: &str) -> Result<()> {
        self.client.delete_bucket().bucket(bucket).send().await?;
        Ok(())
    }
}

/// Turns the versions and delete markers of one listing page into delete
/// identifiers. Entries without a key are skipped.
pub fn version_identifiers(page: &ListObjectVersionsOutput) -> Result<Vec<ObjectIdentifier>> {
    let versions = page
        .versions()
        .iter()
        .map(|v| (v.key(), v.version_id()));
    let markers = page
        .delete_markers()
        .iter()
        .map(|m| (m.key(), m.version_id()));

    let mut identifiers = Vec::new();
    for (key, version_id) in versions.chain(markers) {
        let Some(key) = key else { continue };
        let identifier = ObjectIdentifier::builder()
            .key(key)
            .set_version_id(version_id.map(str::to_string))
            .build()?;
        identifiers.push(identifier);
    }
    Ok(identifiers)
}
