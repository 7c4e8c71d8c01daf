use crate::store::BucketStore;
use anyhow::{Context, Result};
use std::io::Write;
use tracing::{debug, info};

/// Deletes each bucket in order, object versions first, then the bucket.
///
/// The bucket name is written to `out` before anything is deleted, so the
/// last line written names the bucket in progress. The first failure is
/// returned immediately and the remaining buckets are left untouched.
pub async fn purge_buckets<S, W>(buckets: &[String], store: &S, out: &mut W) -> Result<()>
where
    S: BucketStore + ?Sized,
    W: Write,
{
    for bucket in buckets {
        writeln!(out, "{}", bucket)?;
        out.flush()?;

        let versions = store
            .delete_object_versions(bucket)
            .await
            .with_context(|| format!("deleting object versions in bucket {}", bucket))?;
        debug!(bucket = bucket.as_str(), versions, "bucket emptied");

        store
            .delete_bucket(bucket)
            .await
            .with_context(|| format!("deleting bucket {}", bucket))?;
        info!(bucket = bucket.as_str(), versions, "bucket deleted");
    }

    Ok(())
}
