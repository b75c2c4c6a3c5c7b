// Delete operation trait and implementation
use crate::error::{PartialDeletionSnafu, Result};
use crate::storage::StorageClient;
use crate::storage::utils::path::display_object_path;
use futures::future::join_all;

/// Trait for deleting objects from storage.
pub trait Deleter {
    /// Delete one or more objects from a bucket.
    ///
    /// Requests are issued concurrently and finish in any order. Every
    /// failure is reported and collected before returning.
    async fn delete(&self, bucket: &str, paths: &[String]) -> Result<()>;
}

/// Implementation of Deleter over the HTTP storage client.
pub struct HttpDeleter {
    client: StorageClient,
}

impl HttpDeleter {
    pub fn new(client: StorageClient) -> Self {
        Self { client }
    }
}

impl Deleter for HttpDeleter {
    async fn delete(&self, bucket: &str, paths: &[String]) -> Result<()> {
        let results = join_all(
            paths
                .iter()
                .map(|path| async move { (path, self.client.delete_file(bucket, path).await) }),
        )
        .await;

        let mut failed_paths = Vec::new();
        for (path, result) in results {
            let display = display_object_path(bucket, path);
            match result {
                Ok(()) => println!("Deleted: {display}"),
                Err(e) => {
                    eprintln!("Failed to delete {display}: {e}");
                    failed_paths.push(path.clone());
                }
            }
        }

        if !failed_paths.is_empty() {
            return PartialDeletionSnafu { failed_paths }.fail();
        }

        Ok(())
    }
}
