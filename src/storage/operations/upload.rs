use crate::error::{NotAFileSnafu, PathNotFoundSnafu, Result};
use crate::storage::utils::path::{basename, display_object_path};
use crate::storage::{StorageClient, UploadFile};
use snafu::ensure;
use std::path::Path;

/// Trait for uploading local files to storage.
pub trait Uploader {
    /// Upload a single local file.
    ///
    /// # Arguments
    /// * `bucket` - Destination bucket
    /// * `local_path` - Source file on the local filesystem
    /// * `remote_path` - Destination key, defaults to the local basename
    ///
    /// # Returns
    /// * `Result<String>` - The key the file was stored under
    async fn upload(
        &self,
        bucket: &str,
        local_path: &str,
        remote_path: Option<&str>,
    ) -> Result<String>;
}

/// Implementation of Uploader over the HTTP storage client.
pub struct HttpUploader {
    client: StorageClient,
}

impl HttpUploader {
    pub fn new(client: StorageClient) -> Self {
        Self { client }
    }
}

impl Uploader for HttpUploader {
    async fn upload(
        &self,
        bucket: &str,
        local_path: &str,
        remote_path: Option<&str>,
    ) -> Result<String> {
        let path = Path::new(local_path);
        ensure!(
            path.exists(),
            PathNotFoundSnafu {
                path: path.to_path_buf()
            }
        );
        ensure!(
            path.is_file(),
            NotAFileSnafu {
                path: path.to_path_buf()
            }
        );

        let remote_path = remote_path
            .map(str::to_string)
            .unwrap_or_else(|| basename(local_path));
        let file = UploadFile::from_path(path).await?;
        let size = file.len();

        self.client.upload_file(bucket, &file, &remote_path).await?;
        println!(
            "Upload: {local_path} → {} ({size} bytes)",
            display_object_path(bucket, &remote_path)
        );
        Ok(remote_path)
    }
}
