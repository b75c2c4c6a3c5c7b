use crate::error::Result;
use crate::storage::StorageClient;
use crate::storage::constants::STDOUT_MARKER;
use crate::storage::utils::path::{basename, display_object_path};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Trait for downloading objects from storage.
pub trait Downloader {
    /// Download a single object to a local file, or to stdout for `-`.
    ///
    /// # Arguments
    /// * `bucket` - Bucket holding the object
    /// * `remote_path` - Object key
    /// * `local_path` - Destination file, defaults to the key's basename
    async fn download(
        &self,
        bucket: &str,
        remote_path: &str,
        local_path: Option<&str>,
    ) -> Result<()>;
}

/// Implementation of Downloader over the HTTP storage client.
pub struct HttpDownloader {
    client: StorageClient,
}

impl HttpDownloader {
    pub fn new(client: StorageClient) -> Self {
        Self { client }
    }
}

/// Resolve where a download lands when the caller gave no destination.
pub fn local_destination(remote_path: &str, local_path: Option<&str>) -> String {
    local_path
        .map(str::to_string)
        .unwrap_or_else(|| basename(remote_path))
}

impl Downloader for HttpDownloader {
    async fn download(
        &self,
        bucket: &str,
        remote_path: &str,
        local_path: Option<&str>,
    ) -> Result<()> {
        let data = self.client.download_file(bucket, remote_path).await?;
        let destination = local_destination(remote_path, local_path);

        if destination == STDOUT_MARKER {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(&data).await?;
            stdout.flush().await?;
            return Ok(());
        }

        let local_file_path = PathBuf::from(&destination);
        if let Some(parent) = local_file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&local_file_path, &data).await?;
        println!(
            "Downloaded: {} → {}",
            display_object_path(bucket, remote_path),
            Path::new(&destination).display()
        );
        Ok(())
    }
}
