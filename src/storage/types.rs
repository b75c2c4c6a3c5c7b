use crate::error::Result;
use crate::storage::utils::path::basename;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// A storage bucket as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    pub name: String,
    pub creation_date: String,
}

/// One object within a bucket.
///
/// - `name`: Object key as reported by the backend
/// - `size`: Content length in bytes
/// - `last_modified`: Timestamp string, passed through untouched
/// - `etag`: Backend provided entity tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageObject {
    pub name: String,
    pub size: u64,
    pub last_modified: String,
    pub etag: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BucketList {
    pub buckets: Vec<Bucket>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ObjectList {
    pub objects: Vec<StorageObject>,
}

/// File content handed to [`StorageClient::upload_file`](crate::storage::StorageClient::upload_file).
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content: Bytes,
    pub content_type: Option<String>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Read a local file fully into memory, naming the part after its basename.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read(path).await?;
        Ok(Self::new(basename(&path.to_string_lossy()), content))
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
