use crate::error::Result;
use crate::storage::utils::OutputFormat;
use crate::storage::{StorageClient, StorageObject};

/// Trait for fetching object metadata from storage.
pub trait Stater {
    /// Fetch metadata for a single object.
    ///
    /// # Arguments
    /// * `bucket` - Bucket holding the object
    /// * `path` - Object key to query
    ///
    /// # Returns
    /// * `Result<StorageObject>` - Metadata as reported by the gateway
    async fn stat(&self, bucket: &str, path: &str) -> Result<StorageObject>;
}

/// Implementation of `Stater` over the HTTP storage client.
#[derive(Clone)]
pub struct HttpStater {
    client: StorageClient,
}

impl HttpStater {
    pub fn new(client: StorageClient) -> Self {
        Self { client }
    }
}

impl Stater for HttpStater {
    async fn stat(&self, bucket: &str, path: &str) -> Result<StorageObject> {
        self.client.get_file_details(bucket, path).await
    }
}

/// Render metadata in the requested output format.
pub fn render(object: &StorageObject, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(object)?,
        OutputFormat::Raw => format!(
            "name={}\nsize={}\nlast_modified={}\netag={}",
            object.name, object.size, object.last_modified, object.etag
        ),
        OutputFormat::Human => format!(
            "Name:          {}\nSize:          {} bytes\nLast modified: {}\nETag:          {}",
            object.name, object.size, object.last_modified, object.etag
        ),
    };
    Ok(rendered)
}
