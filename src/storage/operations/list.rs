use crate::error::Result;
use crate::storage::utils::size::format_size;
use crate::storage::{Bucket, StorageClient, StorageObject};
use std::fmt;

/// Trait for listing buckets and the objects inside them.
pub trait Lister {
    /// Print every bucket known to the gateway.
    async fn list_buckets(&self, json: bool) -> Result<Vec<Bucket>>;

    /// Print the objects of a bucket whose key starts with `prefix`.
    ///
    /// # Arguments
    /// * `bucket` - Bucket to list
    /// * `prefix` - Key prefix filter, empty for everything
    /// * `long` - Whether to show size, modification time and etag
    /// * `json` - Print a single JSON array instead of lines
    async fn list_objects(
        &self,
        bucket: &str,
        prefix: &str,
        long: bool,
        json: bool,
    ) -> Result<Vec<StorageObject>>;
}

/// Implementation of Lister over the HTTP storage client.
pub struct HttpLister {
    client: StorageClient,
}

impl HttpLister {
    pub fn new(client: StorageClient) -> Self {
        Self { client }
    }
}

impl Lister for HttpLister {
    async fn list_buckets(&self, json: bool) -> Result<Vec<Bucket>> {
        let buckets = self.client.list_buckets().await?;
        if json {
            println!("{}", serde_json::to_string(&buckets)?);
        } else {
            for bucket in &buckets {
                println!("{:<40} {}", bucket.name, bucket.creation_date);
            }
        }
        Ok(buckets)
    }

    async fn list_objects(
        &self,
        bucket: &str,
        prefix: &str,
        long: bool,
        json: bool,
    ) -> Result<Vec<StorageObject>> {
        let objects = self.client.list_files(bucket, prefix).await?;
        if json {
            println!("{}", serde_json::to_string(&objects)?);
        } else if long {
            for object in &objects {
                println!("{}", ObjectLine(object));
            }
        } else {
            for object in &objects {
                println!("{}", object.name);
            }
        }
        Ok(objects)
    }
}

/// Detailed listing line for a single object.
struct ObjectLine<'a>(&'a StorageObject);

impl fmt::Display for ObjectLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let object = self.0;
        let size = format_size(object.size);
        write!(
            f,
            "{size:>10} {} {} {}",
            object.last_modified, object.etag, object.name
        )
    }
}
