use crate::error::{EndpointNotABaseSnafu, InvalidEndpointSnafu, Result, UnaddressableKeySnafu};
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use snafu::{ResultExt, ensure};
use url::Url;

pub mod constants;
pub mod operations;
pub mod types;
pub mod utils;

use self::constants::{
    API_VERSION_SEGMENTS, BUCKETS_SEGMENT, DEFAULT_BASE_PATH, DOWNLOAD_SEGMENT, OBJECTS_SEGMENT,
    UPLOAD_FIELD_NAME,
};
pub use self::types::{Bucket, StorageObject, UploadFile};
use self::types::{BucketList, ObjectList};

/// Where the storage gateway lives.
///
/// `endpoint` is the absolute origin (optionally with a path), `base_path`
/// is the gateway mount point appended to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub endpoint: String,
    pub base_path: String,
}

impl StorageConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            base_path: DEFAULT_BASE_PATH.to_string(),
        }
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }
}

fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

/// URL parsers collapse `.` and `..` segments (also as `%2E`), so a request
/// for such a key would land on a different resource. Refuse it up front.
fn ensure_addressable(bucket: &str, path: &str) -> Result<()> {
    ensure!(
        !is_dot_segment(bucket) && !path.split('/').any(is_dot_segment),
        UnaddressableKeySnafu {
            bucket: bucket.to_string(),
            path: path.to_string()
        }
    );
    Ok(())
}

/// Typed client for the object storage gateway.
///
/// Every method issues exactly one HTTP request. Nothing is cached, retried
/// or sequenced, so concurrent calls complete in whatever order the network
/// answers them. Clones share one connection pool.
#[derive(Debug, Clone)]
pub struct StorageClient {
    http: reqwest::Client,
    base: Url,
    config: StorageConfig,
}

impl StorageClient {
    pub fn new(config: StorageConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Self::with_http_client(config, http)
    }

    /// Build a client around an existing `reqwest::Client`.
    pub fn with_http_client(config: StorageConfig, http: reqwest::Client) -> Result<Self> {
        let base = Self::build_base_url(&config)?;
        log::debug!("storage client base={base}");
        Ok(Self { http, base, config })
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn build_base_url(config: &StorageConfig) -> Result<Url> {
        let mut url = Url::parse(&config.endpoint).context(InvalidEndpointSnafu {
            endpoint: config.endpoint.clone(),
        })?;
        ensure!(
            !url.cannot_be_a_base(),
            EndpointNotABaseSnafu {
                endpoint: config.endpoint.clone()
            }
        );
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(config.base_path.split('/').filter(|s| !s.is_empty()));
        }
        Ok(url)
    }

    /// Append already-split segments to the base, percent-encoding each one.
    fn url<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Url {
        let mut url = self.base.clone();
        // base was checked to be a base url when the client was built
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn objects_url(&self, bucket: &str) -> Result<Url> {
        ensure_addressable(bucket, "")?;
        Ok(self.url(
            API_VERSION_SEGMENTS
                .into_iter()
                .chain([BUCKETS_SEGMENT, bucket, OBJECTS_SEGMENT]),
        ))
    }

    /// `/{bucket}/{path}`; slashes inside `path` stay separators.
    fn object_url(&self, bucket: &str, path: &str) -> Result<Url> {
        ensure_addressable(bucket, path)?;
        Ok(self.url(std::iter::once(bucket).chain(path.split('/'))))
    }

    /// List every bucket the gateway knows about. Only the first page is returned.
    pub async fn list_buckets(&self) -> Result<Vec<Bucket>> {
        let url = self.url(API_VERSION_SEGMENTS.into_iter().chain([BUCKETS_SEGMENT]));
        log::debug!("list_buckets url={url}");

        let list: BucketList = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(list.buckets)
    }

    /// List objects of `bucket` whose key starts with `prefix`.
    ///
    /// An empty prefix is still sent and selects every object.
    pub async fn list_files(&self, bucket: &str, prefix: &str) -> Result<Vec<StorageObject>> {
        let url = self.objects_url(bucket)?;
        log::debug!("list_files bucket={bucket} prefix={prefix} url={url}");

        let list: ObjectList = self
            .http
            .get(url)
            .query(&[("prefix", prefix)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(list.objects)
    }

    /// Fetch metadata for one object.
    ///
    /// The gateway serves metadata from its download endpoint when `preview`
    /// is set, so this hits `.../objects/download?prefix={path}&preview=true`.
    pub async fn get_file_details(&self, bucket: &str, path: &str) -> Result<StorageObject> {
        let mut url = self.objects_url(bucket)?;
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(DOWNLOAD_SEGMENT);
        }
        log::debug!("get_file_details bucket={bucket} path={path} url={url}");

        let details = self
            .http
            .get(url)
            .query(&[("prefix", path), ("preview", "true")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(details)
    }

    /// Upload `file` to `{bucket}/{path}` as a multipart form with a single `file` part.
    pub async fn upload_file(&self, bucket: &str, file: &UploadFile, path: &str) -> Result<()> {
        let url = self.object_url(bucket, path)?;
        log::debug!(
            "upload_file bucket={bucket} path={path} file_name={} size={} url={url}",
            file.file_name,
            file.len()
        );

        let mut part = Part::stream_with_length(file.content.clone(), file.len() as u64)
            .file_name(file.file_name.clone());
        if let Some(content_type) = &file.content_type {
            part = part.mime_str(content_type)?;
        }
        let form = Form::new().part(UPLOAD_FIELD_NAME, part);

        self.http
            .put(url)
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Download `{bucket}/{path}`, buffering the whole body.
    pub async fn download_file(&self, bucket: &str, path: &str) -> Result<Bytes> {
        let url = self.object_url(bucket, path)?;
        log::debug!("download_file bucket={bucket} path={path} url={url}");

        let body = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(body)
    }

    pub async fn delete_file(&self, bucket: &str, path: &str) -> Result<()> {
        let url = self.object_url(bucket, path)?;
        log::debug!("delete_file bucket={bucket} path={path} url={url}");

        self.http.delete(url).send().await?.error_for_status()?;
        Ok(())
    }
}
