use snafu::Snafu;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Environment variable '{key}' is required but not found"))]
    MissingEnvVar { key: String },

    #[snafu(display("Invalid storage endpoint '{endpoint}': {source}"))]
    InvalidEndpoint {
        endpoint: String,
        source: url::ParseError,
    },

    #[snafu(display("Storage endpoint '{endpoint}' cannot carry a path"))]
    EndpointNotABase { endpoint: String },

    #[snafu(display("Object '{bucket}/{path}' has a '.' or '..' segment and cannot be addressed over HTTP"))]
    UnaddressableKey { bucket: String, path: String },

    #[snafu(display("Path does not exist: {}", path.display()))]
    PathNotFound { path: PathBuf },

    #[snafu(display("Not a regular file: {}", path.display()))]
    NotAFile { path: PathBuf },

    #[snafu(display("Partial deletion failure: {} path(s) failed to delete: {}", failed_paths.len(), failed_paths.join(", ")))]
    PartialDeletion { failed_paths: Vec<String> },

    #[snafu(display("Failed to list buckets: {source}"))]
    ListBucketsFailed { source: Box<Error> },

    #[snafu(display("Failed to list objects in '{bucket}' with prefix '{prefix}': {source}"))]
    ListObjectsFailed {
        bucket: String,
        prefix: String,
        source: Box<Error>,
    },

    #[snafu(display("Failed to stat '{bucket}/{path}': {source}"))]
    StatFailed {
        bucket: String,
        path: String,
        source: Box<Error>,
    },

    #[snafu(display("Failed to download '{remote_path}' to '{local_path}': {source}"))]
    DownloadFailed {
        remote_path: String,
        local_path: String,
        source: Box<Error>,
    },

    #[snafu(display("Failed to upload '{local_path}' to '{remote_path}': {source}"))]
    UploadFailed {
        local_path: String,
        remote_path: String,
        source: Box<Error>,
    },

    #[snafu(display("HTTP transport error: {source}"))]
    Transport { source: reqwest::Error },

    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },
}

impl Error {
    /// HTTP status of the failed exchange, if the server answered at all.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Error::Transport { source } => source.status(),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. })
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Error::Transport { source: error }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json { source: error }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io { source: error }
    }
}
