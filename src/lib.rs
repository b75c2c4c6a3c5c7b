//! Typed client for a REST object storage gateway, plus the `s3browse`
//! command-line front end built on it.
//!
//! ```no_run
//! # async fn demo() -> s3browse::error::Result<()> {
//! use s3browse::storage::{StorageClient, StorageConfig, UploadFile};
//!
//! let client = StorageClient::new(StorageConfig::new("http://localhost:8080"))?;
//! client
//!     .upload_file("docs", &UploadFile::new("notes.txt", "hello"), "notes.txt")
//!     .await?;
//! let objects = client.list_files("docs", "notes").await?;
//! assert_eq!(objects[0].size, 5);
//! # Ok(())
//! # }
//! ```
pub mod cli;
pub mod config;
pub mod error;
pub mod storage;
pub mod utils;
