// Command-level operations built on top of the storage client
pub mod delete;
pub mod download;
pub mod list;
pub mod stat;
pub mod upload;

pub use delete::{Deleter, HttpDeleter};
pub use download::{Downloader, HttpDownloader};
pub use list::{HttpLister, Lister};
pub use stat::{HttpStater, Stater};
pub use upload::{HttpUploader, Uploader};
