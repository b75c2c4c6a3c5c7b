use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::storage::StorageClient;
use crate::storage::operations::download::local_destination;
use crate::storage::operations::stat::render;
use crate::storage::operations::{
    Deleter, Downloader, HttpDeleter, HttpDownloader, HttpLister, HttpStater, HttpUploader,
    Lister, Stater, Uploader,
};
use crate::storage::utils::OutputFormat;
use crate::storage::utils::path::{basename, display_object_path};
use crate::utils::confirm_deletion;
use crate::wrap_err;

/// Browse and manage objects behind a REST storage gateway.
///
/// The gateway is located through `STORAGE_ENDPOINT` and `STORAGE_BASE_PATH`.
#[derive(Debug, Parser)]
#[command(name = "s3browse", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List buckets
    Buckets {
        /// Print a JSON array
        #[arg(long)]
        json: bool,
    },
    /// List objects in a bucket
    Ls {
        bucket: String,
        /// Only list keys starting with this prefix
        prefix: Option<String>,
        /// Show size, last modified time and etag
        #[arg(short, long)]
        long: bool,
        /// Print a JSON array
        #[arg(long, conflicts_with = "long")]
        json: bool,
    },
    /// Show object metadata
    Stat {
        bucket: String,
        path: String,
        #[arg(long, conflicts_with = "raw")]
        json: bool,
        /// Print key=value lines
        #[arg(long)]
        raw: bool,
    },
    /// Upload a local file
    Put {
        bucket: String,
        local: String,
        /// Destination key, defaults to the local file name
        path: Option<String>,
    },
    /// Download an object
    Get {
        bucket: String,
        path: String,
        /// Destination file, `-` for stdout; defaults to the key's file name
        local: Option<String>,
    },
    /// Delete objects
    Rm {
        bucket: String,
        #[arg(required = true)]
        paths: Vec<String>,
        /// Do not ask for confirmation
        #[arg(short, long)]
        force: bool,
    },
}

pub async fn run(args: Args, client: StorageClient) -> Result<()> {
    match args.command {
        Command::Buckets { json } => {
            let lister = HttpLister::new(client);
            wrap_err!(lister.list_buckets(json).await, ListBucketsFailed)?;
        }
        Command::Ls {
            bucket,
            prefix,
            long,
            json,
        } => {
            let prefix = prefix.unwrap_or_default();
            let lister = HttpLister::new(client);
            wrap_err!(
                lister.list_objects(&bucket, &prefix, long, json).await,
                ListObjectsFailed {
                    bucket: bucket.clone(),
                    prefix: prefix.clone()
                }
            )?;
        }
        Command::Stat {
            bucket,
            path,
            json,
            raw,
        } => {
            let stater = HttpStater::new(client);
            let object = wrap_err!(
                stater.stat(&bucket, &path).await,
                StatFailed {
                    bucket: bucket.clone(),
                    path: path.clone()
                }
            )?;
            println!("{}", render(&object, OutputFormat::from_flags(json, raw))?);
        }
        Command::Put {
            bucket,
            local,
            path,
        } => {
            let uploader = HttpUploader::new(client);
            let remote_path = path.clone().unwrap_or_else(|| basename(&local));
            wrap_err!(
                uploader.upload(&bucket, &local, path.as_deref()).await,
                UploadFailed {
                    local_path: local.clone(),
                    remote_path: display_object_path(&bucket, &remote_path)
                }
            )?;
        }
        Command::Get {
            bucket,
            path,
            local,
        } => {
            let downloader = HttpDownloader::new(client);
            wrap_err!(
                downloader.download(&bucket, &path, local.as_deref()).await,
                DownloadFailed {
                    remote_path: display_object_path(&bucket, &path),
                    local_path: local_destination(&path, local.as_deref())
                }
            )?;
        }
        Command::Rm {
            bucket,
            paths,
            force,
        } => {
            if !confirm_deletion(&bucket, &paths, force)? {
                println!("Aborted");
                return Ok(());
            }
            let deleter = HttpDeleter::new(client);
            deleter.delete(&bucket, &paths).await?;
        }
    }
    Ok(())
}
