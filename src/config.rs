use crate::error::{Error, Result};
use crate::storage::StorageConfig;
use crate::storage::constants::DEFAULT_BASE_PATH;
use std::env;

// Read `primary_key`, falling back to `secondary_key`.
fn get_env_var(primary_key: &str, secondary_key: &str) -> Result<String> {
    env::var(primary_key)
        .or_else(|_| env::var(secondary_key))
        .map_err(|_| Error::MissingEnvVar {
            key: format!("{primary_key} or {secondary_key}"),
        })
}

/// Load the gateway location from environment variables.
///
/// - `STORAGE_ENDPOINT` (or `S3_API_ENDPOINT`): absolute origin, required
/// - `STORAGE_BASE_PATH`: gateway mount point, defaults to `/api/s3`
pub fn load_storage_config() -> Result<StorageConfig> {
    let endpoint = get_env_var("STORAGE_ENDPOINT", "S3_API_ENDPOINT")?;
    let base_path =
        env::var("STORAGE_BASE_PATH").unwrap_or_else(|_| DEFAULT_BASE_PATH.to_string());

    log::debug!("load_storage_config endpoint={endpoint} base_path={base_path}");
    Ok(StorageConfig::new(endpoint).with_base_path(base_path))
}
