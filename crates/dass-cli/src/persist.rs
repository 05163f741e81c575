use std::path::PathBuf;

use dass_core::models::AssessmentRecord;
use dass_storage::{LocalStore, ResultStore, S3Store};

use crate::config::StoreConfig;

/// Build the configured store. Nothing is touched until it is used.
pub fn build_store(config: &StoreConfig) -> Option<Box<dyn ResultStore>> {
    match config {
        StoreConfig::None => None,
        StoreConfig::Local { path } => Some(Box::new(LocalStore::new(path.clone()))),
        StoreConfig::S3 {
            region,
            bucket,
            profile,
        } => Some(Box::new(S3Store::new(
            region.clone(),
            bucket.clone(),
            profile.clone(),
        ))),
    }
}

/// Pick the store for this run: `--no-store` wins, then `--store-dir`,
/// then the config file.
pub fn select_store(
    config: &StoreConfig,
    store_dir: Option<PathBuf>,
    no_store: bool,
) -> Option<Box<dyn ResultStore>> {
    if no_store {
        return None;
    }
    match store_dir {
        Some(path) => build_store(&StoreConfig::Local { path }),
        None => build_store(config),
    }
}

/// Hand a record to the store. Failures are logged and swallowed: results
/// are already on screen and exported by the time this runs.
pub async fn persist(store: &dyn ResultStore, record: &AssessmentRecord) -> Option<String> {
    match store.save(record).await {
        Ok(location) => Some(location),
        Err(e) => {
            tracing::warn!(
                store = %store.describe(),
                error = %e,
                "failed to save assessment (results are unaffected)"
            );
            None
        }
    }
}
