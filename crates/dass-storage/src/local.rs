use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use dass_core::keys;
use dass_core::models::AssessmentRecord;

use crate::error::StorageError;
use crate::store::{BoxFuture, ResultStore};

/// Stores records as pretty JSON files under a root directory.
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, id: Uuid) -> PathBuf {
        self.root.join(keys::assessment(id))
    }

    async fn ensure_dirs(&self) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(self.root.join(keys::ASSESSMENTS_PREFIX)).await?;
        Ok(())
    }
}

impl ResultStore for LocalStore {
    fn describe(&self) -> String {
        format!("local:{}", self.root.display())
    }

    fn init(&self) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move {
            self.ensure_dirs().await?;
            tracing::debug!(root = %self.root.display(), "local store ready");
            Ok(())
        })
    }

    fn save<'a>(
        &'a self,
        record: &'a AssessmentRecord,
    ) -> BoxFuture<'a, Result<String, StorageError>> {
        Box::pin(async move {
            self.ensure_dirs().await?;

            // Write to a temp file then rename so a crash never leaves a
            // truncated record behind.
            let json = serde_json::to_vec_pretty(record)?;
            let path = self.path_for(record.id);
            let tmp_path = path.with_extension("json.tmp");
            tokio::fs::write(&tmp_path, &json).await?;
            tokio::fs::rename(&tmp_path, &path).await?;

            tracing::info!(path = %path.display(), id = %record.id, "assessment saved");
            Ok(path.display().to_string())
        })
    }

    fn load(&self, id: Uuid) -> BoxFuture<'_, Result<AssessmentRecord, StorageError>> {
        Box::pin(async move {
            let path = self.path_for(id);
            let json = tokio::fs::read(&path).await.map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    StorageError::NotFound {
                        key: keys::assessment(id),
                    }
                } else {
                    StorageError::Io(e)
                }
            })?;
            Ok(serde_json::from_slice(&json)?)
        })
    }
}
