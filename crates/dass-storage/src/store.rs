use std::future::Future;
use std::pin::Pin;

use uuid::Uuid;

use dass_core::models::AssessmentRecord;

use crate::error::StorageError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A backing store for submitted assessments.
///
/// Implementations are built explicitly and passed to whoever needs them.
/// Construction does no I/O; [`ResultStore::init`] does the setup.
pub trait ResultStore: Send + Sync {
    /// Short description for logs (e.g. a directory or bucket).
    fn describe(&self) -> String;

    /// Prepare the store for writes.
    ///
    /// Idempotent: calling it again, or concurrently, has the same effect as
    /// calling it once. `save` and `load` call it themselves, so callers only
    /// need it to surface setup errors early.
    fn init(&self) -> BoxFuture<'_, Result<(), StorageError>>;

    /// Persist a record under [`dass_core::keys::assessment`]. Returns a
    /// location string (path or ETag).
    fn save<'a>(&'a self, record: &'a AssessmentRecord)
    -> BoxFuture<'a, Result<String, StorageError>>;

    /// Read a previously saved record.
    fn load(&self, id: Uuid) -> BoxFuture<'_, Result<AssessmentRecord, StorageError>>;
}
