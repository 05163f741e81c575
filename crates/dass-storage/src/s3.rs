use aws_sdk_s3::Client;
use tokio::sync::OnceCell;
use uuid::Uuid;

use dass_core::keys;
use dass_core::models::AssessmentRecord;

use crate::error::StorageError;
use crate::objects;
use crate::store::{BoxFuture, ResultStore};

/// Stores records as JSON objects in an S3 bucket.
///
/// The SDK client is created on first use and reused afterwards.
pub struct S3Store {
    region: String,
    bucket: String,
    profile: Option<String>,
    client: OnceCell<Client>,
}

impl S3Store {
    pub fn new(region: impl Into<String>, bucket: impl Into<String>, profile: Option<String>) -> Self {
        Self {
            region: region.into(),
            bucket: bucket.into(),
            profile,
            client: OnceCell::new(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Whether the SDK client has been built yet.
    pub fn is_initialized(&self) -> bool {
        self.client.initialized()
    }

    async fn client(&self) -> Result<&Client, StorageError> {
        if self.bucket.trim().is_empty() {
            return Err(StorageError::Config("bucket name is empty".to_string()));
        }
        if self.region.trim().is_empty() {
            return Err(StorageError::Config("region is empty".to_string()));
        }

        let client = self
            .client
            .get_or_init(|| async {
                let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
                    .region(aws_config::Region::new(self.region.clone()));
                if let Some(profile) = &self.profile {
                    builder = builder.profile_name(profile);
                }
                let config = builder.load().await;
                tracing::debug!(region = %self.region, bucket = %self.bucket, "S3 client built");
                Client::new(&config)
            })
            .await;
        Ok(client)
    }
}

impl ResultStore for S3Store {
    fn describe(&self) -> String {
        format!("s3://{}", self.bucket)
    }

    fn init(&self) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move {
            self.client().await?;
            Ok(())
        })
    }

    fn save<'a>(
        &'a self,
        record: &'a AssessmentRecord,
    ) -> BoxFuture<'a, Result<String, StorageError>> {
        Box::pin(async move {
            let client = self.client().await?;
            let key = keys::assessment(record.id);
            let body = serde_json::to_vec_pretty(record)?;
            let etag =
                objects::put_object(client, &self.bucket, &key, body, Some("application/json"))
                    .await?;

            tracing::info!(bucket = %self.bucket, key = %key, etag = %etag, "assessment saved");
            Ok(etag)
        })
    }

    fn load(&self, id: Uuid) -> BoxFuture<'_, Result<AssessmentRecord, StorageError>> {
        Box::pin(async move {
            let client = self.client().await?;
            let body = objects::get_object(client, &self.bucket, &keys::assessment(id)).await?;
            Ok(serde_json::from_slice(&body)?)
        })
    }
}
