use crate::client::StorageClient;
use crate::error::{StorageError, StorageResult};
use crate::types::{ObjectMetadata, PutObjectArgs};
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

#[derive(Clone)]
struct StoredObject {
    data: Bytes,
    content_type: Option<String>,
    etag: String,
    last_modified: DateTime<Utc>,
}

/// Hermetic in-process implementation of `StorageClient`, used to exercise
/// the facade without contacting a real endpoint. Enforces the same
/// bucket-must-exist invariant the remote provider does.
#[derive(Default)]
pub struct InMemoryStorage {
    buckets: RwLock<HashMap<String, HashMap<String, StoredObject>>>,
    etag_counter: AtomicU64,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_etag(&self) -> String {
        format!("\"{:016x}\"", self.etag_counter.fetch_add(1, Ordering::Relaxed))
    }
}

#[async_trait]
impl StorageClient for InMemoryStorage {
    async fn bucket_exists(&self, bucket: &str) -> StorageResult<bool> {
        Ok(self.buckets.read().await.contains_key(bucket))
    }

    async fn create_bucket(&self, bucket: &str) -> StorageResult<()> {
        let mut buckets = self.buckets.write().await;
        if buckets.contains_key(bucket) {
            return Err(StorageError::BucketAlreadyExists(bucket.to_string()));
        }
        buckets.insert(bucket.to_string(), HashMap::new());
        Ok(())
    }

    async fn list_buckets(&self) -> StorageResult<Vec<String>> {
        Ok(self.buckets.read().await.keys().cloned().collect())
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: ByteStream,
        args: PutObjectArgs,
    ) -> StorageResult<ObjectMetadata> {
        let data =
            body.collect().await.map_err(|e| StorageError::ObjectStreamError(e.to_string()))?.into_bytes();
        let mut buckets = self.buckets.write().await;
        let objects = buckets.get_mut(bucket).ok_or_else(|| StorageError::BucketNotFound(bucket.to_string()))?;

        let object = StoredObject {
            data,
            content_type: args.content_type.clone(),
            etag: self.next_etag(),
            last_modified: Utc::now(),
        };
        let metadata = ObjectMetadata {
            key: key.to_string(),
            size: object.data.len() as u64,
            last_modified: Some(object.last_modified),
            etag: Some(object.etag.clone()),
            content_type: object.content_type.clone(),
            metadata: HashMap::new(),
        };
        objects.insert(key.to_string(), object);
        Ok(metadata)
    }

    async fn get_object(&self, bucket: &str, key: &str) -> StorageResult<ByteStream> {
        let buckets = self.buckets.read().await;
        let objects = buckets.get(bucket).ok_or_else(|| StorageError::BucketNotFound(bucket.to_string()))?;
        let object = objects
            .get(key)
            .ok_or_else(|| StorageError::ObjectNotFound { bucket: bucket.to_string(), key: key.to_string() })?;
        Ok(ByteStream::from(object.data.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_object_into_missing_bucket_fails() {
        let storage = InMemoryStorage::new();
        let result =
            storage.put_object("missing", "key", ByteStream::from_static(b"data"), PutObjectArgs::default()).await;
        assert!(matches!(result, Err(StorageError::BucketNotFound(_))));
    }

    #[tokio::test]
    async fn duplicate_bucket_creation_fails() {
        let storage = InMemoryStorage::new();
        storage.create_bucket("logs").await.unwrap();
        let result = storage.create_bucket("logs").await;
        assert!(matches!(result, Err(StorageError::BucketAlreadyExists(_))));
    }

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let storage = InMemoryStorage::new();
        storage.create_bucket("logs").await.unwrap();
        let metadata =
            storage.put_object("logs", "a/b.txt", ByteStream::from_static(b"payload"), PutObjectArgs::default()).await.unwrap();
        assert_eq!(metadata.size, 7);
        assert!(metadata.etag.is_some());

        let body = storage.get_object("logs", "a/b.txt").await.unwrap();
        let bytes = body.collect().await.unwrap().into_bytes();
        assert_eq!(&bytes[..], b"payload");
    }

    #[tokio::test]
    async fn get_object_for_missing_key_is_not_found() {
        let storage = InMemoryStorage::new();
        storage.create_bucket("logs").await.unwrap();
        let err = storage.get_object("logs", "nope").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
