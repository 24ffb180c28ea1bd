// Client abstractions module - contains the storage provider interface trait

pub mod memory;
pub mod s3;

use crate::error::StorageResult;
use crate::types::{ObjectMetadata, PutObjectArgs};
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use mockall::automock;

/// Narrow capability interface to the storage provider. The facade performs
/// no protocol-level work itself; every operation here maps to one provider
/// round trip, with no local retry.
#[automock]
#[async_trait]
pub trait StorageClient: Send + Sync {
    /// Check if a bucket exists
    async fn bucket_exists(&self, bucket: &str) -> StorageResult<bool>;

    /// Create a bucket scoped to the implementation's configured region
    async fn create_bucket(&self, bucket: &str) -> StorageResult<()>;

    /// List the buckets owned by the authenticated identity, in provider order
    async fn list_buckets(&self) -> StorageResult<Vec<String>>;

    /// Write a byte stream under the given key and return the metadata the
    /// provider computed for the stored object
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: ByteStream,
        args: PutObjectArgs,
    ) -> StorageResult<ObjectMetadata>;

    /// Open a streaming handle positioned at the start of the object. The
    /// caller owns the stream and must drain or drop it.
    async fn get_object(&self, bucket: &str, key: &str) -> StorageResult<ByteStream>;
}
