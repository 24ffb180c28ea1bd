use crate::client::{s3::AWSS3, StorageClient};
use crate::error::{StorageError, StorageResult};
use crate::types::params::StorageCredentials;
use crate::types::{ObjectMetadata, PutObjectArgs, Region, FOLDER_SUFFIX};
use aws_sdk_s3::primitives::ByteStream;
use std::sync::Arc;
use tracing::{debug, info};

/// Facade over bucket and object operations, bound to one region and one
/// credential pair at construction time. Holds a single provider handle,
/// created once and shared across all calls; every operation is an
/// independent request/response with no local retry or fallback.
pub struct ObjectStoreClient {
    region: Region,
    client: Arc<dyn StorageClient>,
}

impl ObjectStoreClient {
    /// Builds the AWS provider client from static credentials and wraps it.
    pub async fn new(credentials: StorageCredentials, region: Region) -> Self {
        let sdk_config = credentials.load_sdk_config(region).await;
        Self { region, client: Arc::new(AWSS3::new(&sdk_config)) }
    }

    /// Wraps an already constructed provider implementation. This is how
    /// tests bind the facade to an in-memory or mock provider.
    pub fn with_client(client: Arc<dyn StorageClient>, region: Region) -> Self {
        Self { region, client }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// Create a bucket, idempotently: if it already exists the call returns
    /// without error and without touching the provider's creation path.
    pub async fn create_bucket(&self, bucket: &str) -> StorageResult<()> {
        if bucket.is_empty() {
            return Err(StorageError::InvalidBucketName("bucket name cannot be empty".to_string()));
        }
        if self.client.bucket_exists(bucket).await? {
            debug!("Bucket '{}' already exists, skipping creation", bucket);
            return Ok(());
        }
        info!("Creating new bucket: {} in region: {}", bucket, self.region);
        self.client.create_bucket(bucket).await
    }

    /// Bucket names owned by the authenticated identity, in whatever order
    /// the provider returns them.
    pub async fn list_buckets(&self) -> StorageResult<Vec<String>> {
        self.client.list_buckets().await
    }

    /// Write a byte stream under the given key with a private access policy.
    /// The bucket is created first if it does not exist; a failed write after
    /// that leaves the bucket in place.
    pub async fn upload_object(&self, bucket: &str, key: &str, body: ByteStream) -> StorageResult<ObjectMetadata> {
        self.create_bucket(bucket).await?;
        self.client.put_object(bucket, key, body, PutObjectArgs::default()).await
    }

    /// Open a streaming handle over the object's content. The stream holds a
    /// live connection; the caller must drain or drop it on every exit path.
    /// Missing buckets are not created here.
    pub async fn download_object(&self, bucket: &str, key: &str) -> StorageResult<ByteStream> {
        self.client.get_object(bucket, key).await
    }

    /// Write a zero-length marker object under `folder` + `/` to simulate a
    /// directory in the flat namespace. Assumes the bucket already exists.
    pub async fn create_empty_marker(&self, bucket: &str, folder: &str) -> StorageResult<ObjectMetadata> {
        let key = format!("{folder}{FOLDER_SUFFIX}");
        let args = PutObjectArgs { content_length: Some(0), ..PutObjectArgs::default() };
        self.client.put_object(bucket, &key, ByteStream::from_static(b""), args).await
    }
}
