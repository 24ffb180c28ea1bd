use crate::client::StorageClient;
use crate::error::{StorageError, StorageResult};
use crate::types::{ObjectAccess, ObjectMetadata, PutObjectArgs};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::error::ProvideErrorMetadata;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration, ObjectCannedAcl};
use aws_sdk_s3::Client;

// us-east-1 is the provider default and must not carry a location constraint
const DEFAULT_REGION: &str = "us-east-1";

/// AWSS3 represents the AWS S3 client object implementing the storage
/// provider interface.
#[derive(Clone, Debug)]
pub struct AWSS3 {
    client: Client,
}

impl AWSS3 {
    /// Creates a new instance of AWSS3 from the provided AWS configuration.
    /// The underlying client is built once and reused for all calls.
    pub fn new(aws_config: &SdkConfig) -> Self {
        let mut s3_config_builder = aws_sdk_s3::config::Builder::from(aws_config);
        // this is necessary for it to work with localstack in test cases
        s3_config_builder.set_force_path_style(Some(true));
        Self { client: Client::from_conf(s3_config_builder.build()) }
    }

    fn region_name(&self) -> String {
        self.client.config().region().map(|r| r.to_string()).unwrap_or_else(|| DEFAULT_REGION.to_string())
    }
}

impl From<ObjectAccess> for ObjectCannedAcl {
    fn from(access: ObjectAccess) -> Self {
        match access {
            ObjectAccess::Private => ObjectCannedAcl::Private,
            ObjectAccess::PublicRead => ObjectCannedAcl::PublicRead,
        }
    }
}

#[async_trait]
impl StorageClient for AWSS3 {
    async fn bucket_exists(&self, bucket: &str) -> StorageResult<bool> {
        match self.client.head_bucket().bucket(bucket).send().await {
            Ok(_) => Ok(true),
            Err(err) => match err.as_service_error() {
                Some(e) if e.is_not_found() => Ok(false),
                _ => Err(err.into()),
            },
        }
    }

    async fn create_bucket(&self, bucket: &str) -> StorageResult<()> {
        let region = self.region_name();
        let mut request = self.client.create_bucket().bucket(bucket);
        if region != DEFAULT_REGION {
            let constraint = BucketLocationConstraint::from(region.as_str());
            let configuration = CreateBucketConfiguration::builder().location_constraint(constraint).build();
            request = request.create_bucket_configuration(configuration);
        }

        if let Err(err) = request.send().await {
            return match err.as_service_error() {
                Some(e) if e.is_bucket_already_exists() || e.is_bucket_already_owned_by_you() => {
                    Err(StorageError::BucketAlreadyExists(bucket.to_string()))
                }
                _ => Err(err.into()),
            };
        }
        tracing::info!("Created bucket '{}' in region: {}", bucket, region);
        Ok(())
    }

    async fn list_buckets(&self) -> StorageResult<Vec<String>> {
        let output = self.client.list_buckets().send().await?;
        Ok(output.buckets().iter().filter_map(|b| b.name().map(String::from)).collect())
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: ByteStream,
        args: PutObjectArgs,
    ) -> StorageResult<ObjectMetadata> {
        let mut request =
            self.client.put_object().bucket(bucket).key(key).acl(ObjectCannedAcl::from(args.acl)).body(body);
        if let Some(content_length) = args.content_length {
            request = request.content_length(content_length);
        }
        if let Some(content_type) = &args.content_type {
            request = request.content_type(content_type);
        }
        let put = request.send().await?;

        // the returned metadata stays provider-computed: a follow-up head
        // reports the size and content attributes the service recorded
        let head = self.client.head_object().bucket(bucket).key(key).send().await?;
        let size = head.content_length().unwrap_or_default() as u64;
        tracing::debug!(
            log_type = "StorageClient",
            category = "storage_call",
            size = size,
            "Successfully put object into {}, key={}",
            bucket,
            key
        );

        Ok(ObjectMetadata {
            key: key.to_string(),
            size,
            last_modified: head
                .last_modified()
                .and_then(|t| chrono::DateTime::from_timestamp(t.secs(), t.subsec_nanos())),
            etag: put.e_tag().or(head.e_tag()).map(String::from),
            content_type: head.content_type().map(String::from),
            metadata: head.metadata().cloned().unwrap_or_default(),
        })
    }

    async fn get_object(&self, bucket: &str, key: &str) -> StorageResult<ByteStream> {
        match self.client.get_object().bucket(bucket).key(key).send().await {
            Ok(output) => {
                tracing::debug!(
                    log_type = "StorageClient",
                    category = "storage_call",
                    "Opened object stream from {}, key={}",
                    bucket,
                    key
                );
                Ok(output.body)
            }
            Err(err) => match err.as_service_error() {
                Some(e) if e.is_no_such_key() => {
                    Err(StorageError::ObjectNotFound { bucket: bucket.to_string(), key: key.to_string() })
                }
                Some(e) if e.code() == Some("NoSuchBucket") => Err(StorageError::BucketNotFound(bucket.to_string())),
                _ => Err(err.into()),
            },
        }
    }
}
