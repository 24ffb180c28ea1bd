use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::create_bucket::CreateBucketError;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::operation::head_bucket::HeadBucketError;
use aws_sdk_s3::operation::head_object::HeadObjectError;
use aws_sdk_s3::operation::list_buckets::ListBucketsError;
use aws_sdk_s3::operation::put_object::PutObjectError;
use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Error, Debug)]
pub enum StorageError {
    /// Referenced bucket does not exist
    #[error("Bucket not found: {0}")]
    BucketNotFound(String),
    /// Referenced object does not exist in the bucket
    #[error("Object not found: {key} in bucket {bucket}")]
    ObjectNotFound { bucket: String, key: String },
    /// Bucket name collision on creation
    #[error("Bucket already exists: {0}")]
    BucketAlreadyExists(String),
    #[error("Invalid bucket name: {0}")]
    InvalidBucketName(String),
    /// AWS SDK errors, surfaced as received from the provider
    #[error("Failed to check bucket existence: {0}")]
    HeadBucketError(#[from] SdkError<HeadBucketError>),
    #[error("Failed to create bucket: {0}")]
    CreateBucketError(#[from] SdkError<CreateBucketError>),
    #[error("Failed to list buckets: {0}")]
    ListBucketsError(#[from] SdkError<ListBucketsError>),
    #[error("Failed to put object: {0}")]
    PutObjectError(#[from] SdkError<PutObjectError>),
    #[error("Failed to get object: {0}")]
    GetObjectError(#[from] SdkError<GetObjectError>),
    #[error("Failed to read object metadata: {0}")]
    HeadObjectError(#[from] SdkError<HeadObjectError>),
    #[error("Failed to stream object: {0}")]
    ObjectStreamError(String),
}

impl StorageError {
    /// True when the error means the referenced bucket or object does not
    /// exist, regardless of which implementation produced it.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::BucketNotFound(_) | Self::ObjectNotFound { .. } => true,
            Self::GetObjectError(err) => err.as_service_error().map(|e| e.is_no_such_key()).unwrap_or(false),
            _ => false,
        }
    }
}
