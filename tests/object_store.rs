use aws_sdk_s3::primitives::ByteStream;
use object_store_client::{InMemoryStorage, ObjectStoreClient, Region, StorageCredentials, StorageError};
use rstest::*;
use std::sync::Arc;

#[fixture]
fn store() -> ObjectStoreClient {
    ObjectStoreClient::with_client(Arc::new(InMemoryStorage::new()), Region::UsEast1)
}

#[rstest]
#[tokio::test]
async fn created_bucket_is_listed_exactly_once(store: ObjectStoreClient) {
    store.create_bucket("test-bucket").await.unwrap();

    let buckets = store.list_buckets().await.unwrap();
    assert_eq!(buckets.iter().filter(|b| b.as_str() == "test-bucket").count(), 1);
}

#[rstest]
#[tokio::test]
async fn repeated_bucket_creation_is_error_free_and_duplicate_free(store: ObjectStoreClient) {
    store.create_bucket("test-bucket").await.unwrap();
    store.create_bucket("test-bucket").await.unwrap();

    let buckets = store.list_buckets().await.unwrap();
    assert_eq!(buckets, vec!["test-bucket".to_string()]);
}

#[rstest]
#[tokio::test]
async fn upload_creates_the_missing_bucket(store: ObjectStoreClient) {
    assert!(store.list_buckets().await.unwrap().is_empty());

    store.upload_object("test-bucket", "hello.txt", ByteStream::from_static(b"hi")).await.unwrap();

    let buckets = store.list_buckets().await.unwrap();
    assert_eq!(buckets, vec!["test-bucket".to_string()]);
}

/// The concrete scenario from the service contract: upload "hi" under
/// hello.txt, get content-length 2 back, then read the same bytes out.
#[rstest]
#[tokio::test]
async fn upload_then_download_round_trips(store: ObjectStoreClient) {
    let metadata = store.upload_object("test-bucket", "hello.txt", ByteStream::from_static(b"hi")).await.unwrap();
    assert_eq!(metadata.key, "hello.txt");
    assert_eq!(metadata.size, 2);

    let body = store.download_object("test-bucket", "hello.txt").await.unwrap();
    let bytes = body.collect().await.unwrap().into_bytes();
    assert_eq!(&bytes[..], b"hi");
}

#[rstest]
#[tokio::test]
async fn download_of_missing_key_fails_not_found(store: ObjectStoreClient) {
    store.create_bucket("test-bucket").await.unwrap();

    let err = store.download_object("test-bucket", "missing.txt").await.unwrap_err();
    assert!(err.is_not_found());
}

#[rstest]
#[tokio::test]
async fn download_of_missing_bucket_fails_not_found(store: ObjectStoreClient) {
    let err = store.download_object("no-such-bucket", "hello.txt").await.unwrap_err();
    assert!(err.is_not_found());
}

#[rstest]
#[tokio::test]
async fn empty_marker_has_suffixed_key_and_zero_length(store: ObjectStoreClient) {
    store.create_bucket("test-bucket").await.unwrap();

    let metadata = store.create_empty_marker("test-bucket", "docs").await.unwrap();
    assert_eq!(metadata.key, "docs/");
    assert_eq!(metadata.size, 0);

    let body = store.download_object("test-bucket", "docs/").await.unwrap();
    let bytes = body.collect().await.unwrap().into_bytes();
    assert!(bytes.is_empty());
}

#[rstest]
#[tokio::test]
async fn empty_marker_does_not_create_the_bucket(store: ObjectStoreClient) {
    let err = store.create_empty_marker("no-such-bucket", "docs").await.unwrap_err();
    assert!(matches!(err, StorageError::BucketNotFound(_)));
}

#[tokio::test]
async fn builds_aws_backed_client_from_static_credentials() {
    let credentials = StorageCredentials::new("mock_key", "mock_secret");
    let store = ObjectStoreClient::new(credentials, Region::EuWest1).await;
    assert_eq!(store.region(), Region::EuWest1);
    assert_eq!(store.region().as_str(), "eu-west-1");
}
