/// Client abstractions for the storage provider
pub mod client;
/// Contains all the errors that can be returned by storage operations
pub mod error;
/// The object store facade
pub mod store;
/// Shared types and construction parameters
pub mod types;

// Re-export commonly used types
pub use client::{memory::InMemoryStorage, s3::AWSS3, MockStorageClient, StorageClient};
pub use error::{StorageError, StorageResult};
pub use store::ObjectStoreClient;
pub use types::params::StorageCredentials;
pub use types::{ObjectAccess, ObjectMetadata, PutObjectArgs, Region};
