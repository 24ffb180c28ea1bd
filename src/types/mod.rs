/// Construction parameters for the facade
pub mod params;

use std::collections::HashMap;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Key suffix marking a zero-length "folder" object. The storage namespace is
/// flat; directories exist by convention only.
pub const FOLDER_SUFFIX: &str = "/";

/// Supported provider regions. The facade is bound to exactly one of these at
/// construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum Region {
    #[strum(serialize = "us-east-1")]
    UsEast1,
    #[strum(serialize = "us-east-2")]
    UsEast2,
    #[strum(serialize = "us-west-1")]
    UsWest1,
    #[strum(serialize = "us-west-2")]
    UsWest2,
    #[strum(serialize = "ca-central-1")]
    CaCentral1,
    #[strum(serialize = "eu-west-1")]
    EuWest1,
    #[strum(serialize = "eu-west-2")]
    EuWest2,
    #[strum(serialize = "eu-west-3")]
    EuWest3,
    #[strum(serialize = "eu-central-1")]
    EuCentral1,
    #[strum(serialize = "eu-north-1")]
    EuNorth1,
    #[strum(serialize = "ap-south-1")]
    ApSouth1,
    #[strum(serialize = "ap-southeast-1")]
    ApSoutheast1,
    #[strum(serialize = "ap-southeast-2")]
    ApSoutheast2,
    #[strum(serialize = "ap-northeast-1")]
    ApNortheast1,
    #[strum(serialize = "ap-northeast-2")]
    ApNortheast2,
    #[strum(serialize = "sa-east-1")]
    SaEast1,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

/// Object metadata
#[derive(Debug, Clone, Default)]
pub struct ObjectMetadata {
    /// Object key
    pub key: String,

    /// Object size in bytes
    pub size: u64,

    /// Last modified timestamp
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,

    /// ETag
    pub etag: Option<String>,

    /// Content type
    pub content_type: Option<String>,

    /// User-defined metadata
    pub metadata: HashMap<String, String>,
}

/// Canned access policy applied to an uploaded object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectAccess {
    /// Not publicly readable
    #[default]
    Private,
    PublicRead,
}

/// Per-call arguments for object writes: the metadata attached before the
/// write plus the access-control policy.
#[derive(Debug, Clone, Default)]
pub struct PutObjectArgs {
    /// Explicit content length, when known up front (folder markers set 0)
    pub content_length: Option<i64>,

    /// Content type to record on the object
    pub content_type: Option<String>,

    /// Access policy, private unless stated otherwise
    pub acl: ObjectAccess,
}
