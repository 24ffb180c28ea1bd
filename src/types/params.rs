use crate::types::Region;
use aws_config::meta::region::RegionProviderChain;
use aws_config::{Region as SdkRegion, SdkConfig};
use aws_credential_types::Credentials;

/// Static credential pair the facade is bound to at construction time. No
/// other configuration surface (endpoint, retry policy, timeout) is exposed;
/// those stay with the provider SDK defaults.
#[derive(Debug, Clone)]
pub struct StorageCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl StorageCredentials {
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self { access_key_id: access_key_id.into(), secret_access_key: secret_access_key.into() }
    }

    /// To build a `SdkConfig` scoped to the given region.
    pub async fn load_sdk_config(&self, region: Region) -> SdkConfig {
        let region_provider = RegionProviderChain::first_try(SdkRegion::new(region.as_str())).or_default_provider();
        let credentials =
            Credentials::from_keys(self.access_key_id.clone(), self.secret_access_key.clone(), None);
        aws_config::from_env().credentials_provider(credentials).region(region_provider).load().await
    }
}
