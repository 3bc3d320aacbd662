use crate::domain::model::RateTable;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Quote provider port. One call fetches the full rate table for a base
/// currency; implementations do not retry.
#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_rates(&self, base_code: &str) -> Result<RateTable>;
}

/// Read access to the provider-facing configuration.
pub trait ProviderConfig: Send + Sync {
    fn api_url(&self) -> &str;
    fn api_key(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}
