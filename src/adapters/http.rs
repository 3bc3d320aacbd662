use crate::domain::model::RateTable;
use crate::domain::ports::{ProviderConfig, RateProvider};
use crate::utils::error::{CambioError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Client for the ExchangeRate-API v6 `latest` endpoint:
/// `GET {base_url}/{api_key}/latest/{base_code}`.
pub struct ExchangeRateApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ExchangeRateApiClient {
    pub fn new(config: &impl ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(CambioError::ProviderUnavailableError)?;

        Ok(Self {
            client,
            base_url: config.api_url().trim_end_matches('/').to_string(),
            api_key: config.api_key().to_string(),
        })
    }

    fn latest_url(&self, base_code: &str) -> String {
        format!("{}/{}/latest/{}", self.base_url, self.api_key, base_code)
    }
}

#[async_trait]
impl RateProvider for ExchangeRateApiClient {
    async fn fetch_rates(&self, base_code: &str) -> Result<RateTable> {
        let url = self.latest_url(base_code);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(CambioError::ProviderUnavailableError)?;

        let status = response.status();
        tracing::debug!("Provider response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CambioError::ProviderResponseError {
                message: format!("{}: {}", status, body.trim()),
            });
        }

        response
            .json::<RateTable>()
            .await
            .map_err(|e| CambioError::ProviderResponseError {
                message: format!("Malformed rate table: {}", e),
            })
    }
}
