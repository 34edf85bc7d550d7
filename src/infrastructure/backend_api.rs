// HTTP implementation of the city provider against the backend API
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::application::city_provider::{CityProvider, ProviderError};
use crate::domain::city::{CityIdentity, CitySummary};
use crate::domain::filter::Timeframe;
use crate::domain::timeseries::TimeSeriesPoint;

#[derive(Debug, Clone)]
pub struct HttpCityProvider {
    client: Client,
    base_url: String,
}

impl HttpCityProvider {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn cities_url(&self) -> String {
        format!("{}/cities", self.base_url)
    }

    fn summary_url(&self, name: &str) -> String {
        format!("{}/cities/{}/summary", self.base_url, urlencoding::encode(name))
    }

    fn timeseries_url(&self, name: &str, timeframe: Timeframe) -> String {
        format!(
            "{}/cities/{}/timeseries?timeframe={}",
            self.base_url,
            urlencoding::encode(name),
            timeframe.as_str()
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ProviderError> {
        tracing::debug!("fetching {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))
    }
}

#[async_trait]
impl CityProvider for HttpCityProvider {
    async fn list_cities(&self) -> Result<Vec<CityIdentity>, ProviderError> {
        self.get_json(&self.cities_url()).await
    }

    async fn fetch_summary(&self, name: &str) -> Result<CitySummary, ProviderError> {
        self.get_json(&self.summary_url(name)).await
    }

    async fn fetch_timeseries(
        &self,
        name: &str,
        timeframe: Timeframe,
    ) -> Result<Vec<TimeSeriesPoint>, ProviderError> {
        self.get_json(&self.timeseries_url(name, timeframe)).await
    }
}
