// City service - use cases for the list, summary, and time series views
use std::sync::Arc;

use crate::application::city_provider::{CityProvider, ProviderError};
use crate::domain::city::{CityIdentity, CitySummary};
use crate::domain::filter::Timeframe;
use crate::domain::timeseries::TimeSeriesPoint;

#[derive(Clone)]
pub struct CityService {
    provider: Arc<dyn CityProvider>,
}

impl CityService {
    pub fn new(provider: Arc<dyn CityProvider>) -> Self {
        Self { provider }
    }

    pub async fn list_cities(&self) -> Result<Vec<CityIdentity>, ProviderError> {
        let cities = self.provider.list_cities().await?;
        tracing::debug!("backend listed {} cities", cities.len());
        Ok(cities)
    }

    pub async fn city_summary(&self, name: &str) -> Result<CitySummary, ProviderError> {
        self.provider.fetch_summary(name).await
    }

    pub async fn city_timeseries(
        &self,
        name: &str,
        timeframe: Timeframe,
    ) -> Result<Vec<TimeSeriesPoint>, ProviderError> {
        let points = self.provider.fetch_timeseries(name, timeframe).await?;
        tracing::debug!(
            "backend returned {} points for {} over {}",
            points.len(),
            name,
            timeframe.as_str()
        );
        Ok(points)
    }
}
