// City domain models
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A city as listed by the backend. The name is the identity key: the
/// backend guarantees no separate stable ID across the list, summary, and
/// time series calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityIdentity {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl CityIdentity {
    pub fn new(name: String, latitude: f64, longitude: f64) -> Self {
        Self {
            name,
            latitude,
            longitude,
        }
    }
}

/// Current environmental readings for one city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitySummary {
    pub name: String,
    /// Absent when the backend has no current air quality reading.
    #[serde(default)]
    pub aqi: Option<f64>,
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub energy_consumption: f64,
    pub transport_activity: f64,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl CitySummary {
    /// Join a fetched summary with the identity it was fetched for. The
    /// identity's name and coordinates take precedence over whatever the
    /// backend echoed back.
    pub fn merged_with(mut self, identity: &CityIdentity) -> Self {
        self.name = identity.name.clone();
        self.latitude = identity.latitude;
        self.longitude = identity.longitude;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merged_with_prefers_identity_fields() {
        let identity = CityIdentity::new("New York".to_string(), 40.7128, -74.006);
        let summary = CitySummary {
            name: "new-york".to_string(),
            aqi: Some(65.0),
            temperature: 22.0,
            humidity: 65.0,
            wind_speed: 12.0,
            energy_consumption: 8500.0,
            transport_activity: 9200.0,
            latitude: 0.0,
            longitude: 0.0,
            timestamp: None,
        };

        let merged = summary.merged_with(&identity);
        assert_eq!(merged.name, "New York");
        assert_eq!(merged.latitude, 40.7128);
        assert_eq!(merged.longitude, -74.006);
        assert_eq!(merged.aqi, Some(65.0));
        assert_eq!(merged.temperature, 22.0);
    }
}
