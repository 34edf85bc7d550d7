// Filter state shared by the dashboard views
use serde::{Deserialize, Serialize};

/// The metric a chart view plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Aqi,
    Temperature,
    Energy,
    Transport,
}

impl Metric {
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Aqi => "aqi",
            Metric::Temperature => "temperature",
            Metric::Energy => "energy",
            Metric::Transport => "transport",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "aqi" => Some(Metric::Aqi),
            "temperature" => Some(Metric::Temperature),
            "energy" => Some(Metric::Energy),
            "transport" => Some(Metric::Transport),
            _ => None,
        }
    }
}

/// Span of historical data requested for the time series view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Timeframe {
    #[default]
    #[serde(rename = "24h")]
    H24,
    #[serde(rename = "7d")]
    D7,
    #[serde(rename = "30d")]
    D30,
}

impl Timeframe {
    pub fn as_str(self) -> &'static str {
        match self {
            Timeframe::H24 => "24h",
            Timeframe::D7 => "7d",
            Timeframe::D30 => "30d",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "24h" => Some(Timeframe::H24),
            "7d" => Some(Timeframe::D7),
            "30d" => Some(Timeframe::D30),
            _ => None,
        }
    }
}

/// Filter selection shared by the card grid, chart, and map views. A value
/// object: every update replaces the whole state, nothing mutates in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub selected_city: Option<String>,
    pub selected_metric: Metric,
    pub timeframe: Timeframe,
}

impl FilterState {
    pub fn with_city(self, city: Option<String>) -> Self {
        Self {
            selected_city: city,
            ..self
        }
    }

    pub fn with_metric(self, metric: Metric) -> Self {
        Self {
            selected_metric: metric,
            ..self
        }
    }

    pub fn with_timeframe(self, timeframe: Timeframe) -> Self {
        Self { timeframe, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = FilterState::default();
        assert_eq!(state.selected_city, None);
        assert_eq!(state.selected_metric, Metric::Aqi);
        assert_eq!(state.timeframe, Timeframe::H24);
    }

    #[test]
    fn test_updates_replace_only_the_targeted_field() {
        let state = FilterState::default()
            .with_city(Some("Tokyo".to_string()))
            .with_timeframe(Timeframe::D7);

        assert_eq!(state.selected_city.as_deref(), Some("Tokyo"));
        assert_eq!(state.selected_metric, Metric::Aqi);
        assert_eq!(state.timeframe, Timeframe::D7);

        let cleared = state.with_city(None);
        assert_eq!(cleared.selected_city, None);
        assert_eq!(cleared.timeframe, Timeframe::D7);
    }

    #[test]
    fn test_timeframe_wire_spellings() {
        assert_eq!(Timeframe::parse("24h"), Some(Timeframe::H24));
        assert_eq!(Timeframe::parse("7d"), Some(Timeframe::D7));
        assert_eq!(Timeframe::parse("30d"), Some(Timeframe::D30));
        assert_eq!(Timeframe::parse("1y"), None);

        assert_eq!(Timeframe::D30.as_str(), "30d");
        assert_eq!(Timeframe::parse(Timeframe::H24.as_str()), Some(Timeframe::H24));
    }

    #[test]
    fn test_metric_wire_spellings() {
        assert_eq!(Metric::parse("aqi"), Some(Metric::Aqi));
        assert_eq!(Metric::parse("energy"), Some(Metric::Energy));
        assert_eq!(Metric::parse("co2"), None);
        assert_eq!(Metric::Transport.as_str(), "transport");
    }
}
