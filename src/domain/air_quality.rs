// AQI classification - severity tier, label, and display color
use serde::Serialize;

/// Discrete AQI severity buckets, from cleanest to worst. `Unknown` marks
/// a missing reading and sits outside the severity order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AqiTier {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    Unknown,
}

impl AqiTier {
    /// Position in the severity order, `None` for `Unknown`.
    pub fn rank(self) -> Option<u8> {
        match self {
            AqiTier::Good => Some(0),
            AqiTier::Moderate => Some(1),
            AqiTier::UnhealthySensitive => Some(2),
            AqiTier::Unhealthy => Some(3),
            AqiTier::Unknown => None,
        }
    }
}

/// Classification of one AQI reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AirQuality {
    pub tier: AqiTier,
    pub label: &'static str,
    pub color: &'static str,
}

/// Classify an optional AQI reading against the dashboard scale.
///
/// Inclusive upper bounds: 50 Good, 100 Moderate, 150 Unhealthy for
/// Sensitive Groups, everything above Unhealthy. An absent reading maps to
/// `Unknown` instead of falling through the thresholds as a clean score.
pub fn classify(aqi: Option<f64>) -> AirQuality {
    let Some(value) = aqi else {
        return AirQuality {
            tier: AqiTier::Unknown,
            label: "Unknown",
            color: "#94a3b8",
        };
    };

    if value <= 50.0 {
        AirQuality {
            tier: AqiTier::Good,
            label: "Good",
            color: "#10b981",
        }
    } else if value <= 100.0 {
        AirQuality {
            tier: AqiTier::Moderate,
            label: "Moderate",
            color: "#f59e0b",
        }
    } else if value <= 150.0 {
        AirQuality {
            tier: AqiTier::UnhealthySensitive,
            label: "Unhealthy for Sensitive Groups",
            color: "#f87171",
        }
    } else {
        AirQuality {
            tier: AqiTier::Unhealthy,
            label: "Unhealthy",
            color: "#7c2d12",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(classify(Some(0.0)).tier, AqiTier::Good);
        assert_eq!(classify(Some(42.0)).tier, AqiTier::Good);
        assert_eq!(classify(Some(65.0)).tier, AqiTier::Moderate);
        assert_eq!(classify(Some(120.0)).tier, AqiTier::UnhealthySensitive);
        assert_eq!(classify(Some(151.0)).tier, AqiTier::Unhealthy);
        assert_eq!(classify(Some(400.0)).tier, AqiTier::Unhealthy);
    }

    #[test]
    fn test_boundaries_land_in_the_lower_tier() {
        assert_eq!(classify(Some(50.0)).tier, AqiTier::Good);
        assert_eq!(classify(Some(100.0)).tier, AqiTier::Moderate);
        assert_eq!(classify(Some(150.0)).tier, AqiTier::UnhealthySensitive);
    }

    #[test]
    fn test_labels_and_colors() {
        assert_eq!(classify(Some(42.0)).label, "Good");
        assert_eq!(classify(Some(42.0)).color, "#10b981");
        assert_eq!(classify(Some(65.0)).label, "Moderate");
        assert_eq!(classify(Some(65.0)).color, "#f59e0b");
        assert_eq!(
            classify(Some(120.0)).label,
            "Unhealthy for Sensitive Groups"
        );
        assert_eq!(classify(Some(120.0)).color, "#f87171");
        assert_eq!(classify(Some(200.0)).label, "Unhealthy");
        assert_eq!(classify(Some(200.0)).color, "#7c2d12");
    }

    #[test]
    fn test_missing_reading_is_unknown_not_good() {
        let unknown = classify(None);
        assert_eq!(unknown.tier, AqiTier::Unknown);
        assert_eq!(unknown.label, "Unknown");
        assert_eq!(unknown.tier.rank(), None);
    }

    #[test]
    fn test_monotonic_over_present_readings() {
        let samples = [0.0, 10.0, 50.0, 50.1, 99.9, 100.0, 100.1, 150.0, 150.1, 500.0];
        for pair in samples.windows(2) {
            let lower = classify(Some(pair[0])).tier.rank().unwrap();
            let upper = classify(Some(pair[1])).tier.rank().unwrap();
            assert!(
                lower <= upper,
                "aqi {} ranked above aqi {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_total_over_negative_readings() {
        // A present negative value still threshold-classifies; only absence
        // means Unknown.
        assert_eq!(classify(Some(-1.0)).tier, AqiTier::Good);
    }
}
