// Equirectangular projection of geographic coordinates onto the map canvas
use serde::Serialize;

/// The canvas the dashboard map projects into, in viewBox units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Canvas {
    /// The dashboard map renders into a 100x60 viewBox.
    fn default() -> Self {
        Self::new(100.0, 60.0)
    }
}

/// A projected position on the map canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

/// Project latitude/longitude onto the canvas with a linear equirectangular
/// mapping. Illustrative, not navigational: no geodesic correction and no
/// range validation, so out-of-range coordinates land outside the canvas.
pub fn project(latitude: f64, longitude: f64, canvas: Canvas) -> MapPoint {
    MapPoint {
        x: ((longitude + 180.0) / 360.0) * canvas.width,
        y: ((90.0 - latitude) / 180.0) * canvas.height,
    }
}
