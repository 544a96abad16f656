use geo::{Coord, Rect};

/// The currently visible map region plus camera distance, captured once per
/// camera-settle event and handed to the filter as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Center longitude in degrees.
    pub center_lon: f64,
    /// Center latitude in degrees.
    pub center_lat: f64,
    /// Full longitude span of the visible region, degrees.
    pub lon_span: f64,
    /// Full latitude span of the visible region, degrees.
    pub lat_span: f64,
    /// Camera distance in map distance units.
    pub camera_distance: f64,
}

impl Viewport {
    /// Portland city-center region, the map's initial camera position.
    pub fn portland(camera_distance: f64) -> Self {
        Self {
            center_lon: -122.6784,
            center_lat: 45.5152,
            lon_span: 0.2,
            lat_span: 0.2,
            camera_distance,
        }
    }

    /// Geographic rectangle of the visible region (x = lon, y = lat).
    pub fn rect(&self) -> Rect<f64> {
        Rect::new(
            Coord {
                x: self.center_lon - self.lon_span / 2.0,
                y: self.center_lat - self.lat_span / 2.0,
            },
            Coord {
                x: self.center_lon + self.lon_span / 2.0,
                y: self.center_lat + self.lat_span / 2.0,
            },
        )
    }
}
