use geo::{BoundingRect, Coord, Rect};

use crate::model::Segment;

/// Padding applied to each side of a segment's bounding box, in degrees.
/// A perfectly straight east-west or north-south segment would otherwise
/// produce a zero-area box that can never intersect anything.
pub const BOUNDS_EPSILON: f64 = 1e-4;

/// Axis-aligned bounding rectangle over the segment's cleaned points,
/// padded by [`BOUNDS_EPSILON`] (x = lon, y = lat).
pub fn segment_bounds(segment: &Segment) -> Option<Rect<f64>> {
    let rect = segment.geometry.bounding_rect()?;
    Some(Rect::new(
        Coord {
            x: rect.min().x - BOUNDS_EPSILON,
            y: rect.min().y - BOUNDS_EPSILON,
        },
        Coord {
            x: rect.max().x + BOUNDS_EPSILON,
            y: rect.max().y + BOUNDS_EPSILON,
        },
    ))
}
