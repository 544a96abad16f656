//! Pure visibility filtering: zoom gate, lane-category gate and
//! viewport-intersection gate, recomputed from scratch on every
//! camera-settle or preference change. At this data scale a stateless
//! recomputation beats maintaining an incremental index.

mod bounds;
mod visibility;

pub use bounds::{BOUNDS_EPSILON, segment_bounds};
pub use visibility::visible_segments;
