use geo::Intersects;

use crate::MAX_DRAW_DISTANCE;
use crate::filter::bounds::segment_bounds;
use crate::model::{Segment, Viewport, VisibilityPrefs};

/// Segments that should be handed to the renderer, as an AND of three
/// independent gates:
///
/// - zoom gate: past [`MAX_DRAW_DISTANCE`] nothing is drawn unless the
///   zoom override is set,
/// - lane-category gate: the segment's derived category must be enabled
///   (unrecognized categories always pass),
/// - viewport gate: the segment's padded bounding box must intersect the
///   visible region.
///
/// Before the first camera-settle event there is no viewport and nothing is
/// visible. Pure: reads only its arguments, owns no state between calls.
pub fn visible_segments<'a>(
    segments: &'a [Segment],
    prefs: &VisibilityPrefs,
    viewport: Option<&Viewport>,
) -> Vec<&'a Segment> {
    let Some(viewport) = viewport else {
        return Vec::new();
    };
    if !prefs.zoom_override && viewport.camera_distance > MAX_DRAW_DISTANCE {
        return Vec::new();
    }

    let view_rect = viewport.rect();
    segments
        .iter()
        .filter(|segment| prefs.lanes.allows(segment.lane_category()))
        .filter(|segment| {
            segment_bounds(segment).is_some_and(|bounds| bounds.intersects(&view_rect))
        })
        .collect()
}
