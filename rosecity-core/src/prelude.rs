pub use crate::MAX_DRAW_DISTANCE;

// Re-export key components
pub use crate::error::Error;
pub use crate::filter::{segment_bounds, visible_segments};
pub use crate::loading::{
    LoadReport, SegmentLoadService, SourceStats, ZoneCatalog, load_segments,
};
pub use crate::model::{
    LaneCategory, LaneVisibility, Segment, Viewport, VisibilityPrefs, Zone, ZoneSelection,
};
