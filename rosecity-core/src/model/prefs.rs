use crate::model::LaneCategory;

/// Per-category lane visibility toggles. Externally owned; the engine only
/// ever reads a snapshot. Everything is visible by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneVisibility {
    pub greenway: bool,
    pub bike_lane: bool,
    pub difficult: bool,
    pub multi_use_path: bool,
}

impl Default for LaneVisibility {
    fn default() -> Self {
        Self {
            greenway: true,
            bike_lane: true,
            difficult: true,
            multi_use_path: true,
        }
    }
}

impl LaneVisibility {
    /// Whether segments of `category` should be drawn. Unrecognized codes
    /// have no toggle and are always drawn.
    pub fn allows(self, category: LaneCategory) -> bool {
        match category {
            LaneCategory::Greenway => self.greenway,
            LaneCategory::BikeLane => self.bike_lane,
            LaneCategory::Difficult => self.difficult,
            LaneCategory::MultiUsePath => self.multi_use_path,
            LaneCategory::Unknown => true,
        }
    }
}

/// Snapshot of the visibility preferences read on every filter pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityPrefs {
    pub lanes: LaneVisibility,
    /// When set, the camera-distance cutoff is ignored.
    pub zoom_override: bool,
}
