use geo::LineString;

/// Lane category derived from a segment's raw connection-type code. Used for
/// filtering and for the renderer's color mapping; never stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneCategory {
    /// Neighborhood greenway (`NG`)
    Greenway,
    /// Bike lane variants (`BL`, `BBL`, `BBBL`, `PBL`, `SR_LT`, `SR`)
    BikeLane,
    /// Difficult / discontinuous / construction (`DC`)
    Difficult,
    /// Multi-use path or trail (`MUP`, `MUP_P`, `TRL`)
    MultiUsePath,
    /// Any unrecognized code
    Unknown,
}

impl LaneCategory {
    /// Map a connection-type code to its category. Case-insensitive, though
    /// normalized segments always carry uppercase codes.
    pub fn from_code(code: &str) -> Self {
        match code.to_uppercase().as_str() {
            "BL" | "BBL" | "BBBL" | "PBL" | "SR_LT" | "SR" => Self::BikeLane,
            "MUP" | "MUP_P" | "TRL" => Self::MultiUsePath,
            "DC" => Self::Difficult,
            "NG" => Self::Greenway,
            _ => Self::Unknown,
        }
    }
}

/// A cleaned, drawable bike-infrastructure segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Source id when the record carried one, otherwise a sequential
    /// fallback assigned during the load cycle. Source ids are trusted
    /// verbatim and are not guaranteed unique across zone files.
    pub id: i64,
    /// Display name, `"Unnamed"` when the source has none.
    pub street_name: String,
    /// Uppercased raw connection-type code, `"UNKNOWN"` when absent.
    pub connection_type: String,
    /// At least two finite points, x = longitude, y = latitude.
    pub geometry: LineString<f64>,
}

impl Segment {
    pub fn lane_category(&self) -> LaneCategory {
        LaneCategory::from_code(&self.connection_type)
    }
}
