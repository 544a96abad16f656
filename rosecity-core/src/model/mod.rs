//! Data model for the bike-infrastructure map
//!
//! Contains the durable segment type, the zone enumeration and the
//! preference/viewport snapshots the engine reads on each call.

pub mod prefs;
pub mod segment;
pub mod viewport;
pub mod zone;

// Re-export of basic types for convenience
pub use prefs::{LaneVisibility, VisibilityPrefs};
pub use segment::{LaneCategory, Segment};
pub use viewport::Viewport;
pub use zone::{Zone, ZoneSelection};
