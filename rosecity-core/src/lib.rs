//! Core engine for the Rose City bike-infrastructure map.
//!
//! The engine owns three concerns:
//! - loading the per-zone data files and normalizing their records into
//!   clean, drawable [`model::Segment`]s ([`loading`]),
//! - deciding which segments are handed to the renderer for the current
//!   viewport, zoom state and lane-visibility preferences ([`filter`]),
//! - the small data model shared between the two ([`model`]).
//!
//! Map rendering, preference persistence and UI chrome live in the embedding
//! application. The engine only reads preference snapshots passed into each
//! call and never touches ambient state, which keeps it testable without a
//! platform settings store.

pub mod error;
pub mod filter;
pub mod loading;
pub mod model;
pub mod prelude;

pub use error::Error;

/// Camera distance above which nothing is drawn unless the user overrides
/// the zoom limit. Units match the map camera distance (roughly meters).
pub const MAX_DRAW_DISTANCE: f64 = 15_000.0;
