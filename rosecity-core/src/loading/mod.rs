//! This module is responsible for resolving zone data sources, parsing and
//! normalizing their records and running full load cycles off the
//! interactive thread.

mod catalog;
mod loader;
mod normalize;
mod parser;
mod service;

pub use catalog::{LEGACY_SOURCE, Source, ZoneCatalog};
pub use loader::{LoadReport, SourceStats, load_segments};
pub use normalize::{Normalized, normalize};
pub use parser::{RawRecord, parse_records, read_source};
pub use service::SegmentLoadService;
