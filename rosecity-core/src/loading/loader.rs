use log::{info, warn};
use rayon::prelude::*;

use crate::loading::catalog::{Source, ZoneCatalog};
use crate::loading::normalize::normalize;
use crate::loading::parser::{RawRecord, read_source};
use crate::model::{Segment, ZoneSelection};

/// Per-source load diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceStats {
    /// Source label: the zone stem or the legacy name.
    pub name: String,
    /// Raw records parsed from the file.
    pub records: usize,
    /// Records that survived normalization.
    pub kept: usize,
}

/// Result of one full load cycle. Replaced wholesale on the next cycle;
/// callers swap a reference and never mutate a live collection.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub segments: Vec<Segment>,
    pub sources: Vec<SourceStats>,
}

impl LoadReport {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Load and normalize all segments for the enabled zones.
///
/// Never fails as a whole: a missing or malformed source contributes zero
/// segments and a warning, and the worst outcome of any failure combination
/// is an empty collection.
pub fn load_segments(catalog: &ZoneCatalog, selection: ZoneSelection) -> LoadReport {
    let sources = catalog.sources(selection);

    // Parse every source up front. Records from all sources share one
    // fallback-id counter, so normalization itself stays sequential.
    let parsed: Vec<(Source, Vec<RawRecord>)> = sources
        .into_par_iter()
        .map(|source| {
            let records = match read_source(&source.path) {
                Ok(records) => records,
                Err(e) => {
                    warn!("Source '{}' contributed no records: {e}", source.name);
                    Vec::new()
                }
            };
            (source, records)
        })
        .collect();

    let mut report = LoadReport::default();
    let mut next_fallback_id: i64 = 1;
    for (source, records) in parsed {
        let mut kept = 0;
        for record in &records {
            if let Some(normalized) = normalize(record, next_fallback_id) {
                if normalized.used_fallback_id {
                    next_fallback_id += 1;
                }
                report.segments.push(normalized.segment);
                kept += 1;
            }
        }
        report.sources.push(SourceStats {
            name: source.name,
            records: records.len(),
            kept,
        });
    }

    info!(
        "Loaded {} segments from {} source(s)",
        report.segments.len(),
        report.sources.len()
    );
    report
}
