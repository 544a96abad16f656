//! Asynchronous load service keeping the interactive thread free.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, warn};
use tokio::task;

use crate::loading::catalog::ZoneCatalog;
use crate::loading::loader::{LoadReport, load_segments};
use crate::model::ZoneSelection;

/// Runs load cycles on the blocking thread pool and guarantees that only the
/// most recently requested selection's result is delivered: a load finishing
/// after a newer one has started is discarded, not applied out of order.
#[derive(Debug)]
pub struct SegmentLoadService {
    catalog: Arc<ZoneCatalog>,
    generation: AtomicU64,
}

impl SegmentLoadService {
    pub fn new(catalog: ZoneCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            generation: AtomicU64::new(0),
        }
    }

    /// Load segments for `selection` off the calling thread.
    ///
    /// Returns `None` when the result went stale because a newer call
    /// started in the meantime; callers keep whatever collection they
    /// already hold in that case.
    pub async fn load(&self, selection: ZoneSelection) -> Option<LoadReport> {
        let generation = self.next_generation();
        debug!(
            "Load {generation} started for selection {:#06b}",
            selection.fingerprint()
        );

        let catalog = Arc::clone(&self.catalog);
        let handle = task::spawn_blocking(move || load_segments(&catalog, selection));
        let report = match handle.await {
            Ok(report) => report,
            Err(e) => {
                warn!("Load task failed: {e}");
                return None;
            }
        };

        if !self.is_current(generation) {
            debug!("Load {generation} superseded; discarding its result");
            return None;
        }
        Some(report)
    }

    pub fn catalog(&self) -> &ZoneCatalog {
        &self.catalog
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}
