use std::path::PathBuf;

use log::warn;

use crate::error::Error;
use crate::model::{Zone, ZoneSelection};

/// Name of the single pre-zoning data file used when no zone is enabled.
pub const LEGACY_SOURCE: &str = "MapData";

/// A resolved data source: its display label and on-disk path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub path: PathBuf,
}

/// Resolves zones to their bundled data files.
#[derive(Debug, Clone)]
pub struct ZoneCatalog {
    data_dir: PathBuf,
}

impl ZoneCatalog {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Resolve one zone's data file, trying `<stem>.json` then bare `<stem>`.
    ///
    /// # Errors
    ///
    /// `Error::SourceNotFound` if neither file exists.
    pub fn resolve(&self, zone: Zone) -> Result<PathBuf, Error> {
        self.find(zone.file_stem())
    }

    /// Resolve the legacy pre-zoning source.
    ///
    /// # Errors
    ///
    /// `Error::SourceNotFound` if neither file exists.
    pub fn resolve_legacy(&self) -> Result<PathBuf, Error> {
        self.find(LEGACY_SOURCE)
    }

    /// Data sources for the given selection, in canonical zone order. With
    /// no zone enabled this falls back to the legacy source, preserving the
    /// pre-zoning behavior. Unresolvable sources are skipped with a warning,
    /// so the result can be empty.
    pub fn sources(&self, selection: ZoneSelection) -> Vec<Source> {
        let zones = selection.enabled_zones();
        if zones.is_empty() {
            return match self.resolve_legacy() {
                Ok(path) => vec![Source {
                    name: LEGACY_SOURCE.to_string(),
                    path,
                }],
                Err(e) => {
                    warn!("No zones enabled and no legacy fallback: {e}");
                    Vec::new()
                }
            };
        }

        zones
            .into_iter()
            .filter_map(|zone| match self.resolve(zone) {
                Ok(path) => Some(Source {
                    name: zone.to_string(),
                    path,
                }),
                Err(e) => {
                    warn!("Skipping zone {zone}: {e}");
                    None
                }
            })
            .collect()
    }

    fn find(&self, stem: &str) -> Result<PathBuf, Error> {
        let with_ext = self.data_dir.join(format!("{stem}.json"));
        if with_ext.is_file() {
            return Ok(with_ext);
        }
        let bare = self.data_dir.join(stem);
        if bare.is_file() {
            return Ok(bare);
        }
        Err(Error::SourceNotFound(stem.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn catalog() -> ZoneCatalog {
        ZoneCatalog::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data"))
    }

    #[test]
    fn resolves_zone_file_with_extension() {
        let path = catalog().resolve(Zone::Nw).unwrap();
        assert!(path.ends_with("NW.json"));
    }

    #[test]
    fn resolves_extensionless_zone_file() {
        let path = catalog().resolve(Zone::Sw).unwrap();
        assert!(path.ends_with("SW"));
    }

    #[test]
    fn empty_selection_falls_back_to_legacy_source() {
        let sources = catalog().sources(ZoneSelection::default());
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].name, LEGACY_SOURCE);
    }

    #[test]
    fn sources_follow_canonical_zone_order() {
        let selection = ZoneSelection {
            se: true,
            nw: true,
            ..Default::default()
        };
        let names: Vec<_> = catalog()
            .sources(selection)
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, ["NW", "SE"]);
    }

    #[test]
    fn missing_zone_is_skipped_not_fatal() {
        let catalog = ZoneCatalog::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/bad"));
        assert!(matches!(
            catalog.resolve(Zone::Se),
            Err(Error::SourceNotFound(_))
        ));
        let selection = ZoneSelection {
            ne: true,
            se: true,
            ..Default::default()
        };
        let sources = catalog.sources(selection);
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].name, "NE");
    }
}
