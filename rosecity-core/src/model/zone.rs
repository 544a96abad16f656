use std::fmt;

/// One of the four fixed city zones, matching the data file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    Nw,
    Ne,
    Se,
    Sw,
}

impl Zone {
    /// Canonical zone order, used wherever a zone list is produced.
    pub const ALL: [Self; 4] = [Self::Nw, Self::Ne, Self::Se, Self::Sw];

    /// File stem of the zone's data file, e.g. `NW` -> `NW.json`.
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::Nw => "NW",
            Self::Ne => "NE",
            Self::Se => "SE",
            Self::Sw => "SW",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

/// Snapshot of the externally owned zone toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoneSelection {
    pub nw: bool,
    pub ne: bool,
    pub se: bool,
    pub sw: bool,
}

impl ZoneSelection {
    pub fn all() -> Self {
        Self {
            nw: true,
            ne: true,
            se: true,
            sw: true,
        }
    }

    fn contains(self, zone: Zone) -> bool {
        match zone {
            Zone::Nw => self.nw,
            Zone::Ne => self.ne,
            Zone::Se => self.se,
            Zone::Sw => self.sw,
        }
    }

    /// Enabled zones in canonical order, regardless of toggle order.
    pub fn enabled_zones(self) -> Vec<Zone> {
        Zone::ALL
            .into_iter()
            .filter(|zone| self.contains(*zone))
            .collect()
    }

    /// Stable bitmask identifying this selection. Load requests are keyed by
    /// it so a changed selection supersedes an in-flight load.
    pub fn fingerprint(self) -> u8 {
        u8::from(self.nw)
            | u8::from(self.ne) << 1
            | u8::from(self.se) << 2
            | u8::from(self.sw) << 3
    }
}
