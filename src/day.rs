//! Day identifiers and detection of the next day from a workspace listing.

use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::DayError;

const PREFIX: &str = "day";

/// One puzzle-solving unit of work, rendered as `day{N}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub struct DayId(u32);

impl DayId {
    pub const FIRST: DayId = DayId(1);

    pub fn new(number: u32) -> Self {
        Self(number)
    }

    pub fn number(self) -> u32 {
        self.0
    }

    /// The following day, or `None` past `u32::MAX`.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for DayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PREFIX}{}", self.0)
    }
}

impl From<DayId> for String {
    fn from(day: DayId) -> Self {
        day.to_string()
    }
}

impl FromStr for DayId {
    type Err = DayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(PREFIX)
            .and_then(|n| n.parse().ok())
            .map(DayId)
            .ok_or_else(|| DayError::MalformedEntry {
                entry: s.to_string(),
            })
    }
}

/// What the `day*` listing looked like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    Empty,
    Found { latest: DayId },
}

/// Lists `day*` entries directly under `base` and returns the highest day.
///
/// Both files and directories count, and the maximum is numeric. Any entry
/// whose suffix is not an integer fails the whole scan.
pub fn scan_days(base: &Path) -> Result<Scan, DayError> {
    let escaped = glob::Pattern::escape(&base.to_string_lossy());
    let pattern = Path::new(&escaped).join(format!("{PREFIX}*"));
    let pattern = pattern.to_string_lossy().into_owned();

    let paths = glob::glob(&pattern).map_err(|source| DayError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut days = Vec::new();
    for path in paths {
        let path = path?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        days.push(name.parse::<DayId>()?);
    }
    days.sort();

    Ok(match days.pop() {
        Some(latest) => Scan::Found { latest },
        None => Scan::Empty,
    })
}

/// How the next day was arrived at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Origin {
    /// Continues after the highest existing day.
    Continued { latest: DayId },
    /// No `day*` entries existed.
    FirstRun,
    /// The listing could not be read; treated as a first run.
    Recovered { reason: String },
}

impl Origin {
    /// True when the workspace is treated as fresh and `puzzles/` must be created.
    pub fn starts_fresh(&self) -> bool {
        !matches!(self, Origin::Continued { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextDay {
    pub day: DayId,
    pub origin: Origin,
}

/// Determines the next day identifier for the workspace at `base`.
///
/// In lenient mode a failed scan falls back to day 1, the same as an empty
/// workspace. In strict mode it is returned as an error. Running out of day
/// numbers is an error in both modes.
pub fn next_day(base: &Path, strict: bool) -> Result<NextDay, DayError> {
    match scan_days(base) {
        Ok(Scan::Found { latest }) => Ok(NextDay {
            day: latest.next().ok_or(DayError::Exhausted { latest })?,
            origin: Origin::Continued { latest },
        }),
        Ok(Scan::Empty) => Ok(NextDay {
            day: DayId::FIRST,
            origin: Origin::FirstRun,
        }),
        Err(e) if strict => Err(e),
        Err(e) => {
            tracing::warn!("Day detection failed, starting from {}: {e}", DayId::FIRST);
            Ok(NextDay {
                day: DayId::FIRST,
                origin: Origin::Recovered {
                    reason: e.to_string(),
                },
            })
        }
    }
}
