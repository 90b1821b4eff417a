use std::path::PathBuf;

use thiserror::Error;

use crate::day::DayId;

#[derive(Error, Debug)]
pub enum DayError {
    #[error("Invalid day pattern {pattern}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to read workspace entry: {0}")]
    Unreadable(#[from] glob::GlobError),

    #[error("Entry {entry:?} looks like a day but has no numeric suffix")]
    MalformedEntry { entry: String },

    #[error("No day number follows {latest}")]
    Exhausted { latest: DayId },
}

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} failed in {}: {stderr}", dir.display())]
    Failed {
        command: String,
        dir: PathBuf,
        stderr: String,
    },
}
