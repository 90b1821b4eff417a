//! Scaffolds the next day's solution project in a coding-event workspace.
//!
//! A workspace holds one Cargo project per day (`day1`, `day2`, ...), a shared
//! `utils` library and a `puzzles/` directory with the inputs for each day.

pub mod config;
pub mod day;
pub mod error;
pub mod scaffold;

pub use day::DayId;
pub use scaffold::{ScaffoldOptions, ScaffoldReport, Variant, scaffold_day};
