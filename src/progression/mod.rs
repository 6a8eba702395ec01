//! Progression calculator
//!
//! Pure functions from stat XP to levels and titles. Nothing here holds
//! state: callers recompute from the current stats whenever they change.
//!
//! A stat's level is looked up in a fixed 100-level threshold table, and
//! the general level is the floored mean of all nine stat levels.

pub mod aggregate;
pub mod display;
pub mod level;
pub mod ranking;
pub mod tables;

pub use aggregate::{aggregate_progress, general_level, stat_levels, GeneralProgress};
pub use display::{format_xp, stat_rows, StatRow};
pub use level::{next_threshold, next_title, stat_level, threshold_for, title_by_level};
pub use ranking::{highest, lowest, rank_stats, ranked, StatRanking};
pub use tables::{LEVEL_THRESHOLDS, LEVEL_TITLES, MAX_LEVEL};
