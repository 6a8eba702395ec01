//! Overall level across all stats

use crate::core::types::{StatName, StatValues};
use crate::progression::level::{next_title, stat_level, title_by_level};
use serde::Serialize;

/// Aggregate progress derived from every catalog stat
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneralProgress {
    /// Floor of the mean stat level
    pub general_level: u32,
    /// Fractional part of the mean, in [0, 1)
    pub general_progress: f64,
    /// Unfloored mean of the stat levels
    pub average_level: f64,
    /// Title of the next titled level above `general_level`
    pub next_title: Option<&'static str>,
}

impl GeneralProgress {
    /// Title currently held at the general level
    pub fn title(&self) -> &'static str {
        title_by_level(self.general_level)
    }

    /// Progress toward the next general level, as a rounded percentage
    pub fn percent(&self) -> u32 {
        (self.general_progress * 100.0).round() as u32
    }
}

/// Levels of every catalog stat, in catalog order
pub fn stat_levels(stats: &StatValues) -> [u32; StatName::COUNT] {
    let mut levels = [1; StatName::COUNT];
    for (stat, xp) in stats.iter() {
        levels[stat.index()] = stat_level(xp.min(i64::MAX as u64) as i64);
    }
    levels
}

/// Mean the per-stat levels into a general level and progress fraction
pub fn aggregate_progress(stats: &StatValues) -> GeneralProgress {
    let levels = stat_levels(stats);
    let sum: u32 = levels.iter().sum();
    let average_level = sum as f64 / StatName::COUNT as f64;
    let general_level = average_level.floor() as u32;

    GeneralProgress {
        general_level,
        general_progress: average_level - general_level as f64,
        average_level,
        next_title: next_title(general_level),
    }
}

/// Shortcut for the general level alone, as stamped on history entries
pub fn general_level(stats: &StatValues) -> u32 {
    aggregate_progress(stats).general_level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_profile_is_level_one() {
        let progress = aggregate_progress(&StatValues::new());
        assert_eq!(progress.general_level, 1);
        assert_eq!(progress.general_progress, 0.0);
        assert_eq!(progress.next_title, Some("Humain ordinaire"));
        assert_eq!(progress.title(), "");
    }

    #[test]
    fn test_partial_progress_from_one_stat() {
        // One stat at level 2, eight at level 1: mean = 10 / 9
        let stats = StatValues::new().with(StatName::Force, 100);
        let progress = aggregate_progress(&stats);
        assert_eq!(progress.general_level, 1);
        assert!((progress.general_progress - 1.0 / 9.0).abs() < 1e-12);
        assert_eq!(progress.percent(), 11);
    }

    #[test]
    fn test_all_stats_at_cap() {
        let stats: StatValues = StatName::ALL.into_iter().map(|s| (s, 2_000_000)).collect();
        let progress = aggregate_progress(&stats);
        assert_eq!(progress.general_level, 100);
        assert_eq!(progress.general_progress, 0.0);
        assert_eq!(progress.next_title, None);
        assert_eq!(progress.title(), "Reiō (Roi Spirituel)");
    }

    #[test]
    fn test_level_plus_progress_equals_mean() {
        let stats = StatValues::new()
            .with(StatName::Force, 6_250)
            .with(StatName::Money, 500)
            .with(StatName::Family, 37_000);
        let progress = aggregate_progress(&stats);
        let mean = stat_levels(&stats).iter().sum::<u32>() as f64 / 9.0;
        assert!((progress.general_level as f64 + progress.general_progress - mean).abs() < 1e-9);
    }
}
