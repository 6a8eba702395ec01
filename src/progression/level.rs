//! Per-stat level and title lookups

use crate::progression::tables::{LEVEL_THRESHOLDS, LEVEL_TITLES, MAX_LEVEL};

/// Level reached with `xp` cumulative experience
///
/// Non-positive XP is level 1. Otherwise this is the highest level whose
/// threshold is at or below `xp`, found by walking the table in ascending
/// level order and stopping at the first threshold not yet reached.
pub fn stat_level(xp: i64) -> u32 {
    if xp <= 0 {
        return 1;
    }
    let xp = xp as u64;

    let mut level = 1;
    for &(lvl, threshold) in LEVEL_THRESHOLDS.iter() {
        if xp >= threshold {
            level = lvl;
        } else {
            break;
        }
    }
    level
}

/// Title shown for a level
///
/// Uses the title registered at `level`, else the nearest lower level that
/// has one, else the empty string.
pub fn title_by_level(level: u32) -> &'static str {
    for lvl in (1..=level).rev() {
        if let Some((_, title)) = LEVEL_TITLES.iter().find(|(l, _)| *l == lvl) {
            return title;
        }
    }
    ""
}

/// Title of the first titled level strictly above `level`
///
/// None once `level` has reached the last titled level.
pub fn next_title(level: u32) -> Option<&'static str> {
    LEVEL_TITLES
        .iter()
        .find(|(l, _)| *l > level)
        .map(|(_, title)| *title)
}

/// Minimum XP for `level`, if the table defines it
pub fn threshold_for(level: u32) -> Option<u64> {
    LEVEL_THRESHOLDS
        .iter()
        .find(|(l, _)| *l == level)
        .map(|(_, xp)| *xp)
}

/// XP needed to reach the level after `level` (None at the cap)
pub fn next_threshold(level: u32) -> Option<u64> {
    if level >= MAX_LEVEL {
        return None;
    }
    threshold_for(level + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_positive_xp_is_level_one() {
        assert_eq!(stat_level(0), 1);
        assert_eq!(stat_level(-1), 1);
        assert_eq!(stat_level(i64::MIN), 1);
    }

    #[test]
    fn test_level_two_boundary() {
        assert_eq!(stat_level(90), 1);
        assert_eq!(stat_level(99), 1);
        assert_eq!(stat_level(100), 2);
        assert_eq!(stat_level(249), 2);
        assert_eq!(stat_level(250), 3);
    }

    #[test]
    fn test_level_caps_at_one_hundred() {
        assert_eq!(stat_level(1_190_500), 100);
        assert_eq!(stat_level(1_190_499), 99);
        assert_eq!(stat_level(i64::MAX), 100);
    }

    #[test]
    fn test_every_threshold_is_exact() {
        for &(level, threshold) in LEVEL_THRESHOLDS.iter().skip(1) {
            assert_eq!(stat_level(threshold as i64), level);
            assert_eq!(stat_level(threshold as i64 - 1), level - 1);
        }
    }

    #[test]
    fn test_title_falls_back_to_lower_level() {
        assert_eq!(title_by_level(1), "");
        assert_eq!(title_by_level(2), "Humain ordinaire");
        assert_eq!(title_by_level(3), "Humain ordinaire");
        assert_eq!(title_by_level(21), "Capitaine du Gotei 13");
        assert_eq!(title_by_level(100), "Reiō (Roi Spirituel)");
        assert_eq!(title_by_level(0), "");
    }

    #[test]
    fn test_next_title() {
        assert_eq!(next_title(1), Some("Humain ordinaire"));
        assert_eq!(next_title(2), Some("Sensitif spirituel"));
        assert_eq!(next_title(99), Some("Reiō (Roi Spirituel)"));
        assert_eq!(next_title(100), None);
    }

    #[test]
    fn test_next_threshold() {
        assert_eq!(next_threshold(1), Some(100));
        assert_eq!(next_threshold(99), Some(1_190_500));
        assert_eq!(next_threshold(100), None);
    }
}
