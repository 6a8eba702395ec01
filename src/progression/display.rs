//! Display rows for status screens
//!
//! Converts raw stat XP into the level / threshold pairs a character
//! sheet shows, plus the compact XP formatting used next to them.

use crate::core::types::{StatName, StatValues};
use crate::progression::level::{next_threshold, stat_level, threshold_for};

/// A display-ready stat line
#[derive(Debug, Clone, PartialEq)]
pub struct StatRow {
    pub stat: StatName,
    pub xp: u64,
    pub level: u32,
    /// XP at which the next level unlocks, None at the cap
    pub next_threshold: Option<u64>,
    /// Bar fill for progress within the current level (0.0 to 1.0)
    pub bar_fill: f32,
}

impl StatRow {
    pub fn new(stat: StatName, xp: u64) -> Self {
        let level = stat_level(xp.min(i64::MAX as u64) as i64);
        let next = next_threshold(level);
        let floor = threshold_for(level).unwrap_or(0);

        let bar_fill = match next {
            Some(ceiling) if ceiling > floor => {
                ((xp.saturating_sub(floor)) as f64 / (ceiling - floor) as f64) as f32
            }
            _ => 1.0,
        };

        Self {
            stat,
            xp,
            level,
            next_threshold: next,
            bar_fill: bar_fill.clamp(0.0, 1.0),
        }
    }

    /// "xp / next" with compact numbers, or "xp / MAX" at the cap
    pub fn xp_label(&self, compact_from: u64) -> String {
        let next = self
            .next_threshold
            .map(|t| format_xp(t, compact_from))
            .unwrap_or_else(|| "MAX".to_string());
        format!("{} / {}", format_xp(self.xp, compact_from), next)
    }
}

/// One row per catalog stat, in catalog order
pub fn stat_rows(stats: &StatValues) -> Vec<StatRow> {
    stats.iter().map(|(stat, xp)| StatRow::new(stat, xp)).collect()
}

/// Format XP, switching to rounded thousands ("123k") from `compact_from`
pub fn format_xp(xp: u64, compact_from: u64) -> String {
    if xp >= compact_from {
        format!("{}k", xp / 1000 + u64::from(xp % 1000 >= 500))
    } else {
        xp.to_string()
    }
}
