//! Strongest / weakest stat ranking

use crate::core::types::{StatName, StatValues};

/// Catalog sorted by XP descending; ties keep catalog order
pub fn ranked(stats: &StatValues) -> Vec<(StatName, u64)> {
    let mut order: Vec<(StatName, u64)> = stats.iter().collect();
    // sort_by is stable, so equal XP stays in catalog order
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order
}

/// The `n` stats with the most XP, strongest first
pub fn highest(stats: &StatValues, n: usize) -> Vec<StatName> {
    ranked(stats).into_iter().take(n).map(|(s, _)| s).collect()
}

/// The `n` stats with the least XP
///
/// Taken from the tail of the descending ranking, so they keep that
/// ranking's order (the very weakest comes last).
pub fn lowest(stats: &StatValues, n: usize) -> Vec<StatName> {
    let order = ranked(stats);
    let start = order.len().saturating_sub(n);
    order[start..].iter().map(|(s, _)| *s).collect()
}

/// Strengths and weaknesses for a profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatRanking {
    pub strongest: Vec<StatName>,
    pub weakest: Vec<StatName>,
}

/// Rank the catalog and slice both ends
pub fn rank_stats(stats: &StatValues, strongest: usize, weakest: usize) -> StatRanking {
    StatRanking {
        strongest: highest(stats, strongest),
        weakest: lowest(stats, weakest),
    }
}
