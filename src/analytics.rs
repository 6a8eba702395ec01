//! Dashboard summary over a profile

use crate::core::config::TrackerConfig;
use crate::core::types::{StatName, StatValues};
use crate::ledger::items::{HistoryEntry, LedgerItem};
use crate::profile::Profile;
use crate::progression::aggregate_progress;

/// Everything the analytics dashboard shows
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub total_xp: u64,
    pub general_level: u32,
    /// Secondary + main quests still pending (dailies never run out)
    pub remaining_quests: usize,
    /// How many pending quests carry each tag, catalog order, zeros omitted
    pub tag_counts: Vec<(StatName, usize)>,
    pub next_title: Option<&'static str>,
    pub weakest: Vec<StatName>,
    /// Most recent first
    pub recent_quests: Vec<HistoryEntry>,
    /// Most recent first
    pub recent_errors: Vec<HistoryEntry>,
}

impl Dashboard {
    pub fn build(profile: &Profile, config: &TrackerConfig) -> Self {
        let progress = aggregate_progress(&profile.stats);

        let mut counts = [0usize; StatName::COUNT];
        for (_, quest) in profile.quests.iter() {
            for tag in quest.tags() {
                counts[tag.index()] += 1;
            }
        }
        let tag_counts = StatName::ALL
            .into_iter()
            .filter(|s| counts[s.index()] > 0)
            .map(|s| (s, counts[s.index()]))
            .collect();

        Self {
            total_xp: profile.stats.total(),
            general_level: progress.general_level,
            remaining_quests: profile.quests.secondaire.len() + profile.quests.principale.len(),
            tag_counts,
            next_title: progress.next_title,
            weakest: weakest_first(&profile.stats, config.dashboard_weakest),
            recent_quests: most_recent(profile.quest_history(), config.recent_history),
            recent_errors: most_recent(profile.misstep_history(), config.recent_history),
        }
    }

    /// Share of each tag among all tag uses, as rounded percentages
    pub fn tag_shares(&self) -> Vec<(StatName, u32)> {
        let total: usize = self.tag_counts.iter().map(|(_, n)| n).sum();
        if total == 0 {
            return Vec::new();
        }
        self.tag_counts
            .iter()
            .map(|(s, n)| (*s, ((*n as f64 / total as f64) * 100.0).round() as u32))
            .collect()
    }
}

/// The `n` weakest stats, weakest first; ties keep catalog order
fn weakest_first(stats: &StatValues, n: usize) -> Vec<StatName> {
    let mut order: Vec<(StatName, u64)> = stats.iter().collect();
    order.sort_by_key(|(_, xp)| *xp);
    order.into_iter().take(n).map(|(s, _)| s).collect()
}

fn most_recent<'a>(entries: impl Iterator<Item = &'a HistoryEntry>, n: usize) -> Vec<HistoryEntry> {
    let all: Vec<&HistoryEntry> = entries.collect();
    all.into_iter().rev().take(n).cloned().collect()
}
