//! Validation: the only operations that move stat XP
//!
//! Both take the current profile by reference and return a new one, so a
//! failed validation leaves the caller's profile exactly as it was.

use crate::core::calendar::DateStamp;
use crate::core::error::{Result, TrackerError};
use crate::core::types::QuestCategory;
use crate::ledger::items::HistoryEntry;
use crate::profile::Profile;
use crate::progression::general_level;

/// Complete a pending quest
///
/// Every non-zero reward is added to its stat (a negative one lowers the
/// stat, never below zero). The returned XP counts positive rewards only.
/// A history snapshot is appended, stamped with `date` and the general
/// level after the rewards. Secondary and main quests leave their list;
/// daily quests stay for the next completion.
pub fn validate_quest(
    profile: &Profile,
    category: QuestCategory,
    index: usize,
    date: DateStamp,
) -> Result<(Profile, u64)> {
    let pending = profile.quests.list(category);
    let quest = pending.get(index).ok_or_else(|| {
        TrackerError::out_of_range(format!("quests.{}", category), index, pending.len())
    })?;

    let mut next = profile.clone();
    let mut xp_gained: u64 = 0;
    for (stat, amount) in quest.rewards.effective() {
        next.stats.apply_delta(stat, amount);
        if amount > 0 {
            xp_gained = xp_gained.saturating_add(amount as u64);
        }
    }

    let level = general_level(&next.stats);
    next.validated_history.push(HistoryEntry::for_quest(quest, date, level));

    if !category.is_recurring() {
        next.quests.list_mut(category).remove(index);
    }

    tracing::info!(
        "Quest '{}' validated from {}: +{} XP, general level {}",
        quest.title,
        category,
        xp_gained,
        level
    );
    Ok((next, xp_gained))
}

/// Commit a pending error
///
/// Each non-zero penalty is subtracted as an absolute value, whatever sign
/// it was stored with, and the stat floors at zero. The error stays in the
/// list so it can be committed again.
pub fn validate_misstep(profile: &Profile, index: usize, date: DateStamp) -> Result<Profile> {
    let misstep = profile
        .errors
        .get(index)
        .ok_or_else(|| TrackerError::out_of_range("errors", index, profile.errors.len()))?;

    let mut next = profile.clone();
    let mut xp_lost: u64 = 0;
    for (stat, magnitude) in misstep.penalty.effective() {
        let current = next.stats.get(stat);
        let updated = current.saturating_sub(magnitude.unsigned_abs());
        xp_lost = xp_lost.saturating_add(current - updated);
        next.stats.set(stat, updated);
    }

    let level = general_level(&next.stats);
    next.validated_history.push(HistoryEntry::for_misstep(misstep, date, level));

    tracing::info!(
        "Error '{}' committed: -{} XP, general level {}",
        misstep.title,
        xp_lost,
        level
    );
    Ok(next)
}
