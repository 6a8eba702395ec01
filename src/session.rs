//! A live tracking session over one store
//!
//! `Tracker` owns the current profile. Each action runs one engine
//! transition, swaps in the resulting profile, then saves it. Engine
//! errors leave the profile untouched; save errors do not roll anything
//! back and are handed to the caller as a [`SaveStatus`] to report.

use crate::core::calendar::DateStamp;
use crate::core::config::TrackerConfig;
use crate::core::error::Result;
use crate::core::types::QuestCategory;
use crate::ledger::{self, Misstep, Quest};
use crate::profile::{export_profile, import_profile, ImportWarning, Profile};
use crate::progression::{aggregate_progress, rank_stats, stat_rows, GeneralProgress, StatRanking, StatRow};
use crate::store::ProfileStore;
use chrono::NaiveDate;

/// Whether the profile reached the store after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    Saved,
    /// The in-memory profile is still current; only the save was lost
    Failed(String),
}

impl SaveStatus {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveStatus::Saved)
    }
}

/// Result of an action plus how its save went
#[derive(Debug, Clone, PartialEq)]
pub struct Applied<T> {
    pub value: T,
    pub save: SaveStatus,
}

pub struct Tracker<S: ProfileStore> {
    store: S,
    profile: Profile,
    config: TrackerConfig,
    pinned_date: Option<NaiveDate>,
}

impl<S: ProfileStore> Tracker<S> {
    /// Load the stored profile, or start empty if the store has none
    ///
    /// Unreadable stored data is an error rather than an empty start, so a
    /// later save cannot overwrite it.
    pub fn open(store: S, config: TrackerConfig) -> Result<(Self, Vec<ImportWarning>)> {
        let (profile, warnings) = match store.load()? {
            Some(report) => (report.profile, report.warnings),
            None => {
                tracing::info!("No stored profile in {}, starting fresh", store.describe());
                (Profile::default(), Vec::new())
            }
        };
        let tracker = Self {
            store,
            profile,
            config,
            pinned_date: None,
        };
        Ok((tracker, warnings))
    }

    /// Stamp validations with `date` instead of today
    pub fn pin_date(&mut self, date: NaiveDate) {
        self.pinned_date = Some(date);
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn progress(&self) -> GeneralProgress {
        aggregate_progress(&self.profile.stats)
    }

    pub fn ranking(&self) -> StatRanking {
        rank_stats(
            &self.profile.stats,
            self.config.strengths_count,
            self.config.weaknesses_count,
        )
    }

    pub fn stat_rows(&self) -> Vec<StatRow> {
        stat_rows(&self.profile.stats)
    }

    fn stamp(&self) -> DateStamp {
        match self.pinned_date {
            Some(date) => DateStamp::from_date(date, &self.config.date_format),
            None => DateStamp::today(&self.config.date_format),
        }
    }

    /// Swap in the next profile and try to persist it
    fn commit(&mut self, next: Profile) -> SaveStatus {
        self.profile = next;
        self.persist()
    }

    /// Save the current profile again, e.g. after a failed save
    pub fn persist(&mut self) -> SaveStatus {
        match self.store.save(&self.profile) {
            Ok(()) => SaveStatus::Saved,
            Err(e) => {
                tracing::warn!("Save to {} failed: {}", self.store.describe(), e);
                SaveStatus::Failed(e.to_string())
            }
        }
    }

    /// Complete a quest; the value is the XP gained
    pub fn validate_quest(&mut self, category: QuestCategory, index: usize) -> Result<Applied<u64>> {
        let (next, xp_gained) = ledger::validate_quest(&self.profile, category, index, self.stamp())?;
        let save = self.commit(next);
        Ok(Applied { value: xp_gained, save })
    }

    /// Commit an error against the stats
    pub fn validate_misstep(&mut self, index: usize) -> Result<Applied<()>> {
        let next = ledger::validate_misstep(&self.profile, index, self.stamp())?;
        let save = self.commit(next);
        Ok(Applied { value: (), save })
    }

    pub fn upsert_quest(
        &mut self,
        category: QuestCategory,
        index: Option<usize>,
        quest: Quest,
    ) -> Result<SaveStatus> {
        let next = ledger::upsert_quest(&self.profile, category, index, quest)?;
        Ok(self.commit(next))
    }

    pub fn delete_quest(&mut self, category: QuestCategory, index: usize) -> Result<SaveStatus> {
        let next = ledger::delete_quest(&self.profile, category, index)?;
        Ok(self.commit(next))
    }

    pub fn reassign_quest(
        &mut self,
        from: QuestCategory,
        index: usize,
        to: QuestCategory,
    ) -> Result<SaveStatus> {
        let next = ledger::reassign_quest(&self.profile, from, index, to)?;
        Ok(self.commit(next))
    }

    pub fn upsert_misstep(&mut self, index: Option<usize>, misstep: Misstep) -> Result<SaveStatus> {
        let next = ledger::upsert_misstep(&self.profile, index, misstep)?;
        Ok(self.commit(next))
    }

    pub fn delete_misstep(&mut self, index: usize) -> Result<SaveStatus> {
        let next = ledger::delete_misstep(&self.profile, index)?;
        Ok(self.commit(next))
    }

    /// Replace the whole profile with an imported one
    ///
    /// Text that is not a JSON object fails and changes nothing.
    pub fn import(&mut self, text: &str) -> Result<Applied<Vec<ImportWarning>>> {
        let report = import_profile(text)?;
        let save = self.commit(report.profile);
        Ok(Applied {
            value: report.warnings,
            save,
        })
    }

    pub fn export(&self) -> Result<String> {
        export_profile(&self.profile)
    }
}
