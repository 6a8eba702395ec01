//! The profile aggregate: stats, pending quests and errors, history
//!
//! A `Profile` is a plain value. Engine operations never mutate one in
//! place; they return the next profile.

pub mod io;

use crate::core::types::{QuestCategory, StatValues};
use crate::ledger::items::{HistoryEntry, Misstep, Quest};
use serde::{Deserialize, Serialize};

pub use io::{export_profile, import_profile, ImportReport, ImportWarning};

/// Pending quests, one list per category
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuestBoard {
    #[serde(default)]
    pub quotidienne: Vec<Quest>,
    #[serde(default)]
    pub secondaire: Vec<Quest>,
    #[serde(default)]
    pub principale: Vec<Quest>,
}

impl QuestBoard {
    pub fn list(&self, category: QuestCategory) -> &Vec<Quest> {
        match category {
            QuestCategory::Quotidienne => &self.quotidienne,
            QuestCategory::Secondaire => &self.secondaire,
            QuestCategory::Principale => &self.principale,
        }
    }

    pub fn list_mut(&mut self, category: QuestCategory) -> &mut Vec<Quest> {
        match category {
            QuestCategory::Quotidienne => &mut self.quotidienne,
            QuestCategory::Secondaire => &mut self.secondaire,
            QuestCategory::Principale => &mut self.principale,
        }
    }

    /// Every pending quest with its category, category by category
    pub fn iter(&self) -> impl Iterator<Item = (QuestCategory, &Quest)> {
        QuestCategory::ALL
            .into_iter()
            .flat_map(move |cat| self.list(cat).iter().map(move |q| (cat, q)))
    }

    pub fn len(&self) -> usize {
        self.quotidienne.len() + self.secondaire.len() + self.principale.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything tracked for one user
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub stats: StatValues,
    #[serde(default)]
    pub quests: QuestBoard,
    #[serde(default)]
    pub errors: Vec<Misstep>,
    #[serde(default)]
    pub validated_history: Vec<HistoryEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic_url: Option<String>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validated quests, oldest first
    pub fn quest_history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.validated_history.iter().filter(|h| h.is_quest())
    }

    /// Committed errors, oldest first
    pub fn misstep_history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.validated_history.iter().filter(|h| !h.is_quest())
    }
}
