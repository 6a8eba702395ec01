//! Quests, errors and history records
//!
//! These are the JSON shapes of the exported profile. Reading is lenient:
//! stat keys outside the catalog and non-numeric amounts are dropped with
//! a warning instead of failing the whole record.

use crate::core::calendar::DateStamp;
use crate::core::types::StatName;
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Signed XP amounts keyed by stat, kept in catalog order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatDeltas(BTreeMap<StatName, i64>);

impl StatDeltas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, stat: StatName, amount: i64) -> Self {
        self.0.insert(stat, amount);
        self
    }

    pub fn insert(&mut self, stat: StatName, amount: i64) {
        self.0.insert(stat, amount);
    }

    pub fn get(&self, stat: StatName) -> Option<i64> {
        self.0.get(&stat).copied()
    }

    /// All entries in catalog order, zeros included
    pub fn iter(&self) -> impl Iterator<Item = (StatName, i64)> + '_ {
        self.0.iter().map(|(s, a)| (*s, *a))
    }

    /// Entries that actually move XP
    pub fn effective(&self) -> impl Iterator<Item = (StatName, i64)> + '_ {
        self.iter().filter(|(_, amount)| *amount != 0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(StatName, i64)> for StatDeltas {
    fn from_iter<I: IntoIterator<Item = (StatName, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for StatDeltas {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (stat, amount) in &self.0 {
            map.serialize_entry(stat.label(), amount)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StatDeltas {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DeltasVisitor;

        impl<'de> Visitor<'de> for DeltasVisitor {
            type Value = StatDeltas;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of stat names to amounts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut deltas = StatDeltas::new();
                while let Some((key, raw)) = access.next_entry::<String, serde_json::Value>()? {
                    let Some(stat) = StatName::from_label(&key) else {
                        tracing::warn!("Dropping amount for unknown stat '{}'", key);
                        continue;
                    };
                    // Amounts may arrive as floats, strings or null from hand-edited files
                    match raw.as_f64().filter(|v| v.is_finite()) {
                        Some(amount) => deltas.insert(stat, amount.round() as i64),
                        None => tracing::warn!("Dropping non-numeric amount for {}: {}", stat, raw),
                    }
                }
                Ok(deltas)
            }
        }

        deserializer.deserialize_map(DeltasVisitor)
    }
}

/// Drop repeated tags, keeping first occurrences in order
pub fn dedup_tags(tags: impl IntoIterator<Item = StatName>) -> Vec<StatName> {
    let mut unique = Vec::new();
    for tag in tags {
        if !unique.contains(&tag) {
            unique.push(tag);
        }
    }
    unique
}

/// Deserialize a tag list, skipping names outside the catalog
fn lenient_tags<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<StatName>, D::Error> {
    struct TagsVisitor;

    impl<'de> Visitor<'de> for TagsVisitor {
        type Value = Vec<StatName>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a list of stat names")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut tags = Vec::new();
            while let Some(raw) = seq.next_element::<serde_json::Value>()? {
                match raw.as_str().and_then(StatName::from_label) {
                    Some(stat) if !tags.contains(&stat) => tags.push(stat),
                    Some(_) => {}
                    None => tracing::warn!("Dropping unknown tag {}", raw),
                }
            }
            Ok(tags)
        }
    }

    deserializer.deserialize_seq(TagsVisitor)
}

/// Common read access used by filtering and listings
pub trait LedgerItem {
    fn title(&self) -> &str;
    fn description(&self) -> Option<&str>;
    fn tags(&self) -> &[StatName];
}

/// A pending unit of work that grants XP when validated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub rewards: StatDeltas,
    #[serde(default, deserialize_with = "lenient_tags")]
    pub types: Vec<StatName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_text: Option<String>,
}

impl Quest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            rewards: StatDeltas::new(),
            types: Vec::new(),
            duration_text: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_reward(mut self, stat: StatName, amount: i64) -> Self {
        self.rewards.insert(stat, amount);
        self
    }

    pub fn with_tag(mut self, stat: StatName) -> Self {
        if !self.types.contains(&stat) {
            self.types.push(stat);
        }
        self
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration_text = Some(duration.into());
        self
    }
}

impl LedgerItem for Quest {
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    fn tags(&self) -> &[StatName] {
        &self.types
    }
}

/// A re-triggerable negative event; stored under the `errors` key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Misstep {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Magnitudes to subtract; the stored sign is ignored
    pub penalty: StatDeltas,
    #[serde(default, deserialize_with = "lenient_tags")]
    pub types: Vec<StatName>,
}

impl Misstep {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            penalty: StatDeltas::new(),
            types: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_penalty(mut self, stat: StatName, amount: i64) -> Self {
        self.penalty.insert(stat, amount);
        self
    }

    pub fn with_tag(mut self, stat: StatName) -> Self {
        if !self.types.contains(&stat) {
            self.types.push(stat);
        }
        self
    }
}

impl LedgerItem for Misstep {
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    fn tags(&self) -> &[StatName] {
        &self.types
    }
}

/// What a history entry recorded
///
/// Untagged: a record with `rewards` is a quest, one with `penalty` an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValidatedRecord {
    Quest(Quest),
    Misstep(Misstep),
}

impl ValidatedRecord {
    pub fn is_quest(&self) -> bool {
        matches!(self, ValidatedRecord::Quest(_))
    }

    fn item(&self) -> &dyn LedgerItem {
        match self {
            ValidatedRecord::Quest(q) => q,
            ValidatedRecord::Misstep(m) => m,
        }
    }
}

/// Immutable snapshot of one validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub record: ValidatedRecord,
    pub date: DateStamp,
    pub general_level: u32,
}

impl HistoryEntry {
    /// Snapshot a quest; the entry owns its own copy
    pub fn for_quest(quest: &Quest, date: DateStamp, general_level: u32) -> Self {
        Self {
            record: ValidatedRecord::Quest(quest.clone()),
            date,
            general_level,
        }
    }

    /// Snapshot an error; the entry owns its own copy
    pub fn for_misstep(misstep: &Misstep, date: DateStamp, general_level: u32) -> Self {
        Self {
            record: ValidatedRecord::Misstep(misstep.clone()),
            date,
            general_level,
        }
    }

    pub fn is_quest(&self) -> bool {
        self.record.is_quest()
    }
}

impl LedgerItem for HistoryEntry {
    fn title(&self) -> &str {
        self.record.item().title()
    }
    fn description(&self) -> Option<&str> {
        self.record.item().description()
    }
    fn tags(&self) -> &[StatName] {
        self.record.item().tags()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quest_json_shape() {
        let quest = Quest::new("Courir 5 km")
            .with_reward(StatName::Endurance, 40)
            .with_reward(StatName::Force, 10)
            .with_tag(StatName::Endurance)
            .with_duration("30 min");
        let json = serde_json::to_value(&quest).unwrap();
        assert_eq!(json["title"], "Courir 5 km");
        assert_eq!(json["rewards"]["Force"], 10);
        assert_eq!(json["types"][0], "Endurance");
        assert_eq!(json["durationText"], "30 min");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_rewards_drop_bad_entries() {
        let json = r#"{
            "title": "Lire",
            "rewards": {"Intelligence": 20, "Charisme": 5, "Force": "", "Santé": null, "Argent": 7.4},
            "types": ["Intelligence", "Charisme", "Intelligence"]
        }"#;
        let quest: Quest = serde_json::from_str(json).unwrap();
        assert_eq!(quest.rewards.get(StatName::Intelligence), Some(20));
        assert_eq!(quest.rewards.get(StatName::Money), Some(7));
        assert_eq!(quest.rewards.get(StatName::Force), None);
        assert_eq!(quest.rewards.get(StatName::Health), None);
        assert_eq!(quest.types, vec![StatName::Intelligence]);
    }

    #[test]
    fn test_history_entry_flattens_record() {
        let misstep = Misstep::new("Fast food").with_penalty(StatName::Health, 30);
        let entry = HistoryEntry::for_misstep(&misstep, DateStamp::from("18/10/2026"), 4);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["title"], "Fast food");
        assert_eq!(json["penalty"]["Santé"], 30);
        assert_eq!(json["date"], "18/10/2026");
        assert_eq!(json["generalLevel"], 4);

        let back: HistoryEntry = serde_json::from_value(json).unwrap();
        assert!(!back.is_quest());
        assert_eq!(back, entry);
    }

    #[test]
    fn test_history_entry_detects_quest() {
        let json = r#"{"title":"Méditer","rewards":{"Spiritualité":15},"types":[],"date":"01/02/2025","generalLevel":3}"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        assert!(entry.is_quest());
        assert_eq!(entry.title(), "Méditer");
        assert_eq!(entry.general_level, 3);
    }

    #[test]
    fn test_zero_amounts_are_not_effective() {
        let deltas = StatDeltas::new().with(StatName::Force, 0).with(StatName::Money, 3);
        let effective: Vec<_> = deltas.effective().collect();
        assert_eq!(effective, vec![(StatName::Money, 3)]);
    }
}
