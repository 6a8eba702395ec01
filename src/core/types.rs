//! Core type definitions used throughout the codebase

use crate::core::error::TrackerError;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One of the nine tracked personal-development dimensions
///
/// Declaration order is the catalog order: it drives display order,
/// averaging order and tie-breaks when ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StatName {
    Force,
    Endurance,
    Intelligence,
    #[serde(rename = "Beauté")]
    Beauty,
    #[serde(rename = "Santé")]
    Health,
    #[serde(rename = "Spiritualité")]
    Spirituality,
    #[serde(rename = "Compétences Tech")]
    TechSkills,
    #[serde(rename = "Argent")]
    Money,
    #[serde(rename = "Famille")]
    Family,
}

impl StatName {
    /// Number of stats in the catalog
    pub const COUNT: usize = 9;

    /// The full catalog, in order
    pub const ALL: [StatName; Self::COUNT] = [
        StatName::Force,
        StatName::Endurance,
        StatName::Intelligence,
        StatName::Beauty,
        StatName::Health,
        StatName::Spirituality,
        StatName::TechSkills,
        StatName::Money,
        StatName::Family,
    ];

    /// Display label, identical to the key used in the JSON profile
    pub fn label(&self) -> &'static str {
        match self {
            StatName::Force => "Force",
            StatName::Endurance => "Endurance",
            StatName::Intelligence => "Intelligence",
            StatName::Beauty => "Beauté",
            StatName::Health => "Santé",
            StatName::Spirituality => "Spiritualité",
            StatName::TechSkills => "Compétences Tech",
            StatName::Money => "Argent",
            StatName::Family => "Famille",
        }
    }

    /// Position in the catalog
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Exact label lookup, as used when reading stored profiles
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl fmt::Display for StatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatName {
    type Err = TrackerError;

    /// Lenient lookup for user-typed names: case-insensitive on the label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|stat| stat.label().to_lowercase() == wanted)
            .ok_or_else(|| TrackerError::UnknownStat(s.to_string()))
    }
}

/// Cumulative XP for every catalog stat
///
/// Serialized as a JSON object keyed by stat label, in catalog order.
/// Missing keys read as zero, unknown keys are ignored and negative
/// values clamp to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatValues([u64; StatName::COUNT]);

impl StatValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stat: StatName) -> u64 {
        self.0[stat.index()]
    }

    pub fn set(&mut self, stat: StatName, xp: u64) {
        self.0[stat.index()] = xp;
    }

    /// Builder-style setter, handy for fixtures
    pub fn with(mut self, stat: StatName, xp: u64) -> Self {
        self.set(stat, xp);
        self
    }

    /// Apply a signed change, flooring the result at zero
    pub fn apply_delta(&mut self, stat: StatName, delta: i64) {
        let current = self.get(stat);
        let updated = if delta >= 0 {
            current.saturating_add(delta.unsigned_abs())
        } else {
            current.saturating_sub(delta.unsigned_abs())
        };
        self.set(stat, updated);
    }

    /// (stat, xp) pairs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (StatName, u64)> + '_ {
        StatName::ALL.into_iter().map(move |s| (s, self.get(s)))
    }

    pub fn total(&self) -> u64 {
        self.0.iter().fold(0u64, |acc, xp| acc.saturating_add(*xp))
    }
}

impl FromIterator<(StatName, u64)> for StatValues {
    fn from_iter<I: IntoIterator<Item = (StatName, u64)>>(iter: I) -> Self {
        let mut values = StatValues::new();
        for (stat, xp) in iter {
            values.set(stat, xp);
        }
        values
    }
}

impl Serialize for StatValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(StatName::COUNT))?;
        for (stat, xp) in self.iter() {
            map.serialize_entry(stat.label(), &xp)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StatValues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StatValuesVisitor;

        impl<'de> Visitor<'de> for StatValuesVisitor {
            type Value = StatValues;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of stat names to XP amounts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut values = StatValues::new();
                while let Some((key, raw)) = access.next_entry::<String, serde_json::Value>()? {
                    let Some(stat) = StatName::from_label(&key) else {
                        tracing::warn!("Ignoring unknown stat '{}' in stored stats", key);
                        continue;
                    };
                    match raw.as_f64().filter(|v| v.is_finite()) {
                        Some(xp) => values.set(stat, xp.round().max(0.0) as u64),
                        None => tracing::warn!("Ignoring non-numeric XP for {}: {}", stat, raw),
                    }
                }
                Ok(values)
            }
        }

        deserializer.deserialize_map(StatValuesVisitor)
    }
}

/// Which pending list a quest lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestCategory {
    /// Recurring: stays pending after validation
    Quotidienne,
    /// Removed on validation
    Secondaire,
    /// Removed on validation
    Principale,
}

impl QuestCategory {
    pub const ALL: [QuestCategory; 3] = [
        QuestCategory::Quotidienne,
        QuestCategory::Secondaire,
        QuestCategory::Principale,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            QuestCategory::Quotidienne => "quotidienne",
            QuestCategory::Secondaire => "secondaire",
            QuestCategory::Principale => "principale",
        }
    }

    /// Does completing a quest in this category keep it pending?
    pub fn is_recurring(&self) -> bool {
        matches!(self, QuestCategory::Quotidienne)
    }
}

impl fmt::Display for QuestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for QuestCategory {
    type Err = TrackerError;

    /// Accepts the stored key or its English alias
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quotidienne" | "daily" => Ok(QuestCategory::Quotidienne),
            "secondaire" | "secondary" => Ok(QuestCategory::Secondaire),
            "principale" | "main" => Ok(QuestCategory::Principale),
            other => Err(TrackerError::InvalidArgument(format!(
                "unknown quest category '{}'",
                other
            ))),
        }
    }
}
