//! JSON import / export of a whole profile
//!
//! Import is forgiving per key and per item: a missing or malformed key
//! falls back to its empty default, a malformed list item is skipped, and
//! each fallback is reported as an [`ImportWarning`]. Only input that is
//! not a JSON object at all fails the import.

use crate::core::error::{Result, TrackerError};
use crate::core::types::{QuestCategory, StatValues};
use crate::profile::{Profile, QuestBoard};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

/// A recoverable problem found while importing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImportWarning {
    #[error("'{0}' missing, using an empty default")]
    MissingKey(String),
    #[error("'{key}' unreadable ({reason}), using an empty default")]
    InvalidKey { key: String, reason: String },
    #[error("skipped {key}[{index}]: {reason}")]
    SkippedItem {
        key: String,
        index: usize,
        reason: String,
    },
}

/// The imported profile plus everything that had to be defaulted
#[derive(Debug, Clone, PartialEq)]
pub struct ImportReport {
    pub profile: Profile,
    pub warnings: Vec<ImportWarning>,
}

impl ImportReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Serialize a profile as pretty JSON, the export file format
pub fn export_profile(profile: &Profile) -> Result<String> {
    Ok(serde_json::to_string_pretty(profile)?)
}

/// Parse an exported profile
pub fn import_profile(text: &str) -> Result<ImportReport> {
    let root: Value = serde_json::from_str(text)
        .map_err(|e| TrackerError::MalformedImport(format!("not valid JSON: {}", e)))?;
    let Value::Object(root) = root else {
        return Err(TrackerError::MalformedImport(
            "top level must be a JSON object".to_string(),
        ));
    };

    let mut importer = Importer::default();
    let profile = Profile {
        stats: importer.field::<StatValues>(&root, "stats"),
        quests: importer.quest_board(&root),
        errors: importer.list(&root, "errors"),
        validated_history: importer.list(&root, "validatedHistory"),
        profile_pic_url: importer.optional_string(&root, "profilePicUrl"),
    };

    for warning in &importer.warnings {
        tracing::warn!("Import: {}", warning);
    }
    tracing::info!(
        "Imported profile: {} pending quests, {} errors, {} history entries",
        profile.quests.len(),
        profile.errors.len(),
        profile.validated_history.len()
    );

    Ok(ImportReport {
        profile,
        warnings: importer.warnings,
    })
}

#[derive(Default)]
struct Importer {
    warnings: Vec<ImportWarning>,
}

impl Importer {
    /// A whole key, defaulted if missing or unreadable
    fn field<T: DeserializeOwned + Default>(&mut self, root: &Map<String, Value>, key: &str) -> T {
        match root.get(key) {
            None | Some(Value::Null) => {
                self.warnings.push(ImportWarning::MissingKey(key.to_string()));
                T::default()
            }
            Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|e| {
                self.warnings.push(ImportWarning::InvalidKey {
                    key: key.to_string(),
                    reason: e.to_string(),
                });
                T::default()
            }),
        }
    }

    /// A list key, read item by item so one bad item does not sink the rest
    fn list<T: DeserializeOwned>(&mut self, root: &Map<String, Value>, key: &str) -> Vec<T> {
        match root.get(key) {
            None | Some(Value::Null) => {
                self.warnings.push(ImportWarning::MissingKey(key.to_string()));
                Vec::new()
            }
            Some(value) => self.items(key, value),
        }
    }

    fn items<T: DeserializeOwned>(&mut self, key: &str, value: &Value) -> Vec<T> {
        let Value::Array(raw_items) = value else {
            self.warnings.push(ImportWarning::InvalidKey {
                key: key.to_string(),
                reason: "expected a list".to_string(),
            });
            return Vec::new();
        };

        let mut items = Vec::with_capacity(raw_items.len());
        for (index, raw) in raw_items.iter().enumerate() {
            match serde_json::from_value::<T>(raw.clone()) {
                Ok(item) => items.push(item),
                Err(e) => self.warnings.push(ImportWarning::SkippedItem {
                    key: key.to_string(),
                    index,
                    reason: e.to_string(),
                }),
            }
        }
        items
    }

    fn quest_board(&mut self, root: &Map<String, Value>) -> QuestBoard {
        let quests = match root.get("quests") {
            None | Some(Value::Null) => {
                self.warnings.push(ImportWarning::MissingKey("quests".to_string()));
                return QuestBoard::default();
            }
            Some(Value::Object(quests)) => quests,
            Some(_) => {
                self.warnings.push(ImportWarning::InvalidKey {
                    key: "quests".to_string(),
                    reason: "expected an object".to_string(),
                });
                return QuestBoard::default();
            }
        };

        let mut board = QuestBoard::default();
        for category in QuestCategory::ALL {
            let key = format!("quests.{}", category);
            // A category absent from the object is simply empty
            if let Some(value) = quests.get(category.key()).filter(|v| !v.is_null()) {
                *board.list_mut(category) = self.items(&key, value);
            }
        }
        board
    }

    fn optional_string(&mut self, root: &Map<String, Value>, key: &str) -> Option<String> {
        match root.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.warnings.push(ImportWarning::InvalidKey {
                    key: key.to_string(),
                    reason: "expected a string".to_string(),
                });
                None
            }
        }
    }
}
