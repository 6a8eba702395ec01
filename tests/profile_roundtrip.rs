//! Integration tests for profile export, import and file persistence

use chrono::NaiveDate;
use proptest::prelude::*;
use reiatsu::core::calendar::DateStamp;
use reiatsu::core::config::TrackerConfig;
use reiatsu::ledger::{HistoryEntry, Misstep, Quest, ValidatedRecord};
use reiatsu::profile::{export_profile, import_profile, ImportWarning};
use reiatsu::store::{JsonFileStore, MemoryStore, ProfileStore};
use reiatsu::{Profile, QuestCategory, StatName, Tracker, TrackerError};

/// A document in the shape the tracker has always written
const SAVED_DOCUMENT: &str = r#"{
  "stats": {
    "Force": 320, "Endurance": 0, "Intelligence": 1200, "Beauté": 15,
    "Santé": 90, "Spiritualité": 0, "Compétences Tech": 2600,
    "Argent": 0, "Famille": 45
  },
  "quests": {
    "quotidienne": [
      { "title": "Méditer", "rewards": { "Spiritualité": 10 }, "types": ["Spiritualité"], "durationText": "10 min" }
    ],
    "secondaire": [],
    "principale": [
      { "title": "Projet Rust", "description": "Publier la v1", "rewards": { "Compétences Tech": 500, "Argent": 200 }, "types": ["Compétences Tech"] }
    ]
  },
  "errors": [
    { "title": "Nuit blanche", "penalty": { "Santé": 30 }, "types": ["Santé"] }
  ],
  "validatedHistory": [
    { "title": "Méditer", "rewards": { "Spiritualité": 10 }, "types": [], "date": "17/10/2026", "generalLevel": 3 },
    { "title": "Nuit blanche", "penalty": { "Santé": 30 }, "types": [], "date": "17/10/2026", "generalLevel": 3 }
  ],
  "profilePicUrl": "data:image/png;base64,AAAA"
}"#;

#[test]
fn test_saved_document_imports_cleanly() {
    let report = import_profile(SAVED_DOCUMENT).unwrap();
    assert!(report.is_clean(), "{:?}", report.warnings);

    let profile = report.profile;
    assert_eq!(profile.stats.get(StatName::TechSkills), 2600);
    assert_eq!(profile.quests.principale[0].rewards.get(StatName::Money), Some(200));
    assert_eq!(profile.quests.quotidienne[0].duration_text.as_deref(), Some("10 min"));
    assert_eq!(profile.errors[0].penalty.get(StatName::Health), Some(30));
    assert!(profile.validated_history[0].is_quest());
    assert!(!profile.validated_history[1].is_quest());
    assert_eq!(profile.profile_pic_url.as_deref(), Some("data:image/png;base64,AAAA"));

    let again = import_profile(&export_profile(&profile).unwrap()).unwrap();
    assert_eq!(again.profile, profile);
}

#[test]
fn test_partial_document_keeps_what_it_can() {
    let report = import_profile(
        r#"{
            "stats": { "Force": 100, "Charisme": 40 },
            "errors": [ { "title": "sans pénalité" }, { "title": "ok", "penalty": {} } ]
        }"#,
    )
    .unwrap();

    assert_eq!(report.profile.stats.get(StatName::Force), 100);
    assert_eq!(report.profile.errors.len(), 1);
    assert!(report.warnings.contains(&ImportWarning::MissingKey("quests".to_string())));
    assert!(report
        .warnings
        .contains(&ImportWarning::MissingKey("validatedHistory".to_string())));
    assert!(report
        .warnings
        .iter()
        .any(|w| matches!(w, ImportWarning::SkippedItem { key, index: 0, .. } if key == "errors")));
}

#[test]
fn test_non_object_input_is_rejected() {
    for text in ["", "not json", "[1, 2]", "42", "\"profile\""] {
        assert!(matches!(import_profile(text), Err(TrackerError::MalformedImport(_))), "{}", text);
    }
}

#[test]
fn test_tracker_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("quest-data.json");

    {
        let (mut tracker, _) = Tracker::open(JsonFileStore::new(path.clone()), TrackerConfig::default()).unwrap();
        tracker.pin_date(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
        tracker
            .upsert_quest(
                QuestCategory::Secondaire,
                None,
                Quest::new("Appeler maman").with_reward(StatName::Family, 25),
            )
            .unwrap();
        tracker
            .upsert_misstep(None, Misstep::new("Oubli").with_penalty(StatName::Family, 5))
            .unwrap();
        assert!(tracker.validate_quest(QuestCategory::Secondaire, 0).unwrap().save.is_saved());
    }

    let (tracker, warnings) = Tracker::open(JsonFileStore::new(path.clone()), TrackerConfig::default()).unwrap();
    assert!(warnings.is_empty());
    let profile = tracker.profile();
    assert_eq!(profile.stats.get(StatName::Family), 25);
    assert!(profile.quests.secondaire.is_empty());
    assert_eq!(profile.errors.len(), 1);
    assert_eq!(profile.validated_history[0].date.as_str(), "18/10/2026");
}

#[test]
fn test_repeated_tags_survive_round_trip() {
    let (mut tracker, _) = Tracker::open(MemoryStore::new(), TrackerConfig::default()).unwrap();
    let mut quest = Quest::new("Pompes").with_reward(StatName::Force, 10);
    quest.types = vec![StatName::Force, StatName::Force, StatName::Endurance];
    tracker.upsert_quest(QuestCategory::Quotidienne, None, quest).unwrap();
    let mut misstep = Misstep::new("Soda");
    misstep.types = vec![StatName::Health, StatName::Health];
    tracker.upsert_misstep(None, misstep).unwrap();

    let profile = tracker.profile().clone();
    assert_eq!(
        profile.quests.quotidienne[0].types,
        vec![StatName::Force, StatName::Endurance]
    );
    let report = import_profile(&export_profile(&profile).unwrap()).unwrap();
    assert_eq!(report.profile, profile);
}

#[test]
fn test_missing_file_loads_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("absent.json"));
    assert!(store.load().unwrap().is_none());
}

fn stat_strategy() -> impl Strategy<Value = StatName> {
    prop::sample::select(StatName::ALL.to_vec())
}

fn deltas_strategy() -> impl Strategy<Value = Vec<(StatName, i64)>> {
    prop::collection::btree_map(stat_strategy(), -1_000i64..1_000, 0..4)
        .prop_map(|deltas| deltas.into_iter().collect())
}

fn quest_strategy() -> impl Strategy<Value = Quest> {
    (
        "[A-Za-zé ]{1,12}",
        prop::option::of("[a-z ]{0,20}"),
        deltas_strategy(),
        prop::collection::vec(stat_strategy(), 0..3),
        prop::option::of("[0-9]{1,2} min"),
    )
        .prop_map(|(title, description, rewards, tags, duration)| {
            let mut quest = Quest::new(title);
            quest.description = description;
            quest.duration_text = duration;
            for (stat, amount) in rewards {
                quest = quest.with_reward(stat, amount);
            }
            for tag in tags {
                quest = quest.with_tag(tag);
            }
            quest
        })
}

fn misstep_strategy() -> impl Strategy<Value = Misstep> {
    (
        "[A-Za-zé ]{0,12}",
        prop::option::of("[a-z ]{0,20}"),
        deltas_strategy(),
        prop::collection::vec(stat_strategy(), 0..3),
    )
        .prop_map(|(title, description, penalties, tags)| {
            let mut misstep = Misstep::new(title);
            misstep.description = description;
            for (stat, amount) in penalties {
                misstep = misstep.with_penalty(stat, amount);
            }
            for tag in tags {
                misstep = misstep.with_tag(tag);
            }
            misstep
        })
}

fn history_strategy() -> impl Strategy<Value = HistoryEntry> {
    (
        prop_oneof![
            quest_strategy().prop_map(ValidatedRecord::Quest),
            misstep_strategy().prop_map(ValidatedRecord::Misstep),
        ],
        1u32..=28,
        1u32..=100,
    )
        .prop_map(|(record, day, general_level)| HistoryEntry {
            record,
            date: DateStamp::from(format!("{:02}/10/2026", day).as_str()),
            general_level,
        })
}

proptest! {
    #[test]
    fn property_export_import_is_identity(
        xp in prop::collection::vec(0u64..5_000_000, 9),
        dailies in prop::collection::vec(quest_strategy(), 0..3),
        side in prop::collection::vec(quest_strategy(), 0..3),
        main in prop::collection::vec(quest_strategy(), 0..3),
        errors in prop::collection::vec(misstep_strategy(), 0..3),
        history in prop::collection::vec(history_strategy(), 0..6),
        picture in prop::option::of("https://[a-z]{1,8}\\.png"),
    ) {
        let mut profile = Profile::default();
        profile.stats = StatName::ALL.into_iter().zip(xp).collect();
        profile.quests.quotidienne = dailies;
        profile.quests.secondaire = side;
        profile.quests.principale = main;
        profile.errors = errors;
        profile.validated_history = history;
        profile.profile_pic_url = picture;

        let report = import_profile(&export_profile(&profile).unwrap()).unwrap();
        prop_assert!(report.is_clean(), "{:?}", report.warnings);
        prop_assert_eq!(report.profile, profile);
    }
}
