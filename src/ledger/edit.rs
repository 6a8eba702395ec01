//! Editing the pending quest and error lists
//!
//! Edits keep an item's position; deletes shift later items down by one;
//! reassignment moves a quest to the end of another category.

use crate::core::error::{Result, TrackerError};
use crate::core::types::QuestCategory;
use crate::ledger::items::{dedup_tags, Misstep, Quest};
use crate::profile::Profile;

fn check_index(collection: impl Into<String>, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(TrackerError::out_of_range(collection, index, len))
    }
}

/// Append a quest (`index` None) or replace the one at `index` in place
///
/// Repeated tags are collapsed so the stored quest reads back unchanged.
pub fn upsert_quest(
    profile: &Profile,
    category: QuestCategory,
    index: Option<usize>,
    mut quest: Quest,
) -> Result<Profile> {
    quest.types = dedup_tags(quest.types);
    let mut next = profile.clone();
    let list = next.quests.list_mut(category);
    match index {
        Some(i) => {
            check_index(format!("quests.{}", category), i, list.len())?;
            tracing::debug!("Editing quest {} in {}", i, category);
            list[i] = quest;
        }
        None => {
            tracing::debug!("Adding quest '{}' to {}", quest.title, category);
            list.push(quest);
        }
    }
    Ok(next)
}

/// Remove the quest at `index`
pub fn delete_quest(profile: &Profile, category: QuestCategory, index: usize) -> Result<Profile> {
    let mut next = profile.clone();
    let list = next.quests.list_mut(category);
    check_index(format!("quests.{}", category), index, list.len())?;
    let removed = list.remove(index);
    tracing::debug!("Deleted quest '{}' from {}", removed.title, category);
    Ok(next)
}

/// Move a quest into another category, appending it there
///
/// Moving into the same category is a no-op (besides the index check).
pub fn reassign_quest(
    profile: &Profile,
    from: QuestCategory,
    index: usize,
    to: QuestCategory,
) -> Result<Profile> {
    check_index(format!("quests.{}", from), index, profile.quests.list(from).len())?;
    if from == to {
        return Ok(profile.clone());
    }
    let mut next = profile.clone();
    let quest = next.quests.list_mut(from).remove(index);
    tracing::debug!("Moving quest '{}' from {} to {}", quest.title, from, to);
    next.quests.list_mut(to).push(quest);
    Ok(next)
}

/// Append an error (`index` None) or replace the one at `index` in place
pub fn upsert_misstep(
    profile: &Profile,
    index: Option<usize>,
    mut misstep: Misstep,
) -> Result<Profile> {
    misstep.types = dedup_tags(misstep.types);
    let mut next = profile.clone();
    match index {
        Some(i) => {
            check_index("errors", i, next.errors.len())?;
            next.errors[i] = misstep;
        }
        None => next.errors.push(misstep),
    }
    Ok(next)
}

/// Remove the error at `index`
pub fn delete_misstep(profile: &Profile, index: usize) -> Result<Profile> {
    check_index("errors", index, profile.errors.len())?;
    let mut next = profile.clone();
    next.errors.remove(index);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::StatName;

    fn board() -> Profile {
        let mut profile = Profile::default();
        profile.quests.secondaire = vec![Quest::new("A"), Quest::new("B"), Quest::new("C")];
        profile.errors = vec![Misstep::new("X"), Misstep::new("Y")];
        profile
    }

    fn titles(quests: &[Quest]) -> Vec<&str> {
        quests.iter().map(|q| q.title.as_str()).collect()
    }

    #[test]
    fn test_upsert_collapses_repeated_tags() {
        let mut quest = Quest::new("Squats");
        quest.types = vec![StatName::Force, StatName::Endurance, StatName::Force];
        let next = upsert_quest(&board(), QuestCategory::Principale, None, quest).unwrap();
        assert_eq!(
            next.quests.principale[0].types,
            vec![StatName::Force, StatName::Endurance]
        );

        let mut misstep = Misstep::new("Z");
        misstep.types = vec![StatName::Money, StatName::Money];
        let next = upsert_misstep(&next, Some(0), misstep).unwrap();
        assert_eq!(next.errors[0].types, vec![StatName::Money]);
    }

    #[test]
    fn test_edit_keeps_position() {
        let next = upsert_quest(
            &board(),
            QuestCategory::Secondaire,
            Some(1),
            Quest::new("B2").with_reward(StatName::Force, 5),
        )
        .unwrap();
        assert_eq!(titles(&next.quests.secondaire), vec!["A", "B2", "C"]);
    }

    #[test]
    fn test_add_appends() {
        let next = upsert_quest(&board(), QuestCategory::Principale, None, Quest::new("P")).unwrap();
        assert_eq!(titles(&next.quests.principale), vec!["P"]);
        assert_eq!(next.quests.secondaire.len(), 3);
    }

    #[test]
    fn test_delete_shifts_down() {
        let next = delete_quest(&board(), QuestCategory::Secondaire, 0).unwrap();
        assert_eq!(titles(&next.quests.secondaire), vec!["B", "C"]);
    }

    #[test]
    fn test_reassign_moves_between_lists() {
        let next = reassign_quest(&board(), QuestCategory::Secondaire, 1, QuestCategory::Quotidienne)
            .unwrap();
        assert_eq!(titles(&next.quests.secondaire), vec!["A", "C"]);
        assert_eq!(titles(&next.quests.quotidienne), vec!["B"]);

        let same = reassign_quest(&board(), QuestCategory::Secondaire, 1, QuestCategory::Secondaire)
            .unwrap();
        assert_eq!(same, board());
    }

    #[test]
    fn test_out_of_range_edits() {
        let profile = board();
        assert!(upsert_quest(&profile, QuestCategory::Secondaire, Some(3), Quest::new("Z")).is_err());
        assert!(delete_quest(&profile, QuestCategory::Principale, 0).is_err());
        assert!(reassign_quest(&profile, QuestCategory::Principale, 0, QuestCategory::Secondaire).is_err());
        assert!(upsert_misstep(&profile, Some(2), Misstep::new("Z")).is_err());
        assert!(delete_misstep(&profile, 5).is_err());
    }

    #[test]
    fn test_misstep_crud() {
        let edited = upsert_misstep(&board(), Some(0), Misstep::new("X2")).unwrap();
        assert_eq!(edited.errors[0].title, "X2");
        let added = upsert_misstep(&edited, None, Misstep::new("Z")).unwrap();
        assert_eq!(added.errors.len(), 3);
        let deleted = delete_misstep(&added, 1).unwrap();
        let names: Vec<&str> = deleted.errors.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(names, vec!["X2", "Z"]);
    }
}
