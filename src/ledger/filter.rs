//! Search and tag filtering over ledger items

use crate::core::types::StatName;
use crate::ledger::items::LedgerItem;

/// Does `item` pass the search term and the required tags?
///
/// The term matches case-insensitively inside the title or description.
/// Every required tag must be present on the item (AND, not OR).
/// An empty term or empty tag list matches everything.
pub fn matches<T: LedgerItem + ?Sized>(item: &T, search_term: &str, required: &[StatName]) -> bool {
    let needle = search_term.to_lowercase();
    let matches_search = needle.is_empty()
        || item.title().to_lowercase().contains(&needle)
        || item
            .description()
            .map(|d| d.to_lowercase().contains(&needle))
            .unwrap_or(false);

    let matches_tags = required.iter().all(|tag| item.tags().contains(tag));

    matches_search && matches_tags
}

/// Items that pass the filter, in their original order
pub fn filter_items<'a, T: LedgerItem>(
    items: &'a [T],
    search_term: &str,
    required: &[StatName],
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| matches(*item, search_term, required))
        .collect()
}

/// Like `filter_items`, keeping each item's position in `items`
///
/// Positions are what validate / edit / delete operate on.
pub fn filter_indexed<'a, T: LedgerItem>(
    items: &'a [T],
    search_term: &str,
    required: &[StatName],
) -> Vec<(usize, &'a T)> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches(*item, search_term, required))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::items::{Misstep, Quest};

    fn quests() -> Vec<Quest> {
        vec![
            Quest::new("Séance de sport")
                .with_tag(StatName::Force)
                .with_tag(StatName::Endurance),
            Quest::new("Lire un chapitre")
                .with_description("Roman ou essai")
                .with_tag(StatName::Intelligence),
            Quest::new("Sport collectif").with_tag(StatName::Force),
        ]
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let list = quests();
        assert_eq!(filter_items(&list, "", &[]).len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive_on_title_and_description() {
        let list = quests();
        let hits = filter_items(&list, "SPORT", &[]);
        assert_eq!(hits.len(), 2);
        let hits = filter_items(&list, "essai", &[]);
        assert_eq!(hits[0].title, "Lire un chapitre");
    }

    #[test]
    fn test_tags_are_conjunctive() {
        let list = quests();
        let hits = filter_indexed(&list, "", &[StatName::Force, StatName::Endurance]);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, 0);

        let hits = filter_indexed(&list, "sport", &[StatName::Force]);
        let positions: Vec<usize> = hits.iter().map(|(i, _)| *i).collect();
        assert_eq!(positions, vec![0, 2]);
    }

    #[test]
    fn test_filter_is_repeatable() {
        let list = quests();
        let first: Vec<&str> = filter_items(&list, "i", &[]).iter().map(|q| q.title.as_str()).collect();
        let second: Vec<&str> = filter_items(&list, "i", &[]).iter().map(|q| q.title.as_str()).collect();
        assert_eq!(first, second);
        assert_eq!(list, quests());
    }

    #[test]
    fn test_missteps_filter_too() {
        let errors = vec![
            Misstep::new("Nuit blanche").with_tag(StatName::Health),
            Misstep::new("Dépense inutile").with_tag(StatName::Money),
        ];
        assert_eq!(filter_items(&errors, "", &[StatName::Money])[0].title, "Dépense inutile");
    }
}
