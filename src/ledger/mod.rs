//! Quest / error ledger
//!
//! Every operation here is a pure transition: it borrows the current
//! [`Profile`](crate::profile::Profile) and returns a new one, or an
//! `OutOfRange` error with the input left as it was.

pub mod edit;
pub mod filter;
pub mod items;
pub mod validate;

pub use edit::{delete_misstep, delete_quest, reassign_quest, upsert_misstep, upsert_quest};
pub use filter::{filter_indexed, filter_items, matches};
pub use items::{
    dedup_tags, HistoryEntry, LedgerItem, Misstep, Quest, StatDeltas, ValidatedRecord,
};
pub use validate::{validate_misstep, validate_quest};
