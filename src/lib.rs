//! Reiatsu - Gamified Life Tracker
//!
//! Personal stats gain XP from completed quests and lose it to committed
//! errors; levels and titles are derived from the XP on demand.

pub mod analytics;
pub mod core;
pub mod ledger;
pub mod profile;
pub mod progression;
pub mod session;
pub mod store;

pub use crate::core::error::{Result, TrackerError};
pub use crate::core::types::{QuestCategory, StatName, StatValues};
pub use crate::profile::Profile;
pub use crate::session::{Applied, SaveStatus, Tracker};
