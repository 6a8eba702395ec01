pub mod calendar;
pub mod config;
pub mod error;
pub mod types;

pub use calendar::DateStamp;
pub use config::TrackerConfig;
pub use error::{Result, TrackerError};
pub use types::{QuestCategory, StatName, StatValues};
