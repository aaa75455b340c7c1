pub mod engine;
pub mod snapshot;
pub mod template;
pub mod week;

pub use engine::CheckinEngine;
pub use snapshot::RosterSnapshot;
pub use week::{WeekColumn, resolve_week_column};
