pub mod resolver;
pub mod table;
pub mod types;

pub use resolver::{resolve_today, turns_for_person, PersonTurn};
pub use table::ScheduleTable;
pub use types::{AssignmentRecord, HandoffEvent, ResolvedDayState};
