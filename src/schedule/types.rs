use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the custody list: who holds (or receives) the image on a
/// given calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub date: NaiveDate,
    pub name: String,
    pub department: String,
    pub phone: String,
}

/// The two parties of a scheduled handoff. Derived from table positions,
/// never stored: the giver is always the record at the previous position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandoffEvent {
    pub giver: AssignmentRecord,
    pub receiver: AssignmentRecord,
}

/// What the schedule says about a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolvedDayState {
    /// The date matches a row at position > 0: the previous row hands
    /// off to this one.
    HandoffToday(HandoffEvent),
    /// The date matches the very first row, so nobody is on record as
    /// the giver.
    FirstDayNoGiver { receiver: AssignmentRecord },
    /// The date matches no row (weekend, holiday, gap). The image stays
    /// with whoever last received it, if anyone has yet.
    NoScheduleToday {
        last_known_holder: Option<AssignmentRecord>,
    },
}
