use chrono::NaiveDate;

use super::types::AssignmentRecord;

/// The custody list, sorted ascending by date and immutable after build.
///
/// Position in the list, not date proximity, defines who hands off to
/// whom: the record at position i-1 is the giver for position i even
/// when several unscheduled days separate them. A new upload replaces
/// the whole table; nothing is ever edited in place.
#[derive(Debug, Clone)]
pub struct ScheduleTable {
    records: Vec<AssignmentRecord>,
}

impl ScheduleTable {
    /// Builds a table from already-parsed records. Sorts ascending by
    /// date with a stable sort, so rows that share a date keep their
    /// source order and the earliest source row wins lookups.
    pub fn new(mut records: Vec<AssignmentRecord>) -> Self {
        records.sort_by_key(|r| r.date);
        ScheduleTable { records }
    }

    pub fn records(&self) -> &[AssignmentRecord] {
        &self.records
    }

    pub fn get(&self, position: usize) -> Option<&AssignmentRecord> {
        self.records.get(position)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// First position whose record falls on exactly `date`, if any.
    pub fn find_by_date(&self, date: NaiveDate) -> Option<usize> {
        self.records.iter().position(|r| r.date == date)
    }

    /// The record with the greatest date strictly before `date`. This is
    /// the "last known holder" on days with no scheduled handoff.
    pub fn last_before(&self, date: NaiveDate) -> Option<&AssignmentRecord> {
        self.records.iter().rev().find(|r| r.date < date)
    }

    /// All positions whose name matches `name` exactly, in ascending
    /// date order. Matching is character-exact: accents and case are
    /// significant, so "José" and "Jose" are different people.
    pub fn turns_for(&self, name: &str) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.name == name)
            .map(|(i, _)| i)
            .collect()
    }

    /// Distinct names in first-appearance order, for the person picker.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for r in &self.records {
            if !names.contains(&r.name.as_str()) {
                names.push(&r.name);
            }
        }
        names
    }
}
