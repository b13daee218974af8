use chrono::NaiveDate;

use super::table::ScheduleTable;
use super::types::{HandoffEvent, ResolvedDayState};

/// Answers "what happens with the image on `today`".
///
/// Three cases and no others: today is a scheduled row past the first
/// (handoff from the previous row), today is the first row (receiver but
/// no recorded giver), or today is not on the list (the image stays with
/// whoever last received it).
pub fn resolve_today(table: &ScheduleTable, today: NaiveDate) -> ResolvedDayState {
    match table.find_by_date(today) {
        None => ResolvedDayState::NoScheduleToday {
            last_known_holder: table.last_before(today).cloned(),
        },
        // Positions returned by find_by_date are always in bounds.
        Some(0) => ResolvedDayState::FirstDayNoGiver {
            receiver: table.records()[0].clone(),
        },
        Some(i) => ResolvedDayState::HandoffToday(HandoffEvent {
            giver: table.records()[i - 1].clone(),
            receiver: table.records()[i].clone(),
        }),
    }
}

/// One future (or past) turn of a given person: the date they receive
/// the image and who hands it to them, if anyone precedes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonTurn {
    pub date: NaiveDate,
    pub giver: Option<String>,
}

/// All turns for `name`, ascending by date. Restartable and lazy: the
/// iterator borrows the table and keeps no other state.
pub fn turns_for_person<'a>(
    table: &'a ScheduleTable,
    name: &str,
) -> impl Iterator<Item = PersonTurn> + 'a {
    table.turns_for(name).into_iter().map(move |i| {
        let records = table.records();
        PersonTurn {
            date: records[i].date,
            giver: if i > 0 {
                Some(records[i - 1].name.clone())
            } else {
                None
            },
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::types::AssignmentRecord;

    fn rec(date: &str, name: &str) -> AssignmentRecord {
        AssignmentRecord {
            date: date.parse().unwrap(),
            name: name.to_string(),
            department: "Sistemas".to_string(),
            phone: "099 123 4567".to_string(),
        }
    }

    fn table() -> ScheduleTable {
        // Friday -> Monday gap: no rows on the 16th and 17th.
        ScheduleTable::new(vec![
            rec("2024-03-14", "Ana"),
            rec("2024-03-15", "Bruno"),
            rec("2024-03-18", "Carla"),
        ])
    }

    #[test]
    fn handoff_uses_previous_position_across_gaps() {
        // Monday's giver is Friday's receiver, three calendar days back.
        let state = resolve_today(&table(), "2024-03-18".parse().unwrap());
        match state {
            ResolvedDayState::HandoffToday(ev) => {
                assert_eq!(ev.giver.name, "Bruno");
                assert_eq!(ev.receiver.name, "Carla");
            }
            other => panic!("expected handoff, got {:?}", other),
        }
    }

    #[test]
    fn first_row_has_no_giver() {
        let state = resolve_today(&table(), "2024-03-14".parse().unwrap());
        match state {
            ResolvedDayState::FirstDayNoGiver { receiver } => {
                assert_eq!(receiver.name, "Ana");
            }
            other => panic!("expected first-day state, got {:?}", other),
        }
    }

    #[test]
    fn unscheduled_day_reports_last_known_holder() {
        let state = resolve_today(&table(), "2024-03-16".parse().unwrap());
        match state {
            ResolvedDayState::NoScheduleToday { last_known_holder } => {
                assert_eq!(last_known_holder.unwrap().name, "Bruno");
            }
            other => panic!("expected no-schedule state, got {:?}", other),
        }
    }

    #[test]
    fn day_before_any_row_has_no_holder() {
        let state = resolve_today(&table(), "2024-03-10".parse().unwrap());
        assert_eq!(
            state,
            ResolvedDayState::NoScheduleToday {
                last_known_holder: None
            }
        );
    }

    #[test]
    fn resolve_is_idempotent() {
        let t = table();
        let d = "2024-03-15".parse().unwrap();
        assert_eq!(resolve_today(&t, d), resolve_today(&t, d));
    }

    #[test]
    fn turns_carry_previous_position_giver() {
        let t = ScheduleTable::new(vec![
            rec("2024-03-14", "Ana"),
            rec("2024-03-15", "Bruno"),
            rec("2024-03-22", "Ana"),
        ]);
        let turns: Vec<PersonTurn> = turns_for_person(&t, "Ana").collect();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].giver, None);
        assert_eq!(turns[1].date, "2024-03-22".parse().unwrap());
        assert_eq!(turns[1].giver.as_deref(), Some("Bruno"));
        // Restartable: a second pass sees the same sequence.
        let again: Vec<PersonTurn> = turns_for_person(&t, "Ana").collect();
        assert_eq!(turns, again);
    }

    #[test]
    fn unknown_person_has_no_turns() {
        assert_eq!(turns_for_person(&table(), "Nadie").count(), 0);
    }
}
