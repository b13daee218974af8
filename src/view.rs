use chrono::NaiveDate;
use serde::Serialize;

use crate::links::{calendar_link, giver_message, receiver_message, whatsapp_link};
use crate::schedule::{resolve_today, turns_for_person, ResolvedDayState, ScheduleTable};

/// Everything the page (or the console) needs to show for one render
/// pass. Produced by [`render`], a pure function of the table, the date
/// and the selected person; the UI shell owns all interaction state.
#[derive(Debug, Clone, Serialize)]
pub struct ViewModel {
    pub today: String,
    pub today_state: TodayView,
    pub selected_name: Option<String>,
    pub turns: Vec<TurnView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TodayView {
    /// A scheduled handoff happens today.
    Handoff { giver: PartyView, receiver: PartyView },
    /// Today is the first row of the list; nobody is on record as giver.
    FirstDay { receiver: PartyView },
    /// No row matches today; the image stays where it last landed.
    NoHandoff { last_known_holder: Option<HolderView> },
}

/// One side of a handoff, with its ready-to-open WhatsApp link.
#[derive(Debug, Clone, Serialize)]
pub struct PartyView {
    pub name: String,
    pub department: String,
    pub whatsapp_link: String,
    pub whatsapp_label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HolderView {
    pub name: String,
    pub department: String,
    pub since: String,
}

/// One future or past turn of the selected person.
#[derive(Debug, Clone, Serialize)]
pub struct TurnView {
    pub date: String,
    pub giver: Option<String>,
    pub calendar_link: String,
}

/// Renders the full dashboard state for `today`. Side-effect free and
/// idempotent: the shell re-invokes it on every interaction.
pub fn render(table: &ScheduleTable, today: NaiveDate, selected_name: Option<&str>) -> ViewModel {
    let today_state = match resolve_today(table, today) {
        ResolvedDayState::HandoffToday(ev) => {
            let msg_giver =
                giver_message(today, &ev.giver.name, &ev.receiver.name, &ev.receiver.department);
            let msg_receiver = receiver_message(today, &ev.giver.name, &ev.receiver.name);
            TodayView::Handoff {
                giver: PartyView {
                    whatsapp_link: whatsapp_link(&ev.giver.phone, &msg_giver),
                    whatsapp_label: format!("📲 Avisar a {}", ev.giver.name),
                    name: ev.giver.name,
                    department: ev.giver.department,
                },
                receiver: PartyView {
                    whatsapp_link: whatsapp_link(&ev.receiver.phone, &msg_receiver),
                    whatsapp_label: format!("📩 Avisar a {}", ev.receiver.name),
                    name: ev.receiver.name,
                    department: ev.receiver.department,
                },
            }
        }
        ResolvedDayState::FirstDayNoGiver { receiver } => {
            let msg = format!(
                "👋 Hola *{}*, hoy ({}) recibes la imagen de la Virgen. Es el primer día de la lista.\n\n{}",
                receiver.name,
                today,
                crate::links::ORACION
            );
            TodayView::FirstDay {
                receiver: PartyView {
                    whatsapp_link: whatsapp_link(&receiver.phone, &msg),
                    whatsapp_label: format!("📩 Avisar a {}", receiver.name),
                    name: receiver.name,
                    department: receiver.department,
                },
            }
        }
        ResolvedDayState::NoScheduleToday { last_known_holder } => TodayView::NoHandoff {
            last_known_holder: last_known_holder.map(|r| HolderView {
                since: r.date.format("%d/%m").to_string(),
                name: r.name,
                department: r.department,
            }),
        },
    };

    let turns = selected_name
        .map(|name| {
            turns_for_person(table, name)
                .map(|turn| TurnView {
                    date: turn.date.format("%d/%m/%Y").to_string(),
                    calendar_link: calendar_link(turn.date, turn.giver.as_deref()),
                    giver: turn.giver,
                })
                .collect()
        })
        .unwrap_or_default();

    ViewModel {
        today: today.format("%d/%m/%Y").to_string(),
        today_state,
        selected_name: selected_name.map(str::to_string),
        turns,
    }
}
