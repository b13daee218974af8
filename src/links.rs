use chrono::NaiveDate;
use urlencoding::encode;

/// Fixed prayer line appended to every notification message.
pub const ORACION: &str =
    "“Madre, en tus manos ponemos nuestro trabajo y nuestras familias. Amén.”";

/// Title used for the all-day calendar event.
const CALENDAR_TITLE: &str = "🙏 Custodia de la Virgen";

const CALENDAR_BASE: &str = "https://www.google.com/calendar/render";

/// Reduces a free-form phone cell to dialable digits for wa.me.
///
/// Heuristic for the Ecuadorian numbering plan: mobile numbers are
/// written locally as 09XXXXXXXX (or 9XXXXXXXX without the trunk zero)
/// and must become 593XXXXXXXX internationally. Anything else passes
/// through digits-only; no validation against a full phone grammar, so
/// out-of-plan inputs can produce a non-dialable string.
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.starts_with("09") {
        // Drop the trunk zero, keep the 9.
        format!("593{}", &digits[1..])
    } else if digits.starts_with('9') {
        format!("593{}", digits)
    } else {
        digits
    }
}

/// Pre-filled WhatsApp deep-link. Pure string construction, no request
/// is made; the message may contain accents and emoji, so the encoding
/// has to handle multi-byte UTF-8.
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", normalize_phone(phone), encode(message))
}

/// Google Calendar event-creation deep-link for an all-day event.
/// The service expects an exclusive end date, hence start + 1 day.
pub fn calendar_link(date: NaiveDate, giver_name: Option<&str>) -> String {
    let start = date.format("%Y%m%d").to_string();
    let end = date
        .succ_opt()
        .unwrap_or(date)
        .format("%Y%m%d")
        .to_string();

    let details = match giver_name {
        Some(giver) => format!(
            "Recibes la imagen de la Virgen de manos de {}.\n\n{}",
            giver, ORACION
        ),
        None => format!("Recibes la imagen de la Virgen.\n\n{}", ORACION),
    };

    format!(
        "{}?action=TEMPLATE&text={}&details={}&dates={}/{}",
        CALENDAR_BASE,
        encode(CALENDAR_TITLE),
        encode(&details),
        start,
        end
    )
}

/// Message for the person who hands the image over today.
pub fn giver_message(
    date: NaiveDate,
    giver: &str,
    receiver: &str,
    receiver_department: &str,
) -> String {
    format!(
        "👋 Hola *{}*, hoy ({}) entregas la imagen de la Virgen a *{}* ({}).\n\n{}",
        giver, date, receiver, receiver_department, ORACION
    )
}

/// Message for the person who receives the image today.
pub fn receiver_message(date: NaiveDate, giver: &str, receiver: &str) -> String {
    format!(
        "👋 Hola *{}*, hoy ({}) recibes la visita de la Virgen de manos de *{}*.\n\n{}",
        receiver, date, giver, ORACION
    )
}
