use std::path::Path;

use chrono::NaiveDate;
use csv::Reader;

use crate::error::ScheduleError;
use crate::schedule::{AssignmentRecord, ScheduleTable};

/// Required column names after normalization, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Fecha", "Nombre", "Telefono", "Departamento"];

/// Date formats accepted in the Fecha column. The spreadsheets in
/// circulation use ISO dates or day-first Latin American formats.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"];

/// Normalizes a header cell: trim surrounding whitespace and upper-case
/// the first character only. "fecha" and " Fecha " both become "Fecha";
/// "FECHA" stays "FECHA". Deliberately not case-insensitive matching.
fn normalize_column(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Builds the schedule table from a CSV reader.
///
/// Fail-fast: a missing required column or a single unparseable date
/// rejects the whole table. There is no partial load.
pub fn build_table<R: std::io::Read>(reader: &mut Reader<R>) -> Result<ScheduleTable, ScheduleError> {
    let headers: Vec<String> = reader.headers()?.iter().map(normalize_column).collect();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| !headers.iter().any(|h| h == *c))
        .map(|c| c.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ScheduleError::MissingColumns(missing));
    }

    // Column order in the file is free; positions come from the header.
    let fecha_col = headers.iter().position(|h| h == "Fecha").unwrap_or(0);
    let nombre_col = headers.iter().position(|h| h == "Nombre").unwrap_or(1);
    let telefono_col = headers.iter().position(|h| h == "Telefono").unwrap_or(2);
    let departamento_col = headers.iter().position(|h| h == "Departamento").unwrap_or(3);

    let mut records = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;

        let raw_date = record.get(fecha_col).unwrap_or("").trim().to_string();
        let date = parse_date(&raw_date).ok_or(ScheduleError::InvalidDate {
            row: row_idx + 2, // 1-based, counting the header line
            value: raw_date.clone(),
        })?;

        records.push(AssignmentRecord {
            date,
            name: record.get(nombre_col).unwrap_or("").trim().to_string(),
            department: record.get(departamento_col).unwrap_or("").trim().to_string(),
            phone: record.get(telefono_col).unwrap_or("").trim().to_string(),
        });
    }

    Ok(ScheduleTable::new(records))
}

/// Loads the schedule from a CSV file on disk.
pub fn load_schedule<P: AsRef<Path>>(csv_path: P) -> Result<ScheduleTable, ScheduleError> {
    let mut reader = Reader::from_path(csv_path)?;
    build_table(&mut reader)
}

/// Loads the schedule from an in-memory CSV body (web upload).
pub fn load_schedule_from_bytes(bytes: &[u8]) -> Result<ScheduleTable, ScheduleError> {
    let mut reader = Reader::from_reader(bytes);
    build_table(&mut reader)
}
