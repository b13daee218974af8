use thiserror::Error;

/// Everything that can go wrong between receiving a spreadsheet and
/// showing a schedule. No variant is fatal to the process: the web shell
/// reports the error for the current pass and keeps accepting uploads.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The source could not be read or parsed as a table at all.
    #[error("error leyendo el archivo: {0}")]
    Load(String),

    /// One or more required columns are absent after normalization.
    #[error("faltan columnas en el archivo: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// A row's date cell did not parse. The whole table is rejected
    /// rather than skipping the row.
    #[error("fecha inválida en la fila {row}: \"{value}\"")]
    InvalidDate { row: usize, value: String },

    /// Neither the default file nor an upload is available yet.
    #[error("no se ha cargado ninguna lista")]
    NoDataLoaded,
}

impl From<csv::Error> for ScheduleError {
    fn from(e: csv::Error) -> Self {
        ScheduleError::Load(e.to_string())
    }
}

impl From<std::io::Error> for ScheduleError {
    fn from(e: std::io::Error) -> Self {
        ScheduleError::Load(e.to_string())
    }
}
