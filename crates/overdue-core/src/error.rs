use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("CSV error")]
    Csv(#[from] csv::Error),

    #[error("Workbook error")]
    Workbook(#[from] calamine::Error),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Worksheet '{0}' has no header row")]
    EmptySheet(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
