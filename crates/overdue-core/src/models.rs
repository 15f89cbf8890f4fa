use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;

/// A single spreadsheet cell, as produced by the readers.
///
/// Readers preserve the native type where the source format carries one
/// (workbook cells); delimited text yields only `Text` and `Empty`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Whether the cell carries no usable content. Whitespace-only text
    /// counts as empty so that visually blank rows are treated as blank.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s),
            // Integral floats render without the trailing ".0", matching how
            // spreadsheet applications display them.
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// One worksheet (or the single logical sheet of a CSV file), fully read
/// into memory: a header row of column names plus the data rows below it.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// Resolves a column name to its positional index in the header.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }
}

/// A task that needs the user's attention: due today, overdue, or carrying
/// a due date that could not be interpreted.
///
/// `due == None` is the sentinel for an unparseable or absent due date and
/// always pairs with `days_overdue == -1`. Tasks are transient; they are
/// produced by evaluation and consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub description: String,
    pub due: Option<NaiveDate>,
    pub days_overdue: i64,
    pub worksheet: String,
}

impl Task {
    pub fn status(&self) -> TaskStatus {
        match self.days_overdue {
            -1 => TaskStatus::InvalidDate,
            0 => TaskStatus::DueToday,
            n => TaskStatus::Overdue(n),
        }
    }
}

/// Human-readable classification of a due task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TaskStatus {
    DueToday,
    Overdue(i64),
    InvalidDate,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::DueToday => write!(f, "DUE TODAY"),
            TaskStatus::Overdue(days) => write!(f, "OVERDUE by {} day(s)", days),
            TaskStatus::InvalidDate => write!(f, "Task completion date not entered."),
        }
    }
}

/// The outcome of one column-selection interaction for a worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnChoice {
    pub date_column: String,
    pub description_column: String,
    /// Whether the user asked for this choice to be persisted.
    pub save: bool,
}
