use crate::dates;
use crate::error::CoreError;
use crate::models::{CellValue, Sheet, Task};
use chrono::NaiveDate;

static EMPTY_CELL: CellValue = CellValue::Empty;

/// Scans a sheet and produces the tasks that are due on or before `today`,
/// plus the ones whose due date could not be interpreted.
///
/// Column names are resolved against the header once, up front; a missing
/// name fails with [`CoreError::ColumnNotFound`] rather than silently
/// substituting another column. Rows whose cells are all blank are skipped
/// outright. Output preserves row order.
///
/// Pure with respect to its inputs: `today` is injected by the caller so
/// runs are deterministic under test.
pub fn evaluate(
    sheet: &Sheet,
    date_column: &str,
    description_column: &str,
    today: NaiveDate,
) -> Result<Vec<Task>, CoreError> {
    let date_idx = resolve_column(sheet, date_column)?;
    let desc_idx = resolve_column(sheet, description_column)?;

    let mut tasks = Vec::new();
    for (i, row) in sheet.rows.iter().enumerate() {
        if row.iter().all(CellValue::is_empty) {
            continue;
        }
        // 1-based over data rows, header excluded.
        let row_number = i + 1;

        let desc_cell = row.get(desc_idx).unwrap_or(&EMPTY_CELL);
        let description = if desc_cell.is_empty() {
            format!("Task in row {}", row_number)
        } else {
            desc_cell.to_string()
        };

        let date_cell = row.get(date_idx).unwrap_or(&EMPTY_CELL);
        match dates::normalize(date_cell) {
            Some(due) if due <= today => tasks.push(Task {
                description,
                due: Some(due),
                days_overdue: (today - due).num_days(),
                worksheet: sheet.name.clone(),
            }),
            // Strictly future: not due, nothing to report.
            Some(_) => {}
            None => tasks.push(Task {
                description,
                due: None,
                days_overdue: -1,
                worksheet: sheet.name.clone(),
            }),
        }
    }

    Ok(tasks)
}

fn resolve_column(sheet: &Sheet, name: &str) -> Result<usize, CoreError> {
    sheet.column_index(name).ok_or_else(|| {
        CoreError::ColumnNotFound(format!(
            "'{}' is not a column of worksheet '{}' (available: {})",
            name,
            sheet.name,
            sheet.header.join(", ")
        ))
    })
}
