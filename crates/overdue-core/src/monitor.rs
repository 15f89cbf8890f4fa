use crate::error::CoreError;
use crate::eval;
use crate::models::{ColumnChoice, Sheet, Task};
use crate::provider::ColumnProvider;
use crate::reader;
use crate::settings::Settings;
use chrono::NaiveDate;
use std::path::Path;

/// A worksheet that was skipped during a check, and why. Worksheet-level
/// problems never abort the run; they surface here.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetSkip {
    pub worksheet: String,
    pub reason: String,
}

/// The outcome of one check run across every worksheet of the source file.
#[derive(Debug, Default, Clone)]
pub struct CheckReport {
    /// Due, overdue and invalid-date tasks, in worksheet order then row order.
    pub tasks: Vec<Task>,
    pub skipped: Vec<SheetSkip>,
    /// Informational notices (e.g. the workbook's worksheet count no longer
    /// matches the saved configuration).
    pub notices: Vec<String>,
}

/// Reads the source file and evaluates every worksheet against `today`.
///
/// Saved column choices are used when they still match the live header and
/// `force_reconfigure` is not set; otherwise the provider is consulted with
/// the saved pair (or the first two columns) as defaults. A cancelled
/// selection skips that worksheet silently. Choices the provider marks with
/// `save` are recorded into `settings`; persisting them is the caller's
/// explicit `Settings::save` call.
///
/// File-level failures (unreadable file, malformed workbook) abort with an
/// error; everything below that degrades to a [`SheetSkip`].
pub fn run_check(
    path: &Path,
    settings: &mut Settings,
    provider: &dyn ColumnProvider,
    today: NaiveDate,
    force_reconfigure: bool,
) -> Result<CheckReport, CoreError> {
    let sheets = reader::read_source(path)?;

    let mut report = CheckReport::default();
    if let Some(expected) = settings.expected_worksheet_count() {
        if expected != sheets.len() {
            report.notices.push(format!(
                "The file now has {} worksheet(s); {} were configured last time.",
                sheets.len(),
                expected
            ));
        }
    }

    let mut any_saved = false;
    for sheet in &sheets {
        if sheet.header.is_empty() {
            report.skipped.push(SheetSkip {
                worksheet: sheet.name.clone(),
                reason: CoreError::EmptySheet(sheet.name.clone()).to_string(),
            });
            continue;
        }

        let choice = match choose_columns(sheet, settings, provider, force_reconfigure)? {
            Some(choice) => choice,
            // User cancelled: skip without an error.
            None => continue,
        };

        if choice.save {
            settings.record_columns(&sheet.name, &choice);
            any_saved = true;
        }

        match eval::evaluate(sheet, &choice.date_column, &choice.description_column, today) {
            Ok(tasks) => report.tasks.extend(tasks),
            Err(e) => report.skipped.push(SheetSkip {
                worksheet: sheet.name.clone(),
                reason: e.to_string(),
            }),
        }
    }

    if any_saved {
        settings.set_spreadsheet_path(path);
        settings.set_expected_worksheet_count(sheets.len());
    }

    Ok(report)
}

/// Picks the column pair for one worksheet: the saved pair when it is still
/// valid, otherwise whatever the provider returns.
fn choose_columns(
    sheet: &Sheet,
    settings: &Settings,
    provider: &dyn ColumnProvider,
    force_reconfigure: bool,
) -> Result<Option<ColumnChoice>, CoreError> {
    // Saved names that no longer exist in the header are discarded rather
    // than trusted.
    let saved = settings.column_pair(&sheet.name).filter(|(date, desc)| {
        sheet.column_index(date).is_some() && sheet.column_index(desc).is_some()
    });

    if let Some((date_column, description_column)) = &saved {
        if !force_reconfigure {
            return Ok(Some(ColumnChoice {
                date_column: date_column.clone(),
                description_column: description_column.clone(),
                save: false,
            }));
        }
    }

    let positional = (
        sheet.header.first().cloned().unwrap_or_default(),
        sheet
            .header
            .get(1)
            .or_else(|| sheet.header.first())
            .cloned()
            .unwrap_or_default(),
    );
    let defaults = saved.as_ref().map_or(
        (positional.0.as_str(), positional.1.as_str()),
        |(d, c)| (d.as_str(), c.as_str()),
    );

    provider.select(&sheet.name, &sheet.header, Some(defaults))
}
