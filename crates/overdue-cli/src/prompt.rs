use dialoguer::{Confirm, Input, Select};
use overdue_core::error::CoreError;
use overdue_core::models::ColumnChoice;
use overdue_core::provider::ColumnProvider;
use owo_colors::OwoColorize;
use std::path::PathBuf;

/// Interactive column selection over the terminal, the CLI's implementation
/// of the core's [`ColumnProvider`] capability. Esc on either picker cancels
/// the worksheet.
pub struct InteractiveProvider;

impl ColumnProvider for InteractiveProvider {
    fn select(
        &self,
        worksheet: &str,
        columns: &[String],
        defaults: Option<(&str, &str)>,
    ) -> Result<Option<ColumnChoice>, CoreError> {
        println!("\nConfiguring worksheet: {}", worksheet.bold());

        let default_date = defaults
            .and_then(|(date, _)| columns.iter().position(|c| c == date))
            .unwrap_or(0);
        let date_idx = match pick("Select the DUE BY column", columns, default_date)? {
            Some(idx) => idx,
            None => return Ok(None),
        };

        let default_desc = defaults
            .and_then(|(_, desc)| columns.iter().position(|c| c == desc))
            .unwrap_or_else(|| if columns.len() > 1 { 1 } else { 0 });
        let desc_idx = match pick("Select the TASK DESCRIPTION column", columns, default_desc)? {
            Some(idx) => idx,
            None => return Ok(None),
        };

        let save = Confirm::new()
            .with_prompt("Save these settings for next time?")
            .default(true)
            .interact_opt()
            .map_err(prompt_error)?
            .unwrap_or(false);

        Ok(Some(ColumnChoice {
            date_column: columns[date_idx].clone(),
            description_column: columns[desc_idx].clone(),
            save,
        }))
    }
}

fn pick(prompt: &str, columns: &[String], default: usize) -> Result<Option<usize>, CoreError> {
    Select::new()
        .with_prompt(prompt)
        .items(columns)
        .default(default)
        .interact_opt()
        .map_err(prompt_error)
}

/// Asks for the spreadsheet location when neither the command line nor the
/// settings file supplies one. An empty answer means "give up quietly".
pub fn ask_for_file() -> Result<Option<PathBuf>, CoreError> {
    println!("No file location in settings. Please enter one.");
    let answer: String = Input::new()
        .with_prompt("Path to your spreadsheet")
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;

    let answer = answer.trim();
    if answer.is_empty() {
        Ok(None)
    } else {
        Ok(Some(PathBuf::from(answer)))
    }
}

fn prompt_error(e: dialoguer::Error) -> CoreError {
    CoreError::InvalidInput(format!("prompt failed: {}", e))
}
