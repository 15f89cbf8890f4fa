use crate::cli::Cli;
use crate::config::Config;
use crate::prompt::{self, InteractiveProvider};
use crate::views::table::display_report;
use anyhow::Result;
use chrono::Local;
use overdue_core::monitor::run_check;
use overdue_core::provider::{ColumnProvider, FixedColumnProvider};
use overdue_core::settings::Settings;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

pub fn run(cli: Cli, config: Config) -> Result<()> {
    let delay = cli.delay.unwrap_or(config.delay_secs);
    if delay > 0 {
        println!("Waiting {} second(s) before checking...", delay);
        thread::sleep(Duration::from_secs(delay));
    }

    let settings_path = cli
        .settings_file
        .clone()
        .unwrap_or_else(|| config.settings_file.clone());
    let mut settings = Settings::load(&settings_path)?;

    let path = match resolve_path(&cli, &settings)? {
        Some(path) => path,
        None => {
            println!("No spreadsheet selected.");
            return Ok(());
        }
    };

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());

    let provider: Box<dyn ColumnProvider> = match (&cli.date_column, &cli.description_column) {
        (Some(date_column), Some(description_column)) => Box::new(FixedColumnProvider {
            date_column: date_column.clone(),
            description_column: description_column.clone(),
            save: cli.save_columns,
        }),
        _ => Box::new(InteractiveProvider),
    };

    println!("Reading {}...", path.display());
    let report = run_check(
        &path,
        &mut settings,
        provider.as_ref(),
        today,
        cli.reconfigure,
    )?;

    display_report(&report);

    if settings.is_dirty() {
        settings.save(&settings_path)?;
        println!("Configuration saved to {}", settings_path.display());
        println!(
            "To change any settings later, edit or delete that file and run again."
        );
    }

    Ok(())
}

/// Picks the spreadsheet location: command line first, then the saved path
/// (if it still exists on disk), then an interactive prompt.
fn resolve_path(cli: &Cli, settings: &Settings) -> Result<Option<PathBuf>> {
    if let Some(path) = &cli.file {
        return Ok(Some(path.clone()));
    }

    if let Some(saved) = settings.spreadsheet_path() {
        let saved = PathBuf::from(saved);
        if saved.exists() {
            return Ok(Some(saved));
        }
        println!(
            "{} saved spreadsheet '{}' no longer exists.",
            "Note:".yellow().bold(),
            saved.display()
        );
    }

    Ok(prompt::ask_for_file()?)
}
