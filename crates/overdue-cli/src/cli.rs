use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Checks a spreadsheet of tasks and reports everything due today, overdue,
/// or missing a usable due date.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Spreadsheet to check (.csv, .xlsx, .xls); overrides the saved location
    pub file: Option<PathBuf>,

    /// Sleep this many seconds before checking (for auto-start setups)
    #[clap(long, value_name = "SECONDS")]
    pub delay: Option<u64>,

    /// Re-run column selection for every worksheet, ignoring saved choices
    #[clap(long)]
    pub reconfigure: bool,

    /// Location of the settings file
    #[clap(long, value_name = "PATH")]
    pub settings_file: Option<PathBuf>,

    /// Evaluate against this date instead of the system date
    #[clap(long, value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,

    /// Use this due-date column for every worksheet instead of prompting
    #[clap(long, value_name = "NAME", requires = "description_column")]
    pub date_column: Option<String>,

    /// Use this description column for every worksheet instead of prompting
    #[clap(long, value_name = "NAME", requires = "date_column")]
    pub description_column: Option<String>,

    /// Persist the columns given with --date-column/--description-column
    #[clap(long, requires = "date_column")]
    pub save_columns: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_invocation() {
        let cli = Cli::parse_from([
            "overdue",
            "tasks.xlsx",
            "--delay",
            "30",
            "--reconfigure",
            "--today",
            "2024-06-01",
            "--settings-file",
            "/tmp/overdue.env",
        ]);
        assert_eq!(cli.file, Some(PathBuf::from("tasks.xlsx")));
        assert_eq!(cli.delay, Some(30));
        assert!(cli.reconfigure);
        assert_eq!(
            cli.today,
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
    }

    #[test]
    fn column_flags_must_come_in_pairs() {
        let err = Cli::try_parse_from(["overdue", "--date-column", "Due"]);
        assert!(err.is_err());

        let ok = Cli::try_parse_from([
            "overdue",
            "--date-column",
            "Due",
            "--description-column",
            "Task",
        ]);
        assert!(ok.is_ok());
    }

    #[test]
    fn save_columns_requires_explicit_columns() {
        let err = Cli::try_parse_from(["overdue", "--save-columns"]);
        assert!(err.is_err());
    }
}
