//! # Overdue Core Library
//!
//! The logic behind the `overdue` spreadsheet task checker: read a tabular
//! file (CSV or a multi-worksheet workbook), normalize heterogeneous due-date
//! cells into calendar dates, and report every task that is due today,
//! overdue, or carrying a date that could not be interpreted.
//!
//! ## Core Modules
//!
//! - [`models`]: Cell, sheet and task data structures
//! - [`dates`]: Multi-format date normalization with a fixed priority order
//! - [`eval`]: The pure due-task evaluator
//! - [`reader`]: CSV and workbook readers
//! - [`settings`]: Key=value settings persistence between runs
//! - [`provider`]: Column-selection capability interface
//! - [`monitor`]: Per-worksheet check orchestration
//! - [`error`]: Error types
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use overdue_core::{
//!     monitor, provider::FixedColumnProvider, settings::Settings,
//! };
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let path = Path::new("tasks.csv");
//!     let mut settings = Settings::load(Path::new(".env"))?;
//!     let provider = FixedColumnProvider {
//!         date_column: "Due".to_string(),
//!         description_column: "Task".to_string(),
//!         save: false,
//!     };
//!
//!     let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//!     let report = monitor::run_check(path, &mut settings, &provider, today, false)?;
//!     for task in &report.tasks {
//!         println!("{} ({})", task.description, task.status());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod dates;
pub mod error;
pub mod eval;
pub mod models;
pub mod monitor;
pub mod provider;
pub mod reader;
pub mod settings;
