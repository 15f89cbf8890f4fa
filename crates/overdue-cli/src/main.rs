use clap::Parser;
use overdue_core::error::CoreError;
use owo_colors::{OwoColorize, Style};

mod cli;
mod commands;
mod config;
mod prompt;
mod views;

fn main() {
    let config = config::Config::new().unwrap_or_else(|_| config::Config::default());
    let cli = cli::Cli::parse();

    if let Err(e) = commands::check::run(cli, config) {
        handle_error(e);
        std::process::exit(1);
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.downcast_ref::<CoreError>() {
        match core_error {
            CoreError::Io(e) => {
                eprintln!(
                    "{} Could not read the spreadsheet or settings file: {}",
                    "Error:".style(error_style),
                    e
                );
            }
            CoreError::Csv(e) => {
                eprintln!("{} Could not load file: {}", "Error:".style(error_style), e);
            }
            CoreError::Workbook(e) => {
                eprintln!("{} Could not load file: {}", "Error:".style(error_style), e);
            }
            CoreError::ColumnNotFound(s) => {
                eprintln!("{} {}", "Error:".style(error_style), s);
            }
            CoreError::InvalidInput(s) => {
                eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
            }
            _ => eprintln!("{} {}", "Error:".style(error_style), err),
        }
    } else {
        eprintln!("{} {}", "Error:".style(error_style), err);
    }
}
