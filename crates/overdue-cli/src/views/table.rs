use comfy_table::{Attribute, Cell, Color, Row, Table};
use overdue_core::models::TaskStatus;
use overdue_core::monitor::CheckReport;
use owo_colors::OwoColorize;

/// Renders a check report: notices and skip warnings first, then either the
/// friendly all-clear line or the due-task table.
pub fn display_report(report: &CheckReport) {
    for notice in &report.notices {
        println!("{} {}", "Note:".yellow().bold(), notice);
    }
    for skip in &report.skipped {
        eprintln!(
            "{} worksheet '{}' skipped: {}",
            "Warning:".yellow().bold(),
            skip.worksheet,
            skip.reason
        );
    }

    if report.tasks.is_empty() {
        println!("No tasks are due today or overdue!");
        return;
    }

    println!("{}", "Tasks due!".red().bold());

    let mut table = Table::new();
    table.set_header(vec!["Task", "Worksheet", "Due", "Status"]);

    for task in &report.tasks {
        let mut row = Row::new();
        row.add_cell(Cell::new(&task.description));
        row.add_cell(Cell::new(&task.worksheet));

        let due_cell = match task.due {
            Some(due) => Cell::new(due.format("%Y-%m-%d").to_string()),
            None => Cell::new("not set").fg(Color::DarkGrey),
        };
        row.add_cell(due_cell);

        let status = task.status();
        let status_cell = match status {
            TaskStatus::Overdue(_) => Cell::new(status.to_string())
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
            TaskStatus::DueToday => Cell::new(status.to_string()).fg(Color::Yellow),
            TaskStatus::InvalidDate => Cell::new(status.to_string()).fg(Color::DarkGrey),
        };
        row.add_cell(status_cell);

        table.add_row(row);
    }

    println!("{table}");
}
