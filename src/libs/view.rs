use super::task::Task;
use chrono::NaiveDate;
use prettytable::{format, row, Cell, Row, Table};

pub struct View {}

impl View {
    /// Renders `tasks` as a table. `#` is the 1-based position in the full
    /// list, so it stays valid for `mv`, `done` and friends when filtered.
    pub fn tasks(tasks: &[(usize, &Task)], today: NaiveDate) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
        table.set_titles(row!["#", "ID", "NAME", "PRIORITY", "DUE", "STATUS"]);

        for (index, task) in tasks {
            let due = task.due_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
            let (status, status_style) = status(task, today);
            let id = task.id.to_string();

            table.add_row(Row::new(vec![
                Cell::new(&(index + 1).to_string()),
                Cell::new(&id[..8]),
                Cell::new(&task.name),
                Cell::new(task.priority.as_str()).style_spec(task.priority.style()),
                Cell::new(&due),
                Cell::new(status).style_spec(status_style),
            ]));
        }

        table
    }

    pub fn print_tasks(tasks: &[(usize, &Task)], today: NaiveDate) {
        Self::tasks(tasks, today).printstd();
    }
}

fn status(task: &Task, today: NaiveDate) -> (&'static str, &'static str) {
    if task.completed {
        ("done", "i")
    } else if task.is_overdue(today) {
        ("overdue", "bFr")
    } else if task.is_due_today(today) {
        ("due today", "bFy")
    } else {
        ("", "")
    }
}
