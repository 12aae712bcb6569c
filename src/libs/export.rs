//! Exports the task list for use outside dolist.
//!
//! ## Formats
//!
//! - **CSV**: one row per task, with a header row, for spreadsheets.
//! - **JSON**: pretty-printed array, including the derived overdue flag.
//!
//! The export is a snapshot in display order. It is not the persisted
//! format; use the archive for that.
//!
//! ```rust,no_run
//! use dolist::libs::export::{ExportFormat, Exporter};
//! use dolist::libs::store::TaskList;
//! use chrono::Local;
//!
//! let list = TaskList::new();
//! let path = Exporter::new(ExportFormat::Csv, None).export(list.list(), Local::now().date_naive())?;
//! println!("{}", path.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::task::Task;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Flattened task row as written to export files.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExportTask {
    pub position: usize,
    pub id: String,
    pub name: String,
    pub priority: String,
    pub completed: bool,
    pub due_date: Option<String>,
    pub overdue: bool,
}

impl ExportTask {
    pub fn from_task(position: usize, task: &Task, today: NaiveDate) -> Self {
        ExportTask {
            position,
            id: task.id.to_string(),
            name: task.name.clone(),
            priority: task.priority.to_string(),
            completed: task.completed,
            due_date: task.due_date.map(|d| d.format("%Y-%m-%d").to_string()),
            overdue: task.is_overdue(today),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Without an explicit path, writes `dolist_export_<timestamp>.<ext>` in
    /// the current directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            let default_name = format!("dolist_export_{}", Local::now().format("%Y%m%d_%H%M%S"));
            PathBuf::from(format!("{}.{}", default_name, format.extension()))
        });

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes `tasks` and returns the path written to.
    pub fn export(&self, tasks: &[Task], today: NaiveDate) -> Result<PathBuf> {
        let rows: Vec<ExportTask> = tasks
            .iter()
            .enumerate()
            .map(|(index, task)| ExportTask::from_task(index + 1, task, today))
            .collect();

        match self.format {
            ExportFormat::Csv => self.export_csv(&rows)?,
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&rows)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
        }
        tracing::debug!(path = %self.output_path.display(), count = rows.len(), "tasks exported");

        Ok(self.output_path.clone())
    }

    fn export_csv(&self, rows: &[ExportTask]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["#", "ID", "Name", "Priority", "Completed", "Due date", "Overdue"])?;

        for row in rows {
            wtr.write_record([
                row.position.to_string(),
                row.id.clone(),
                row.name.clone(),
                row.priority.clone(),
                if row.completed { "yes" } else { "no" }.to_string(),
                row.due_date.clone().unwrap_or_default(),
                if row.overdue { "yes" } else { "no" }.to_string(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}
