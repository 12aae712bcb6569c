pub mod export;
pub mod init;
pub mod task;

use crate::db::slots::Slots;
use crate::libs::config::Config;
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::persistence::TaskArchive;
use crate::libs::store::TaskList;
use crate::libs::task::TaskId;
use crate::msg_bail_anyhow;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a task to the end of the list")]
    Add(task::AddArgs),
    #[command(about = "Edit a task's name, priority or due date")]
    Edit(task::EditArgs),
    #[command(about = "Toggle a task between done and not done")]
    Done(task::TaskRefArgs),
    #[command(about = "Delete a task")]
    Rm(task::RmArgs),
    #[command(about = "Move a task to another position")]
    Mv(task::MvArgs),
    #[command(about = "Show the to-do list")]
    List(task::ListArgs),
    #[command(about = "Remove all completed tasks")]
    Clear,
    #[command(about = "Export tasks to CSV or JSON")]
    Export(export::ExportArgs),
    #[command(about = "Configuration initialization")]
    Init,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        Self::parse().run()
    }

    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Add(args) => task::add(args),
            Commands::Edit(args) => task::edit(args),
            Commands::Done(args) => task::done(args),
            Commands::Rm(args) => task::rm(args),
            Commands::Mv(args) => task::mv(args),
            Commands::List(args) => task::list(args),
            Commands::Clear => task::clear(),
            Commands::Export(args) => export::cmd(args),
            Commands::Init => init::cmd(),
        }
    }
}

/// Opens the configured SQLite-backed task list.
pub fn open_task_list() -> Result<TaskList> {
    let config = Config::read()?;
    let path = config.storage.database_path()?;
    let slots = Slots::open(&path).with_context(|| format!("opening database {}", path.display()))?;
    let archive = TaskArchive::new(slots, &config.storage.slot, config.storage.load_mode);

    Ok(TaskList::open(archive)?)
}

/// Resolves a task reference given on the command line.
///
/// A number is a 1-based position. Anything else, or a number past the end
/// of the list, is matched as a case-insensitive prefix of the task id and
/// must be unambiguous.
pub fn resolve_task(list: &TaskList, reference: &str) -> Result<TaskId> {
    let reference = reference.trim();
    let position = reference.parse::<usize>().ok();

    if let Some(task) = position.and_then(|p| p.checked_sub(1)).and_then(|index| list.list().get(index)) {
        return Ok(task.id);
    }

    let needle = reference.to_lowercase();
    let mut matches = list.list().iter().filter(|task| !needle.is_empty() && task.id.to_string().starts_with(&needle));
    match (matches.next(), matches.next(), position) {
        (Some(task), None, _) => Ok(task.id),
        (Some(_), Some(_), _) => msg_bail_anyhow!(Message::TaskRefAmbiguous(reference.to_string())),
        (None, _, Some(position)) => msg_bail_anyhow!(Message::TaskPositionOutOfRange(position, list.len())),
        (None, _, None) => msg_bail_anyhow!(Message::TaskNotFoundForRef(reference.to_string())),
    }
}

/// Converts a 1-based position from the command line into an index.
pub fn position_to_index(list: &TaskList, position: usize) -> Result<usize> {
    match position.checked_sub(1) {
        Some(index) if index < list.len() => Ok(index),
        _ => msg_bail_anyhow!(Message::TaskPositionOutOfRange(position, list.len())),
    }
}

/// Turns a store result into a command result, rewording save failures.
pub fn saved<T>(result: Result<T, TaskError>) -> Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(TaskError::Persistence(e)) => msg_bail_anyhow!(Message::TaskSaveFailed(e.to_string())),
        Err(e) => Err(e.into()),
    }
}

pub fn parse_date(input: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| Message::InvalidDate(input.to_string()).to_string())
}
