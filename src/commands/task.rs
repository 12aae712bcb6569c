use super::{open_task_list, parse_date, position_to_index, resolve_task, saved};
use crate::libs::messages::Message;
use crate::libs::task::{Priority, TaskFilter, TaskUpdate};
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_info, msg_success, msg_warning};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task name
    #[arg(required = true)]
    name: String,
    #[arg(short, long, value_enum, default_value_t = Priority::Medium)]
    priority: Priority,
    /// Due date, YYYY-MM-DD
    #[arg(short, long, value_parser = parse_date)]
    due: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Position, or id prefix (numbers past the end are tried as a prefix)
    task: String,
    #[arg(short, long)]
    name: Option<String>,
    #[arg(short, long, value_enum)]
    priority: Option<Priority>,
    #[arg(short, long, value_parser = parse_date, conflicts_with = "clear_due")]
    due: Option<NaiveDate>,
    /// Remove the due date
    #[arg(long)]
    clear_due: bool,
}

#[derive(Debug, Args)]
pub struct TaskRefArgs {
    /// Position, or id prefix (numbers past the end are tried as a prefix)
    task: String,
}

#[derive(Debug, Args)]
pub struct RmArgs {
    /// Position, or id prefix (numbers past the end are tried as a prefix)
    task: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

#[derive(Debug, Args)]
pub struct MvArgs {
    /// Current position
    from: usize,
    /// New position
    to: usize,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(short, long, value_enum, default_value_t = TaskFilter::All)]
    filter: TaskFilter,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn add(args: AddArgs) -> Result<()> {
    let mut list = open_task_list()?;
    let task = saved(list.add(&args.name, args.priority, args.due))?;
    msg_success!(Message::TaskCreated(task.name));

    Ok(())
}

pub fn edit(args: EditArgs) -> Result<()> {
    let mut update = TaskUpdate::new();
    if let Some(name) = &args.name {
        update = update.name(name);
    }
    if let Some(priority) = args.priority {
        update = update.priority(priority);
    }
    if args.clear_due {
        update = update.due_date(None);
    } else if let Some(due) = args.due {
        update = update.due_date(Some(due));
    }
    if update.is_empty() {
        msg_bail_anyhow!(Message::NoChangesProvided);
    }

    let mut list = open_task_list()?;
    let id = resolve_task(&list, &args.task)?;
    let task = saved(list.update(id, update))?;
    msg_success!(Message::TaskUpdated(task.name));

    Ok(())
}

pub fn done(args: TaskRefArgs) -> Result<()> {
    let mut list = open_task_list()?;
    let id = resolve_task(&list, &args.task)?;
    let task = saved(list.toggle_completed(id))?;

    if task.completed {
        msg_success!(Message::TaskCompleted(task.name));
    } else {
        msg_info!(Message::TaskReopened(task.name));
    }

    Ok(())
}

pub fn rm(args: RmArgs) -> Result<()> {
    let mut list = open_task_list()?;
    let id = resolve_task(&list, &args.task)?;

    if !args.yes {
        let name = list.get(id).map(|task| task.name.clone()).unwrap_or_default();
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(name).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_warning!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let task = saved(list.remove(id))?;
    msg_success!(Message::TaskDeleted(task.name));

    Ok(())
}

pub fn mv(args: MvArgs) -> Result<()> {
    let mut list = open_task_list()?;
    let from = position_to_index(&list, args.from)?;
    let to = position_to_index(&list, args.to)?;
    let name = list.list()[from].name.clone();

    saved(list.reorder(from, to))?;
    msg_success!(Message::TaskMoved {
        name,
        from: args.from,
        to: args.to,
    });

    Ok(())
}

pub fn list(args: ListArgs) -> Result<()> {
    let list = open_task_list()?;
    if list.is_empty() {
        msg_info!(Message::NoTasks);
        return Ok(());
    }

    let today = today();
    let rows: Vec<_> = list
        .list()
        .iter()
        .enumerate()
        .filter(|(_, task)| args.filter.matches(task, today))
        .collect();
    if rows.is_empty() {
        msg_info!(Message::NoTasksMatchFilter);
        return Ok(());
    }

    View::print_tasks(&rows, today);
    Ok(())
}

pub fn clear() -> Result<()> {
    let mut list = open_task_list()?;
    match saved(list.clear_completed())? {
        0 => msg_info!(Message::NoCompletedTasks),
        removed => msg_success!(Message::TasksCleared(removed)),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        edit: EditArgs,
    }

    #[test]
    fn test_edit_rejects_due_and_clear_due_together() {
        let parsed = Harness::try_parse_from(["edit", "1", "--due", "2024-01-01", "--clear-due"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_edit_parses_due_date() {
        let parsed = Harness::try_parse_from(["edit", "2", "-d", "2024-03-05", "-p", "high"]).unwrap();
        assert_eq!(parsed.edit.due, NaiveDate::from_ymd_opt(2024, 3, 5));
        assert_eq!(parsed.edit.priority, Some(Priority::High));
    }
}
