use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique, immutable identifier assigned to a task when it is created.
///
/// Wraps a random (v4) UUID and serializes as its hyphenated string form.
/// Ids are never reused, even after the task is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Urgency tag of a task. It only drives display emphasis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Lowercase name, as stored and accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// prettytable cell style: green, yellow and red foreground.
    pub fn style(&self) -> &'static str {
        match self {
            Priority::Low => "Fg",
            Priority::Medium => "Fy",
            Priority::High => "Fr",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority '{}', expected low, medium or high", other)),
        }
    }
}

/// A single to-do record.
///
/// The serialized form uses camelCase keys (`id`, `name`, `priority`,
/// `completed`, `dueDate`). `dueDate` is omitted when absent and may be
/// missing or `null` when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub priority: Priority,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// Creates an uncompleted task with a fresh id. The name is taken as is;
    /// validation belongs to the store.
    pub fn new(name: &str, priority: Priority, due_date: Option<NaiveDate>) -> Self {
        Task {
            id: TaskId::new(),
            name: name.to_string(),
            priority,
            completed: false,
            due_date,
        }
    }

    /// True when the task is unfinished and its due date lies before `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < today)
    }

    /// True when the task is unfinished and due on `today`.
    pub fn is_due_today(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date == Some(today)
    }
}

/// Partial update applied by `TaskList::update`. `None` leaves a field as is.
///
/// `due_date` is doubly optional: `Some(None)` clears the due date.
///
/// ```rust
/// use dolist::libs::task::{Priority, TaskUpdate};
///
/// let update = TaskUpdate::new().name("Buy oat milk").priority(Priority::Low).due_date(None);
/// assert_eq!(update.due_date, Some(None));
/// assert!(update.completed.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    /// New name. Trimmed and validated by the store.
    pub name: Option<String>,
    pub priority: Option<Priority>,
    pub completed: Option<bool>,
    /// `Some(Some(date))` sets, `Some(None)` clears, `None` keeps.
    pub due_date: Option<Option<NaiveDate>>,
}

impl TaskUpdate {
    /// An update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Replaces the priority.
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the completion flag explicitly.
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Sets the due date, or clears it when given `None`.
    ///
    /// # Arguments
    ///
    /// * `due_date` - The new date, or `None` to remove the current one
    pub fn due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Subset of the list shown by `dolist list --filter`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TaskFilter {
    /// Every task.
    #[default]
    All,
    /// Tasks not yet completed.
    Pending,
    /// Completed tasks.
    Completed,
    /// Unfinished tasks whose due date has passed.
    Overdue,
    /// Unfinished tasks due today.
    #[value(name = "today")]
    DueToday,
}

impl TaskFilter {
    /// Whether `task` belongs to this subset on the given day.
    ///
    /// # Arguments
    ///
    /// * `task` - Task to test
    /// * `today` - Reference date for the overdue and due-today predicates
    pub fn matches(&self, task: &Task, today: NaiveDate) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Pending => !task.completed,
            TaskFilter::Completed => task.completed,
            TaskFilter::Overdue => task.is_overdue(today),
            TaskFilter::DueToday => task.is_due_today(today),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("Buy milk", Priority::default(), None);
        assert_eq!(task.priority, Priority::Medium);
        assert!(!task.completed);
        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_overdue_only_before_today_and_unfinished() {
        let today = day(2024, 6, 10);
        let mut task = Task::new("Pay rent", Priority::High, Some(day(2024, 6, 9)));
        assert!(task.is_overdue(today));
        assert!(!task.is_due_today(today));

        task.completed = true;
        assert!(!task.is_overdue(today));

        task.completed = false;
        task.due_date = Some(today);
        assert!(!task.is_overdue(today));
        assert!(task.is_due_today(today));

        task.due_date = None;
        assert!(!task.is_overdue(today));
        assert!(!task.is_due_today(today));
    }

    #[test]
    fn test_priority_parse_and_order() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!(" low ".parse::<Priority>().unwrap(), Priority::Low);
        assert!("urgent".parse::<Priority>().is_err());
        assert!(Priority::Low < Priority::Medium && Priority::Medium < Priority::High);
    }

    #[test]
    fn test_task_serializes_camel_case_without_missing_due_date() {
        let task = Task::new("Call mom", Priority::Low, None);
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["priority"], "low");
        assert_eq!(json["completed"], false);
        assert!(json.get("dueDate").is_none());

        let dated = Task::new("File taxes", Priority::High, Some(day(2025, 4, 15)));
        let json = serde_json::to_value(&dated).unwrap();
        assert_eq!(json["dueDate"], "2025-04-15");
    }

    #[test]
    fn test_filter_matches() {
        let today = day(2024, 1, 2);
        let overdue = Task::new("A", Priority::Low, Some(day(2024, 1, 1)));
        let mut done = Task::new("B", Priority::Low, Some(today));
        done.completed = true;

        assert!(TaskFilter::Overdue.matches(&overdue, today));
        assert!(TaskFilter::Pending.matches(&overdue, today));
        assert!(!TaskFilter::DueToday.matches(&done, today));
        assert!(TaskFilter::Completed.matches(&done, today));
        assert!(TaskFilter::All.matches(&done, today));
    }
}
