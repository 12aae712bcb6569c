//! The task list store.
//!
//! [`TaskList`] owns the ordered tasks and is the only place they are
//! mutated. Each successful mutation is followed by a full save through the
//! optional [`TaskPersistence`] adapter. Operations run to completion,
//! save included, before returning.
//!
//! ## Failure semantics
//!
//! - Validation, lookup and index errors are detected before anything
//!   changes, and no save is attempted.
//! - A failed save is reported as [`TaskError::Persistence`] after the change
//!   has been applied. The change is kept.
//!
//! ## Usage
//!
//! ```rust
//! use dolist::libs::store::TaskList;
//! use dolist::libs::task::Priority;
//!
//! let mut list = TaskList::new();
//! let milk = list.add("Buy milk", Priority::Medium, None).unwrap();
//! list.add("Pay rent", Priority::High, None).unwrap();
//! list.reorder(1, 0).unwrap();
//! assert_eq!(list.list()[1].id, milk.id);
//! ```

use super::error::{PersistenceError, Result, TaskError};
use super::persistence::TaskPersistence;
use super::task::{Priority, Task, TaskFilter, TaskId, TaskUpdate};
use chrono::NaiveDate;
use std::fmt;

/// Ordered, in-memory task list with optional write-through persistence.
pub struct TaskList {
    tasks: Vec<Task>,
    persistence: Option<Box<dyn TaskPersistence>>,
}

impl TaskList {
    /// Creates an empty list that is never saved.
    pub fn new() -> Self {
        TaskList {
            tasks: Vec::new(),
            persistence: None,
        }
    }

    /// Restores the list from `persistence` and saves every later mutation to it.
    ///
    /// # Errors
    ///
    /// Storage read failures are always returned. Undecodable data is an
    /// error only for a strict [`TaskArchive`](super::persistence::TaskArchive);
    /// a lenient one starts empty instead.
    pub fn open<P>(persistence: P) -> std::result::Result<Self, PersistenceError>
    where
        P: TaskPersistence + 'static,
    {
        let tasks = persistence.load()?;
        tracing::debug!(count = tasks.len(), "task list restored");

        Ok(TaskList {
            tasks,
            persistence: Some(Box::new(persistence)),
        })
    }

    /// Whether mutations are saved to a persistence adapter.
    pub fn is_persistent(&self) -> bool {
        self.persistence.is_some()
    }

    /// Read-only view of the tasks in display order.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Looks up a task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Zero-based position of the task with `id`, if present.
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    /// Tasks matching `filter`, in list order.
    pub fn filter(&self, filter: TaskFilter, today: NaiveDate) -> Vec<&Task> {
        self.tasks.iter().filter(|task| filter.matches(task, today)).collect()
    }

    /// Appends a new uncompleted task and returns a copy of it.
    ///
    /// # Arguments
    ///
    /// * `name` - Display name, trimmed before it is stored
    /// * `priority` - Urgency tag
    /// * `due_date` - Optional calendar date
    ///
    /// # Errors
    ///
    /// [`TaskError::Validation`] for an empty or whitespace-only name, with
    /// nothing changed. [`TaskError::Persistence`] if the save fails after
    /// the task was appended.
    pub fn add(&mut self, name: &str, priority: Priority, due_date: Option<NaiveDate>) -> Result<Task> {
        let name = validate_name(name)?;
        let task = Task::new(&name, priority, due_date);
        self.tasks.push(task.clone());
        tracing::debug!(id = %task.id, name = %task.name, "task added");

        self.persist()?;
        Ok(task)
    }

    /// Applies `update` to the task in place. Its position does not change.
    pub fn update(&mut self, id: TaskId, update: TaskUpdate) -> Result<Task> {
        let index = self.index_of(id)?;
        let name = update.name.as_deref().map(validate_name).transpose()?;

        let task = &mut self.tasks[index];
        if let Some(name) = name {
            task.name = name;
        }
        if let Some(priority) = update.priority {
            task.priority = priority;
        }
        if let Some(completed) = update.completed {
            task.completed = completed;
        }
        if let Some(due_date) = update.due_date {
            task.due_date = due_date;
        }
        let task = task.clone();
        tracing::debug!(id = %task.id, "task updated");

        self.persist()?;
        Ok(task)
    }

    pub fn toggle_completed(&mut self, id: TaskId) -> Result<Task> {
        let index = self.index_of(id)?;
        let task = &mut self.tasks[index];
        task.completed = !task.completed;
        let task = task.clone();
        tracing::debug!(id = %task.id, completed = task.completed, "task toggled");

        self.persist()?;
        Ok(task)
    }

    /// Removes the task and returns it. Unknown ids are an error.
    pub fn remove(&mut self, id: TaskId) -> Result<Task> {
        let index = self.index_of(id)?;
        let task = self.tasks.remove(index);
        tracing::debug!(id = %task.id, "task removed");

        self.persist()?;
        Ok(task)
    }

    /// Moves the task at `from` so that it ends up at `to`.
    ///
    /// `from` is a position before removal, `to` an insertion point in the list
    /// after removal. On `[A, B, C]`, `reorder(0, 2)` yields `[B, C, A]`.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.tasks.len();
        for index in [from, to] {
            if index >= len {
                return Err(TaskError::Index { index, len });
            }
        }

        let task = self.tasks.remove(from);
        self.tasks.insert(to, task);
        tracing::debug!(from, to, "task moved");

        self.persist()
    }

    /// Drops every completed task and returns how many were removed.
    /// Nothing is saved when no task was completed.
    pub fn clear_completed(&mut self) -> Result<usize> {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.completed);
        let removed = before - self.tasks.len();
        if removed == 0 {
            return Ok(0);
        }
        tracing::debug!(removed, "completed tasks cleared");

        self.persist()?;
        Ok(removed)
    }

    fn index_of(&self, id: TaskId) -> Result<usize> {
        self.position(id).ok_or(TaskError::NotFound(id))
    }

    fn persist(&mut self) -> Result<()> {
        let Some(persistence) = self.persistence.as_mut() else {
            return Ok(());
        };

        persistence.save(&self.tasks).map_err(|e| {
            tracing::warn!(error = %e, "task list not saved");
            TaskError::Persistence(e)
        })
    }
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TaskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskList")
            .field("tasks", &self.tasks)
            .field("persistent", &self.is_persistent())
            .finish()
    }
}

fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TaskError::Validation("task name must not be empty".to_string()));
    }
    Ok(name.to_string())
}
