//! User-facing text for every [`Message`].
//!
//! All strings shown by the CLI are defined here, so wording stays consistent
//! and parameters are checked at compile time.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(name) => format!("Task '{}' added", name),
            Message::TaskUpdated(name) => format!("Task '{}' updated", name),
            Message::TaskDeleted(name) => format!("Task '{}' deleted", name),
            Message::TaskCompleted(name) => format!("Task '{}' marked as done", name),
            Message::TaskReopened(name) => format!("Task '{}' marked as not done", name),
            Message::TaskMoved { name, from, to } => format!("Task '{}' moved from #{} to #{}", name, from, to),
            Message::TasksCleared(count) => format!("Removed {} completed task(s)", count),
            Message::NoCompletedTasks => "No completed tasks to remove".to_string(),
            Message::NoTasks => "Your to-do list is empty".to_string(),
            Message::NoTasksMatchFilter => "No tasks match the filter".to_string(),
            Message::TaskNotFoundForRef(reference) => format!("No task matches '{}'", reference),
            Message::TaskRefAmbiguous(reference) => {
                format!("'{}' matches more than one task, use a longer id prefix or a position", reference)
            }
            Message::TaskPositionOutOfRange(position, len) => {
                format!("Position {} is out of range, the list has {} task(s)", position, len)
            }
            Message::NoChangesProvided => "Nothing to change, pass at least one field to edit".to_string(),
            Message::ConfirmDeleteTask(name) => format!("Delete task '{}'?", name),
            Message::TaskSaveFailed(error) => format!("Change applied but the list could not be saved: {}", error),

            // === INPUT MESSAGES ===
            Message::InvalidDate(input) => format!("Invalid date '{}', expected YYYY-MM-DD", input),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Tasks exported to: {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::PromptDatabase => "Database file".to_string(),
            Message::PromptSlot => "Storage slot name".to_string(),
            Message::PromptLoadMode => "When saved data cannot be read".to_string(),
            Message::SlotNameEmpty => "Slot name must not be empty".to_string(),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", s)
    }
}
