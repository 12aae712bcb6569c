//! Durable storage for the whole task list.
//!
//! The store never talks to a database directly. It hands the full ordered
//! list to a [`TaskPersistence`] after every mutation and asks it for the
//! saved list once at startup.
//!
//! ## Layers
//!
//! - [`KeyValueStore`]: named text slots. Implemented by [`MemorySlots`] and
//!   by the SQLite-backed [`Slots`](crate::db::slots::Slots).
//! - [`TaskArchive`]: encodes the list as a JSON array and keeps it in one slot.
//!
//! ## Usage
//!
//! ```rust
//! use dolist::libs::persistence::{LoadMode, MemorySlots, TaskArchive, TaskPersistence};
//! use dolist::libs::task::{Priority, Task};
//!
//! let mut archive = TaskArchive::new(MemorySlots::new(), "tasks", LoadMode::Lenient);
//! archive.save(&[Task::new("Buy milk", Priority::Medium, None)]).unwrap();
//! assert_eq!(archive.load().unwrap().len(), 1);
//! ```

use super::error::PersistenceError;
use super::task::Task;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Slot used when no name is configured.
pub const DEFAULT_SLOT: &str = "tasks";

/// A minimal string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
    /// Returns whether a value was present.
    fn remove(&mut self, key: &str) -> Result<bool, PersistenceError>;
}

/// In-process [`KeyValueStore`] backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MemorySlots {
    slots: HashMap<String, String>,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemorySlots {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool, PersistenceError> {
        Ok(self.slots.remove(key).is_some())
    }
}

/// How [`TaskArchive::load`] treats a slot that holds undecodable data.
///
/// Errors from the underlying store are returned in either mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadMode {
    /// Bad data is logged and treated as "nothing saved yet".
    #[default]
    Lenient,
    /// Bad data is returned as an error.
    Strict,
}

/// The interface the task store consumes.
pub trait TaskPersistence {
    /// Replaces the saved list with `tasks`, preserving order.
    fn save(&mut self, tasks: &[Task]) -> Result<(), PersistenceError>;

    /// Reads the saved list. An absent slot yields an empty list.
    fn load(&self) -> Result<Vec<Task>, PersistenceError>;
}

/// Keeps the task list as a JSON array in one named slot of a [`KeyValueStore`].
#[derive(Debug)]
pub struct TaskArchive<S: KeyValueStore> {
    store: S,
    slot: String,
    mode: LoadMode,
}

impl<S: KeyValueStore> TaskArchive<S> {
    pub fn new(store: S, slot: &str, mode: LoadMode) -> Self {
        TaskArchive {
            store,
            slot: slot.to_string(),
            mode,
        }
    }

    /// The backing key-value store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Encodes `tasks` the way [`save`](TaskPersistence::save) writes them.
    pub fn encode(tasks: &[Task]) -> Result<String, PersistenceError> {
        serde_json::to_string(tasks).map_err(PersistenceError::Encode)
    }

    /// Decodes a saved blob and checks that ids are unique.
    pub fn decode(blob: &str) -> Result<Vec<Task>, PersistenceError> {
        let tasks: Vec<Task> = serde_json::from_str(blob).map_err(PersistenceError::Decode)?;

        let mut seen = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            if !seen.insert(task.id) {
                return Err(PersistenceError::Corrupt(format!("duplicate task id {}", task.id)));
            }
        }

        Ok(tasks)
    }
}

impl<S: KeyValueStore> TaskPersistence for TaskArchive<S> {
    fn save(&mut self, tasks: &[Task]) -> Result<(), PersistenceError> {
        let blob = Self::encode(tasks)?;
        self.store.set(&self.slot, &blob)?;
        tracing::debug!(slot = %self.slot, count = tasks.len(), "saved task list");
        Ok(())
    }

    fn load(&self) -> Result<Vec<Task>, PersistenceError> {
        // Read failures always propagate: only undecodable data may be discarded.
        let Some(blob) = self.store.get(&self.slot)? else {
            return Ok(Vec::new());
        };

        match Self::decode(&blob) {
            Ok(tasks) => {
                tracing::debug!(slot = %self.slot, count = tasks.len(), "loaded task list");
                Ok(tasks)
            }
            Err(e) if self.mode == LoadMode::Lenient => {
                tracing::warn!(slot = %self.slot, error = %e, "discarding undecodable task list");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}

impl<T: TaskPersistence + ?Sized> TaskPersistence for Box<T> {
    fn save(&mut self, tasks: &[Task]) -> Result<(), PersistenceError> {
        (**self).save(tasks)
    }

    fn load(&self) -> Result<Vec<Task>, PersistenceError> {
        (**self).load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::task::Priority;

    #[test]
    fn test_absent_slot_is_empty_in_both_modes() {
        for mode in [LoadMode::Lenient, LoadMode::Strict] {
            let archive = TaskArchive::new(MemorySlots::new(), DEFAULT_SLOT, mode);
            assert!(archive.load().unwrap().is_empty());
        }
    }

    #[test]
    fn test_decode_rejects_duplicate_ids() {
        let task = Task::new("Twice", Priority::Low, None);
        let blob = TaskArchive::<MemorySlots>::encode(&[task.clone(), task]).unwrap();
        let err = TaskArchive::<MemorySlots>::decode(&blob).unwrap_err();
        assert!(matches!(err, PersistenceError::Corrupt(_)));
    }

    #[test]
    fn test_save_writes_configured_slot() {
        let mut archive = TaskArchive::new(MemorySlots::new(), "shopping", LoadMode::Strict);
        archive.save(&[Task::new("Eggs", Priority::Low, None)]).unwrap();
        assert!(archive.store().get("shopping").unwrap().is_some());
        assert!(archive.store().get(DEFAULT_SLOT).unwrap().is_none());
    }
}
