//! Core library modules for dolist.
//!
//! - **Domain**: tasks, the task list store and its error types
//! - **Persistence**: key-value slots and the JSON task archive
//! - **Infrastructure**: configuration, data directory, messaging
//! - **Presentation**: table view and export
//!
//! ## Usage
//!
//! ```rust
//! use dolist::libs::persistence::{LoadMode, MemorySlots, TaskArchive};
//! use dolist::libs::store::TaskList;
//! use dolist::libs::task::Priority;
//!
//! let archive = TaskArchive::new(MemorySlots::new(), "tasks", LoadMode::Lenient);
//! let mut list = TaskList::open(archive)?;
//! list.add("Buy milk", Priority::Medium, None)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod messages;
pub mod persistence;
pub mod store;
pub mod task;
pub mod view;
