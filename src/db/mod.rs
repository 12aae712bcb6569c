//! Database layer for dolist.
//!
//! A single SQLite file holds named key-value slots. The task list is stored
//! as one JSON document per slot, so the schema stays tiny and the store can
//! switch slots (for example a "work" and a "home" list) without migrations.
//!
//! ## Usage
//!
//! ```rust
//! use dolist::db::slots::Slots;
//! use dolist::libs::persistence::KeyValueStore;
//!
//! let mut slots = Slots::in_memory()?;
//! slots.set("greeting", "hello")?;
//! assert_eq!(slots.get("greeting")?.as_deref(), Some("hello"));
//! # Ok::<(), dolist::libs::error::PersistenceError>(())
//! ```

/// Connection management. Opening a `Db` applies pending migrations.
pub mod db;

/// Versioned schema changes and migration history.
pub mod migrations;

/// The `slots` table as a [`KeyValueStore`](crate::libs::persistence::KeyValueStore).
pub mod slots;
