//! # Dolist
//!
//! An ordered to-do list with priorities, due dates and local persistence.
//!
//! ## Features
//!
//! - **Task Store**: Add, edit, complete, delete and reorder tasks with validation
//! - **Derived State**: Overdue and due-today flags computed from the current day
//! - **Persistence**: The whole list is saved to a named SQLite slot after every change
//! - **Data Export**: Export the list to CSV or JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dolist::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
