//! Task export command.
//!
//! Writes the current list, in display order, to CSV (the default) or JSON.

use super::open_task_list;
use crate::{
    libs::{
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
    format: ExportFormat,
    /// Output file, defaults to dolist_export_<timestamp>.<ext>
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let list = open_task_list()?;
    let path = Exporter::new(args.format, args.output).export(list.list(), Local::now().date_naive())?;

    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
