//! # Command Layer
//!
//! The business logic for each user-facing flow of the admin page. Commands
//! operate on the core types ([`crate::store::RecordStore`],
//! [`crate::selection::Selection`]) and return a structured [`CmdResult`]; the
//! presentation layer decides how to render it. Nothing here performs I/O,
//! prints, or exits.
//!
//! ## Structured returns
//!
//! [`CmdResult`] carries:
//! - `affected`: records a mutation touched (the saved record, the deleted
//!   records).
//! - `listed`: records to display (list/filter results).
//! - `export`: a CSV document plus its suggested filename. Turning that into
//!   an actual download is the caller's job.
//! - `messages`: leveled [`CmdMessage`]s the UI shows as notifications.
//!
//! ## Command modules
//!
//! - [`create`]: strict insert of a new record
//! - [`save`]: insert-or-replace — the form-submit path
//! - [`delete`]: single and bulk (selection-driven) deletion
//! - [`list`]: filtered listing
//! - [`export`]: CSV export of the catalog or the selection
//! - [`import`]: simulated file upload

use serde::Serialize;

use crate::model::Property;

pub mod create;
pub mod delete;
pub mod export;
pub mod import;
pub mod list;
pub mod save;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// CSV text plus the filename the UI should suggest for the download.
#[derive(Debug, Clone)]
pub struct CsvDocument {
    pub filename: String,
    pub content: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Property>,
    pub listed: Vec<Property>,
    pub export: Option<CsvDocument>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, records: Vec<Property>) -> Self {
        self.affected = records;
        self
    }

    pub fn with_listed(mut self, records: Vec<Property>) -> Self {
        self.listed = records;
        self
    }

    pub fn with_export(mut self, document: CsvDocument) -> Self {
        self.export = Some(document);
        self
    }
}
