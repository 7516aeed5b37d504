use serde::{Deserialize, Serialize};

/// Outcome classification carried on every progress event. The presentation
/// layer styles dialogs from this tag, never from message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    /// Non-terminal: a file is being processed
    Running,
    /// All files processed (skips, if any, are tallied on the event)
    Success,
    /// No .mov/.mp4 files in the target folder
    NoFiles,
    /// Stopped by the caller via the cancel token
    Cancelled,
    /// The timestamp spec did not parse
    InvalidInput,
    /// Unclassified error aborted the run
    Fatal,
}

/// Message key for the i18n catalog, one per distinct notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCode {
    ProcessingFile,
    AllDone,
    NoFilesFound,
    StoppedByUser,
    InvalidTimestampFormat,
    InvalidFolder,
    CriticalError,
}

/// One progress notification from the extraction worker.
///
/// Exactly one event per run has `terminal == true` and it is always the
/// last one. Non-terminal events are emitted once per file started.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub completed: usize,
    pub total: usize,
    pub status: RunStatus,
    pub code: EventCode,
    /// File currently being processed (ProcessingFile events only)
    pub file_name: Option<String>,
    /// Error description (CriticalError events only)
    pub detail: Option<String>,
    /// Files that failed to open/probe and were skipped whole
    pub skipped_files: usize,
    /// Individual timestamps that failed to decode or write
    pub skipped_timestamps: usize,
    pub terminal: bool,
}

impl ProgressEvent {
    pub fn processing(index: usize, total: usize, file_name: &str) -> Self {
        Self {
            completed: index,
            total,
            status: RunStatus::Running,
            code: EventCode::ProcessingFile,
            file_name: Some(file_name.to_string()),
            detail: None,
            skipped_files: 0,
            skipped_timestamps: 0,
            terminal: false,
        }
    }

    pub fn all_done(total: usize, skipped_files: usize, skipped_timestamps: usize) -> Self {
        Self {
            completed: total,
            total,
            status: RunStatus::Success,
            code: EventCode::AllDone,
            file_name: None,
            detail: None,
            skipped_files,
            skipped_timestamps,
            terminal: true,
        }
    }

    pub fn no_files() -> Self {
        Self {
            completed: 0,
            total: 1,
            status: RunStatus::NoFiles,
            code: EventCode::NoFilesFound,
            file_name: None,
            detail: None,
            skipped_files: 0,
            skipped_timestamps: 0,
            terminal: true,
        }
    }

    pub fn cancelled(completed: usize, total: usize) -> Self {
        Self {
            completed,
            total,
            status: RunStatus::Cancelled,
            code: EventCode::StoppedByUser,
            file_name: None,
            detail: None,
            skipped_files: 0,
            skipped_timestamps: 0,
            terminal: true,
        }
    }

    pub fn invalid_input() -> Self {
        Self {
            completed: 0,
            total: 1,
            status: RunStatus::InvalidInput,
            code: EventCode::InvalidTimestampFormat,
            file_name: None,
            detail: None,
            skipped_files: 0,
            skipped_timestamps: 0,
            terminal: true,
        }
    }

    pub fn invalid_folder() -> Self {
        Self {
            code: EventCode::InvalidFolder,
            ..Self::invalid_input()
        }
    }

    pub fn fatal(detail: String) -> Self {
        Self {
            completed: 0,
            total: 1,
            status: RunStatus::Fatal,
            code: EventCode::CriticalError,
            file_name: None,
            detail: Some(detail),
            skipped_files: 0,
            skipped_timestamps: 0,
            terminal: true,
        }
    }
}
