use std::path::PathBuf;
use thiserror::Error;

pub type TimetableResult<T> = Result<T, TimetableError>;

#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("An error occurred while loading the workbook {}: {message}", .path.display())]
    Workbook { path: PathBuf, message: String },

    #[error("Failed to read worksheet '{sheet}': {message}")]
    Worksheet { sheet: String, message: String },

    #[error(
        "Worksheet '{sheet}' has {rows} data rows, course metadata needs at least {required}"
    )]
    Layout {
        sheet: String,
        rows: usize,
        required: usize,
    },

    #[error("Invalid layout configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
