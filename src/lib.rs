//! Timetable - course timetable workbook to JSON
//!
//! Reads a spreadsheet workbook where every worksheet describes one course
//! and emits a normalized JSON document.
//!
//! # Features
//!
//! - Course code, title and credits read from fixed cells ([`parser::SheetLayout`])
//! - Section rows read by column name, with per-column fallbacks
//! - Time-slot codes 1-9 translated to hour ranges ("8-9" .. "4-5")
//! - Any workbook format calamine reads (.xlsx, .xlsm, .xlsb, .xls, .ods)
//!
//! # Example
//!
//! ```no_run
//! use timetable_json::core::{ConvertOptions, Converter};
//! use timetable_json::writer::JsonWriter;
//! use std::path::Path;
//!
//! let converter = Converter::new(ConvertOptions::default());
//! let conversion = converter.run(
//!     Path::new("timetable.xlsx"),
//!     &JsonWriter::new(),
//!     Path::new("timetable.json"),
//! )?;
//!
//! println!("Courses: {}", conversion.courses.len());
//! # Ok::<(), timetable_json::error::TimetableError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod parser;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{TimetableError, TimetableResult};
pub use types::{Course, ParsedCourse, Section, SheetWarning, TimetableCourse};
