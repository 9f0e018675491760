//! Spreadsheet input
//!
//! - Loader: opens a workbook file and hands out worksheets by name
//! - Worksheet: header-normalized rows with lookup-with-default access

mod importer;
mod sheet;

pub use importer::{InMemoryWorkbook, TimetableWorkbook, WorkbookSource};
pub use sheet::{cell_text, Row, Worksheet};
