//! Workbook loader - spreadsheet file → worksheets

use crate::error::{TimetableError, TimetableResult};
use crate::excel::sheet::Worksheet;
use calamine::{open_workbook_auto, Reader, Sheets};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Anything that can hand out named worksheets in a stable order
pub trait WorkbookSource {
    /// Worksheet names, in workbook order
    fn sheet_names(&self) -> Vec<String>;

    /// Read one worksheet by name
    fn worksheet(&mut self, name: &str) -> TimetableResult<Worksheet>;
}

/// Spreadsheet workbook on disk (.xlsx, .xlsm, .xlsb, .xls, .ods)
pub struct TimetableWorkbook {
    path: PathBuf,
    sheets: Sheets<BufReader<File>>,
}

impl TimetableWorkbook {
    /// Open the workbook at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> TimetableResult<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            return Err(TimetableError::NotFound(path));
        }

        let sheets = open_workbook_auto(&path).map_err(|e| TimetableError::Workbook {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(Self { path, sheets })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WorkbookSource for TimetableWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    fn worksheet(&mut self, name: &str) -> TimetableResult<Worksheet> {
        let range = self
            .sheets
            .worksheet_range(name)
            .map_err(|e| TimetableError::Worksheet {
                sheet: name.to_string(),
                message: e.to_string(),
            })?;

        Ok(Worksheet::from_range(name, &range))
    }
}

/// Worksheets already in memory, mostly useful for tests and callers that
/// read tabular data from elsewhere
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkbook {
    sheets: Vec<Worksheet>,
}

impl InMemoryWorkbook {
    pub fn new(sheets: Vec<Worksheet>) -> Self {
        Self { sheets }
    }
}

impl WorkbookSource for InMemoryWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name().to_string()).collect()
    }

    fn worksheet(&mut self, name: &str) -> TimetableResult<Worksheet> {
        self.sheets
            .iter()
            .find(|s| s.name() == name)
            .cloned()
            .ok_or_else(|| TimetableError::Worksheet {
                sheet: name.to_string(),
                message: "no such worksheet".to_string(),
            })
    }
}
