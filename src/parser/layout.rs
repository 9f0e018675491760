//! Header schema: where course metadata lives and which body columns are read

use crate::error::{TimetableError, TimetableResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Data-row / column position of a single cell (header row excluded)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A body column and the value used when it (or its cell) is absent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub header: String,
    pub fallback: String,
}

impl ColumnSpec {
    pub fn new(header: &str, fallback: &str) -> Self {
        Self {
            header: header.to_string(),
            fallback: fallback.to_string(),
        }
    }
}

/// The five body columns that make up a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionColumns {
    pub section_type: ColumnSpec,
    pub instructor: ColumnSpec,
    pub room: ColumnSpec,
    pub days_hours: ColumnSpec,
    pub time_slots: ColumnSpec,
}

impl Default for SectionColumns {
    fn default() -> Self {
        Self {
            section_type: ColumnSpec::new("SEC", "N/A"),
            instructor: ColumnSpec::new("INSTRUCTOR-IN-CHARGE / Instructor", "N/A"),
            room: ColumnSpec::new("ROOM", "N/A"),
            days_hours: ColumnSpec::new("DAYS & HOURS", "N.A."),
            time_slots: ColumnSpec::new("Time Slot", ""),
        }
    }
}

impl SectionColumns {
    /// Expected columns in report order
    pub fn expected(&self) -> [&ColumnSpec; 5] {
        [
            &self.section_type,
            &self.instructor,
            &self.room,
            &self.days_hours,
            &self.time_slots,
        ]
    }
}

/// Layout of a course worksheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetLayout {
    pub code: CellRef,
    pub title: CellRef,
    pub credits: CellRef,
    /// First data row holding a section; rows above it are metadata
    pub body_start_row: usize,
    /// Written for blank metadata cells
    pub placeholder: String,
    pub columns: SectionColumns,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            code: CellRef::new(0, 1),
            title: CellRef::new(1, 1),
            credits: CellRef::new(2, 1),
            body_start_row: 4,
            placeholder: "N/A".to_string(),
            columns: SectionColumns::default(),
        }
    }
}

impl SheetLayout {
    /// Load a layout override from a JSON file; omitted fields keep defaults
    pub fn from_file(path: &Path) -> TimetableResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let layout: Self = serde_json::from_str(&content)
            .map_err(|e| TimetableError::Config(format!("{}: {}", path.display(), e)))?;
        layout.validate()?;
        Ok(layout)
    }

    /// Section rows must start below every metadata row
    pub fn validate(&self) -> TimetableResult<()> {
        let required = self.metadata_rows_required();
        if self.body_start_row < required {
            return Err(TimetableError::Config(format!(
                "body_start_row {} overlaps the metadata rows (must be at least {})",
                self.body_start_row, required
            )));
        }
        Ok(())
    }

    /// Data rows a worksheet needs before the metadata cells can be read
    pub fn metadata_rows_required(&self) -> usize {
        [self.code.row, self.title.row, self.credits.row]
            .into_iter()
            .max()
            .unwrap_or(0)
            + 1
    }
}
