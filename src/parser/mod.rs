//! Worksheet parser - one worksheet → one course
//!
//! Course metadata is read from fixed cells described by [`SheetLayout`];
//! sections come from the rows below it, looked up by column name.

mod layout;

pub use layout::{CellRef, ColumnSpec, SectionColumns, SheetLayout};

use crate::error::{TimetableError, TimetableResult};
use crate::excel::{Row, Worksheet};
use crate::types::{ParsedCourse, Section};
use tracing::{debug, warn};

/// Result of parsing one worksheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSheet {
    pub course: ParsedCourse,
    /// Expected body columns the worksheet lacks
    pub missing_columns: Vec<String>,
}

/// Parse a course worksheet.
///
/// Fails only when the worksheet is too short to hold the metadata cells.
/// Missing body columns are reported and replaced by their fallbacks.
pub fn parse_worksheet(sheet: &Worksheet, layout: &SheetLayout) -> TimetableResult<ParsedSheet> {
    debug!(sheet = sheet.name(), columns = ?sheet.columns(), "Columns in sheet");

    let required = layout.metadata_rows_required();
    if sheet.row_count() < required {
        return Err(TimetableError::Layout {
            sheet: sheet.name().to_string(),
            rows: sheet.row_count(),
            required,
        });
    }

    let metadata = |cell: CellRef| {
        sheet
            .cell_text(cell.row, cell.col)
            .unwrap_or_else(|| layout.placeholder.clone())
    };
    let mut course = ParsedCourse::new(
        metadata(layout.code),
        metadata(layout.title),
        metadata(layout.credits),
    );

    let missing_columns: Vec<String> = layout
        .columns
        .expected()
        .iter()
        .filter(|spec| !sheet.has_column(&spec.header))
        .map(|spec| spec.header.clone())
        .collect();
    for column in &missing_columns {
        warn!("Column '{}' is missing in sheet '{}'", column, sheet.name());
    }

    for row in sheet.rows_from(layout.body_start_row) {
        if row.is_blank() {
            continue;
        }
        course.add_section(parse_section(&row, &layout.columns));
    }

    Ok(ParsedSheet {
        course,
        missing_columns,
    })
}

fn parse_section(row: &Row<'_>, columns: &SectionColumns) -> Section<u32> {
    let field = |spec: &ColumnSpec| row.get_or(&spec.header, &spec.fallback);

    Section {
        section_type: field(&columns.section_type),
        instructor: field(&columns.instructor),
        room_number: field(&columns.room),
        days_hours: field(&columns.days_hours),
        time_slots: parse_time_slot_codes(&field(&columns.time_slots)),
    }
}

/// Split comma-separated slot text into numeric codes.
///
/// Tokens are trimmed; anything that is not a plain non-negative integer is
/// dropped without error. Integers too large for a code become `u32::MAX`,
/// which translates to the unknown-slot label.
pub fn parse_time_slot_codes(raw: &str) -> Vec<u32> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()))
        .map(|token| token.parse().unwrap_or(u32::MAX))
        .collect()
}
