//! Workbook fixtures shared by the integration tests

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Header row of a complete course worksheet
pub const HEADERS: [&str; 7] = [
    "Field",
    "Value",
    "SEC",
    "INSTRUCTOR-IN-CHARGE / Instructor",
    "ROOM",
    "DAYS & HOURS",
    "Time Slot",
];

/// One course worksheet: header row, three metadata rows, a reserved row,
/// then section rows whose cells line up with `headers`
pub struct SheetSpec<'a> {
    pub name: &'a str,
    pub headers: &'a [&'a str],
    pub metadata: [&'a str; 3],
    pub sections: Vec<Vec<&'a str>>,
}

impl<'a> SheetSpec<'a> {
    pub fn course(name: &'a str, metadata: [&'a str; 3], sections: Vec<Vec<&'a str>>) -> Self {
        Self {
            name,
            headers: &HEADERS,
            metadata,
            sections,
        }
    }
}

/// Write `sheets` to an .xlsx file; numeric-looking cells are written as numbers
pub fn write_workbook(path: &Path, sheets: &[SheetSpec<'_>]) {
    let mut workbook = Workbook::new();

    for spec in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(spec.name).unwrap();

        for (col, header) in spec.headers.iter().enumerate() {
            worksheet.write_string(0, col as u16, *header).unwrap();
        }

        let labels = ["Course No.", "Course Title", "Credits"];
        for (idx, (label, value)) in labels.iter().zip(spec.metadata.iter()).enumerate() {
            let row = idx as u32 + 1;
            worksheet.write_string(row, 0, *label).unwrap();
            if !value.is_empty() {
                worksheet.write_string(row, 1, *value).unwrap();
            }
        }

        // sheet row 4 is the reserved row; sections start on sheet row 5
        for (idx, cells) in spec.sections.iter().enumerate() {
            let row = idx as u32 + 5;
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_empty() {
                    continue;
                }
                match cell.parse::<f64>() {
                    Ok(number) => worksheet.write_number(row, col as u16, number).unwrap(),
                    Err(_) => worksheet.write_string(row, col as u16, *cell).unwrap(),
                };
            }
        }
    }

    workbook.save(path).unwrap();
}

/// Section row for the standard headers (first two cells belong to the metadata columns)
pub fn section<'a>(
    section_type: &'a str,
    instructor: &'a str,
    room: &'a str,
    days_hours: &'a str,
    time_slots: &'a str,
) -> Vec<&'a str> {
    vec!["", "", section_type, instructor, room, days_hours, time_slots]
}
