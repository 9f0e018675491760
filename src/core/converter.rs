//! Conversion pipeline: load → parse every worksheet → translate → write

use crate::error::{TimetableError, TimetableResult};
use crate::excel::{TimetableWorkbook, WorkbookSource};
use crate::parser::{parse_worksheet, SheetLayout};
use crate::types::{SheetWarning, TimetableCourse};
use crate::writer::JsonWriter;
use std::path::Path;
use tracing::{error, info, warn};

/// What to do with a worksheet too short to hold the course metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShortSheetPolicy {
    /// Fail the whole run; nothing is written
    #[default]
    Abort,
    /// Leave the worksheet out and record a warning
    Skip,
}

#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub layout: SheetLayout,
    pub short_sheets: ShortSheetPolicy,
}

/// Translated courses in worksheet order, plus everything worth warning about
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    pub courses: Vec<TimetableCourse>,
    pub warnings: Vec<SheetWarning>,
}

impl Conversion {
    pub fn section_count(&self) -> usize {
        self.courses.iter().map(|c| c.sections.len()).sum()
    }
}

pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Parse and translate every worksheet of `workbook`, in workbook order
    pub fn convert<W: WorkbookSource + ?Sized>(
        &self,
        workbook: &mut W,
    ) -> TimetableResult<Conversion> {
        let mut conversion = Conversion::default();

        for sheet_name in workbook.sheet_names() {
            info!("Parsing sheet: {}", sheet_name);
            let sheet = workbook.worksheet(&sheet_name)?;

            let parsed = match parse_worksheet(&sheet, &self.options.layout) {
                Ok(parsed) => parsed,
                Err(e @ TimetableError::Layout { .. })
                    if self.options.short_sheets == ShortSheetPolicy::Skip =>
                {
                    warn!("Skipping sheet '{}': {}", sheet_name, e);
                    conversion.warnings.push(SheetWarning::SkippedSheet {
                        sheet: sheet_name,
                        reason: e.to_string(),
                    });
                    continue;
                }
                Err(e) => return Err(e),
            };

            conversion
                .warnings
                .extend(
                    parsed
                        .missing_columns
                        .into_iter()
                        .map(|column| SheetWarning::MissingColumn {
                            sheet: sheet_name.clone(),
                            column,
                        }),
                );
            conversion.courses.push(parsed.course.translate());
        }

        Ok(conversion)
    }

    /// Convert the workbook at `input` and write the JSON document to `output`.
    ///
    /// Any failure before the write leaves `output` untouched.
    pub fn run(
        &self,
        input: &Path,
        writer: &JsonWriter,
        output: &Path,
    ) -> TimetableResult<Conversion> {
        let conversion = self.load_and_convert(input)?;

        writer.write(&conversion.courses, output)?;
        info!("JSON file generated: {}", output.display());

        Ok(conversion)
    }

    /// Open `input` and convert it without writing anything
    pub fn load_and_convert(&self, input: &Path) -> TimetableResult<Conversion> {
        let mut workbook = TimetableWorkbook::open(input).map_err(|e| {
            error!("{}", e);
            e
        })?;

        self.convert(&mut workbook)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::excel::{InMemoryWorkbook, Worksheet};
    use calamine::Data;
    use tempfile::TempDir;

    fn text(s: &str) -> Data {
        Data::String(s.to_string())
    }

    fn course_sheet(name: &str, code: &str, slots: &str) -> Worksheet {
        Worksheet::new(
            name,
            vec![
                "Field".to_string(),
                "Value".to_string(),
                "SEC".to_string(),
                "INSTRUCTOR-IN-CHARGE / Instructor".to_string(),
                "ROOM".to_string(),
                "DAYS & HOURS".to_string(),
                "Time Slot".to_string(),
            ],
            vec![
                vec![text("Code"), text(code)],
                vec![text("Title"), text("Course")],
                vec![text("Credits"), text("3-0-0")],
                vec![],
                vec![
                    Data::Empty,
                    Data::Empty,
                    text("L1"),
                    text("Dr. X"),
                    text("101"),
                    text("MWF"),
                    text(slots),
                ],
            ],
        )
    }

    fn short_sheet(name: &str) -> Worksheet {
        Worksheet::new(name, vec!["Field".to_string()], vec![vec![text("x")]])
    }

    #[test]
    fn test_convert_translates_in_sheet_order() {
        let mut workbook = InMemoryWorkbook::new(vec![
            course_sheet("B", "CS202", "3, 1, 3, 9"),
            course_sheet("A", "CS101", "1"),
        ]);

        let conversion = Converter::new(ConvertOptions::default())
            .convert(&mut workbook)
            .unwrap();

        assert!(conversion.warnings.is_empty());
        let codes: Vec<&str> = conversion.courses.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["CS202", "CS101"]);
        assert_eq!(
            conversion.courses[0].sections[0].time_slots,
            vec!["10-11", "8-9", "10-11", "4-5"]
        );
        assert_eq!(conversion.section_count(), 2);
    }

    #[test]
    fn test_short_sheet_aborts_by_default() {
        let mut workbook =
            InMemoryWorkbook::new(vec![course_sheet("A", "CS101", "1"), short_sheet("Notes")]);

        let result = Converter::new(ConvertOptions::default()).convert(&mut workbook);
        assert!(matches!(result, Err(TimetableError::Layout { .. })));
    }

    #[test]
    fn test_short_sheet_skipped_with_warning() {
        let mut workbook =
            InMemoryWorkbook::new(vec![short_sheet("Notes"), course_sheet("A", "CS101", "1")]);
        let options = ConvertOptions {
            short_sheets: ShortSheetPolicy::Skip,
            ..ConvertOptions::default()
        };

        let conversion = Converter::new(options).convert(&mut workbook).unwrap();

        assert_eq!(conversion.courses.len(), 1);
        assert_eq!(conversion.warnings.len(), 1);
        assert!(matches!(
            &conversion.warnings[0],
            SheetWarning::SkippedSheet { sheet, .. } if sheet == "Notes"
        ));
    }

    #[test]
    fn test_missing_columns_become_warnings() {
        let sheet = Worksheet::new(
            "CS101",
            vec!["Field".to_string(), "Value".to_string(), "SEC".to_string()],
            vec![
                vec![text("Code"), text("CS101")],
                vec![text("Title"), text("Intro")],
                vec![text("Credits"), text("3")],
                vec![],
                vec![Data::Empty, Data::Empty, text("L1")],
            ],
        );
        let mut workbook = InMemoryWorkbook::new(vec![sheet]);

        let conversion = Converter::new(ConvertOptions::default())
            .convert(&mut workbook)
            .unwrap();

        assert_eq!(conversion.warnings.len(), 4);
        assert!(conversion.warnings.contains(&SheetWarning::MissingColumn {
            sheet: "CS101".to_string(),
            column: "ROOM".to_string(),
        }));
        let section = &conversion.courses[0].sections[0];
        assert_eq!(section.room_number, "N/A");
        assert!(section.time_slots.is_empty());
    }

    #[test]
    fn test_run_with_missing_input_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("missing.xlsx");
        let output = temp_dir.path().join("timetable.json");

        let result = Converter::new(ConvertOptions::default()).run(
            &input,
            &JsonWriter::new(),
            &output,
        );

        assert!(matches!(result, Err(TimetableError::NotFound(_))));
        assert!(!output.exists());
    }
}
