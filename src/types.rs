use serde::Serialize;

//==============================================================================
// Timetable Records
//==============================================================================

/// One course, built from one worksheet.
///
/// `T` is the time-slot representation: numeric codes (`u32`) straight out of
/// the parser, display labels (`String`) after translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course<T> {
    pub code: String,
    pub title: String,
    pub credits: String,
    pub sections: Vec<Section<T>>,
}

/// One section row of a course worksheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section<T> {
    pub section_type: String,
    pub instructor: String,
    pub room_number: String,
    pub days_hours: String,
    pub time_slots: Vec<T>,
}

/// Course as produced by the worksheet parser
pub type ParsedCourse = Course<u32>;

/// Course ready for output, time slots rendered as "8-9" style labels
pub type TimetableCourse = Course<String>;

impl<T> Course<T> {
    pub fn new(code: String, title: String, credits: String) -> Self {
        Self {
            code,
            title,
            credits,
            sections: Vec::new(),
        }
    }

    pub fn add_section(&mut self, section: Section<T>) {
        self.sections.push(section);
    }
}

impl Course<u32> {
    /// Replace every section's slot codes with display labels
    pub fn translate(self) -> Course<String> {
        Course {
            code: self.code,
            title: self.title,
            credits: self.credits,
            sections: self.sections.into_iter().map(Section::translate).collect(),
        }
    }
}

impl Section<u32> {
    pub fn translate(self) -> Section<String> {
        Section {
            time_slots: crate::core::translate_time_slots(&self.time_slots),
            section_type: self.section_type,
            instructor: self.instructor,
            room_number: self.room_number,
            days_hours: self.days_hours,
        }
    }
}

//==============================================================================
// Diagnostics
//==============================================================================

/// Non-fatal condition found while converting a workbook
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetWarning {
    /// An expected body column is absent; its fallback value was used
    MissingColumn { sheet: String, column: String },
    /// Worksheet left out of the output (only with `ShortSheetPolicy::Skip`)
    SkippedSheet { sheet: String, reason: String },
}

impl std::fmt::Display for SheetWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetWarning::MissingColumn { sheet, column } => {
                write!(f, "Column '{}' is missing in sheet '{}'", column, sheet)
            }
            SheetWarning::SkippedSheet { sheet, reason } => {
                write!(f, "Sheet '{}' skipped: {}", sheet, reason)
            }
        }
    }
}
