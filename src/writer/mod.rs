//! JSON emitter - translated courses → `{"courses": [...]}`

use crate::error::{TimetableError, TimetableResult};
use crate::types::TimetableCourse;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;

/// Output file name used when none is given
pub const DEFAULT_OUTPUT: &str = "timetable.json";

/// Writes the timetable document with four-space indentation.
///
/// The course-code key defaults to the empty string, which is what existing
/// consumers of this format read. Set a named key with [`JsonWriter::with_code_key`].
#[derive(Debug, Clone, Default)]
pub struct JsonWriter {
    code_key: String,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_code_key<S: Into<String>>(code_key: S) -> Self {
        Self {
            code_key: code_key.into(),
        }
    }

    /// Render the whole document in memory
    pub fn to_string(&self, courses: &[TimetableCourse]) -> TimetableResult<String> {
        let document = Document {
            code_key: &self.code_key,
            courses,
        };

        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        document.serialize(&mut serializer)?;

        String::from_utf8(buf).map_err(|e| {
            TimetableError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }

    /// Render, then write in one go; nothing is created if rendering fails
    pub fn write(&self, courses: &[TimetableCourse], path: &Path) -> TimetableResult<()> {
        let json = self.to_string(courses)?;
        fs::write(path, json)?;
        Ok(())
    }
}

struct Document<'a> {
    code_key: &'a str,
    courses: &'a [TimetableCourse],
}

impl Serialize for Document<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries: Vec<CourseEntry<'_>> = self
            .courses
            .iter()
            .map(|course| CourseEntry {
                code_key: self.code_key,
                course,
            })
            .collect();

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("courses", &entries)?;
        map.end()
    }
}

struct CourseEntry<'a> {
    code_key: &'a str,
    course: &'a TimetableCourse,
}

impl Serialize for CourseEntry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry(self.code_key, &self.course.code)?;
        map.serialize_entry("course_title", &self.course.title)?;
        map.serialize_entry("credits", &self.course.credits)?;
        map.serialize_entry("sections", &self.course.sections)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Course, Section};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_courses() -> Vec<TimetableCourse> {
        let mut course = Course::new("CS101".into(), "Intro".into(), "3-0-0".into());
        course.add_section(Section {
            section_type: "L1".to_string(),
            instructor: "Dr. X".to_string(),
            room_number: "101".to_string(),
            days_hours: "MWF 8-9".to_string(),
            time_slots: vec!["8-9".to_string()],
        });
        vec![course]
    }

    #[test]
    fn test_document_layout_with_empty_code_key() {
        let json = JsonWriter::new().to_string(&sample_courses()).unwrap();

        let expected = r#"{
    "courses": [
        {
            "": "CS101",
            "course_title": "Intro",
            "credits": "3-0-0",
            "sections": [
                {
                    "section_type": "L1",
                    "instructor": "Dr. X",
                    "room_number": "101",
                    "days_hours": "MWF 8-9",
                    "time_slots": [
                        "8-9"
                    ]
                }
            ]
        }
    ]
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_named_code_key() {
        let writer = JsonWriter::with_code_key("course_code");
        let json = writer.to_string(&sample_courses()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["courses"][0]["course_code"], "CS101");
        assert!(value["courses"][0].get("").is_none());
    }

    #[test]
    fn test_empty_course_list() {
        let json = JsonWriter::new().to_string(&[]).unwrap();
        assert_eq!(json, "{\n    \"courses\": []\n}");
    }

    #[test]
    fn test_non_ascii_kept_as_utf8() {
        let mut courses = sample_courses();
        courses[0].sections[0].instructor = "Dr. Müller".to_string();

        let json = JsonWriter::new().to_string(&courses).unwrap();
        assert!(json.contains("Dr. Müller"));
    }

    #[test]
    fn test_write_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_OUTPUT);

        let writer = JsonWriter::new();
        writer.write(&sample_courses(), &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, writer.to_string(&sample_courses()).unwrap());
    }
}
