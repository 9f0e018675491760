//! In-memory worksheet with a normalized header row and fallback-aware row access

use calamine::{Data, Range};

/// A worksheet read into memory.
///
/// The first sheet row is the header row; every later row is a data row.
/// Data row `0` is the row directly under the header.
#[derive(Debug, Clone, PartialEq)]
pub struct Worksheet {
    name: String,
    columns: Vec<String>,
    rows: Vec<Vec<Data>>,
}

impl Worksheet {
    /// Build a worksheet from header names and data rows.
    ///
    /// Header names are trimmed; rows may be ragged.
    pub fn new<S: Into<String>>(name: S, columns: Vec<String>, rows: Vec<Vec<Data>>) -> Self {
        Self {
            name: name.into(),
            columns: columns.iter().map(|c| c.trim().to_string()).collect(),
            rows,
        }
    }

    /// Read a calamine range, addressing cells by absolute position from A1
    /// so leading empty rows or columns do not shift fixed cell positions.
    pub fn from_range(name: &str, range: &Range<Data>) -> Self {
        let Some((end_row, end_col)) = range.end() else {
            return Self::new(name, Vec::new(), Vec::new());
        };

        let columns = (0..=end_col)
            .map(|col| match range.get_value((0, col)).and_then(cell_text) {
                Some(text) => text,
                None => format!("col_{}", col),
            })
            .collect();

        let rows = (1..=end_row)
            .map(|row| {
                (0..=end_col)
                    .map(|col| range.get_value((row, col)).cloned().unwrap_or(Data::Empty))
                    .collect()
            })
            .collect();

        Self::new(name, columns, rows)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized header names, in sheet order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Index of the first column whose normalized header equals `name`
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Number of data rows (header excluded)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Text of the cell at data row `row`, column `col`
    pub fn cell_text(&self, row: usize, col: usize) -> Option<String> {
        self.rows.get(row)?.get(col).and_then(cell_text)
    }

    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        self.rows.get(index).map(|cells| Row {
            sheet: self,
            index,
            cells,
        })
    }

    /// Data rows from `start` onward
    pub fn rows_from(&self, start: usize) -> impl Iterator<Item = Row<'_>> {
        (start..self.rows.len()).filter_map(move |index| self.row(index))
    }
}

/// Borrowed view of one data row, with lookups by column name
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    sheet: &'a Worksheet,
    index: usize,
    cells: &'a [Data],
}

impl<'a> Row<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Cell text under `column`, `None` if the column is absent or the cell blank
    pub fn get(&self, column: &str) -> Option<String> {
        let col = self.sheet.column_index(column)?;
        self.cells.get(col).and_then(cell_text)
    }

    /// Cell text under `column`, or `fallback` when there is none
    pub fn get_or(&self, column: &str, fallback: &str) -> String {
        self.get(column).unwrap_or_else(|| fallback.to_string())
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|cell| cell_text(cell).is_none())
    }
}

/// Render a cell as text.
///
/// Blank strings, empty cells and error cells have no text. Whole numbers
/// lose their fraction so a slot cell holding `3` reads as "3", not "3.0".
pub fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) if s.trim().is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::Float(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
            Some(format!("{}", *f as i64))
        }
        other => Some(other.to_string()),
    }
}
