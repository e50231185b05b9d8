//! Table data structures

use chrono::NaiveDateTime;
use std::fmt;

/// Placeholder written for cells without a value
pub const EMPTY_PLACEHOLDER: &str = "NaN";

/// The first sheet of a workbook, split into a header row and data rows.
///
/// Positions are absolute: column 0 is spreadsheet column `A` and the header
/// is spreadsheet row 1, so data row `i` sits on spreadsheet row `i + 2`.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub sheet_name: String,
    pub headers: Vec<String>,
    pub column_count: usize,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Number of data rows (header excluded)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Header text of a column, if the header row has a value there
    pub fn header(&self, col: usize) -> Option<&str> {
        self.headers
            .get(col)
            .map(String::as_str)
            .filter(|h| !h.is_empty())
    }

    /// Values of one column, top to bottom. Short rows yield `Empty`.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &CellValue> {
        self.rows
            .iter()
            .map(move |row| row.get(col).unwrap_or(&CellValue::Empty))
    }
}

/// Cell value types
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
    DateTime(NaiveDateTime),
    Error(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => f.write_str(EMPTY_PLACEHOLDER),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Boolean(true) => f.write_str("TRUE"),
            CellValue::Boolean(false) => f.write_str("FALSE"),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            CellValue::Error(e) => f.write_str(e),
        }
    }
}

/// Convert a 0-based column index to its spreadsheet letters (0 -> A, 26 -> AA)
pub fn column_letter(col: usize) -> String {
    // Bijective base 26: there is no zero digit, so shift by one per place
    let mut letters = Vec::new();
    let mut n = col + 1;
    while n > 0 {
        n -= 1;
        letters.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    letters.iter().rev().map(|&b| b as char).collect()
}
