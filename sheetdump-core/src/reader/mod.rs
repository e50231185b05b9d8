//! Excel/ODS file reader using calamine

use crate::error::{ParseError, ParseResult};
use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use chrono::{NaiveDate, NaiveDateTime};
use std::path::Path;
use tracing::debug;

pub mod table;

pub use table::{CellValue, EMPTY_PLACEHOLDER, Table, column_letter};

/// Read the first sheet of a workbook into a [`Table`]
pub fn read_first_sheet<P: AsRef<Path>>(path: P) -> ParseResult<Table> {
    let path = path.as_ref();
    let mut excel: Sheets<_> = open_workbook_auto(path).map_err(|source| ParseError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let sheet_name = excel
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ParseError::NoSheets {
            path: path.to_path_buf(),
        })?;
    debug!(path = %path.display(), sheet = %sheet_name, "opened workbook");

    let range = match excel.worksheet_range_at(0) {
        Some(Ok(range)) => range,
        Some(Err(source)) => {
            return Err(ParseError::Sheet {
                sheet: sheet_name,
                source,
            });
        }
        None => {
            return Err(ParseError::NoSheets {
                path: path.to_path_buf(),
            });
        }
    };

    let table = parse_table(&sheet_name, &range);
    debug!(
        sheet = %table.sheet_name,
        columns = table.column_count,
        rows = table.row_count(),
        "parsed first sheet"
    );
    Ok(table)
}

/// Lay a calamine range out on absolute sheet positions, first row as header
fn parse_table(name: &str, range: &Range<Data>) -> Table {
    let Some((end_row, end_col)) = range.end().filter(|_| !range.is_empty()) else {
        return Table {
            sheet_name: name.to_string(),
            headers: Vec::new(),
            column_count: 0,
            rows: Vec::new(),
        };
    };

    let column_count = end_col as usize + 1;
    let row_at = |row: u32| -> Vec<CellValue> {
        (0..=end_col)
            .map(|col| {
                range
                    .get_value((row, col))
                    .map(parse_cell_value)
                    .unwrap_or(CellValue::Empty)
            })
            .collect()
    };

    let headers = row_at(0)
        .into_iter()
        .map(|cell| match cell {
            CellValue::Empty => String::new(),
            other => other.to_string(),
        })
        .collect();
    let rows = (1..=end_row).map(row_at).collect();

    Table {
        sheet_name: name.to_string(),
        headers,
        column_count,
        rows,
    }
}

fn parse_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) if s.is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::Error(e) => CellValue::Error(e.to_string()),
        Data::Empty => CellValue::Empty,
        Data::DateTime(dt) if dt.is_duration() => CellValue::Number(dt.as_f64()),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(CellValue::DateTime)
            .unwrap_or_else(|| CellValue::Number(dt.as_f64())),
        Data::DateTimeIso(s) => parse_iso_datetime(s)
            .map(CellValue::DateTime)
            .unwrap_or_else(|| CellValue::Text(s.clone())),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}

/// ODS stores dates as ISO 8601 text, with or without a time part
fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
