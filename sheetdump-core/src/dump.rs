//! Column dumper: select one column of the first sheet and render it

use crate::config::DumpConfig;
use crate::error::ParseResult;
use crate::reader::{self, CellValue, Table, column_letter};
use std::fmt;
use std::io::{self, Write};
use tracing::{info, warn};

/// Data row `i` is labelled `i + ROW_LABEL_OFFSET`: 1-based, plus the header row
pub const ROW_LABEL_OFFSET: usize = 2;

/// One printed line of a successful dump
#[derive(Debug, Clone, PartialEq)]
pub struct RowEntry {
    pub label: usize,
    pub value: CellValue,
}

impl fmt::Display for RowEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row {}: {}", self.label, self.value)
    }
}

/// What a successful parse produces
#[derive(Debug, Clone, PartialEq)]
pub enum DumpOutcome {
    /// The target column exists; one entry per data row, in sheet order
    Rows(Vec<RowEntry>),
    /// The sheet is narrower than the target column
    InsufficientColumns { found: usize },
}

impl DumpOutcome {
    /// Write the outcome as newline-terminated lines
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            DumpOutcome::Rows(entries) => {
                for entry in entries {
                    writeln!(out, "{}", entry)?;
                }
                Ok(())
            }
            DumpOutcome::InsufficientColumns { .. } => writeln!(out, "{}", self),
        }
    }
}

impl fmt::Display for DumpOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DumpOutcome::Rows(entries) => {
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", entry)?;
                }
                Ok(())
            }
            DumpOutcome::InsufficientColumns { found } => {
                write!(f, "Excel file only has {} columns.", found)
            }
        }
    }
}

/// Select `column_index` from an already parsed table
pub fn dump_table(table: &Table, column_index: usize) -> DumpOutcome {
    if table.column_count <= column_index {
        warn!(
            sheet = %table.sheet_name,
            columns = table.column_count,
            column = %column_letter(column_index),
            "sheet is narrower than the target column"
        );
        return DumpOutcome::InsufficientColumns {
            found: table.column_count,
        };
    }

    info!(
        sheet = %table.sheet_name,
        header = table.header(column_index).unwrap_or(""),
        "--- Column {} Content ---",
        column_letter(column_index)
    );

    let entries = table
        .column(column_index)
        .enumerate()
        .map(|(i, value)| RowEntry {
            label: i + ROW_LABEL_OFFSET,
            value: value.clone(),
        })
        .collect();
    DumpOutcome::Rows(entries)
}

/// Reads the configured workbook and extracts the configured column
#[derive(Debug, Clone, Default)]
pub struct ColumnDumper {
    config: DumpConfig,
}

impl ColumnDumper {
    pub fn new(config: DumpConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DumpConfig {
        &self.config
    }

    /// Parse the first sheet and select the column
    pub fn dump(&self) -> ParseResult<DumpOutcome> {
        let table = reader::read_first_sheet(&self.config.file_path)?;
        Ok(dump_table(&table, self.config.column_index))
    }
}

/// Run the dumper and write exactly one outcome: the dump, the
/// insufficient-columns notice, or a single `Error: ...` line.
pub fn report<W: Write>(config: &DumpConfig, out: &mut W) -> io::Result<()> {
    let dumper = ColumnDumper::new(config.clone());
    match dumper.dump() {
        Ok(outcome) => outcome.write_to(out),
        Err(e) => {
            warn!(
                path = %dumper.config().file_path.display(),
                "failed to read workbook: {:?}",
                e
            );
            writeln!(out, "Error: {}", e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: usize, column_o: Vec<CellValue>) -> Table {
        let rows = column_o
            .into_iter()
            .map(|value| {
                let mut row = vec![CellValue::Empty; columns];
                if columns > 14 {
                    row[14] = value;
                }
                row
            })
            .collect();
        Table {
            sheet_name: "Sheet1".to_string(),
            headers: (0..columns).map(column_letter).collect(),
            column_count: columns,
            rows,
        }
    }

    fn render(outcome: &DumpOutcome) -> String {
        let mut out = Vec::new();
        outcome.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_dump_column_o() {
        let table = table(
            16,
            vec![
                CellValue::Number(5.0),
                CellValue::Empty,
                CellValue::Text("text".to_string()),
            ],
        );

        let outcome = dump_table(&table, 14);
        assert_eq!(render(&outcome), "Row 2: 5\nRow 3: NaN\nRow 4: text\n");
        assert_eq!(outcome.to_string(), "Row 2: 5\nRow 3: NaN\nRow 4: text");
    }

    #[test]
    fn test_insufficient_columns() {
        let table = table(10, vec![CellValue::Number(1.0); 4]);

        let outcome = dump_table(&table, 14);
        assert_eq!(outcome, DumpOutcome::InsufficientColumns { found: 10 });
        assert_eq!(render(&outcome), "Excel file only has 10 columns.\n");
    }

    #[test]
    fn test_exactly_target_width_is_insufficient() {
        let table = table(14, vec![]);
        assert_eq!(
            dump_table(&table, 14),
            DumpOutcome::InsufficientColumns { found: 14 }
        );
    }

    #[test]
    fn test_header_only_prints_nothing() {
        let table = table(15, vec![]);
        let outcome = dump_table(&table, 14);
        assert_eq!(outcome, DumpOutcome::Rows(Vec::new()));
        assert_eq!(render(&outcome), "");
    }

    #[test]
    fn test_dumper_keeps_config() {
        let dumper = ColumnDumper::default();
        assert_eq!(dumper.config(), &DumpConfig::default());
        assert_eq!(dumper.config().column_index, 14);
    }

    #[test]
    fn test_report_missing_file() {
        let config = DumpConfig::new("no-such-workbook.xlsx", 14);
        let mut out = Vec::new();
        report(&config, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Error: "));
        assert!(text.contains("no-such-workbook.xlsx"));
        assert_eq!(text.lines().count(), 1);
    }
}
