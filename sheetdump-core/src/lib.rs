//! sheetdump-core: print one column of a spreadsheet's first sheet
//!
//! The first row of the sheet is treated as a header; every following row is
//! printed as `Row {n}: {value}`, where `n` is the spreadsheet row number.

pub mod config;
pub mod dump;
pub mod error;
pub mod reader;

pub use config::DumpConfig;
pub use dump::{ColumnDumper, DumpOutcome, RowEntry, dump_table, report};
pub use error::{ParseError, ParseResult};
pub use reader::{CellValue, Table, read_first_sheet};
