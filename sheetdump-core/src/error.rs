//! Error types for reading the first sheet of a workbook

use std::path::PathBuf;
use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

/// Failure to turn a file into a table
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("cannot open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("'{}' does not contain any sheet", path.display())]
    NoSheets { path: PathBuf },

    #[error("cannot read sheet '{sheet}': {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_file() {
        let err = ParseError::NoSheets {
            path: PathBuf::from("empty.xlsx"),
        };
        assert_eq!(err.to_string(), "'empty.xlsx' does not contain any sheet");

        let err = ParseError::Open {
            path: PathBuf::from("missing.xlsx"),
            source: calamine::Error::Msg("Cannot detect file format"),
        };
        assert!(err.to_string().starts_with("cannot open 'missing.xlsx': "));
    }
}
