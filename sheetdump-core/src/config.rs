//! Configuration for the column dumper

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Workbook read when no other path is configured
pub const DEFAULT_FILE_PATH: &str = "KERIS_공교육 중심 에듀테크 가치평가모형 평가양식_v3.0_251229.xlsx";

/// Column `O`
pub const DEFAULT_COLUMN_INDEX: usize = 14;

/// Which file to read and which column to print
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DumpConfig {
    /// Spreadsheet to read; only its first sheet is used
    #[serde(default = "default_file_path")]
    pub file_path: PathBuf,
    /// 0-based column whose values are printed
    #[serde(default = "default_column_index")]
    pub column_index: usize,
}

fn default_file_path() -> PathBuf {
    PathBuf::from(DEFAULT_FILE_PATH)
}

fn default_column_index() -> usize {
    DEFAULT_COLUMN_INDEX
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            file_path: default_file_path(),
            column_index: default_column_index(),
        }
    }
}

impl DumpConfig {
    pub fn new(file_path: impl Into<PathBuf>, column_index: usize) -> Self {
        Self {
            file_path: file_path.into(),
            column_index,
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        content.parse()
    }
}

impl FromStr for DumpConfig {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let config: DumpConfig = toml::from_str(s)?;
        Ok(config)
    }
}
