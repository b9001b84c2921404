// ============================================================
// DATASET LOADER
// ============================================================
// Load and validate the coffee-export CSV

use std::fs;
use std::path::PathBuf;

use csv::{ReaderBuilder, Trim};

use crate::domain::error::{AppError, Result};
use crate::domain::export::ExportRecord;

/// Columns the dataset must provide
const REQUIRED_COLUMNS: [&str; 4] = ["Country", "Region", "Export_Tons", "Export_Value_USD"];

/// Loader for the coffee-export dataset. Holds no parsed state; every call
/// re-reads the file so edits show up on the next request.
pub struct DatasetLoader {
    path: PathBuf,
}

impl DatasetLoader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read and parse the dataset file.
    pub fn load(&self) -> Result<Vec<ExportRecord>> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            AppError::IoError(format!(
                "Failed to read dataset {}: {}",
                self.path.display(),
                e
            ))
        })?;

        Self::load_content(&content)
    }

    /// Parse dataset content from a string.
    ///
    /// Any malformed row, missing required column or non-numeric measure is
    /// an error; a headers-only dataset parses to an empty record list.
    pub fn load_content(content: &str) -> Result<Vec<ExportRecord>> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read dataset headers: {}", e)))?
            .clone();

        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|header| header == column) {
                return Err(AppError::ParseError(format!(
                    "Dataset is missing required column: {}",
                    column
                )));
            }
        }

        let mut records = Vec::new();

        for (index, result) in reader.deserialize().enumerate() {
            let record: ExportRecord = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse dataset row {}: {}", index + 1, e))
            })?;
            records.push(record);
        }

        Ok(records)
    }
}
