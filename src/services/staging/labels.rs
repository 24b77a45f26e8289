use super::types::LabelRecord;
use crate::types::errors::{StagingError, StagingResult};
use std::path::Path;

/// Read the whole label table into memory.
///
/// The table is a CSV file whose header row must contain `id` and `label`
/// columns; extra columns are ignored. Any unreadable or malformed row is
/// fatal, so a bad table fails before a single image is copied.
pub fn read_label_table(path: &Path) -> StagingResult<Vec<LabelRecord>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        StagingError::LabelTable(format!("Failed to open {}: {e}", path.display()))
    })?;

    let headers = reader
        .headers()
        .map_err(|e| StagingError::LabelTable(format!("Failed to read header row: {e}")))?;

    for required in ["id", "label"] {
        if !headers.iter().any(|h| h == required) {
            return Err(StagingError::LabelTable(format!(
                "Label table {} is missing the '{required}' column",
                path.display()
            )));
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize().enumerate() {
        let record: LabelRecord = result
            .map_err(|e| StagingError::LabelTable(format!("Row {row_no}: {e}")))?;
        records.push(record);
    }

    Ok(records)
}
