use serde::Deserialize;
use std::path::Path;

/// Supported archive format. The dataset ships as 7z only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArchiveFormat {
    SevenZ,
}

impl ArchiveFormat {
    /// Detect format from file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "7z" => Some(Self::SevenZ),
            _ => None,
        }
    }
}

/// Result of extracting one archive.
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    pub files_extracted: usize,
    /// Name of the redundant wrapper folder that was removed, if the
    /// archive root held exactly one directory.
    pub flattened_wrapper: Option<String>,
}

/// One row of the label table: image identifier and class name.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelRecord {
    pub id: String,
    pub label: String,
}

/// Result of one class-organizing run.
#[derive(Debug, Clone, Default)]
pub struct OrganizeReport {
    pub files_copied: usize,
    /// Identifiers whose source image was absent; skipped with a warning.
    pub missing_ids: Vec<String>,
}
