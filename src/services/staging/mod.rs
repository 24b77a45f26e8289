//! Dataset staging: archive extraction with wrapper-folder flattening,
//! and label-driven partitioning of a flat image directory into
//! per-class subdirectories.

mod extract;
mod labels;
mod organize;
mod types;

// Re-export public API
pub use extract::{extract_archive, flatten_single_wrapper};
pub use labels::read_label_table;
pub use organize::prepare_folder_structure;
pub use types::{ArchiveFormat, ExtractionReport, LabelRecord, OrganizeReport};

#[cfg(test)]
#[path = "tests/extract_tests.rs"]
mod extract_tests;

#[cfg(test)]
#[path = "tests/labels_tests.rs"]
mod labels_tests;

#[cfg(test)]
#[path = "tests/organize_tests.rs"]
mod organize_tests;
