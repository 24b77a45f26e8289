use super::labels::read_label_table;
use super::types::OrganizeReport;
use crate::types::errors::{StagingError, StagingResult};
use crate::IMAGE_EXTENSION;
use std::fs;
use std::path::Path;

/// Copy every image named in the label table from the flat `image_dir`
/// into `output_dir/<label>/<id>.png`, in table row order.
///
/// A missing source image is skipped with a warning and recorded in the
/// report; any other copy failure is fatal. Class subdirectories are
/// created lazily, on the first successful copy for that label, so a
/// class whose images are all absent gets no directory at all. Sources
/// are copied, never moved.
pub fn prepare_folder_structure(
    label_table_path: &Path,
    image_dir: &Path,
    output_dir: &Path,
) -> StagingResult<OrganizeReport> {
    let records = read_label_table(label_table_path)?;

    fs::create_dir_all(output_dir)
        .map_err(|e| StagingError::Io(format!("Failed to create output dir: {e}")))?;

    let mut report = OrganizeReport::default();

    for record in &records {
        let file_name = format!("{}.{IMAGE_EXTENSION}", record.id);
        let src = image_dir.join(&file_name);

        if !src.exists() {
            log::warn!("Missing image: {}", src.display());
            report.missing_ids.push(record.id.clone());
            continue;
        }

        let class_dir = output_dir.join(&record.label);
        fs::create_dir_all(&class_dir)
            .map_err(|e| StagingError::Io(format!("Failed to create class dir: {e}")))?;

        fs::copy(&src, class_dir.join(&file_name)).map_err(|e| {
            StagingError::Io(format!("Failed to copy {}: {e}", src.display()))
        })?;
        report.files_copied += 1;
    }

    log::info!(
        "Done organizing images by class: {} copied, {} missing",
        report.files_copied,
        report.missing_ids.len()
    );

    Ok(report)
}
