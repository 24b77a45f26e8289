use super::types::{ArchiveFormat, ExtractionReport};
use crate::services::fs_utils::file_utils::rename_cross_drive_fallback;
use crate::types::errors::{StagingError, StagingResult};
use std::fs;
use std::path::Path;

/// Extract a dataset archive into a destination directory.
///
/// Steps:
/// 1. Create the destination directory (including parents) if absent
/// 2. Decompress the whole archive, preserving internal relative paths
/// 3. Flatten one redundant wrapper folder if the root holds exactly one
///    directory and nothing else
pub fn extract_archive(archive_path: &Path, extract_to: &Path) -> StagingResult<ExtractionReport> {
    let format = ArchiveFormat::from_path(archive_path).ok_or_else(|| {
        StagingError::Archive(format!(
            "Unsupported archive format: {}",
            archive_path.display()
        ))
    })?;

    fs::create_dir_all(extract_to)
        .map_err(|e| StagingError::Io(format!("Failed to create destination: {e}")))?;

    log::info!(
        "Extracting {} to {}...",
        archive_path.display(),
        extract_to.display()
    );

    let files_extracted = match format {
        ArchiveFormat::SevenZ => extract_7z_inner(archive_path, extract_to)?,
    };
    log::info!("Done extracting {}", archive_path.display());

    let flattened_wrapper = flatten_single_wrapper(extract_to)?;
    if flattened_wrapper.is_some() {
        log::info!("Flattened folder structure in {}", extract_to.display());
    }

    Ok(ExtractionReport {
        files_extracted,
        flattened_wrapper,
    })
}

fn extract_7z_inner(archive_path: &Path, extract_to: &Path) -> StagingResult<usize> {
    sevenz_rust::decompress_file(archive_path, extract_to)
        .map_err(|e| StagingError::Archive(format!("Failed to extract 7z: {e}")))?;

    // Count extracted files
    let count = walkdir::WalkDir::new(extract_to)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .count();

    Ok(count)
}

/// If the directory contains a single subfolder and nothing else, move its
/// contents up one level and remove the wrapper. Returns the name of the
/// removed wrapper, or `None` when the directory shape does not match.
///
/// A name collision while moving entries up is fatal: the destination is
/// left part-flattened rather than silently overwritten.
pub fn flatten_single_wrapper(dest_path: &Path) -> StagingResult<Option<String>> {
    let entries: Vec<_> = fs::read_dir(dest_path)
        .map_err(|e| StagingError::Io(format!("Failed to read dest: {e}")))?
        .filter_map(|e| e.ok())
        .collect();

    if entries.len() != 1 {
        return Ok(None);
    }

    let single_entry = &entries[0];
    if !single_entry.path().is_dir() {
        return Ok(None);
    }

    let wrapper_path = single_entry.path();
    let wrapper_name = single_entry.file_name().to_string_lossy().to_string();
    let wrapper_children: Vec<_> = fs::read_dir(&wrapper_path)
        .map_err(|e| StagingError::Io(format!("Failed to read wrapper: {e}")))?
        .filter_map(|e| e.ok())
        .collect();

    for child in wrapper_children {
        let child_name = child.file_name();
        let new_location = dest_path.join(&child_name);

        if new_location.exists() {
            return Err(StagingError::Io(format!(
                "Cannot flatten {}: {} already exists at destination",
                wrapper_path.display(),
                child_name.to_string_lossy()
            )));
        }

        rename_cross_drive_fallback(&child.path(), &new_location).map_err(|e| {
            StagingError::Io(format!(
                "Failed to move {}: {e}",
                child_name.to_string_lossy()
            ))
        })?;
    }

    // Remove the now-empty wrapper
    fs::remove_dir(&wrapper_path)
        .map_err(|e| StagingError::Io(format!("Failed to remove wrapper: {e}")))?;

    Ok(Some(wrapper_name))
}
