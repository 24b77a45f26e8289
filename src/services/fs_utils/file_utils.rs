use std::fs;
use std::path::Path;

/// Moves a file or directory with `std::fs::rename`, falling back to a
/// copy-and-remove via `fs_extra` when rename fails (typically a
/// cross-device link error when source and destination live on
/// different filesystems).
pub fn rename_cross_drive_fallback(from: &Path, to: &Path) -> std::io::Result<()> {
    match fs::rename(from, to) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::warn!("fs::rename failed (cross-device?): {e}. Attempting fallback move...");

            if !from.exists() {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "Source path does not exist",
                ));
            }

            if to.exists() {
                // Propagate the original error (e.g., AlreadyExists)
                return Err(e);
            }

            if let Some(parent) = to.parent() {
                fs::create_dir_all(parent)?;
            }

            if from.is_dir() {
                let mut options = fs_extra::dir::CopyOptions::new();
                options.copy_inside = false;

                fs_extra::dir::move_dir(from, to, &options)
                    .map(|_| ())
                    .map_err(|err| std::io::Error::other(err.to_string()))
            } else {
                let mut options = fs_extra::file::CopyOptions::new();
                options.overwrite = false;

                fs_extra::file::move_file(from, to, &options)
                    .map(|_| ())
                    .map_err(|err| std::io::Error::other(err.to_string()))
            }
        }
    }
}
