use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::relocate::QUARANTINE_DIR_NAME;

/// File extensions treated as images, matched case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Recursively collect every image file under `root`, in sorted walk order.
///
/// The quarantine subdirectory directly under `root` is excluded, so a
/// re-scan after relocation does not see previously quarantined files.
pub fn discover_images(root: &Path) -> Result<Vec<PathBuf>> {
    let metadata = fs::metadata(root)?;
    if !metadata.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }

    info!("Scanning '{}'", root.display());
    let quarantine = root.join(QUARANTINE_DIR_NAME);

    let mut images = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.path() != quarantine);

    for entry in walker {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if entry.file_type().is_file() && is_image_file(path) {
                    debug!("Found image: '{}'", path.display());
                    images.push(path.to_path_buf());
                }
            }
            Err(e) => {
                warn!("Failed to read directory entry: {}", e);
            }
        }
    }

    info!("Found {} image files", images.len());
    Ok(images)
}

fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}
