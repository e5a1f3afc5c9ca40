use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use log::{error, warn};

use crate::error::{Error, Result};
use crate::index::DuplicateRecord;

/// Name of the quarantine subdirectory, created directly under the scan root.
pub const QUARANTINE_DIR_NAME: &str = "duplicates";

/// Move every recorded duplicate into the quarantine directory under `root`.
///
/// Files keep their base filename; when two duplicates from different
/// subfolders share a name, later ones get a `_1`, `_2`, ... suffix before
/// the extension. A failed move is logged and the remaining records are still
/// attempted. Returns the number of files actually moved.
pub fn relocate_duplicates(records: &[DuplicateRecord], root: &Path) -> Result<usize> {
    if records.is_empty() {
        return Ok(0);
    }

    let quarantine = root.join(QUARANTINE_DIR_NAME);
    fs::create_dir_all(&quarantine).map_err(|source| Error::Relocate {
        path: quarantine.clone(),
        source,
    })?;

    let mut moved = 0;
    for record in records {
        let Some(file_name) = record.duplicate.file_name() else {
            warn!("Skipping record without a filename: '{}'", record.duplicate.display());
            continue;
        };
        let destination = disambiguate(&quarantine, file_name);
        match fs::rename(&record.duplicate, &destination) {
            Ok(()) => moved += 1,
            Err(e) => {
                error!(
                    "Failed to move '{}' to '{}': {}",
                    record.duplicate.display(),
                    destination.display(),
                    e
                );
            }
        }
    }
    Ok(moved)
}

/// Pick a destination in `dir` for `file_name` that does not already exist.
fn disambiguate(dir: &Path, file_name: &OsStr) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let original = Path::new(file_name);
    let stem = original.file_stem().unwrap_or(file_name);
    let extension = original.extension();

    let mut counter = 1;
    loop {
        let mut name = stem.to_os_string();
        name.push(format!("_{counter}"));
        if let Some(extension) = extension {
            name.push(".");
            name.push(extension);
        }
        let candidate = dir.join(&name);
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}
