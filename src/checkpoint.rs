use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::fingerprint::Fingerprint;
use crate::index::DuplicateIndex;

/// Name of the checkpoint file, created directly under the scan root.
pub const CHECKPOINT_FILE_NAME: &str = "image_hashes.txt";

/// Writes the current duplicate index to `destination`.
///
/// The file holds one `<fingerprint>,<path>` line per index entry, in index
/// iteration order, and is fully overwritten on every write. It exists for
/// external inspection and hand recovery of long scans; the scan itself never
/// reads it back.
///
/// # Errors
///
/// Returns [`Error::Checkpoint`] if the file cannot be written. Callers treat
/// checkpointing as best-effort and log the failure instead of aborting.
pub fn write_checkpoint(index: &DuplicateIndex, destination: &Path) -> Result<()> {
    let mut contents = String::new();
    for (fingerprint, path) in index.iter() {
        contents.push_str(&format!("{},{}\n", fingerprint, path.display()));
    }
    fs::write(destination, contents).map_err(|source| Error::Checkpoint {
        path: destination.to_path_buf(),
        source,
    })
}

/// Parses a checkpoint file back into `(fingerprint, path)` pairs.
///
/// The fingerprint encoding contains no commas, so the first comma on each
/// line is the separator; everything after it is the path, commas included.
/// Blank and malformed lines are skipped.
pub fn read_checkpoint(source: &Path) -> Result<Vec<(Fingerprint, PathBuf)>> {
    let contents = fs::read_to_string(source)?;
    let mut entries = Vec::new();
    for line in contents.lines() {
        if let Some((fingerprint, path)) = line.split_once(',') {
            if !fingerprint.is_empty() && !path.is_empty() {
                entries.push((Fingerprint::from(fingerprint), PathBuf::from(path)));
            }
        }
    }
    Ok(entries)
}
