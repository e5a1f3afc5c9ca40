use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::fingerprint::{Fingerprint, FingerprintPair};

/// A duplicate file paired with the original it collided with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateRecord {
    pub duplicate: PathBuf,
    pub original: PathBuf,
}

/// In-memory mapping from fingerprint to the first path that produced it.
///
/// Collision policy is first-seen wins: once a fingerprint maps to a path,
/// later observations of the same fingerprint never overwrite it.
#[derive(Debug, Default)]
pub struct DuplicateIndex {
    entries: HashMap<Fingerprint, PathBuf>,
}

impl DuplicateIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe a single fingerprint for `path`.
    ///
    /// If the fingerprint is already indexed, returns a record pairing `path`
    /// with the existing original and leaves the index unchanged. Otherwise
    /// inserts the mapping and returns `None`.
    pub fn observe(&mut self, fingerprint: Fingerprint, path: &Path) -> Option<DuplicateRecord> {
        if let Some(original) = self.entries.get(&fingerprint) {
            return Some(DuplicateRecord {
                duplicate: path.to_path_buf(),
                original: original.clone(),
            });
        }
        self.entries.insert(fingerprint, path.to_path_buf());
        None
    }

    /// Observe both orientations of an image at once.
    ///
    /// The plain fingerprint is checked before the mirrored one, and at most
    /// one record is produced per image. On a collision nothing is inserted;
    /// on a full miss both fingerprints are registered as keys for `path`, so
    /// a later match against either orientation resolves to it.
    pub fn observe_pair(&mut self, pair: &FingerprintPair, path: &Path) -> Option<DuplicateRecord> {
        for fingerprint in [&pair.plain, &pair.mirrored] {
            if let Some(original) = self.entries.get(fingerprint) {
                return Some(DuplicateRecord {
                    duplicate: path.to_path_buf(),
                    original: original.clone(),
                });
            }
        }
        self.entries.insert(pair.plain.clone(), path.to_path_buf());
        self.entries.insert(pair.mirrored.clone(), path.to_path_buf());
        None
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Fingerprint, &PathBuf)> {
        self.entries.iter()
    }
}
