use std::path::PathBuf;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};

use crate::checkpoint::{write_checkpoint, CHECKPOINT_FILE_NAME};
use crate::error::Result;
use crate::fingerprint::{Fingerprinter, Precision};
use crate::index::{DuplicateIndex, DuplicateRecord};
use crate::relocate::{relocate_duplicates, QUARANTINE_DIR_NAME};
use crate::scanner::discover_images;

/// Configuration for a single scan.
pub struct ScanConfig {
    /// Root directory to scan.
    pub root: PathBuf,
    /// Fingerprint precision mode.
    pub precision: Precision,
    /// Write a checkpoint every this many attempted files.
    /// `None` picks roughly every 10% of the discovered total.
    pub checkpoint_every: Option<usize>,
}

/// Counts and records from a completed scan.
pub struct ScanSummary {
    pub discovered: usize,
    pub hashed: usize,
    pub skipped: usize,
    pub duplicates: Vec<DuplicateRecord>,
    pub moved: usize,
}

/// Run a full scan: discover, hash, checkpoint, report, relocate.
///
/// Only a discovery failure is fatal. Files that fail to decode are logged
/// and counted as skipped; checkpoint and relocation failures are logged and
/// the scan completes regardless.
pub fn run_scan(config: &ScanConfig) -> Result<ScanSummary> {
    let images = discover_images(&config.root)?;

    let interval = config
        .checkpoint_every
        .unwrap_or_else(|| (images.len() / 10).max(1));
    let checkpoint_path = config.root.join(CHECKPOINT_FILE_NAME);

    let fingerprinter = Fingerprinter::new(config.precision);
    let mut index = DuplicateIndex::new();
    let mut duplicates = Vec::new();
    let mut hashed = 0;
    let mut skipped = 0;

    info!("Hashing {} images...", images.len());
    let progress_bar = ProgressBar::new(images.len() as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {percent}% {msg} ETA: {eta}")
            .unwrap()
            .progress_chars("#>-"),
    );
    progress_bar.set_message("Hashing");

    for (attempted, path) in images.iter().enumerate() {
        match fingerprinter.fingerprint_file(path) {
            Ok(pair) => {
                if let Some(record) = index.observe_pair(&pair, path) {
                    debug!(
                        "Duplicate: '{}' matches '{}'",
                        record.duplicate.display(),
                        record.original.display()
                    );
                    duplicates.push(record);
                }
                hashed += 1;
            }
            Err(e) => {
                warn!("Skipping '{}': {}", path.display(), e);
                skipped += 1;
            }
        }

        if attempted % interval == 0 {
            if let Err(e) = write_checkpoint(&index, &checkpoint_path) {
                warn!("Checkpoint failed: {}", e);
            }
        }
        progress_bar.inc(1);
    }
    progress_bar.finish_and_clear();

    info!(
        "Hashed {} of {} images ({} skipped)",
        hashed,
        images.len(),
        skipped
    );
    report(&duplicates);

    let moved = match relocate_duplicates(&duplicates, &config.root) {
        Ok(moved) => moved,
        Err(e) => {
            error!("Relocation failed: {}", e);
            0
        }
    };
    if !duplicates.is_empty() {
        println!(
            "Moved {} duplicate files to '{}'",
            moved,
            config.root.join(QUARANTINE_DIR_NAME).display()
        );
    }

    Ok(ScanSummary {
        discovered: images.len(),
        hashed,
        skipped,
        duplicates,
        moved,
    })
}

fn report(duplicates: &[DuplicateRecord]) {
    if duplicates.is_empty() {
        println!("{}", "No duplicate images found!".green());
        return;
    }
    println!("Duplicates found:");
    for record in duplicates {
        println!(
            "Duplicate: {}, Original: {}",
            record.duplicate.display(),
            record.original.display()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkpoint::read_checkpoint;
    use image::{DynamicImage, Rgb, RgbImage};
    use std::fs;
    use std::path::Path;

    fn left_white() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(64, 64, |x, _| {
            if x < 32 {
                Rgb([255, 255, 255])
            } else {
                Rgb([0, 0, 0])
            }
        }))
    }

    fn top_white() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(64, 64, |_, y| {
            if y < 32 {
                Rgb([255, 255, 255])
            } else {
                Rgb([0, 0, 0])
            }
        }))
    }

    fn corner_white() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(64, 64, |x, y| {
            if x < 32 && y < 32 {
                Rgb([255, 255, 255])
            } else {
                Rgb([0, 0, 0])
            }
        }))
    }

    fn config(root: &Path) -> ScanConfig {
        ScanConfig {
            root: root.to_path_buf(),
            precision: Precision::Fast,
            checkpoint_every: None,
        }
    }

    #[test]
    fn end_to_end_finds_and_quarantines_the_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        left_white().save(dir.path().join("a.png")).unwrap();
        left_white().save(dir.path().join("b.png")).unwrap();
        top_white().save(dir.path().join("c.png")).unwrap();

        let summary = run_scan(&config(dir.path())).unwrap();

        assert_eq!(summary.discovered, 3);
        assert_eq!(summary.hashed, 3);
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.duplicates.len(), 1);
        assert!(summary.duplicates[0].duplicate.ends_with("b.png"));
        assert!(summary.duplicates[0].original.ends_with("a.png"));
        assert_eq!(summary.moved, 1);

        assert!(dir.path().join(QUARANTINE_DIR_NAME).join("b.png").exists());
        assert!(dir.path().join("a.png").exists());
        assert!(dir.path().join("c.png").exists());
        assert!(dir.path().join(CHECKPOINT_FILE_NAME).exists());
    }

    #[test]
    fn mirrored_copy_is_detected_as_a_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        left_white().save(dir.path().join("a.png")).unwrap();
        left_white().fliph().save(dir.path().join("flipped.png")).unwrap();

        let summary = run_scan(&config(dir.path())).unwrap();

        assert_eq!(summary.duplicates.len(), 1);
        assert!(summary.duplicates[0].duplicate.ends_with("flipped.png"));
        assert!(summary.duplicates[0].original.ends_with("a.png"));
    }

    #[test]
    fn second_scan_after_relocation_finds_nothing() {
        let dir = tempfile::tempdir().unwrap();
        left_white().save(dir.path().join("a.png")).unwrap();
        left_white().save(dir.path().join("b.png")).unwrap();

        let first = run_scan(&config(dir.path())).unwrap();
        assert_eq!(first.duplicates.len(), 1);
        assert_eq!(first.moved, 1);

        let second = run_scan(&config(dir.path())).unwrap();
        assert_eq!(second.discovered, 1);
        assert!(second.duplicates.is_empty());
        assert_eq!(second.moved, 0);
    }

    #[test]
    fn corrupt_file_is_skipped_without_aborting() {
        let dir = tempfile::tempdir().unwrap();
        left_white().save(dir.path().join("good.png")).unwrap();
        fs::write(dir.path().join("bad.jpg"), b"not an image at all").unwrap();

        let summary = run_scan(&config(dir.path())).unwrap();

        assert_eq!(summary.discovered, 2);
        assert_eq!(summary.hashed, 1);
        assert_eq!(summary.skipped, 1);
        assert!(summary.duplicates.is_empty());
    }

    #[test]
    fn checkpoint_covers_every_unique_fingerprint() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..4 {
            left_white().save(dir.path().join(format!("a{i}.png"))).unwrap();
            top_white().save(dir.path().join(format!("b{i}.png"))).unwrap();
            corner_white().save(dir.path().join(format!("c{i}.png"))).unwrap();
        }

        let summary = run_scan(&config(dir.path())).unwrap();
        assert_eq!(summary.discovered, 12);
        assert_eq!(summary.duplicates.len(), 9);

        // left_white and corner_white each register two orientations,
        // top_white is mirror-symmetric and registers one.
        let entries = read_checkpoint(&dir.path().join(CHECKPOINT_FILE_NAME)).unwrap();
        assert_eq!(entries.len(), 5);
        for (fingerprint, path) in entries {
            assert!(!fingerprint.as_str().is_empty());
            assert!(path.starts_with(dir.path()));
        }
    }

    #[test]
    fn missing_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_scan(&config(&dir.path().join("nope")));
        assert!(result.is_err());
    }
}
