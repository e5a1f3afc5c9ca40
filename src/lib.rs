pub mod checkpoint;
pub mod cli;
pub mod error;
pub mod fingerprint;
pub mod index;
pub mod relocate;
pub mod scan;
pub mod scanner;

pub use checkpoint::{read_checkpoint, write_checkpoint, CHECKPOINT_FILE_NAME};
pub use cli::Cli;
pub use error::{Error, Result};
pub use fingerprint::{Fingerprint, FingerprintPair, Fingerprinter, Precision};
pub use index::{DuplicateIndex, DuplicateRecord};
pub use relocate::{relocate_duplicates, QUARANTINE_DIR_NAME};
pub use scan::{run_scan, ScanConfig, ScanSummary};
pub use scanner::discover_images;
