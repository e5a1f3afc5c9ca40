use std::fmt;
use std::path::Path;

use image::DynamicImage;
use image_hasher::{FilterType, HashAlg, Hasher, HasherConfig};
use log::debug;

use crate::error::{Error, Result};

/// Fingerprint precision mode.
///
/// `Fast` is a plain 8x8 average hash; `Accurate` runs a DCT preprocessing
/// pass and hashes the low-frequency coefficients. Fingerprints from the two
/// modes are not comparable with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    Fast,
    Accurate,
}

/// An opaque, fixed-width fingerprint of an image's pixel content.
///
/// Two fingerprints are equal iff their underlying bits are identical.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Fingerprint {
    fn from(value: String) -> Self {
        Fingerprint(value)
    }
}

impl From<&str> for Fingerprint {
    fn from(value: &str) -> Self {
        Fingerprint(value.to_string())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fingerprints of an image as stored and of its horizontal mirror.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerprintPair {
    pub plain: Fingerprint,
    pub mirrored: Fingerprint,
}

/// Computes fingerprint pairs for images at a fixed precision.
pub struct Fingerprinter {
    hasher: Hasher,
}

impl Fingerprinter {
    pub fn new(precision: Precision) -> Self {
        let mut config = HasherConfig::new()
            .hash_size(8, 8)
            .hash_alg(HashAlg::Mean)
            .resize_filter(FilterType::Triangle);
        if precision == Precision::Accurate {
            config = config.preproc_dct();
        }
        Self {
            hasher: config.to_hasher(),
        }
    }

    /// Fingerprint an already-decoded image and its horizontal mirror.
    pub fn fingerprint_image(&self, image: &DynamicImage) -> FingerprintPair {
        let plain = Fingerprint(self.hasher.hash_image(image).to_base64());
        let mirrored = Fingerprint(self.hasher.hash_image(&image.fliph()).to_base64());
        FingerprintPair { plain, mirrored }
    }

    /// Decode the image at `path` and fingerprint it.
    ///
    /// Returns `Error::Decode` for files that are not loadable images; the
    /// caller is expected to log and skip those.
    pub fn fingerprint_file(&self, path: &Path) -> Result<FingerprintPair> {
        let image = image::open(path).map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let pair = self.fingerprint_image(&image);
        debug!("Hashed '{}': {}", path.display(), pair.plain);
        Ok(pair)
    }
}
