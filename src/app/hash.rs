//! SHA-1 digest type and whole-file fingerprints
//!
//! The aggregate summary identifies the manifest by size and SHA-1 so two
//! copies of the feed can be told apart at a glance. The digest is stored as
//! its raw 20 bytes and rendered as lowercase hex.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use tracing::debug;

use crate::errors::{ManifestError, ManifestResult};

/// SHA-1 digest stored as a 20-byte array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sha1Digest([u8; 20]);

impl Sha1Digest {
    /// Digest a byte buffer
    pub fn of(bytes: &[u8]) -> Self {
        let digest = Sha1::digest(bytes);
        let mut raw = [0u8; 20];
        raw.copy_from_slice(&digest);
        Sha1Digest(raw)
    }

    /// Create a digest from a 40-character hex string (case insensitive)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mesu_inspect::app::hash::Sha1Digest;
    ///
    /// let digest = Sha1Digest::from_hex("DA39A3EE5E6B4B0D3255BFEF95601890AFD80709")?;
    /// assert_eq!(digest, Sha1Digest::of(b""));
    /// # Ok::<(), mesu_inspect::errors::ManifestError>(())
    /// ```
    pub fn from_hex(hex_str: &str) -> ManifestResult<Self> {
        let invalid = || ManifestError::InvalidFormat {
            reason: format!("invalid SHA-1 hex string: {}", hex_str),
        };

        let mut raw = [0u8; 20];
        hex::decode_to_slice(hex_str, &mut raw).map_err(|_| invalid())?;
        Ok(Sha1Digest(raw))
    }

    /// Lowercase 40-character hex representation
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Sha1Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Sha1Digest {
    type Err = ManifestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// Serialize as hex string for JSON output
impl Serialize for Sha1Digest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Sha1Digest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let hex_string = String::deserialize(deserializer)?;
        Self::from_hex(&hex_string).map_err(serde::de::Error::custom)
    }
}

/// Size and content digest of a manifest file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFingerprint {
    pub path: PathBuf,
    pub size: u64,
    pub sha1: Sha1Digest,
}

impl FileFingerprint {
    /// Read the whole file and fingerprint it
    ///
    /// # Errors
    ///
    /// `ManifestError::NotFound` if the file does not exist, `ManifestError::Io`
    /// for any other read failure
    pub fn from_path<P: AsRef<Path>>(path: P) -> ManifestResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ManifestError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ManifestError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let fingerprint = Self {
            path: path.to_path_buf(),
            size: bytes.len() as u64,
            sha1: Sha1Digest::of(&bytes),
        };
        debug!(
            "Fingerprinted {}: {} bytes, SHA-1 {}",
            path.display(),
            fingerprint.size,
            fingerprint.sha1
        );
        Ok(fingerprint)
    }
}
