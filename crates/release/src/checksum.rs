//! SHA-256 checksums of built archives.

use crate::error::{Error, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Path of a built archive inside the dist directory: `<dist>/<file>.<format>`.
#[must_use]
pub fn archive_path(dist: &Path, file: &str, format: &str) -> PathBuf {
    dist.join(format!("{file}.{format}"))
}

/// Computes the lowercase hex SHA-256 digest of a file.
///
/// # Errors
///
/// Returns [`Error::Checksum`] if the file cannot be opened or read.
pub fn sha256_file(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| Error::checksum(path, e))?;
    let mut reader = BufReader::new(file);
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader
            .read(&mut buffer)
            .map_err(|e| Error::checksum(path, e))?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}
