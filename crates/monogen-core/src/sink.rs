//! Destination file writing.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{GenerateError, GenerateResult};

/// Write the final bytes to the destination path.
///
/// Any pre-existing file at the path is removed first; a failed removal
/// (permissions, path is a directory) aborts before anything is written.
/// The bytes themselves are written as-is, whether they are formatted
/// output or the raw fallback from a failed format pass.
pub fn write_output(destination: &Path, bytes: &[u8]) -> GenerateResult<()> {
    remove_existing(destination)?;

    fs::write(destination, bytes).map_err(|e| GenerateError::FileWrite {
        path: destination.to_path_buf(),
        source: e,
    })
}

fn remove_existing(destination: &Path) -> GenerateResult<()> {
    match fs::remove_file(destination) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(GenerateError::DestinationCleanup {
            path: destination.to_path_buf(),
            source: e,
        }),
    }
}

#[cfg(test)]
#[path = "sink/sink_tests.rs"]
mod sink_tests;
