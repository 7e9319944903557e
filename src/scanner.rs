use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

use crate::codec::VIDEO_EXTENSION;

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Failed to read directory: {0}")]
    IoError(#[from] std::io::Error),
}

/// List the video files of a directory, sorted by name.
///
/// Only regular files with the `.mp4` extension are returned; hidden
/// files and everything else are skipped. Sorting makes part assignment
/// and last-archived-file detection independent of filesystem listing
/// order.
pub fn scan_video_files(target: &Path) -> Result<Vec<String>, ScannerError> {
    debug!(path = ?target, "Scanning for video files");

    if !target.exists() {
        return Err(ScannerError::PathNotFound(target.to_path_buf()));
    }

    if !target.is_dir() {
        return Err(ScannerError::NotADirectory(target.to_path_buf()));
    }

    let mut names = Vec::new();

    let read_dir = fs::read_dir(target).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            ScannerError::PermissionDenied(target.to_path_buf())
        } else {
            ScannerError::IoError(e)
        }
    })?;

    for entry in read_dir {
        let entry = entry?;
        let path = entry.path();

        trace!(entry = ?path, "Examining entry");

        if !path.is_file() {
            trace!(path = ?path, "Skipping non-file");
            continue;
        }

        let name = match path.file_name() {
            Some(n) => n.to_string_lossy().to_string(),
            None => continue,
        };

        if name.starts_with('.') {
            trace!(name = %name, "Skipping hidden file");
            continue;
        }

        let is_video = path
            .extension()
            .map(|ext| ext == VIDEO_EXTENSION)
            .unwrap_or(false);

        if !is_video {
            trace!(name = %name, "Skipping non-video file");
            continue;
        }

        debug!(name = %name, "Found video file");
        names.push(name);
    }

    names.sort();

    debug!(count = names.len(), "Scan complete");

    Ok(names)
}
