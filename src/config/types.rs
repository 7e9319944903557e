use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Persistent settings consumed by the rename flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Destination folder for archived copies. Absence disables upload.
    #[serde(default)]
    pub video_folder: Option<PathBuf>,

    /// Toggles the part-guessing heuristic of the sequencer.
    #[serde(default)]
    pub multipart: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine a configuration directory")]
    NoConfigDir,

    #[error("Folder does not exist: {0}")]
    FolderNotFound(PathBuf),

    #[error("Settings file is not valid JSON: {0}")]
    Corrupted(String),

    #[error("Failed to access settings file: {0}")]
    IoError(#[from] std::io::Error),
}
