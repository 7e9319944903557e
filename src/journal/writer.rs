use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use super::types::{journal_path, Journal};

#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("Failed to write journal: {0}")]
    WriteError(#[from] std::io::Error),

    #[error("Failed to serialize journal: {0}")]
    SerializeError(#[from] serde_json::Error),

    #[error("Failed to read journal: {0}")]
    ReadError(String),
}

/// Persist the journal for a working directory, overwriting any previous
/// one.
///
/// The file is written to a temp path, synced, then renamed into place,
/// so a journal observed on disk is always complete. Callers must invoke
/// this before executing the first rename of the batch.
pub fn write_journal(journal: &Journal, dir: &Path) -> Result<PathBuf, JournalError> {
    let path = journal_path(dir);
    let temp_path = path.with_extension("json.tmp");

    {
        let file = File::create(&temp_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, journal)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
    }

    fs::rename(&temp_path, &path)?;

    info!("Journal written to: {:?}", path);

    Ok(path)
}
