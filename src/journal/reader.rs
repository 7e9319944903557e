use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use super::types::{journal_path, Journal};
use super::writer::JournalError;

/// Read the journal of a working directory.
///
/// A missing journal is not an error: it means there is no batch to
/// revert, and callers report that as informational. Unreadable or
/// invalid content is an error.
pub fn read_journal(dir: &Path) -> Result<Option<Journal>, JournalError> {
    let path = journal_path(dir);

    if !path.exists() {
        debug!(path = ?path, "No journal found");
        return Ok(None);
    }

    let file = File::open(&path)
        .map_err(|e| JournalError::ReadError(format!("Cannot open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    let journal: Journal = serde_json::from_reader(reader)
        .map_err(|e| JournalError::ReadError(format!("Invalid JSON in {}: {}", path.display(), e)))?;

    Ok(Some(journal))
}
