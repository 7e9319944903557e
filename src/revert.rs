use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::journal::{journal_path, read_journal, JournalError};
use crate::planner::RenamePlanEntry;
use crate::progress::Progress;

#[derive(Debug, thiserror::Error)]
pub enum RevertError {
    #[error("Journal error: {0}")]
    Journal(#[from] JournalError),

    #[error("Failed to restore '{from}' to '{to}': {source}")]
    RenameError {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove journal: {0}")]
    RemoveJournal(#[source] std::io::Error),
}

/// What a revert actually did.
#[derive(Debug, Default)]
pub struct RevertOutcome {
    pub restored: Vec<RenamePlanEntry>,
    pub skipped: Vec<RenamePlanEntry>,
}

/// Undo the last recorded batch of renames.
///
/// Returns `Ok(None)` when no journal exists. Entries whose new name is
/// no longer on disk are skipped without error. The journal is deleted
/// afterwards regardless of skips, so revert is one-shot: a second call
/// finds no journal.
pub fn revert_last_batch(
    dir: &Path,
    progress: &mut Progress,
) -> Result<Option<RevertOutcome>, RevertError> {
    let journal = match read_journal(dir)? {
        Some(journal) => journal,
        None => return Ok(None),
    };

    info!(
        "Journal contains {} entries from {}",
        journal.files.len(),
        journal.date
    );

    progress.revert_start(journal.files.len(), &journal.date.to_rfc3339());

    let total = journal.files.len();
    let mut outcome = RevertOutcome::default();

    for (i, entry) in journal.files.iter().enumerate() {
        let new_path = dir.join(&entry.new);
        let old_path = dir.join(&entry.old);

        if !new_path.exists() {
            debug!(name = %entry.new, "Renamed file no longer present, skipping");
            outcome.skipped.push(entry.clone());
            continue;
        }

        progress.revert_progress(i + 1, total, &entry.new, &entry.old);

        fs::rename(&new_path, &old_path).map_err(|e| RevertError::RenameError {
            from: entry.new.clone(),
            to: entry.old.clone(),
            source: e,
        })?;

        info!("Restored: {} -> {}", entry.new, entry.old);
        outcome.restored.push(entry.clone());
    }

    fs::remove_file(journal_path(dir)).map_err(RevertError::RemoveJournal)?;

    progress.revert_complete(outcome.restored.len(), outcome.skipped.len());

    Ok(Some(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::{write_journal, Journal};
    use crate::planner::{RenamePlan, RenamePlanEntry};
    use std::io::Write;
    use tempfile::tempdir;

    fn test_progress() -> Progress {
        struct NullWriter;
        impl Write for NullWriter {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                Ok(buf.len())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
        Progress::with_writer(Box::new(NullWriter))
    }

    fn plan(entries: &[(&str, &str)]) -> RenamePlan {
        RenamePlan {
            entries: entries
                .iter()
                .map(|(old, new)| RenamePlanEntry {
                    old: old.to_string(),
                    new: new.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_revert_without_journal_is_noop() {
        let dir = tempdir().unwrap();
        let mut progress = test_progress();

        let result = revert_last_batch(dir.path(), &mut progress).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_revert_restores_and_deletes_journal() {
        let dir = tempdir().unwrap();
        let mut progress = test_progress();

        fs::write(dir.path().join("08_1-23SET-119-css_flex.mp4"), "x").unwrap();
        fs::write(dir.path().join("08_2-23SET-119-css_flex.mp4"), "y").unwrap();

        let journal = Journal::new(&plan(&[
            ("a.mp4", "08_1-23SET-119-css_flex.mp4"),
            ("b.mp4", "08_2-23SET-119-css_flex.mp4"),
        ]));
        write_journal(&journal, dir.path()).unwrap();

        let outcome = revert_last_batch(dir.path(), &mut progress)
            .unwrap()
            .unwrap();

        assert_eq!(outcome.restored.len(), 2);
        assert!(outcome.skipped.is_empty());

        assert!(dir.path().join("a.mp4").exists());
        assert!(dir.path().join("b.mp4").exists());
        assert!(!dir.path().join("08_1-23SET-119-css_flex.mp4").exists());
        assert!(!dir.path().join("08_2-23SET-119-css_flex.mp4").exists());
        assert!(!dir.path().join(".rename.json").exists());
    }

    #[test]
    fn test_revert_skips_missing_files_and_still_deletes_journal() {
        let dir = tempdir().unwrap();
        let mut progress = test_progress();

        // Only the first renamed file still exists
        fs::write(dir.path().join("08_1-23SET-119-css_flex.mp4"), "x").unwrap();

        let journal = Journal::new(&plan(&[
            ("a.mp4", "08_1-23SET-119-css_flex.mp4"),
            ("b.mp4", "08_2-23SET-119-css_flex.mp4"),
        ]));
        write_journal(&journal, dir.path()).unwrap();

        let outcome = revert_last_batch(dir.path(), &mut progress)
            .unwrap()
            .unwrap();

        assert_eq!(outcome.restored.len(), 1);
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].old, "b.mp4");

        assert!(dir.path().join("a.mp4").exists());
        assert!(!dir.path().join(".rename.json").exists());
    }

    #[test]
    fn test_revert_is_one_shot() {
        let dir = tempdir().unwrap();
        let mut progress = test_progress();

        fs::write(dir.path().join("08-23SET-css_flex.mp4"), "x").unwrap();
        let journal = Journal::new(&plan(&[("a.mp4", "08-23SET-css_flex.mp4")]));
        write_journal(&journal, dir.path()).unwrap();

        assert!(revert_last_batch(dir.path(), &mut progress)
            .unwrap()
            .is_some());
        assert!(revert_last_batch(dir.path(), &mut progress)
            .unwrap()
            .is_none());
    }
}
