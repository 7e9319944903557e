use std::fs;
use std::path::Path;

use tracing::info;

use crate::planner::RenamePlan;
use crate::progress::Progress;

#[derive(Debug, thiserror::Error)]
pub enum ExecuteError {
    #[error("Failed to rename '{from}' to '{to}': {source}")]
    RenameError {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy '{file}' to '{destination}': {source}")]
    CopyError {
        file: String,
        destination: String,
        #[source]
        source: std::io::Error,
    },
}

/// Apply a rename plan in the working directory.
///
/// The journal for the batch must already be on disk: a failure here
/// leaves the batch partially applied, and the journal is the recovery
/// mechanism. When an upload folder is given, each renamed file is also
/// copied there; there is no rollback across the batch.
pub fn execute_plan(
    plan: &RenamePlan,
    working_dir: &Path,
    upload_folder: Option<&Path>,
    progress: &mut Progress,
) -> Result<usize, ExecuteError> {
    let total = plan.len();

    for (i, entry) in plan.entries.iter().enumerate() {
        let old_path = working_dir.join(&entry.old);
        let new_path = working_dir.join(&entry.new);

        progress.rename_progress(i + 1, total, &entry.old, &entry.new);

        fs::rename(&old_path, &new_path).map_err(|e| ExecuteError::RenameError {
            from: entry.old.clone(),
            to: entry.new.clone(),
            source: e,
        })?;

        info!("Renamed: {} -> {}", entry.old, entry.new);

        if let Some(folder) = upload_folder {
            let destination = folder.join(&entry.new);

            fs::copy(&new_path, &destination).map_err(|e| ExecuteError::CopyError {
                file: entry.new.clone(),
                destination: destination.display().to_string(),
                source: e,
            })?;

            info!("Copied: {} -> {}", entry.new, destination.display());
            progress.upload_progress(&entry.new, &destination);
        }
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::RenamePlanEntry;
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
    fn test_execute_renames() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.mp4"), "first").unwrap();
        fs::write(dir.path().join("b.mp4"), "second").unwrap();

        let plan = plan(&[
            ("a.mp4", "08_1-23SET-119-css_flex.mp4"),
            ("b.mp4", "08_2-23SET-119-css_flex.mp4"),
        ]);

        let count = execute_plan(&plan, dir.path(), None, &mut test_progress()).unwrap();

        assert_eq!(count, 2);
        assert!(!dir.path().join("a.mp4").exists());
        assert!(dir.path().join("08_1-23SET-119-css_flex.mp4").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("08_1-23SET-119-css_flex.mp4")).unwrap(),
            "first"
        );
    }

    #[test]
    fn test_execute_with_upload_copies_files() {
        let dir = tempdir().unwrap();
        let archive = tempdir().unwrap();
        fs::write(dir.path().join("a.mp4"), "content").unwrap();

        let plan = plan(&[("a.mp4", "08-23SET-css_flex.mp4")]);

        execute_plan(
            &plan,
            dir.path(),
            Some(archive.path()),
            &mut test_progress(),
        )
        .unwrap();

        assert!(dir.path().join("08-23SET-css_flex.mp4").exists());
        let copied = archive.path().join("08-23SET-css_flex.mp4");
        assert!(copied.exists());
        assert_eq!(fs::read_to_string(copied).unwrap(), "content");
    }

    #[test]
    fn test_execute_missing_source_fails() {
        let dir = tempdir().unwrap();

        let plan = plan(&[("missing.mp4", "08-23SET-css_flex.mp4")]);

        let result = execute_plan(&plan, dir.path(), None, &mut test_progress());
        assert!(matches!(result, Err(ExecuteError::RenameError { .. })));
    }

    #[test]
    fn test_execute_partial_failure_keeps_earlier_renames() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.mp4"), "x").unwrap();

        let plan = plan(&[
            ("a.mp4", "08_1-23SET-css_flex.mp4"),
            ("missing.mp4", "08_2-23SET-css_flex.mp4"),
        ]);

        let result = execute_plan(&plan, dir.path(), None, &mut test_progress());

        assert!(result.is_err());
        // The first rename stays applied; recovery goes through the journal
        assert!(dir.path().join("08_1-23SET-css_flex.mp4").exists());
    }
}
