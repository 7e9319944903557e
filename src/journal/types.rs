use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::planner::{RenamePlan, RenamePlanEntry};

/// Journal file name, kept in the working directory being processed.
/// Its presence is the sole signal that a revertible batch exists.
pub const JOURNAL_FILE_NAME: &str = ".rename.json";

/// The persisted record of the last executed batch, not yet reverted.
///
/// Single-slot: writing a new journal overwrites the previous one, which
/// silently discards the ability to revert the older batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    /// When the batch was executed
    pub date: DateTime<Utc>,

    /// All renames of the batch, in plan order
    pub files: Vec<RenamePlanEntry>,
}

impl Journal {
    pub fn new(plan: &RenamePlan) -> Self {
        Self {
            date: Utc::now(),
            files: plan.entries.clone(),
        }
    }
}

/// Path of the journal for a given working directory.
pub fn journal_path(dir: &Path) -> PathBuf {
    dir.join(JOURNAL_FILE_NAME)
}
