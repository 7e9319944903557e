use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec::{format_video_file_name, VideoNameSpec};

/// One file's rename, old name to new name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamePlanEntry {
    pub old: String,
    pub new: String,
}

/// An ordered batch of renames sharing one lesson code and title.
///
/// Order matches the (sorted) pending-file listing and only matters for
/// part assignment; entries can be applied in any order since names are
/// distinct before and after.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenamePlan {
    pub entries: Vec<RenamePlanEntry>,
}

impl RenamePlan {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Answers collected for one batch.
///
/// `video_part` is the part base for the first pending file; `None` means
/// the batch is a single-part video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameAnswers {
    pub video_number: u32,
    pub video_part: Option<u32>,
    pub lesson_code: Option<u32>,
    pub lesson_title: String,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PlanError {
    #[error("No pending video files to rename")]
    NoPendingFiles,
}

/// Build the rename plan for a batch of pending files.
///
/// File `i` gets part `base + i` when a part base is present; with no
/// base the part segment is omitted for every entry.
pub fn build_plan(
    local_files: &[String],
    answers: &RenameAnswers,
    date_token: &str,
) -> Result<RenamePlan, PlanError> {
    if local_files.is_empty() {
        return Err(PlanError::NoPendingFiles);
    }

    let spec = VideoNameSpec {
        video_number: answers.video_number,
        video_part: answers.video_part,
        lesson_code: answers.lesson_code,
        lesson_title: answers.lesson_title.clone(),
    };

    let entries = local_files
        .iter()
        .enumerate()
        .map(|(index, file)| RenamePlanEntry {
            old: file.clone(),
            new: format_video_file_name(&spec, index as u32, date_token),
        })
        .collect();

    Ok(RenamePlan { entries })
}
