//! Suggested defaults for the next batch, derived from the last file
//! already present in the archive folder.
//!
//! These are suggestions only. The user confirms or overrides every value
//! before anything is written.

use crate::codec::VideoFileName;

/// The video number to suggest for the next batch.
///
/// With no archive history the numbering starts at 1. When the last
/// archived file was part 1 of a multi-part video, the same number is
/// suggested again (the next upload is assumed to be part 2); otherwise
/// the number advances.
pub fn next_video_number(last: Option<&VideoFileName>) -> u32 {
    match last {
        None => 1,
        Some(file) if file.video_part == Some(1) => file.video_number,
        Some(file) => file.video_number + 1,
    }
}

/// The part number to suggest for the next batch, `None` meaning
/// "single part".
///
/// Without multipart mode the suggestion only looks at how many files are
/// pending: a single file is a single part, more than one starts at part
/// 1. With multipart mode enabled and archive history available, the
/// suggestion alternates: part 2 if the archive ends on a part 1,
/// otherwise part 1 again.
pub fn next_video_part(
    pending_count: usize,
    multipart: bool,
    last: Option<&VideoFileName>,
) -> Option<u32> {
    let default = if pending_count <= 1 { None } else { Some(1) };

    if !multipart {
        return default;
    }

    match last {
        Some(file) if file.video_part == Some(1) => Some(2),
        Some(_) => Some(1),
        None => default,
    }
}
