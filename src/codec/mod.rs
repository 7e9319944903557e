mod date;
mod types;

pub use date::{date_token, today_token};
pub use types::{ParseError, VideoFileName, VideoNameSpec};

use once_cell::sync::Lazy;
use regex::Regex;

/// Only files with this extension participate in renames and sequencing.
pub const VIDEO_EXTENSION: &str = "mp4";

// Leading segment: <video_number>[_<part>]
// Examples: "08", "08_2", "12_10"
static NUMBER_SEGMENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)(?:_(\d+))?$").unwrap());

/// Parse an archived filename into structured fields.
///
/// The name splits on `-` into either 3 or 4 segments:
/// `video_num[_part]-date-title` or `video_num[_part]-date-lesson_num-title`.
/// Any other shape is an error.
pub fn parse_video_file_name(name: &str) -> Result<VideoFileName, ParseError> {
    let stem = name
        .strip_suffix(&format!(".{}", VIDEO_EXTENSION))
        .unwrap_or(name);

    let segments: Vec<&str> = stem.split('-').collect();

    if segments.len() != 3 && segments.len() != 4 {
        return Err(ParseError::MalformedName(name.to_string()));
    }

    let captures = NUMBER_SEGMENT_REGEX
        .captures(segments[0])
        .ok_or_else(|| ParseError::MalformedName(name.to_string()))?;

    let video_number: u32 = captures
        .get(1)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| ParseError::MalformedName(name.to_string()))?;

    let video_part: Option<u32> = match captures.get(2) {
        Some(m) => Some(
            m.as_str()
                .parse()
                .map_err(|_| ParseError::MalformedName(name.to_string()))?,
        ),
        None => None,
    };

    let date = segments[1].to_string();

    let (lesson_number, title) = if segments.len() == 4 {
        let code: u32 = segments[2]
            .parse()
            .map_err(|_| ParseError::MalformedName(name.to_string()))?;
        (Some(code), segments[3])
    } else {
        (None, segments[2])
    };

    Ok(VideoFileName {
        video_number,
        video_part,
        date,
        lesson_number,
        title: title.to_string(),
    })
}

/// Build an archive filename from structured fields.
///
/// The part offset shifts the part base so a batch of N files becomes
/// parts `base, base+1, ..., base+N-1`. The date token is supplied by the
/// caller rather than read from the clock here.
pub fn format_video_file_name(spec: &VideoNameSpec, part_offset: u32, date_token: &str) -> String {
    let mut name = format!("{:02}", spec.video_number);

    if let Some(part) = spec.video_part {
        name.push_str(&format!("_{}", part + part_offset));
    }

    name.push('-');
    name.push_str(date_token);

    if let Some(code) = spec.lesson_code {
        name.push_str(&format!("-{}", code));
    }

    name.push('-');
    name.push_str(&slugify_title(&spec.lesson_title));
    name.push('.');
    name.push_str(VIDEO_EXTENSION);

    name
}

/// Title slug: lowercase, spaces replaced with underscores. Other
/// characters pass through unchanged.
pub fn slugify_title(title: &str) -> String {
    title.to_lowercase().replace(' ', "_")
}
