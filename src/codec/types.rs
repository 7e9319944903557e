use thiserror::Error;

/// A parsed archive filename.
///
/// `video_number` and `title` are always present; `video_part` and
/// `lesson_number` are optional. The `date` token is kept verbatim as it
/// appeared in the name and is never reinterpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFileName {
    pub video_number: u32,
    pub video_part: Option<u32>,
    pub date: String,
    pub lesson_number: Option<u32>,
    pub title: String,
}

/// Fields used to synthesize a new archive filename.
///
/// `video_part` here is the part *base*; the per-file offset is applied
/// at format time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoNameSpec {
    pub video_number: u32,
    pub video_part: Option<u32>,
    pub lesson_code: Option<u32>,
    pub lesson_title: String,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed archived filename: {0}")]
    MalformedName(String),
}
