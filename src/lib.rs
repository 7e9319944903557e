pub mod cli;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod executor;
pub mod journal;
pub mod logging;
pub mod planner;
pub mod progress;
pub mod prompt;
pub mod revert;
pub mod scaffold;
pub mod scanner;
pub mod sequencer;
pub mod shell;

pub use codec::{
    date_token, format_video_file_name, parse_video_file_name, slugify_title, today_token,
    ParseError, VideoFileName, VideoNameSpec,
};
pub use error::{AppError, ExitCode};
pub use journal::{journal_path, read_journal, write_journal, Journal, JOURNAL_FILE_NAME};
pub use planner::{build_plan, PlanError, RenameAnswers, RenamePlan, RenamePlanEntry};
pub use revert::{revert_last_batch, RevertError, RevertOutcome};
pub use scanner::{scan_video_files, ScannerError};
pub use sequencer::{next_video_number, next_video_part};
