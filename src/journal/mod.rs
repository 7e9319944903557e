mod reader;
mod types;
mod writer;

pub use reader::read_journal;
pub use types::{journal_path, Journal, JOURNAL_FILE_NAME};
pub use writer::{write_journal, JournalError};
