#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidArguments = 2,
    DirectoryNotFound = 3,
    MalformedName = 4,
    JournalError = 5,
    RenameError = 6,
    ConfigError = 7,
    PromptError = 8,
    CommandError = 9,
    ScaffoldError = 10,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}
