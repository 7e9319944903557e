mod codes;

pub use codes::ExitCode;

use thiserror::Error;

use crate::codec::ParseError;
use crate::config::ConfigError;
use crate::executor::ExecuteError;
use crate::journal::JournalError;
use crate::planner::PlanError;
use crate::revert::RevertError;
use crate::scaffold::ScaffoldError;
use crate::scanner::ScannerError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Scan failed: {0}")]
    Scanner(#[from] ScannerError),

    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Plan(#[from] PlanError),

    #[error("Journal error: {0}")]
    Journal(#[from] JournalError),

    #[error("Revert failed: {0}")]
    Revert(#[from] RevertError),

    #[error("Rename failed: {0}")]
    Execute(#[from] ExecuteError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Scaffold failed: {0}")]
    Scaffold(#[from] ScaffoldError),

    #[error("Required tool not available: {name}")]
    MissingTool { name: String, hint: String },

    #[error("Not logged in to the GitHub CLI")]
    GhAuthRequired,

    #[error("Repository not found: {name}")]
    RepoNotFound { name: String },

    #[error("'{program}' failed")]
    CommandFailed { program: String, stderr: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::Scanner(_) => ExitCode::DirectoryNotFound,
            AppError::Parse(_) => ExitCode::MalformedName,
            AppError::Plan(_) => ExitCode::GeneralError,
            AppError::Journal(_) => ExitCode::JournalError,
            AppError::Revert(RevertError::Journal(_)) => ExitCode::JournalError,
            AppError::Revert(_) => ExitCode::RenameError,
            AppError::Execute(_) => ExitCode::RenameError,
            AppError::Config(_) => ExitCode::ConfigError,
            AppError::Prompt(_) => ExitCode::PromptError,
            AppError::Scaffold(_) => ExitCode::ScaffoldError,
            AppError::MissingTool { .. } => ExitCode::CommandError,
            AppError::GhAuthRequired => ExitCode::CommandError,
            AppError::RepoNotFound { .. } => ExitCode::CommandError,
            AppError::CommandFailed { .. } => ExitCode::CommandError,
            AppError::Io(_) => ExitCode::GeneralError,
            AppError::Other(_) => ExitCode::GeneralError,
        }
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::Parse(ParseError::MalformedName(name)) => {
                format!(
                    "Could not parse archived filename:\n  {}\n\n\
                     Expected pattern:\n\
                     \x20 NN[_P]-DDMON[-L]-title.mp4\n\
                     \x20 Examples: 08-23SET-css_flex.mp4, 08_2-23SET-119-css_flex.mp4\n\n\
                     Fix or remove the offending file in the archive folder and try again.",
                    name
                )
            }

            AppError::MissingTool { name, hint } => {
                format!(
                    "This command requires '{}', which was not found on your PATH.\n{}",
                    name, hint
                )
            }

            AppError::GhAuthRequired => {
                "You are not logged in to the GitHub CLI.\n\
                 Please login with 'gh auth login'.\n\
                 For more info, visit https://cli.github.com/manual/gh_auth_login"
                    .to_string()
            }

            AppError::RepoNotFound { name } => {
                format!(
                    "No repository named '{}' was found among your repositories.\n\
                     Use the full 'owner/name' form or pass --org.",
                    name
                )
            }

            AppError::CommandFailed { program, stderr } => {
                let mut msg = format!("'{}' failed.", program);
                let stderr = stderr.trim();
                if !stderr.is_empty() {
                    msg.push_str(&format!("\n{}", stderr));
                }
                msg
            }

            AppError::Journal(e) => {
                format!(
                    "{}\n\nThe journal file may be corrupted. \
                     Delete .rename.json to discard the recorded batch.",
                    e
                )
            }

            other => other.to_string(),
        }
    }
}
