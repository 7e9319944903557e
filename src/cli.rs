use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lessonkit")]
#[command(author, version, long_about = None)]
#[command(about = "Toolkit for lesson recordings, web project scaffolds and course repos")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rename pending recordings using the archive naming convention
    Rename(RenameArgs),
    /// Read or change persistent settings
    Config(ConfigArgs),
    /// Create boilerplate files for a web project
    Scaffold(ScaffoldArgs),
    /// Create, clone or delete a remote repository
    Repo(RepoArgs),
}

#[derive(Parser, Debug)]
pub struct RenameArgs {
    /// Revert the last rename batch
    #[arg(short, long)]
    pub revert: bool,

    /// Copy renamed files to the configured archive folder
    #[arg(short, long)]
    pub upload: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Video number; together with --title this skips the prompts
    #[arg(long, value_name = "N")]
    pub number: Option<u32>,

    /// Part base for the first file, 0 for a single part
    #[arg(long, value_name = "P")]
    pub part: Option<u32>,

    /// Lesson number
    #[arg(long, value_name = "L")]
    pub code: Option<u32>,

    /// Lesson title
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Path to the archive video folder used for uploads
    #[arg(short = 'f', long, value_name = "PATH")]
    pub video_folder: Option<PathBuf>,

    /// Enable or disable the multipart suggestion heuristic
    #[arg(short, long, value_name = "BOOL")]
    pub multipart: Option<bool>,

    /// Print all current settings
    #[arg(short, long)]
    pub all: bool,

    /// Remove all stored settings
    #[arg(long)]
    pub reset: bool,
}

#[derive(Parser, Debug)]
pub struct ScaffoldArgs {
    /// Base file title used by flags given without a name
    pub name: Option<String>,

    /// Basic HTML, CSS and images together
    #[arg(short, long)]
    pub all: bool,

    /// Basic HTML file (default: index.html)
    #[arg(long, value_name = "NAME")]
    pub html: Option<Option<String>>,

    /// Basic CSS file (default: style.css)
    #[arg(short, long, value_name = "NAME")]
    pub css: Option<Option<String>>,

    /// Basic JS file (default: main.js)
    #[arg(short, long, value_name = "NAME")]
    pub js: Option<Option<String>>,

    /// Images folder
    #[arg(short, long)]
    pub img: bool,
}

#[derive(Parser, Debug)]
pub struct RepoArgs {
    /// Name of the repository
    pub name: String,

    /// Organization where to create the repository
    #[arg(short, long, value_name = "ORG")]
    pub org: Option<String>,

    /// Create a public repository
    #[arg(short, long)]
    pub public: bool,

    /// Delete the repository irreversibly
    #[arg(short, long)]
    pub delete: bool,

    /// Continue with the clone when the repository already exists
    #[arg(long)]
    pub exist_ok: bool,
}
