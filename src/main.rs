use clap::Parser;
use tracing::error;

use lessonkit::cli::{Cli, Commands};
use lessonkit::commands;
use lessonkit::config::load_settings;
use lessonkit::error::AppError;
use lessonkit::logging;

fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let verbose = cli.verbose > 0;

    match cli.command {
        Commands::Rename(args) => {
            let settings = load_settings();
            commands::rename::run(&args, &settings, verbose)
        }
        Commands::Config(args) => commands::config::run(&args, verbose),
        Commands::Scaffold(args) => commands::scaffold::run(&args, verbose),
        Commands::Repo(args) => commands::repo::run(&args, verbose),
    }
}
