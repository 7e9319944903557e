use std::env;
use std::path::Path;

use tracing::{debug, info};

use crate::cli::RenameArgs;
use crate::codec::{parse_video_file_name, today_token, VideoFileName};
use crate::config::Settings;
use crate::error::AppError;
use crate::executor::execute_plan;
use crate::journal::{write_journal, Journal};
use crate::planner::{build_plan, RenameAnswers};
use crate::progress::Progress;
use crate::prompt::{self, PromptDefaults};
use crate::revert::revert_last_batch;
use crate::scanner::scan_video_files;
use crate::sequencer::{next_video_number, next_video_part};

pub fn run(args: &RenameArgs, settings: &Settings, verbose: bool) -> Result<(), AppError> {
    let working_dir = env::current_dir()?;
    let mut progress = Progress::new_with_ui(verbose);

    if args.revert {
        return run_revert(&working_dir, &mut progress);
    }

    // Upload needs a configured archive folder; without one, abort before
    // touching anything. This is a reported warning, not a failure.
    if args.upload && settings.video_folder.is_none() {
        progress.warn("Archive video folder not configured.");
        progress.info("To configure it, run: lessonkit config -f <folder_path>");
        return Ok(());
    }

    let pending = scan_video_files(&working_dir)?;

    if pending.is_empty() {
        progress.info("No video files to rename found.");
        return Ok(());
    }

    progress.found_files(&pending);

    let last_archived = last_archived_file(settings)?;
    debug!(last = ?last_archived, "Last archived file");

    let defaults = PromptDefaults {
        video_number: next_video_number(last_archived.as_ref()),
        video_part: next_video_part(pending.len(), settings.multipart, last_archived.as_ref()),
    };

    let answers = resolve_answers(args, &defaults)?;
    info!(?answers, "Batch answers collected");

    let plan = build_plan(&pending, &answers, &today_token())?;

    let confirmed = args.yes || prompt::confirm_plan(&plan)?;
    if !confirmed {
        progress.info("Operation cancelled.");
        return Ok(());
    }

    // The journal must be on disk before the first rename so an
    // interrupted batch stays revertible.
    write_journal(&Journal::new(&plan), &working_dir)?;

    let upload_folder = if args.upload {
        settings.video_folder.as_deref()
    } else {
        None
    };

    let count = execute_plan(&plan, &working_dir, upload_folder, &mut progress)?;
    progress.rename_complete(count, upload_folder.is_some());

    Ok(())
}

fn run_revert(working_dir: &Path, progress: &mut Progress) -> Result<(), AppError> {
    match revert_last_batch(working_dir, progress)? {
        Some(_) => Ok(()),
        None => {
            progress.info("Nothing to revert.");
            Ok(())
        }
    }
}

/// The last file of the archive folder, parsed, when one exists.
///
/// A filename in the archive that does not follow the naming convention
/// aborts the command: sequencing suggestions would be garbage.
fn last_archived_file(settings: &Settings) -> Result<Option<VideoFileName>, AppError> {
    let folder = match &settings.video_folder {
        Some(folder) => folder,
        None => return Ok(None),
    };

    let last = scan_video_files(folder)?.pop();

    match last {
        Some(name) => Ok(Some(parse_video_file_name(&name)?)),
        None => Ok(None),
    }
}

/// Answers from flags when `--number` and `--title` are both present,
/// interactive prompts otherwise.
fn resolve_answers(
    args: &RenameArgs,
    defaults: &PromptDefaults,
) -> Result<RenameAnswers, AppError> {
    if let (Some(number), Some(title)) = (args.number, &args.title) {
        let video_part = match args.part {
            Some(part) => prompt::normalize_part(part),
            None => defaults.video_part,
        };

        return Ok(RenameAnswers {
            video_number: number,
            video_part,
            lesson_code: args.code,
            lesson_title: title.clone(),
        });
    }

    Ok(prompt::collect_rename_answers(defaults)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flag_args(number: Option<u32>, title: Option<&str>, part: Option<u32>) -> RenameArgs {
        RenameArgs {
            revert: false,
            upload: false,
            yes: true,
            number,
            part,
            code: Some(119),
            title: title.map(|t| t.to_string()),
        }
    }

    #[test]
    fn test_resolve_answers_from_flags() {
        let args = flag_args(Some(8), Some("CSS Flex"), Some(1));
        let defaults = PromptDefaults {
            video_number: 3,
            video_part: None,
        };

        let answers = resolve_answers(&args, &defaults).unwrap();

        assert_eq!(answers.video_number, 8);
        assert_eq!(answers.video_part, Some(1));
        assert_eq!(answers.lesson_code, Some(119));
        assert_eq!(answers.lesson_title, "CSS Flex");
    }

    #[test]
    fn test_resolve_answers_part_zero_means_single() {
        let args = flag_args(Some(8), Some("CSS Flex"), Some(0));
        let defaults = PromptDefaults {
            video_number: 1,
            video_part: Some(2),
        };

        let answers = resolve_answers(&args, &defaults).unwrap();

        assert_eq!(answers.video_part, None);
    }

    #[test]
    fn test_resolve_answers_part_falls_back_to_default() {
        let args = flag_args(Some(8), Some("CSS Flex"), None);
        let defaults = PromptDefaults {
            video_number: 1,
            video_part: Some(2),
        };

        let answers = resolve_answers(&args, &defaults).unwrap();

        assert_eq!(answers.video_part, Some(2));
    }

    #[test]
    fn test_last_archived_file_without_configured_folder() {
        let settings = Settings::default();
        assert!(last_archived_file(&settings).unwrap().is_none());
    }

    #[test]
    fn test_last_archived_file_picks_sorted_last() {
        let archive = tempfile::tempdir().unwrap();
        std::fs::write(archive.path().join("07-22SET-intro.mp4"), "").unwrap();
        std::fs::write(archive.path().join("08_1-23SET-119-css_flex.mp4"), "").unwrap();

        let settings = Settings {
            video_folder: Some(archive.path().to_path_buf()),
            multipart: false,
        };

        let last = last_archived_file(&settings).unwrap().unwrap();

        assert_eq!(last.video_number, 8);
        assert_eq!(last.video_part, Some(1));
    }

    #[test]
    fn test_last_archived_file_malformed_name_fails() {
        let archive = tempfile::tempdir().unwrap();
        std::fs::write(archive.path().join("zoom_recording.mp4"), "").unwrap();

        let settings = Settings {
            video_folder: Some(archive.path().to_path_buf()),
            multipart: false,
        };

        let result = last_archived_file(&settings);

        assert!(matches!(result, Err(AppError::Parse(_))));
    }
}
