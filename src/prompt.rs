//! Interactive answer collection.
//!
//! All answers for a batch are collected up front into a plain struct;
//! plan computation afterwards is pure. Entering 0 for the part means
//! "single part".

use colored::Colorize;
use dialoguer::{Confirm, Input};

use crate::planner::{RenameAnswers, RenamePlan};

/// Defaults suggested by the sequencer, shown in the prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDefaults {
    pub video_number: u32,
    pub video_part: Option<u32>,
}

/// Ask for the batch answers, one blocking question at a time.
pub fn collect_rename_answers(
    defaults: &PromptDefaults,
) -> Result<RenameAnswers, dialoguer::Error> {
    let video_number: u32 = Input::new()
        .with_prompt("Video number")
        .default(defaults.video_number)
        .interact_text()?;

    let video_part: u32 = Input::new()
        .with_prompt("Video part (0 for a single part)")
        .default(defaults.video_part.unwrap_or(0))
        .interact_text()?;

    let lesson_code: String = Input::new()
        .with_prompt("Lesson number (leave empty to omit)")
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), &str> {
            let trimmed = input.trim();
            if trimmed.is_empty() || trimmed.parse::<u32>().is_ok() {
                Ok(())
            } else {
                Err("Enter a number or leave empty")
            }
        })
        .interact_text()?;

    let lesson_title: String = Input::new()
        .with_prompt("Lesson title")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("A lesson title is required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    Ok(RenameAnswers {
        video_number,
        video_part: normalize_part(video_part),
        lesson_code: lesson_code.trim().parse().ok(),
        lesson_title: lesson_title.trim().to_string(),
    })
}

/// Show the full old → new mapping and ask for confirmation.
pub fn confirm_plan(plan: &RenamePlan) -> Result<bool, dialoguer::Error> {
    eprintln!();
    for entry in &plan.entries {
        eprintln!(
            "  {} {} {}",
            entry.old.dimmed(),
            "→".cyan(),
            entry.new.bold()
        );
    }
    eprintln!();

    Confirm::new()
        .with_prompt(format!("Rename these {} file(s)?", plan.len()))
        .default(true)
        .interact()
}

/// A generic yes/no question.
pub fn confirm(message: &str, default: bool) -> Result<bool, dialoguer::Error> {
    Confirm::new()
        .with_prompt(message)
        .default(default)
        .interact()
}

/// Map the prompted part value to the planner's representation.
pub fn normalize_part(part: u32) -> Option<u32> {
    if part == 0 {
        None
    } else {
        Some(part)
    }
}
