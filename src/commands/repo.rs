use std::env;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{debug, info};

use crate::cli::RepoArgs;
use crate::error::AppError;
use crate::progress::Progress;
use crate::prompt;
use crate::shell::{binary_available, run_command};

use super::scaffold::scaffold_into;

#[derive(Debug, Deserialize)]
struct RepoListEntry {
    name: String,
    #[serde(rename = "nameWithOwner")]
    name_with_owner: String,
}

pub fn run(args: &RepoArgs, verbose: bool) -> Result<(), AppError> {
    let mut progress = Progress::new_with_ui(verbose);

    if args.delete {
        return delete_repo(args, &mut progress);
    }

    ensure_tools(&mut progress)?;

    let full_name = qualified_name(&args.name, args.org.as_deref());

    create_repo(args, &full_name, &mut progress)?;
    let project_dir = clone_repo(&args.name, &full_name, &mut progress)?;

    if prompt::confirm("Create the initial scaffolding for this project?", true)? {
        scaffold_into(&project_dir, &mut progress)?;
    }

    Ok(())
}

fn qualified_name(name: &str, org: Option<&str>) -> String {
    match org {
        Some(org) => format!("{}/{}", org.trim_start_matches('='), name),
        None => name.to_string(),
    }
}

fn ensure_tools(progress: &mut Progress) -> Result<(), AppError> {
    progress.info("Checking git and github-cli installation...");

    if !binary_available("git") {
        return Err(AppError::MissingTool {
            name: "git".to_string(),
            hint: "Please download it at https://git-scm.com/downloads".to_string(),
        });
    }

    if !binary_available("gh") {
        return Err(AppError::MissingTool {
            name: "gh".to_string(),
            hint: "Please download it at https://cli.github.com/ and login with 'gh auth login'"
                .to_string(),
        });
    }

    let auth = run_command("gh", &["auth", "status"])?;
    if !auth.success {
        return Err(AppError::GhAuthRequired);
    }

    Ok(())
}

fn create_repo(args: &RepoArgs, full_name: &str, progress: &mut Progress) -> Result<(), AppError> {
    let visibility = if args.public { "public" } else { "private" };
    let visibility_flag = if args.public { "--public" } else { "--private" };

    progress.info(&format!("Creating {} repo {}...", visibility, full_name));

    let output = run_command("gh", &["repo", "create", full_name, visibility_flag])?;

    if output.success {
        progress.success(&format!(
            "{} repo {} created at {}",
            visibility,
            full_name,
            output.stdout.trim()
        ));
        return Ok(());
    }

    if args.exist_ok {
        progress.warn(&format!(
            "Could not create repo {}: {}",
            full_name,
            output.stderr.trim()
        ));
        progress.info("Continuing with the clone anyway...");
        return Ok(());
    }

    Err(AppError::CommandFailed {
        program: "gh repo create".to_string(),
        stderr: output.stderr,
    })
}

fn clone_repo(
    project_name: &str,
    full_name: &str,
    progress: &mut Progress,
) -> Result<PathBuf, AppError> {
    progress.info(&format!("Cloning repo into ./{}...", project_name));

    let output = run_command("gh", &["repo", "clone", full_name, project_name])?;

    if !output.success {
        return Err(AppError::CommandFailed {
            program: "gh repo clone".to_string(),
            stderr: output.stderr,
        });
    }

    let project_dir = env::current_dir()?.join(project_name);
    info!("Repo cloned at {:?}", project_dir);
    progress.success(&format!("Repo cloned at {}", project_dir.display()));

    Ok(project_dir)
}

fn delete_repo(args: &RepoArgs, progress: &mut Progress) -> Result<(), AppError> {
    let full_name = resolve_owned_name(args)?;

    let confirmed = prompt::confirm(
        &format!(
            "Are you sure you want to permanently delete the repo {}?",
            full_name
        ),
        false,
    )?;

    if !confirmed {
        progress.info("Operation cancelled.");
        return Ok(());
    }

    let output = run_command("gh", &["repo", "delete", &full_name, "--yes"])?;

    if !output.success {
        return Err(AppError::CommandFailed {
            program: "gh repo delete".to_string(),
            stderr: output.stderr,
        });
    }

    progress.success(&format!("Repo {} deleted.", full_name));
    Ok(())
}

/// Resolve the `owner/name` form for deletion. A bare name without an
/// organization is looked up among the user's repositories.
fn resolve_owned_name(args: &RepoArgs) -> Result<String, AppError> {
    if let Some(org) = &args.org {
        return Ok(qualified_name(&args.name, Some(org)));
    }

    if args.name.contains('/') {
        return Ok(args.name.clone());
    }

    let output = run_command("gh", &["repo", "list", "--json", "name,nameWithOwner"])?;

    if !output.success {
        return Err(AppError::CommandFailed {
            program: "gh repo list".to_string(),
            stderr: output.stderr,
        });
    }

    let repos: Vec<RepoListEntry> = serde_json::from_str(&output.stdout)
        .map_err(|e| AppError::Other(format!("Unexpected 'gh repo list' output: {}", e)))?;

    debug!(count = repos.len(), "Repositories listed");

    repos
        .into_iter()
        .find(|repo| repo.name == args.name)
        .map(|repo| repo.name_with_owner)
        .ok_or_else(|| AppError::RepoNotFound {
            name: args.name.clone(),
        })
}
