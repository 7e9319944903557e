use std::env;
use std::path::Path;

use dialoguer::{Input, MultiSelect};
use tracing::debug;

use crate::cli::ScaffoldArgs;
use crate::error::AppError;
use crate::progress::Progress;
use crate::scaffold::{
    create_css, create_html, create_images, create_js, ScaffoldSelection,
};

pub fn run(args: &ScaffoldArgs, verbose: bool) -> Result<(), AppError> {
    let out_dir = env::current_dir()?;
    let mut progress = Progress::new_with_ui(verbose);

    let selection = match resolve_selection(args) {
        Some(selection) => selection,
        None => run_wizard()?,
    };

    apply_selection(&out_dir, &selection, &mut progress)
}

/// Scaffold a freshly cloned project: runs the interactive wizard
/// against that directory.
pub fn scaffold_into(dir: &Path, progress: &mut Progress) -> Result<(), AppError> {
    let selection = run_wizard()?;
    apply_selection(dir, &selection, progress)
}

/// Selection from flags, or `None` when no file flag was given and the
/// wizard should take over.
fn resolve_selection(args: &ScaffoldArgs) -> Option<ScaffoldSelection> {
    if args.html.is_none() && args.css.is_none() && args.js.is_none() && !args.img && !args.all {
        return None;
    }

    let named = |flag: &Option<Option<String>>| -> Option<String> {
        match flag {
            Some(Some(name)) => Some(name.clone()),
            Some(None) => Some(args.name.clone().unwrap_or_default()),
            None => None,
        }
    };

    let mut selection = ScaffoldSelection {
        html: named(&args.html),
        css: named(&args.css),
        js: named(&args.js),
        images: args.img,
    };

    if args.all {
        let fallback = args.name.clone().unwrap_or_default();
        selection.html.get_or_insert_with(|| fallback.clone());
        selection.css.get_or_insert(fallback);
        selection.images = true;
    }

    Some(selection)
}

fn run_wizard() -> Result<ScaffoldSelection, AppError> {
    eprintln!("This wizard creates the basic scaffold for your project.\n");

    let items = ["HTML", "CSS", "JS", "Images"];
    let chosen = MultiSelect::new()
        .with_prompt("Choose the file types to create")
        .items(&items)
        .interact()?;

    let mut selection = ScaffoldSelection::default();

    for index in chosen {
        match items[index] {
            "HTML" => {
                let name: String = Input::new()
                    .with_prompt("HTML file name")
                    .default("index".to_string())
                    .interact_text()?;
                selection.html = Some(name);
            }
            "CSS" => {
                let name: String = Input::new()
                    .with_prompt("CSS file name")
                    .default("style".to_string())
                    .interact_text()?;
                selection.css = Some(name);
            }
            "JS" => {
                let name: String = Input::new()
                    .with_prompt("JS file name")
                    .default("main".to_string())
                    .interact_text()?;
                selection.js = Some(name);
            }
            "Images" => selection.images = true,
            _ => unreachable!(),
        }
    }

    Ok(selection)
}

fn apply_selection(
    out_dir: &Path,
    selection: &ScaffoldSelection,
    progress: &mut Progress,
) -> Result<(), AppError> {
    if selection.is_empty() {
        progress.info("Nothing selected, nothing to create.");
        return Ok(());
    }

    debug!(?selection, "Applying scaffold selection");

    let non_empty = |name: &Option<String>| -> Option<String> {
        name.clone().filter(|n| !n.trim().is_empty())
    };

    if let Some(html_name) = &selection.html {
        report(
            progress,
            create_html(
                out_dir,
                non_empty(&Some(html_name.clone())).as_deref(),
                selection.css.as_deref(),
                selection.js.as_deref(),
            )?,
        );
    }

    if selection.css.is_some() {
        report(progress, create_css(out_dir, non_empty(&selection.css).as_deref())?);
    }

    if selection.js.is_some() {
        report(progress, create_js(out_dir, non_empty(&selection.js).as_deref())?);
    }

    if selection.images {
        report(progress, create_images(out_dir)?);
    }

    progress.success("Scaffold complete.");
    Ok(())
}

fn report(progress: &mut Progress, created: Option<std::path::PathBuf>) {
    match created {
        Some(path) => progress.info(&format!("Created {}", path.display())),
        None => progress.warn("Already exists, left untouched."),
    }
}
