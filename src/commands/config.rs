use crate::cli::ConfigArgs;
use crate::error::AppError;
use crate::progress::Progress;
use crate::config::SettingsStore;

pub fn run(args: &ConfigArgs, verbose: bool) -> Result<(), AppError> {
    let mut progress = Progress::new_with_ui(verbose);
    let mut store = SettingsStore::load_default()?;

    if args.reset {
        store.reset();
        store.save()?;
        progress.success("All settings have been removed.");
        return Ok(());
    }

    if args.all {
        let settings = store.settings();
        println!(
            "video_folder = {}",
            settings
                .video_folder
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(not set)".to_string())
        );
        println!("multipart = {}", settings.multipart);
        return Ok(());
    }

    let mut changed = false;

    if let Some(folder) = &args.video_folder {
        store.set_video_folder(folder.clone())?;
        progress.success(&format!("Archive folder set to {}", folder.display()));
        changed = true;
    }

    if let Some(multipart) = args.multipart {
        store.set_multipart(multipart);
        progress.success(&format!(
            "Multipart suggestions {}",
            if multipart { "enabled" } else { "disabled" }
        ));
        changed = true;
    }

    if changed {
        store.save()?;
    } else {
        progress.info("Nothing to change. Use --all to inspect the current settings.");
    }

    Ok(())
}
