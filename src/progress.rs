//! User-facing status output.
//!
//! In verbose mode output is suppressed since tracing handles everything.
//! In normal mode output is shown with colors to give feedback during the
//! rename, upload and revert steps.

use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Progress reporter for user-facing output
pub struct Progress {
    writer: Box<dyn Write>,
    /// When true, all output is suppressed (verbose mode uses tracing instead)
    silent: bool,
    /// When true, output is colorized
    colors_enabled: bool,
}

/// Check if we should use colors in output
fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    io::stderr().is_terminal()
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress {
    /// Create a new progress reporter writing to stderr
    pub fn new() -> Self {
        let colors_enabled = should_use_colors();
        Self {
            writer: Box::new(io::stderr()),
            silent: false,
            colors_enabled,
        }
    }

    /// Create a progress reporter that respects UI mode.
    /// When verbose=true, output is suppressed (tracing handles it)
    pub fn new_with_ui(verbose: bool) -> Self {
        Self {
            writer: Box::new(io::stderr()),
            silent: verbose,
            colors_enabled: should_use_colors(),
        }
    }

    /// Create a progress reporter with a custom writer (for testing)
    #[cfg(test)]
    pub fn with_writer(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            silent: false,
            colors_enabled: false,
        }
    }

    /// Print an informational message
    pub fn info(&mut self, msg: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{}", msg.cyan());
        } else {
            let _ = writeln!(self.writer, "{}", msg);
        }
    }

    /// Print a warning message
    pub fn warn(&mut self, msg: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "!".yellow().bold(), msg.yellow());
        } else {
            let _ = writeln!(self.writer, "Warning: {}", msg);
        }
    }

    /// Print a success message
    pub fn success(&mut self, msg: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "✓".green().bold(), msg.green());
        } else {
            let _ = writeln!(self.writer, "* {}", msg);
        }
    }

    /// List the pending files found in the working directory
    pub fn found_files(&mut self, files: &[String]) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{}",
                format!("Found {} file(s) to rename:", files.len()).bold()
            );
        } else {
            let _ = writeln!(self.writer, "Found {} file(s) to rename:", files.len());
        }
        for file in files {
            if self.colors_enabled {
                let _ = writeln!(self.writer, "  - {}", file.dimmed());
            } else {
                let _ = writeln!(self.writer, "  - {}", file);
            }
        }
    }

    /// Report progress on a single rename
    pub fn rename_progress(&mut self, current: usize, total: usize, from: &str, to: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let counter = format!("[{}/{}]", current, total);
            let _ = writeln!(
                self.writer,
                "{} {} {} {}",
                counter.cyan(),
                from.dimmed(),
                "→".cyan(),
                to
            );
        } else {
            let _ = writeln!(self.writer, "[{}/{}] {} -> {}", current, total, from, to);
        }
    }

    /// Report a file copied to the archive folder
    pub fn upload_progress(&mut self, file: &str, destination: &Path) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{}",
                format!("  copied {} to {}", file, destination.display()).dimmed()
            );
        } else {
            let _ = writeln!(
                self.writer,
                "  copied {} to {}",
                file,
                destination.display()
            );
        }
    }

    /// Report the rename batch complete
    pub fn rename_complete(&mut self, count: usize, uploaded: bool) {
        if self.silent {
            return;
        }
        let _ = writeln!(self.writer);
        let msg = if uploaded {
            format!("{} file(s) renamed and copied to the archive folder", count)
        } else {
            format!("{} file(s) renamed", count)
        };
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "✓".green().bold(), msg.green());
        } else {
            let _ = writeln!(self.writer, "* {}", msg);
        }
    }

    /// Report starting a revert operation
    pub fn revert_start(&mut self, total: usize, from_timestamp: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{}",
                format!("Reverting {} file(s) from the batch of {}", total, from_timestamp).bold()
            );
        } else {
            let _ = writeln!(
                self.writer,
                "Reverting {} file(s) from the batch of {}",
                total, from_timestamp
            );
        }
    }

    /// Report progress on a single restored file
    pub fn revert_progress(&mut self, current: usize, total: usize, from: &str, to: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let counter = format!("[{}/{}]", current, total);
            let _ = writeln!(
                self.writer,
                "{} {} {} {}",
                counter.cyan(),
                from.dimmed(),
                "→".cyan(),
                to
            );
        } else {
            let _ = writeln!(self.writer, "[{}/{}] {} -> {}", current, total, from, to);
        }
    }

    /// Report revert complete
    pub fn revert_complete(&mut self, restored: usize, skipped: usize) {
        if self.silent {
            return;
        }
        let _ = writeln!(self.writer);
        let msg = if skipped > 0 {
            format!("{} file(s) restored, {} no longer present", restored, skipped)
        } else {
            format!("{} file(s) restored", restored)
        };
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "✓".green().bold(), msg.green());
        } else {
            let _ = writeln!(self.writer, "Revert complete. {}", msg);
        }
    }
}
