//! Captured invocation of external binaries (`git`, `gh`).

use duct::cmd;
use tracing::debug;

/// Captured result of one command run.
#[derive(Debug)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Run a program with captured stdout/stderr. A non-zero exit status is
/// reported through `success`, not as an `Err`; `Err` means the program
/// could not be spawned at all.
pub fn run_command(program: &str, args: &[&str]) -> std::io::Result<CommandOutput> {
    debug!(program = %program, args = ?args, "Running command");

    let output = cmd(program, args)
        .stdout_capture()
        .stderr_capture()
        .unchecked()
        .run()?;

    let result = CommandOutput {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };

    debug!(
        success = result.success,
        stdout_len = result.stdout.len(),
        stderr_len = result.stderr.len(),
        "Command finished"
    );

    Ok(result)
}

/// Whether a binary can be spawned at all.
pub fn binary_available(program: &str) -> bool {
    cmd(program, ["--version"])
        .stdout_null()
        .stderr_null()
        .unchecked()
        .run()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_command_captures_stdout() {
        let output = run_command("echo", &["hello"]).unwrap();

        assert!(output.success);
        assert_eq!(output.stdout.trim(), "hello");
        assert!(output.stderr.is_empty());
    }

    #[test]
    fn test_run_command_nonzero_status() {
        let output = run_command("false", &[]).unwrap();

        assert!(!output.success);
    }

    #[test]
    fn test_run_missing_program() {
        let result = run_command("definitely-not-a-real-binary-xyz", &[]);

        assert!(result.is_err());
    }

    #[test]
    fn test_binary_available() {
        assert!(binary_available("echo"));
        assert!(!binary_available("definitely-not-a-real-binary-xyz"));
    }
}
