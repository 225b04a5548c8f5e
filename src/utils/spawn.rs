use std::path::Path;
use std::process::Command;

/// Captured outcome of one child-process run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnResult {
    pub stdout: String,
    pub stderr: String,
    /// Exit code; `None` when the process could not be spawned or was
    /// terminated by a signal.
    pub code: Option<i32>,
}

impl SpawnResult {
    pub fn succeeded(&self) -> bool {
        self.code == Some(0)
    }
}

/// Run `program` with `args` in `cwd`, capturing stdout and stderr.
///
/// Never panics and never errors: a command that cannot be spawned reports
/// `code: None` with the failure text in `stderr`.
pub fn run_command(program: &str, args: &[&str], cwd: &Path) -> SpawnResult {
    if std::env::var("WHATSNEW_VERBOSE").is_ok() {
        println!("Executing: {} {}", program, args.join(" "));
    }

    match Command::new(program).args(args).current_dir(cwd).output() {
        Ok(output) => SpawnResult {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code(),
        },
        Err(e) => SpawnResult {
            stdout: String::new(),
            stderr: e.to_string(),
            code: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn cwd() -> PathBuf {
        std::env::current_dir().unwrap()
    }

    #[test]
    fn captures_stdout_and_exit_code() {
        let result = run_command("echo", &["hello"], &cwd());
        assert_eq!(result.code, Some(0));
        assert!(result.succeeded());
        assert_eq!(result.stdout.trim(), "hello");
    }

    #[test]
    fn unspawnable_command_reports_no_code() {
        let result = run_command("whatsnew-no-such-binary", &[], &cwd());
        assert_eq!(result.code, None);
        assert!(!result.succeeded());
        assert!(!result.stderr.is_empty());
    }

    #[test]
    fn nonzero_exit_is_not_success() {
        let result = run_command("sh", &["-c", "exit 3"], &cwd());
        assert_eq!(result.code, Some(3));
        assert!(!result.succeeded());
    }
}
