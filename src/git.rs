use std::io::ErrorKind;
use std::process::{Command, Stdio};

/// Name of the history-rewriting executable this tool drives.
///
/// `git-filter-repo` installs a standalone entry point under this name; the
/// same binary also backs the `git filter-repo` subcommand.
pub const FILTER_REPO_BIN: &str = "git-filter-repo";

/// Runs a Git (or other) command and returns only its exit status.
///
/// This function executes the provided [`std::process::Command`] and:
/// - Returns `Ok(())` if the command exits successfully (status code `0`).
/// - Returns `Err("non-zero exit")` if the command exits with a non-zero status.
/// - Returns `Err` containing the I/O error message if the process fails to start.
///
/// # Parameters
///
/// * `cmd` — A fully configured [`std::process::Command`] to run.
///
/// # Returns
///
/// * `Ok(())` if the command succeeded.
/// * `Err(String)` with either `"non-zero exit"` or an error message if it failed.
///
/// # Examples
///
/// ```ignore
/// use std::process::Command;
///
/// let cmd = Command::new("git").arg("status");
/// match run_status(cmd) {
///     Ok(()) => println!("Git command succeeded"),
///     Err(e) => eprintln!("Git command failed: {}", e),
/// }
/// ```
fn run_status(mut cmd: Command) -> Result<(), String> {
    let status_res = cmd.status();

    match status_res {
        Ok(status) => {
            if status.success() {
                Ok(())
            } else {
                Err(String::from("non-zero exit"))
            }
        }
        Err(e) => Err(format!("{}", e)),
    }
}

/// Creates a mirror clone of the repository in the current directory.
///
/// This runs:
///
/// ```text
/// git clone --mirror . <target>
/// ```
///
/// A mirror clone copies every ref (branches, tags, notes) and is the form of
/// backup that survives a subsequent history rewrite of the source. Standard
/// output and error are inherited so git's own progress output reaches the
/// user directly.
///
/// # Parameters
///
/// * `target` – Destination path for the mirror, typically a sibling of the
///   current directory. Must not already exist; git refuses to clone into a
///   non-empty directory, and callers are expected to check existence first
///   to report it as a precondition failure.
///
/// # Returns
///
/// * `Ok(())` if the clone completed successfully.
/// * `Err(String)` if the executable could not be started or the clone exited
///   with a non-zero status.
///
/// # Notes
///
/// * The source repository is never modified by this operation.
/// * The created directory is not removed on any later failure; it is the
///   backup.
///
/// # Examples
///
/// ```ignore
/// // Ignored because it requires a Git repository.
/// use git_history_scrub::git::clone_mirror;
///
/// if let Err(err) = clone_mirror("../repo_backup") {
///     eprintln!("Backup failed: {}", err);
/// }
/// ```
pub fn clone_mirror(target: &str) -> Result<(), String> {
    let mut cmd = Command::new("git");
    cmd.arg("clone").arg("--mirror").arg(".").arg(target);
    cmd.stdin(Stdio::inherit());
    cmd.stdout(Stdio::inherit());
    cmd.stderr(Stdio::inherit());
    run_status(cmd).map_err(|_| String::from("`git clone --mirror` exited with non-zero status"))
}

/// Reports whether the `git-filter-repo` executable can be located.
///
/// This invokes `git-filter-repo --version` with both output streams
/// suppressed and inspects only how the spawn itself went:
///
/// * A spawn failure of kind [`ErrorKind::NotFound`] means the executable is
///   not on `PATH` — `false`.
/// * Every other outcome is `true`, including a non-zero exit status. A
///   present-but-erroring installation is still reported as installed; the
///   rewrite invocation surfaces whatever is wrong with it.
///
/// # Returns
///
/// * `true` if the executable was found (regardless of its exit status).
/// * `false` if it could not be located.
pub fn filter_repo_available() -> bool {
    let mut cmd = Command::new(FILTER_REPO_BIN);
    cmd.arg("--version");
    cmd.stdout(Stdio::null());
    cmd.stderr(Stdio::null());

    match cmd.status() {
        Ok(_) => true,
        Err(e) => e.kind() != ErrorKind::NotFound,
    }
}

/// Rewrites the entire repository history, applying text replacements.
///
/// This runs:
///
/// ```text
/// git-filter-repo --force --replace-text <rules_path>
/// ```
///
/// The `--force` flag is required because the tool is being pointed at a
/// clone that filter-repo does not consider "fresh". Standard input, output,
/// and error are inherited so progress and any prompts from the tool reach
/// the user directly.
///
/// # Parameters
///
/// * `rules_path` – Path to the replacement-rule file, one
///   `regex:<pattern>===><replacement>` directive per line.
///
/// # Returns
///
/// * `Ok(())` if the rewrite completed successfully.
/// * `Err(String)` if the command failed to start or exited non-zero.
///
/// # Notes
///
/// * This rewrites history: every commit id changes and the operation cannot
///   be undone. Callers must obtain confirmation and a backup first.
/// * filter-repo applies the rewrite to the whole history or fails; no
///   partial state is left behind for this tool to verify or clean up.
///
/// # Examples
///
/// ```ignore
/// // Ignored because it rewrites the enclosing repository.
/// use git_history_scrub::git::filter_repo_replace_text;
///
/// if let Err(err) = filter_repo_replace_text("expressions.txt") {
///     eprintln!("Rewrite failed: {}", err);
/// }
/// ```
pub fn filter_repo_replace_text(rules_path: &str) -> Result<(), String> {
    let mut cmd = Command::new(FILTER_REPO_BIN);
    cmd.arg("--force").arg("--replace-text").arg(rules_path);
    cmd.stdin(Stdio::inherit());
    cmd.stdout(Stdio::inherit());
    cmd.stderr(Stdio::inherit());
    run_status(cmd)
        .map_err(|_| format!("`{} --force --replace-text` exited with non-zero status", FILTER_REPO_BIN))
}

#[cfg(test)]
mod tests {
    use super::run_status;
    use std::process::Command;

    #[test]
    fn run_status_missing_executable_is_error() {
        let cmd = Command::new("definitely-not-a-real-executable-9f2a");
        let res = run_status(cmd);
        assert!(res.is_err());
    }

    #[test]
    fn run_status_nonzero_exit_is_error() {
        let mut cmd = Command::new("git");
        cmd.arg("--no-such-flag-9f2a");
        cmd.stdout(std::process::Stdio::null());
        cmd.stderr(std::process::Stdio::null());
        let res = run_status(cmd);
        match res {
            Ok(_) => assert!(false),
            Err(e) => assert_eq!(e, "non-zero exit"),
        }
    }
}
