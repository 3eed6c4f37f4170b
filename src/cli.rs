use crate::{banner::print_banner, git, prompt, rules};

use console::style;
use std::{
    env,
    path::{Path, PathBuf},
};

/// Fixed sibling directory that receives the mirror backup.
pub(crate) const BACKUP_DIR: &str = "../repo_backup";

/// Verifies the repository and required tooling are present.
fn verify_environment() -> Result<(), ()> {
    // Must be run from the repository root.
    if !Path::new(".git").exists() {
        eprintln!(
            "{}",
            style("Error: Not in a git repository. Run this tool from the root of your git repository.")
                .red()
                .bold()
        );
        return Err(());
    }

    // Ensure `git` is available.
    match which::which("git") {
        Ok(_) => {}
        Err(_) => {
            eprintln!("{}", style("Error: `git` not found in PATH.").red().bold());
            return Err(());
        }
    }

    // Ensure `git-filter-repo` is available.
    if !git::filter_repo_available() {
        eprintln!(
            "{}",
            style(format!(
                "Error: `{}` is not installed or not in PATH.",
                git::FILTER_REPO_BIN
            ))
            .red()
            .bold()
        );
        eprintln!("Install it with: pip install git-filter-repo");
        return Err(());
    }

    Ok(())
}

/// Creates the mirror backup, refusing to touch an existing target.
fn run_backup() -> Result<(), ()> {
    let shown = std::path::absolute(BACKUP_DIR).unwrap_or_else(|_| PathBuf::from(BACKUP_DIR));
    println!("Creating backup in {}", shown.display());

    if Path::new(BACKUP_DIR).exists() {
        eprintln!(
            "{}",
            style(format!(
                "Backup directory {} already exists. Remove or rename it first.",
                BACKUP_DIR
            ))
            .red()
            .bold()
        );
        return Err(());
    }

    match git::clone_mirror(BACKUP_DIR) {
        Ok(_) => {
            println!("{}", style("✅ Backup created successfully.").green());
            Ok(())
        }
        Err(e) => {
            eprintln!(
                "{}",
                style(format!("❌ Failed to create backup: {}", e)).red().bold()
            );
            Err(())
        }
    }
}

/// Writes the rule file, runs the rewrite, and removes the file on success.
fn run_clean() -> Result<(), ()> {
    let rules_path = Path::new(rules::RULES_FILE);

    match rules::write_rules_file(rules_path) {
        Ok(_) => {}
        Err(e) => {
            eprintln!(
                "{}",
                style(format!("Failed to write {}: {}", rules::RULES_FILE, e))
                    .red()
                    .bold()
            );
            return Err(());
        }
    }

    println!("Cleaning repository history...");
    match git::filter_repo_replace_text(rules::RULES_FILE) {
        Ok(_) => {}
        Err(e) => {
            // The rule file stays on disk so the rules can be inspected.
            eprintln!(
                "{}",
                style(format!("❌ Failed to clean repository history: {}", e))
                    .red()
                    .bold()
            );
            return Err(());
        }
    }

    match rules::remove_rules_file(rules_path) {
        Ok(_) => {}
        Err(e) => {
            eprintln!(
                "{}",
                style(format!("Failed to remove {}: {}", rules::RULES_FILE, e))
                    .red()
                    .bold()
            );
            return Err(());
        }
    }

    println!(
        "{}",
        style("✅ Repository history cleaned successfully.").green()
    );
    Ok(())
}

/// Prints the follow-up guidance shown after a successful run.
fn print_next_steps() {
    println!();
    println!(
        "{}",
        style("Repository history has been cleaned.").green().bold()
    );
    println!();
    println!("Next steps:");
    println!("1. Verify that the sensitive data has been removed from the history.");
    println!("2. Force push the changes to your remote repository with:");
    println!("   git push origin --force --all");
    println!("3. Force push the tags as well:");
    println!("   git push origin --force --tags");
    println!();
    println!(
        "{}",
        style("IMPORTANT: Inform your collaborators that they need to rebase their work")
            .yellow()
            .bold()
    );
    println!(
        "{}",
        style("or re-clone the repository after your force push.")
            .yellow()
            .bold()
    );
    println!();
    println!("Also, remember to invalidate and replace any compromised secrets/API keys!");
}

/// Determines whether a confirmation answer counts as consent.
///
/// Only a literal `yes` is accepted, compared case-insensitively and without
/// trimming; `y`, `yes please`, or a padded `" yes"` all cancel.
///
/// # Parameters
///
/// * `answer` – The raw line the user entered at the proceed prompt.
///
/// # Returns
///
/// * `true` if the answer is `yes` in any casing.
/// * `false` otherwise.
///
/// # Examples
///
/// ```ignore
/// // Example (function is crate-private):
/// // assert!(is_affirmative("YES"));
/// // assert!(!is_affirmative("y"));
/// ```
pub(crate) fn is_affirmative(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("yes")
}

/// Prints usage information to stdout.
fn print_help() {
    println!(
        "\
git-history-scrub {}

Scrub sensitive data from the entire history of a Git repository.

USAGE:
    git-history-scrub [OPTIONS]

OPTIONS:
    -h, --help       Print help information
    -V, --version    Print version information

DESCRIPTION:
    Run this tool from the root of the repository to clean. It creates a
    mirror-clone backup in a sibling directory, then rewrites every commit
    with `git-filter-repo --replace-text`, replacing known secret patterns
    (connection strings, API keys, client secrets) with placeholders.

    The operation is destructive and requires a typed `yes` to proceed.",
        env!("CARGO_PKG_VERSION")
    );
}

/// Main CLI entry point for `git-history-scrub`.
///
/// This function:
/// 1. Parses CLI flags (`--help`/`--version` only).
/// 2. Verifies the current directory is a git repository root and that
///    `git` and `git-filter-repo` are installed.
/// 3. Displays a warning banner describing the rewrite and the backup.
/// 4. Asks for confirmation; anything but a typed `yes` cancels.
/// 5. Creates the mirror backup in [`BACKUP_DIR`].
/// 6. Writes the rule file and runs the history rewrite.
/// 7. Prints force-push and secret-rotation guidance.
///
/// Returns `Ok(exit_code)` on success, or `Err(())` on error.
///
/// # Errors
///
/// Returns `Err(())` in the following cases:
/// - The current directory is not a git repository.
/// - `git` or `git-filter-repo` is not found.
/// - The prompt fails.
/// - The backup target exists or the clone fails.
/// - The rule file cannot be written or the rewrite fails.
///
/// # Exit Codes
///
/// * `0` – Successful execution (including cancellation at the prompt).
/// * Non-zero – Any failure along the way.
pub fn entry() -> Result<i32, ()> {
    // Parse command-line arguments.
    let args: Vec<String> = env::args().collect();

    // Handle --help flag.
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(0);
    }

    // Handle --version flag.
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("git-history-scrub {}", env!("CARGO_PKG_VERSION"));
        return Ok(0);
    }

    // Verify repository and tooling.
    verify_environment()?;

    // Show the warning banner before asking for consent.
    print_banner(BACKUP_DIR);

    // Confirm before touching anything.
    let mut prompter = prompt::DialoguerStringPrompter;
    let answer = match prompt::ask_proceed(&mut prompter) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{}", style(format!("Prompt error: {}", e)).red().bold());
            return Err(());
        }
    };

    if !is_affirmative(&answer) {
        println!(
            "{}",
            style("Operation cancelled. No changes made.").yellow().bold()
        );
        return Ok(0);
    }

    // Create the backup.
    run_backup()?;

    // Clean sensitive data from history.
    run_clean()?;

    // Show follow-up instructions.
    print_next_steps();

    Ok(0)
}
