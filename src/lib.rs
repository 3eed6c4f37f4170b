//! # git-history-scrub
//!
//! A CLI tool to scrub sensitive data from the entire history of a Git
//! repository.
//!
//! This crate provides functionality to:
//! - Verify `git` and `git-filter-repo` are available
//! - Create a mirror-clone backup of the repository in a sibling directory
//! - Generate a replacement-rule file covering common secret patterns
//! - Run `git-filter-repo --replace-text` across all commits
//!
//! ## Usage
//!
//! ```bash
//! # From the root of the repository to clean:
//! git-history-scrub
//! ```
//!
//! The tool is interactive: it prints a warning, asks for a typed `yes`
//! before touching anything, and prints force-push guidance afterwards.
//!
//! ## Modules
//!
//! - [`cli`] - Command-line interface and main entry point
//! - [`git`] - Git and git-filter-repo command wrappers
//! - [`rules`] - Sensitive-pattern list and rule file generation
//! - [`prompt`] - User input abstractions
//! - [`banner`] - Decorative CLI warning banner

pub mod banner;
pub mod cli;
pub mod git;
pub mod prompt;
pub mod rules;
