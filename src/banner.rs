use console::{measure_text_width, style};
use std::iter;

/// Prints a decorative, colorized banner warning about the history rewrite.
///
/// The banner is dynamically sized to fit the widest **visible** line of text,
/// using [`console::measure_text_width`] to ignore ANSI color codes when
/// calculating padding. It is framed with Unicode box-drawing characters
/// (`╔═╗`, `║ ║`, `╚═╝`) and uses [`console::style`] for coloring and bolding.
///
/// Borders are styled independently from the inner text so that embedded color
/// codes inside the content (the yellow warning lines) do not affect the color
/// of the box edges.
///
/// # Parameters
///
/// * `backup_dir` – Where the mirror backup will be created, shown so the
///   user knows what to expect on disk before confirming.
///
/// # Output
///
/// This function prints directly to standard output. It does not return any value.
///
/// # Notes
///
/// * Width calculation ignores ANSI codes, so padding stays correct even with
///   inline colors.
/// * Intended for interactive CLI display; not for structured logging.
///
/// # Examples
///
/// ```no_run
/// use git_history_scrub::banner::print_banner;
///
/// fn main() {
///     print_banner("../repo_backup");
/// }
/// ```
pub fn print_banner(backup_dir: &str) {
    let lines = banner_lines(backup_dir);

    let max_width = lines
        .iter()
        .map(|l| measure_text_width(l)) // ignore ANSI in content
        .max()
        .unwrap_or(0)
        + 2;

    let border = "═".repeat(max_width);
    let top = style(format!("╔{}╗", border)).blue().bold();
    let bottom = style(format!("╚{}╝", border)).blue().bold();
    let left = style("║ ").blue().bold().to_string();
    let right = style("║").blue().bold().to_string();

    println!();
    println!("{top}");
    for line in lines {
        let visible = measure_text_width(&line);
        let pad = max_width - visible; // includes the one space after left border
        // build row: [blue left] + [colored line] + [padding spaces] + [blue right]
        println!("{}{}{}{}", left, line, " ".repeat(pad - 1), right);
    }
    println!("{bottom}");
    println!();
}

/// Constructs the lines of text for the history-scrub warning banner.
///
/// Returns each banner line as a `String`, in the order they should be
/// displayed: 1) title, 2) warning, 3) backup location, 4) steps.
///
/// **Note:** The warning lines carry ANSI styling (yellow, first bold).
/// Consumers that need accurate width calculations should measure **visible**
/// width (e.g., with `console::measure_text_width`) rather than `str::len()`.
///
/// # Parameters
///
/// * `backup_dir` – The backup destination to embed in the banner text.
///
/// # Returns
///
/// A vector of `String` values (some may contain ANSI escape codes for color).
///
/// # Usage
///
/// Intended for use by [`print_banner`](crate::banner::print_banner), which
/// applies box borders and handles width/padding correctly for styled content.
fn banner_lines(backup_dir: &str) -> Vec<String> {
    let top = ["Scrub sensitive data from the entire git history", ""]
        .into_iter()
        .map(|s| s.to_string());

    let warning = vec![
        style("WARNING: this will rewrite your git history.")
            .yellow()
            .bold()
            .to_string(),
        style("Every commit id will change and the operation CANNOT be undone.")
            .yellow()
            .to_string(),
        style("Make sure you have pushed all your changes before proceeding.")
            .yellow()
            .to_string(),
    ]
    .into_iter();

    let bottom = iter::once(String::new())
        .chain(iter::once(format!(
            "A mirror backup will be created first in: {}",
            backup_dir
        )))
        .chain(
            [
                "This tool will automatically:",
                "  1) Clone a mirror backup next to the repository",
                "  2) Run `git-filter-repo --replace-text` over all commits",
            ]
            .into_iter()
            .map(|s| s.to_string()),
        );

    top.chain(warning).chain(bottom).collect()
}

#[cfg(test)]
mod tests {
    use super::banner_lines;

    #[test]
    fn banner_lines_and_width_are_correct() {
        let lines = banner_lines("../repo_backup");
        let s = lines.join("\n");

        assert!(s.contains("Scrub sensitive data from the entire git history"));
        assert!(s.contains("WARNING: this will rewrite your git history."));
        assert!(s.contains("A mirror backup will be created first in: ../repo_backup"));

        // Width logic: ensure max width is computed correctly for these lines
        let max_line = lines.iter().map(|l| l.len()).max().unwrap_or(0);

        // Sanity check: header should be the max or near-max
        assert!(max_line >= "Scrub sensitive data from the entire git history".len());
    }

    #[test]
    fn banner_names_both_steps() {
        let lines = banner_lines("../elsewhere");
        let s = lines.join("\n");

        assert!(s.contains("Clone a mirror backup"));
        assert!(s.contains("git-filter-repo"));
        assert!(s.contains("../elsewhere"));
    }
}
