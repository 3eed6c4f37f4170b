use std::{
    fs::{File, remove_file},
    io::Write,
    path::Path,
};

/// Name of the replacement-rule file handed to `git-filter-repo`.
///
/// Written into the current working directory immediately before the rewrite
/// and removed after a successful one. A failed rewrite leaves it in place so
/// the rules can be inspected.
pub const RULES_FILE: &str = "expressions.txt";

/// Regular expressions matching sensitive JSON key/value pairs.
///
/// These target the settings files that commonly leak into history:
/// connection strings, media-storage credentials, signing secrets, OAuth
/// client credentials, and generic API keys. `"ApiKey"` appears twice, once
/// in the media-storage group and once as a generic key; the duplicate rule
/// is harmless to filter-repo.
pub const SENSITIVE_PATTERNS: [&str; 9] = [
    // Database connection strings
    r#""DefaultConnection"\s*:\s*"[^"]*""#,
    r#""MongoConnection"\s*:\s*"[^"]*""#,
    // Media-storage credentials
    r#""CloudName"\s*:\s*"[^"]*""#,
    r#""ApiKey"\s*:\s*"[^"]*""#,
    r#""ApiSecret"\s*:\s*"[^"]*""#,
    // JWT signing secret
    r#""Secret"\s*:\s*"[^"]*""#,
    // OAuth client credentials
    r#""ClientId"\s*:\s*"[^"]*""#,
    r#""ClientSecret"\s*:\s*"[^"]*""#,
    // Generic API keys
    r#""ApiKey"\s*:\s*"[^"]*""#,
];

/// Extracts the placeholder token for a pattern.
///
/// The placeholder is the substring between the first pair of double quotes,
/// i.e. the JSON key the pattern matches. Returns an empty string if the
/// pattern contains no quoted section.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(placeholder(r#""ApiKey"\s*:\s*"[^"]*""#), "ApiKey");
/// ```
fn placeholder(pattern: &str) -> &str {
    match pattern.split('"').nth(1) {
        Some(key) => key,
        None => "",
    }
}

/// Formats one replacement directive for `git-filter-repo --replace-text`.
///
/// The directive has the form `regex:<pattern>===>#{<key>}#`, where `<key>`
/// is the placeholder derived from the pattern. filter-repo replaces every
/// historical match of `<pattern>` with the literal `#{<key>}#` marker, which
/// both removes the secret and leaves a visible trace of what was scrubbed.
///
/// # Parameters
///
/// * `pattern` - The regular expression to scrub.
///
/// # Returns
///
/// * The directive line, without a trailing newline.
pub fn rule_line(pattern: &str) -> String {
    format!("regex:{}===>#{{{}}}#", pattern, placeholder(pattern))
}

/// Builds the full rule-file body: one directive per sensitive pattern.
///
/// Lines appear in the same order as [`SENSITIVE_PATTERNS`], each terminated
/// with a newline.
pub fn rules_body() -> String {
    let mut body = String::new();
    for pattern in SENSITIVE_PATTERNS {
        body.push_str(&rule_line(pattern));
        body.push('\n');
    }
    body
}

/// Writes the replacement-rule file at `path`, truncating any prior content.
///
/// # Parameters
///
/// * `path` - Destination for the rule file.
///
/// # Returns
///
/// * `Ok(())` on successful write.
/// * `Err(String)` if the file could not be created or written.
pub fn write_rules_file(path: &Path) -> Result<(), String> {
    let mut file = match File::create(path) {
        Ok(f) => f,
        Err(e) => return Err(format!("create failed: {}", e)),
    };

    match file.write_all(rules_body().as_bytes()) {
        Ok(_) => Ok(()),
        Err(e) => Err(format!("write failed: {}", e)),
    }
}

/// Removes the replacement-rule file at `path`.
///
/// Called only after a successful rewrite; a failed rewrite deliberately
/// leaves the file on disk.
///
/// # Returns
///
/// * `Ok(())` if the file was removed.
/// * `Err(String)` if removal failed.
pub fn remove_rules_file(path: &Path) -> Result<(), String> {
    match remove_file(path) {
        Ok(_) => Ok(()),
        Err(e) => Err(format!("remove failed: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::{SENSITIVE_PATTERNS, placeholder, rule_line, rules_body, write_rules_file};
    use std::fs::read_to_string;
    use std::io::Write;

    #[test]
    fn placeholder_is_first_quoted_substring() {
        assert_eq!(placeholder(r#""ApiKey"\s*:\s*"[^"]*""#), "ApiKey");
        assert_eq!(placeholder(r#""DefaultConnection"\s*:\s*"[^"]*""#), "DefaultConnection");
    }

    #[test]
    fn placeholder_without_quotes_is_empty() {
        assert_eq!(placeholder("no quotes here"), "");
    }

    #[test]
    fn rule_line_matches_template() {
        let line = rule_line(r#""Secret"\s*:\s*"[^"]*""#);
        assert_eq!(line, r#"regex:"Secret"\s*:\s*"[^"]*"===>#{Secret}#"#);
    }

    #[test]
    fn rules_body_has_one_line_per_pattern() {
        let body = rules_body();
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), SENSITIVE_PATTERNS.len());

        for (line, pattern) in lines.iter().zip(SENSITIVE_PATTERNS.iter()) {
            assert_eq!(*line, rule_line(pattern));
            assert!(line.starts_with("regex:"));
            assert!(line.contains("===>#{"));
            assert!(line.ends_with("}#"));
        }
    }

    #[test]
    fn rules_body_keeps_duplicate_api_key_rule() {
        let body = rules_body();
        let api_key_lines = body
            .lines()
            .filter(|l| *l == rule_line(r#""ApiKey"\s*:\s*"[^"]*""#))
            .count();
        assert_eq!(api_key_lines, 2);
    }

    #[test]
    fn write_rules_file_writes_full_body() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("expressions.txt");

        write_rules_file(&path).expect("write_rules_file failed");

        let written = read_to_string(&path).expect("failed to read rules file");
        assert_eq!(written, rules_body());
    }

    #[test]
    fn write_rules_file_overwrites_prior_content() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("expressions.txt");

        let mut stale = std::fs::File::create(&path).expect("failed to create stale file");
        writeln!(stale, "stale content that must disappear").expect("failed to write stale file");
        drop(stale);

        write_rules_file(&path).expect("write_rules_file failed");

        let written = read_to_string(&path).expect("failed to read rules file");
        assert!(!written.contains("stale content"));
        assert_eq!(written, rules_body());
    }
}
