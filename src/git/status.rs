//! Parsing of `git diff --name-status` and `git status --short` output.

/// A raw `(status code, path)` pair as printed by `--name-status`.
pub type NameStatusEntry = (String, String);

/// Parse `--name-status` output into raw entries.
///
/// Fields are TAB-separated. For renames and copies the first path (the
/// source) is kept. Lines without a path yield an empty path.
pub fn parse_name_status(output: &str) -> Vec<NameStatusEntry> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let mut fields = line.split('\t');
            let code = fields.next().unwrap_or_default().trim().to_string();
            let path = fields.next().unwrap_or_default().to_string();
            (code, path)
        })
        .collect()
}

/// Split `git status --short` output into non-empty lines.
pub fn parse_short_status(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(String::from)
        .collect()
}
