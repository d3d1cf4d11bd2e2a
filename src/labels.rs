use std::fs;
use std::io;
use std::path::Path;

/// Split a comma-separated label list; whitespace around names is trimmed
/// and empty entries are skipped.
pub fn parse_labels(spec: &str) -> Vec<String> {
    spec.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read one label per line. Blank lines and `;` comment lines are skipped so
/// the file can live next to the asm source it feeds.
pub fn read_labels_file(path: &Path) -> io::Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(';'))
        .map(str::to_string)
        .collect())
}
