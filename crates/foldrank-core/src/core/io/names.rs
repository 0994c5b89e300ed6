use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Reads one name per line.
///
/// Surrounding whitespace (including a trailing `\r`) is trimmed and blank lines are
/// skipped. Duplicates are kept; each line is ranked independently.
pub fn read_names(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let name = line.trim();
        if !name.is_empty() {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

pub fn read_names_from_path<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    read_names(BufReader::new(file))
}
