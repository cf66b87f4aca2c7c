//! Blocking folder prompts for `--interactive`

use console::Term;
use std::io;
use std::path::PathBuf;

/// Ask for a folder on the terminal. An empty answer means "not selected".
pub fn prompt_for_folder(term: &Term, label: &str) -> io::Result<Option<PathBuf>> {
    term.write_str(&format!("{label} folder: "))?;
    let answer = term.read_line()?;
    Ok(parse_folder_input(&answer))
}

/// Normalize a typed or drag-and-dropped path.
///
/// Surrounding whitespace and one pair of matching quotes are stripped.
pub fn parse_folder_input(input: &str) -> Option<PathBuf> {
    let trimmed = input.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| {
            trimmed
                .strip_prefix(*q)
                .and_then(|rest| rest.strip_suffix(*q))
        })
        .unwrap_or(trimmed)
        .trim();

    if unquoted.is_empty() {
        None
    } else {
        Some(PathBuf::from(unquoted))
    }
}
