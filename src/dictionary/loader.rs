//! Dictionary loading utilities
//!
//! Provides functions to read raw word lists from files.

use std::fs;
use std::io;
use std::path::Path;

/// Load raw entries from a file, one word per line
///
/// Blank lines are skipped. Entries are not validated here; that happens
/// when a [`Dictionary`](super::Dictionary) is built from them.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use evil_hangman::dictionary::{Dictionary, loader::load_from_file};
///
/// let entries = load_from_file("data/dictionary.txt").unwrap();
/// let dictionary = Dictionary::new(&entries).unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(entries_from_text(&content))
}

/// Split text into trimmed, non-empty lines
#[must_use]
pub fn entries_from_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_from_text_skips_blank_lines() {
        let entries = entries_from_text("cat\n\n  dog  \r\ncow\n");
        assert_eq!(entries, vec!["cat", "dog", "cow"]);
    }

    #[test]
    fn entries_from_text_empty() {
        assert!(entries_from_text("").is_empty());
        assert!(entries_from_text("\n \n").is_empty());
    }

    #[test]
    fn load_from_missing_file_fails() {
        let result = load_from_file("definitely/not/a/real/dictionary.txt");
        assert!(result.is_err());
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!(
            "evil_hangman_loader_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "Apple\nbanana\n\ncherry\n").unwrap();

        let entries = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(entries, vec!["Apple", "banana", "cherry"]);
    }
}
