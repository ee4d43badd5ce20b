//! Word list loading utilities
//!
//! Loads word lists from line-oriented text files or embedded constants.

use super::WordList;
use crate::core::Word;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Failure to produce a usable word list
#[derive(Debug)]
pub enum LoadError {
    /// The word file does not exist
    NotFound(PathBuf),
    /// The word file exists but could not be read
    Unreadable { path: PathBuf, source: io::Error },
    /// The word file contains no valid words
    NoWords(PathBuf),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "The file '{}' was not found", path.display())
            }
            Self::Unreadable { path, .. } => {
                write!(f, "The file '{}' could not be read", path.display())
            }
            Self::NoWords(path) => {
                write!(f, "The file '{}' contains no usable words", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Load words from a file
///
/// Each line is trimmed; blank lines and entries that are not purely
/// alphabetic are skipped. Words are lowercased.
///
/// # Errors
///
/// Returns a `LoadError` if the file is missing or unreadable, or if no valid
/// word remains after filtering.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::load_from_file;
///
/// let words = load_from_file("data/hangman_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound(path.to_path_buf())
        } else {
            LoadError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let words = parse_lines(&content);
    if words.is_empty() {
        return Err(LoadError::NoWords(path.to_path_buf()));
    }

    Ok(words)
}

fn parse_lines(content: &str) -> WordList {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to a word list
///
/// # Examples
/// ```
/// use hangman::wordlists::{BUILTIN, words_from_slice};
///
/// let words = words_from_slice(BUILTIN);
/// assert_eq!(words.len(), BUILTIN.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> WordList {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "hangman_loader_{}_{name}.txt",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn parse_lines_trims_and_skips_blanks() {
        let words = parse_lines("  apple \n\n\t\ncastle\r\n   \nAdventure\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["apple", "castle", "adventure"]);
    }

    #[test]
    fn parse_lines_skips_invalid_entries() {
        let words = parse_lines("apple\nr2d2\nice cream\ntiger\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["apple", "tiger"]);
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = temp_file("reads", "cat\n\nbanana\n  elephant  \n");
        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["cat", "banana", "elephant"]);
    }

    #[test]
    fn load_from_missing_file_is_not_found() {
        let path = std::env::temp_dir().join("hangman_loader_definitely_missing.txt");
        let err = load_from_file(&path).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(p) if p == path));
    }

    #[test]
    fn load_from_directory_is_unreadable() {
        let dir = std::env::temp_dir();
        let err = load_from_file(&dir).unwrap_err();

        assert!(matches!(&err, LoadError::Unreadable { path, .. } if *path == dir));
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("could not be read"));
    }

    #[test]
    fn load_from_blank_file_has_no_words() {
        let path = temp_file("blank", "\n   \n\t\n");
        let err = load_from_file(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(matches!(err, LoadError::NoWords(_)));
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["apple", "Castle", "x"]);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["apple", "castle", "x"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["apple", "", "b4d", "tiger"]);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn not_found_message_names_file() {
        let err = LoadError::NotFound(PathBuf::from("hangman_words.txt"));
        assert_eq!(
            err.to_string(),
            "The file 'hangman_words.txt' was not found"
        );
    }
}
