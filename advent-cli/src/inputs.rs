//! Local store for puzzle input files
//!
//! Inputs live in a flat directory as `{year}_day{DD}.txt`. There is no
//! fetching: a missing file stays missing until the user drops it in.

use crate::error::StoreError;
use std::fs;
use std::path::PathBuf;

/// File-based store for puzzle inputs
pub struct InputStore {
    dir: PathBuf,
}

impl InputStore {
    /// Create a store rooted at the given directory
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Get the expected input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join(format!("{}_day{:02}.txt", year, day))
    }

    /// Check if an input file is present
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).exists()
    }

    /// Read the input for a year/day, or None if the file does not exist
    pub fn get(&self, year: u16, day: u8) -> Result<Option<String>, StoreError> {
        let path = self.input_path(year, day);
        if path.exists() {
            Ok(Some(fs::read_to_string(&path)?))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let store = InputStore::new(PathBuf::from("/inputs"));
        assert_eq!(
            store.input_path(2021, 4),
            PathBuf::from("/inputs/2021_day04.txt")
        );
        assert_eq!(
            store.input_path(2021, 25),
            PathBuf::from("/inputs/2021_day25.txt")
        );
    }

    #[test]
    fn test_missing_input_is_none() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2021, 1));
        assert!(store.get(2021, 1).unwrap().is_none());
    }

    #[test]
    fn test_present_input_is_read() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        let input = "199\n200\n208\n";
        std::fs::write(store.input_path(2021, 1), input).unwrap();

        assert!(store.contains(2021, 1));
        assert_eq!(store.get(2021, 1).unwrap(), Some(input.to_string()));
    }
}
