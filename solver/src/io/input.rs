//! Input-file resolution and reading.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Path of the input file for `day` under `inputs_dir`.
pub fn input_path(inputs_dir: &Path, day: u8) -> PathBuf {
    inputs_dir.join(format!("day{day:02}.txt"))
}

/// Read an input file to a string.
///
/// Returns `Ok(None)` when the file does not exist, so callers can
/// distinguish an unsolved day from a read failure.
pub fn read_input(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents =
        fs::read_to_string(path).with_context(|| format!("read input {}", path.display()))?;
    Ok(Some(contents))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_path_zero_pads_day() {
        assert_eq!(
            input_path(Path::new("inputs"), 6),
            PathBuf::from("inputs/day06.txt")
        );
    }

    #[test]
    fn read_missing_input_returns_none() {
        let temp = tempfile::tempdir().expect("tempdir");
        let contents = read_input(&temp.path().join("day01.txt")).expect("read");
        assert_eq!(contents, None);
    }

    #[test]
    fn read_existing_input_returns_contents() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("day01.txt");
        fs::write(&path, "1 2\n").expect("write");
        let contents = read_input(&path).expect("read");
        assert_eq!(contents.as_deref(), Some("1 2\n"));
    }
}
