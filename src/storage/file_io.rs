//! Line-oriented file I/O with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::TallyError;

/// Read every line of a file, returning `None` if the file doesn't exist
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Option<Vec<String>>, TallyError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .map_err(|e| TallyError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let lines = BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| TallyError::Storage(format!("Failed to read {}: {}", path.display(), e)))?;

    Ok(Some(lines))
}

/// Temp file used while writing `path`; same directory so the rename is atomic
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("data"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write lines to a file atomically (write to temp, then rename)
///
/// The target is either completely replaced or left untouched, so a failed
/// save never destroys the previously saved data.
pub fn write_lines_atomic<P, I, S>(path: P, lines: I) -> Result<(), TallyError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                TallyError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| TallyError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    let written = lines
        .into_iter()
        .try_for_each(|line| writeln!(writer, "{}", line.as_ref()))
        .and_then(|_| writer.flush())
        .and_then(|_| writer.get_ref().sync_all());

    if let Err(e) = written {
        drop(writer);
        let _ = fs::remove_file(&temp_path);
        return Err(TallyError::Storage(format!(
            "Failed to write {}: {}",
            temp_path.display(),
            e
        )));
    }
    drop(writer);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TallyError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.dat");

        assert_eq!(read_lines(&path).unwrap(), None);
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.dat");

        write_lines_atomic(&path, ["first", "second"]).unwrap();
        assert_eq!(
            read_lines(&path).unwrap(),
            Some(vec!["first".to_string(), "second".to_string()])
        );
    }

    #[test]
    fn test_write_empty_truncates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.dat");

        write_lines_atomic(&path, ["old"]).unwrap();
        write_lines_atomic(&path, Vec::<String>::new()).unwrap();
        assert_eq!(read_lines(&path).unwrap(), Some(vec![]));
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.dat");

        write_lines_atomic(&path, ["x"]).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("test.dat.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.dat");

        write_lines_atomic(&path, ["x"]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_failed_write_keeps_previous_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.dat");
        write_lines_atomic(&path, ["keep me"]).unwrap();

        // A directory squatting on the temp path makes File::create fail
        fs::create_dir(temp_dir.path().join("test.dat.tmp")).unwrap();

        assert!(write_lines_atomic(&path, ["replacement"]).is_err());
        assert_eq!(
            read_lines(&path).unwrap(),
            Some(vec!["keep me".to_string()])
        );
    }
}
