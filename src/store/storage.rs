use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Abstraction over the single backing file, so store logic can be unit
/// tested without a real filesystem.
pub trait Storage {
    /// Full content of the backing file, or `None` if it does not exist
    /// yet.
    fn read(&self) -> io::Result<Option<String>>;

    /// Replace the backing file content in full.
    fn write(&mut self, content: &str) -> io::Result<()>;

    /// Name of the backing file, for user feedback.
    fn describe(&self) -> String;
}

/// File-backed storage. The file is opened, fully read or written, and
/// closed within each call; no handle is held across operations.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl Storage for FileStorage {
    fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, content: &str) -> io::Result<()> {
        let tmp_path = self.tmp_path();

        // Write to a temp file, then atomically rename over the target.
        fs::write(&tmp_path, content)?;

        if let Err(e) = fs::File::open(&tmp_path).and_then(|file| file.sync_all()) {
            warn!(error = %e, "Failed to sync temp file to disk");
        }

        fs::rename(&tmp_path, &self.path)?;

        debug!(path = %self.path.display(), "Atomic write completed");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().join("tasks.txt"));
        assert_eq!(storage.read().unwrap(), None);
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(dir.path().join("tasks.txt"));
        storage.write("hello").unwrap();
        assert_eq!(storage.read().unwrap().as_deref(), Some("hello"));
    }

    #[test]
    fn test_write_leaves_no_temp_file_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.txt");
        let mut storage = FileStorage::new(&path);
        storage.write("content").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("tasks.txt")]);
    }

    #[test]
    fn test_read_non_utf8_is_err() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.txt");
        fs::write(&path, [0xffu8, 0xfe, 0x00]).unwrap();

        let storage = FileStorage::new(&path);
        assert!(storage.read().is_err());
    }
}
