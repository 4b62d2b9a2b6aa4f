//! Rotating file writer with size-based rotation and backup retention.
//!
//! This module provides a thread-safe log sink that rotates its file when it
//! exceeds a size threshold, keeping a fixed number of backups. It plugs into
//! `tracing-subscriber` through [`MakeWriter`].

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// Before each write the current file size is checked. Once it exceeds the
/// limit, the file is renamed to `<name>.<timestamp>` and a fresh one is
/// started. Backups beyond the retention count are deleted, oldest first.
///
/// Both the search worker and the main loop log, so access goes through an
/// internal `Mutex`.
///
/// # Example
///
/// ```no_run
/// use reelfind::observability::FileWriter;
/// use std::io::Write;
///
/// let writer = FileWriter::new("/tmp/reelfind.log".into());
/// (&writer).write_all(b"started\n")?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct FileWriter {
    /// Path to the primary log file.
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    /// Lazily-initialized file handle (opens on first write).
    writer: Mutex<Option<fs::File>>,
}

impl FileWriter {
    /// Creates a writer with the default 10 MB limit and 3 backups.
    ///
    /// The file is not opened until the first write.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    #[must_use]
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            writer: Mutex::new(None),
        }
    }

    /// Appends `buf` to the file, rotating first if the size limit is exceeded.
    ///
    /// # Errors
    ///
    /// Fails on permission or disk errors, or if the lock is poisoned.
    pub fn append(&self, buf: &[u8]) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        file.write_all(buf)?;
        file.flush()?;
        drop(writer);

        Ok(())
    }

    /// Closes the handle and rotates if the file has grown past the limit.
    fn check_and_rotate(&self, writer: &mut Option<fs::File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_bytes {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    /// Renames the current file to `<name>.<timestamp>` and prunes old backups.
    fn rotate_files(&self) -> io::Result<()> {
        let stamp = chrono::Utc::now().format("%Y%m%d%H%M%S%3f");
        let mut backup_name = self.file_path.as_os_str().to_owned();
        backup_name.push(format!(".{stamp}"));
        let backup_path = PathBuf::from(backup_name);

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()
    }

    /// Deletes backups beyond the retention limit, newest kept.
    ///
    /// Individual deletion errors are ignored so cleanup continues.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?;

        let file_name = self
            .file_path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))?;
        let prefix = format!("{file_name}.");

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        // Timestamp suffixes sort lexicographically by age.
        backups.sort_by(|a, b| b.cmp(a));

        for old_backup in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl io::Write for &FileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = &'a FileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn backups(dir: &TempDir) -> Vec<PathBuf> {
        fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().path())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with("app.log."))
            })
            .collect()
    }

    #[test]
    fn appends_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        let writer = FileWriter::new(path.clone());

        (&writer).write_all(b"one\n").unwrap();
        (&writer).write_all(b"two\n").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "one\ntwo\n");
        assert!(backups(&dir).is_empty());
    }

    #[test]
    fn rotates_past_limit_and_prunes_backups() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        let writer = FileWriter::with_limits(path.clone(), 8, 2);

        for i in 0..6 {
            (&writer).write_all(format!("line number {i}\n").as_bytes()).unwrap();
            std::thread::sleep(std::time::Duration::from_millis(5));
        }

        let kept = backups(&dir);
        assert!(!kept.is_empty());
        assert!(kept.len() <= 2);
        assert_eq!(fs::read_to_string(path).unwrap(), "line number 5\n");
    }
}
