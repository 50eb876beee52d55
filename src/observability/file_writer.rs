//! Size-rotated log file used as a `tracing-subscriber` writer.
//!
//! When the log file grows beyond a threshold it is renamed with a timestamp
//! suffix and a fresh file is started. Only the newest backups are retained.

use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Default maximum file size before rotation (10 MB).
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Default number of rotated backups kept next to the live file.
pub const DEFAULT_MAX_BACKUPS: usize = 3;

/// Thread-safe rotating file writer.
///
/// The file is opened lazily on the first write. Every write checks the
/// current size first and rotates when it exceeds `max_bytes`:
///
/// 1. Rename `<file>` to `<file>.<YYYYmmddHHMMSSfff>`
/// 2. Delete the oldest backups beyond `max_backups`
/// 3. Reopen `<file>` empty
pub struct RotatingFileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    file: Mutex<Option<File>>,
}

impl RotatingFileWriter {
    /// Creates a writer with the default thresholds.
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self::with_limits(file_path, DEFAULT_MAX_BYTES, DEFAULT_MAX_BACKUPS)
    }

    #[must_use]
    pub fn with_limits(file_path: impl Into<PathBuf>, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path: file_path.into(),
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Appends `buf`, rotating beforehand if the file is over the limit.
    ///
    /// # Errors
    ///
    /// Fails on rotation, open or write errors, or if another thread panicked
    /// while holding the file lock.
    pub fn write_bytes(&self, buf: &[u8]) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        if self.needs_rotation() {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *guard = Some(file);
        }

        let file = guard
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;
        file.write_all(buf)?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|m| m.len() > self.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        let suffix = Utc::now().format("%Y%m%d%H%M%S%3f");
        let mut backup = self.file_path.clone().into_os_string();
        backup.push(format!(".{suffix}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, PathBuf::from(backup))?;
        }
        self.cleanup_old_backups()
    }

    /// Deletes backups beyond the retention limit, newest kept first.
    ///
    /// Individual deletion failures are ignored so cleanup continues.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent = match self.file_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let prefix = match self.file_path.file_name().and_then(|n| n.to_str()) {
            Some(name) => format!("{name}."),
            None => return Err(io::Error::new(io::ErrorKind::Other, "Invalid file name")),
        };

        let mut backups: Vec<PathBuf> = fs::read_dir(parent)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .and_then(|name| name.strip_prefix(&prefix))
                    .is_some_and(is_timestamp_suffix)
            })
            .collect();

        // Suffixes are fixed-width timestamps, so lexical order is age order.
        backups.sort();
        backups.reverse();

        for old in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(old);
        }
        Ok(())
    }
}

fn is_timestamp_suffix(suffix: &str) -> bool {
    !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit())
}

impl Write for &RotatingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for RotatingFileWriter {
    type Writer = &'a RotatingFileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self
    }
}

impl std::fmt::Debug for RotatingFileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backups(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(std::result::Result::ok)
            .filter(|e| {
                e.file_name()
                    .to_string_lossy()
                    .strip_prefix("pagewise.log.")
                    .is_some_and(is_timestamp_suffix)
            })
            .count()
    }

    #[test]
    fn test_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pagewise.log");
        let writer = RotatingFileWriter::new(&path);

        writer.write_bytes(b"first\n").unwrap();
        writer.write_bytes(b"second\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
        assert_eq!(backups(dir.path()), 0);
    }

    #[test]
    fn test_rotates_when_over_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pagewise.log");
        let writer = RotatingFileWriter::with_limits(&path, 8, 3);

        writer.write_bytes(b"0123456789\n").unwrap();
        writer.write_bytes(b"next\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "next\n");
        assert_eq!(backups(dir.path()), 1);
    }

    #[test]
    fn test_keeps_limited_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pagewise.log");
        let writer = RotatingFileWriter::with_limits(&path, 1, 2);

        for _ in 0..6 {
            writer.write_bytes(b"line\n").unwrap();
            std::thread::sleep(std::time::Duration::from_millis(5));
        }

        assert_eq!(backups(dir.path()), 2);
    }

    #[test]
    fn test_cleanup_ignores_unrelated_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pagewise.log");
        let unrelated = dir.path().join("pagewise.log.bak");
        fs::write(&unrelated, "keep me").unwrap();
        let writer = RotatingFileWriter::with_limits(&path, 1, 1);

        for _ in 0..4 {
            writer.write_bytes(b"line\n").unwrap();
            std::thread::sleep(std::time::Duration::from_millis(5));
        }

        assert_eq!(backups(dir.path()), 1);
        assert_eq!(fs::read_to_string(&unrelated).unwrap(), "keep me");
    }

    #[test]
    fn test_timestamp_suffix() {
        assert!(is_timestamp_suffix("20260101120000123"));
        assert!(!is_timestamp_suffix("bak"));
        assert!(!is_timestamp_suffix(""));
    }
}
