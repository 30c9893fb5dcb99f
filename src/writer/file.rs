//! File-backed logger.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::config::FileLoggerConfig;
use super::format::{format_entry, timestamp};
use crate::context::Value;
use crate::error::{Error, Result};
use crate::level::{Level, LevelSet};
use crate::logger::Logger;

/// Appends one line per enabled log call to a file it owns.
///
/// Calls are serialized by an internal mutex: lines never interleave, and
/// they land in lock-acquisition order. After [`FileLogger::close`] every
/// call fails with [`Error::Closed`], whatever its level.
///
/// The message is written verbatim. A message containing `\n` spans several
/// file lines, and text after the newline can look like a separate entry;
/// callers logging untrusted input should strip or escape newlines first.
/// Context values are JSON-encoded and always stay on the entry's line.
#[derive(Debug)]
pub struct FileLogger {
    path: PathBuf,
    levels: LevelSet,
    file: Mutex<Option<File>>,
}

impl FileLogger {
    /// Open `path` for appending, creating it (mode 0644) if missing.
    ///
    /// An empty `levels` enables the default set
    /// (emergency, alert, critical, error, warning).
    pub fn open<P, I>(path: P, levels: I) -> Result<Self>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = Level>,
    {
        let path = path.as_ref().to_path_buf();
        let file = open_append(&path).map_err(|source| Error::Open {
            path: path.clone(),
            source,
        })?;
        let levels = LevelSet::from_levels(levels);

        log::debug!(
            "LOG_FILE_OPENED path={} levels={:?}",
            path.display(),
            levels
        );

        Ok(Self {
            path,
            levels,
            file: Mutex::new(Some(file)),
        })
    }

    pub fn from_config(config: &FileLoggerConfig) -> Result<Self> {
        Self::open(&config.path, config.levels.iter().copied())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn levels(&self) -> LevelSet {
        self.levels
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        self.levels.contains(level)
    }

    pub fn is_closed(&self) -> bool {
        self.file.lock().is_none()
    }

    /// Release the file handle.
    ///
    /// Writes are unbuffered, so there is nothing to flush. The handle is
    /// dropped, and an error from the underlying close(2) is not reported.
    /// Closing an already closed logger is a no-op returning `Ok(())`.
    pub fn close(&self) -> Result<()> {
        let Some(file) = self.file.lock().take() else {
            return Ok(());
        };
        drop(file);

        log::debug!("LOG_FILE_CLOSED path={}", self.path.display());
        Ok(())
    }
}

impl Logger for FileLogger {
    fn log(&self, level: Level, message: &str, context: &[Value]) -> Result<()> {
        let mut guard = self.file.lock();
        let file = guard.as_mut().ok_or(Error::Closed)?;

        if !self.levels.contains(level) {
            return Ok(());
        }

        let line = format_entry(&timestamp(), level, message, context)?;
        file.write_all(&line).map_err(Error::Write)
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.append(true).create(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    options.open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn init_test_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn read_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn scratch() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        (dir, path)
    }

    #[test]
    fn test_open_creates_file() {
        init_test_logging();
        let (_dir, path) = scratch();

        let logger = FileLogger::open(&path, [Level::Info, Level::Error]).unwrap();
        assert!(path.exists());
        assert_eq!(logger.path(), path.as_path());
        assert!(logger.is_enabled(Level::Info));
        assert!(!logger.is_enabled(Level::Debug));
        assert!(!logger.is_closed());
    }

    #[test]
    fn test_open_appends_to_existing_file() {
        let (_dir, path) = scratch();
        fs::write(&path, "existing line\n").unwrap();

        let logger = FileLogger::open(&path, [Level::Info]).unwrap();
        logger.info("appended", &[]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("existing line\n"));
        assert!(content.ends_with("] [info] appended\n"));
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let (_dir, path) = scratch();
        FileLogger::open(&path, []).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode & !0o644, 0, "mode {:o} exceeds 0644", mode);
        assert_eq!(mode & 0o600, 0o600);
    }

    #[test]
    fn test_enabled_and_disabled_levels() {
        let (_dir, path) = scratch();
        let logger = FileLogger::open(&path, [Level::Info, Level::Error]).unwrap();

        logger.log(Level::Info, "Info message", &[]).unwrap();
        logger.log(Level::Debug, "Debug message", &[]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Info message"));
        assert!(!content.contains("Debug message"));
    }

    #[test]
    fn test_default_levels() {
        let (_dir, path) = scratch();
        let logger = FileLogger::open(&path, []).unwrap();
        assert_eq!(logger.levels(), LevelSet::default_enabled());

        for level in Level::ALL {
            logger.log(level, "User logged in", &[]).unwrap();
        }

        let content = fs::read_to_string(&path).unwrap();
        for level in ["emergency", "alert", "critical", "error", "warning"] {
            assert!(content.contains(&format!("[{}]", level)), "{} missing", level);
        }
        for level in ["notice", "info", "debug"] {
            assert!(!content.contains(&format!("[{}]", level)), "{} written", level);
        }
        assert_eq!(content.lines().count(), 5);
    }

    #[test]
    fn test_all_helpers_write_their_level() {
        let (_dir, path) = scratch();
        let logger = FileLogger::open(&path, Level::ALL).unwrap();
        let ctx = [Value::map([("user", "john_doe")])];

        logger.emergency("m", &ctx).unwrap();
        logger.alert("m", &ctx).unwrap();
        logger.critical("m", &ctx).unwrap();
        logger.error("m", &ctx).unwrap();
        logger.warning("m", &ctx).unwrap();
        logger.notice("m", &ctx).unwrap();
        logger.info("m", &ctx).unwrap();
        logger.debug("m", &ctx).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let written: Vec<&str> = content
            .lines()
            .map(|line| line.split("] [").nth(1).unwrap().split(']').next().unwrap())
            .collect();
        let expected: Vec<&str> = Level::ALL.iter().map(Level::as_str).collect();
        assert_eq!(written, expected);
        assert!(content
            .lines()
            .all(|line| line.ends_with(" m [{\"user\":\"john_doe\"}]")));
    }

    #[test]
    fn test_serialization_failure_writes_nothing() {
        let (_dir, path) = scratch();
        let logger = FileLogger::open(&path, [Level::Info]).unwrap();
        logger.info("before", &[]).unwrap();
        let before = fs::read(&path).unwrap();

        let ctx = [Value::map([("ratio", Value::Float(f64::INFINITY))])];
        let err = logger.info("Test log message", &ctx).unwrap_err();

        assert!(err.is_serialization());
        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[test]
    fn test_converted_non_finite_context_writes_nothing() {
        #[derive(serde::Serialize)]
        struct Metrics {
            ratio: f64,
        }

        let (_dir, path) = scratch();
        let logger = FileLogger::open(&path, [Level::Info]).unwrap();
        logger.info("before", &[]).unwrap();
        let before = fs::read(&path).unwrap();

        let err = Value::from_serialize(&Metrics { ratio: f64::NAN })
            .and_then(|ctx| logger.info("m", &[ctx]))
            .unwrap_err();

        assert!(err.is_serialization());
        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[test]
    fn test_write_after_close_fails_at_every_level() {
        init_test_logging();
        let (_dir, path) = scratch();
        let logger = FileLogger::open(&path, [Level::Info]).unwrap();
        logger.info("before close", &[]).unwrap();
        let before = fs::read(&path).unwrap();

        logger.close().unwrap();
        assert!(logger.is_closed());

        for level in Level::ALL {
            let err = logger.log(level, "Message after close", &[]).unwrap_err();
            assert!(err.is_io(), "{:?}", err);
            assert!(matches!(err, Error::Closed));
        }
        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_failed_write_is_io_error() {
        let logger = FileLogger::open("/dev/full", [Level::Info]).unwrap();

        let err = logger.info("no space left", &[]).unwrap_err();
        assert!(matches!(err, Error::Write(_)), "{:?}", err);
        assert!(err.is_io());
        assert!(err.to_string().starts_with("failed to write log entry"));

        // still open: a later call attempts the write again and fails the same way
        assert!(!logger.is_closed());
        assert!(matches!(logger.info("again", &[]).unwrap_err(), Error::Write(_)));
    }

    #[test]
    fn test_message_newlines_are_written_verbatim() {
        let (_dir, path) = scratch();
        let logger = FileLogger::open(&path, [Level::Info]).unwrap();

        logger
            .info("line1\n[2024-01-01T00:00:00Z] [emergency] forged", &[])
            .unwrap();
        logger
            .info("with context", &[Value::from("multi\nline")])
            .unwrap();

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("] [info] line1"));
        assert_eq!(lines[1], "[2024-01-01T00:00:00Z] [emergency] forged");
        assert!(lines[2].ends_with("] [info] with context [\"multi\\nline\"]"));
    }

    #[test]
    fn test_close_twice_is_ok() {
        let (_dir, path) = scratch();
        let logger = FileLogger::open(&path, []).unwrap();
        logger.close().unwrap();
        logger.close().unwrap();
        assert!(logger.is_closed());
    }

    #[test]
    fn test_open_failure() {
        let err = FileLogger::open("/path/to/nonexistent/file.log", [Level::Info]).unwrap_err();
        assert!(err.is_io());
        assert!(matches!(err, Error::Open { .. }));
        assert!(err.to_string().contains("failed to open log file"));
    }

    #[test]
    fn test_from_config() {
        let (_dir, path) = scratch();
        let config = FileLoggerConfig::new(&path).with_levels([Level::Notice]);
        let logger = FileLogger::from_config(&config).unwrap();

        logger.notice("configured", &[]).unwrap();
        logger.warning("filtered", &[]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("[notice] configured"));
    }
}
