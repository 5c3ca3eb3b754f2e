use chrono::{DateTime, TimeDelta, Utc};
use std::fs::{File, OpenOptions};
use std::io;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

const MAX_AGE_DAYS: i64 = 7;

/// Append-only log that is emptied once its oldest line is a week old.
#[derive(Debug, Clone)]
pub struct LogFile {
    path: PathBuf,
    max_age: TimeDelta,
}

impl LogFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            max_age: TimeDelta::days(MAX_AGE_DAYS),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn open_append(&self) -> io::Result<File> {
        OpenOptions::new().create(true).append(true).open(&self.path)
    }

    /// Empties the file in place when it is stale. Writers holding an append
    /// handle keep working and continue from the new end.
    pub fn truncate_if_stale(&self, now: DateTime<Utc>) -> io::Result<bool> {
        let Some(oldest) = self.oldest_entry()? else {
            return Ok(false);
        };
        if now.signed_duration_since(oldest) < self.max_age {
            return Ok(false);
        }
        OpenOptions::new().write(true).open(&self.path)?.set_len(0)?;
        Ok(true)
    }

    /// Timestamp leading the first line, else the modification time.
    fn oldest_entry(&self) -> io::Result<Option<DateTime<Utc>>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        let metadata = file.metadata()?;
        if metadata.len() == 0 {
            return Ok(None);
        }

        let mut first_line = String::new();
        BufReader::new(file).read_line(&mut first_line)?;
        let stamp = first_line
            .split_whitespace()
            .next()
            .and_then(|word| DateTime::parse_from_rfc3339(word).ok())
            .map(|stamp| stamp.with_timezone(&Utc));
        match stamp {
            Some(stamp) => Ok(Some(stamp)),
            None => Ok(Some(metadata.modified()?.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;

    fn log_with(content: &str) -> (tempfile::TempDir, LogFile) {
        let dir = tempfile::tempdir().unwrap();
        let log = LogFile::new(dir.path().join("bot.log"));
        fs::write(log.path(), content).unwrap();
        (dir, log)
    }

    fn at(stamp: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(stamp).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn keeps_young_log() {
        let (_dir, log) = log_with("2025-06-01T10:00:00.000000Z  INFO started\n");
        assert!(!log.truncate_if_stale(at("2025-06-07T10:00:00Z")).unwrap());
        assert!(!fs::read_to_string(log.path()).unwrap().is_empty());
    }

    #[test]
    fn truncates_week_old_log() {
        let (_dir, log) = log_with("2025-06-01T10:00:00.000000Z  INFO started\n");
        assert!(log.truncate_if_stale(at("2025-06-08T10:00:00Z")).unwrap());
        assert_eq!(fs::read_to_string(log.path()).unwrap(), "");
    }

    #[test]
    fn appender_continues_after_truncation() {
        let (_dir, log) = log_with("2025-06-01T10:00:00.000000Z  INFO started\n");
        let mut appender = log.open_append().unwrap();
        assert!(log.truncate_if_stale(at("2025-07-01T00:00:00Z")).unwrap());
        writeln!(appender, "fresh").unwrap();
        assert_eq!(fs::read_to_string(log.path()).unwrap(), "fresh\n");
    }

    #[test]
    fn missing_or_empty_log_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let missing = LogFile::new(dir.path().join("none.log"));
        assert!(!missing.truncate_if_stale(Utc::now()).unwrap());
        let (_dir, empty) = log_with("");
        assert!(!empty.truncate_if_stale(Utc::now()).unwrap());
    }

    #[test]
    fn falls_back_to_modification_time() {
        let (_dir, log) = log_with("no timestamp here\n");
        assert!(!log.truncate_if_stale(Utc::now()).unwrap());
        assert!(log
            .truncate_if_stale(Utc::now() + TimeDelta::days(8))
            .unwrap());
    }
}
