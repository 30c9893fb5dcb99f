//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A fresh directory and a not-yet-created log path inside it.
pub fn scratch_log(name: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    (dir, path)
}

pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("read log file")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Parsed `[<timestamp>] [<level>] <rest>` line.
#[derive(Debug)]
pub struct ParsedLine<'a> {
    pub timestamp: &'a str,
    pub level: &'a str,
    pub rest: &'a str,
}

pub fn parse_line(line: &str) -> Option<ParsedLine<'_>> {
    let line = line.strip_prefix('[')?;
    let (timestamp, line) = line.split_once("] [")?;
    let (level, rest) = line.split_once("] ")?;
    Some(ParsedLine {
        timestamp,
        level,
        rest,
    })
}
