//! Construction-time configuration for file loggers.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::file::FileLogger;
use crate::error::Result;
use crate::level::Level;

/// Where to write and which levels to keep.
///
/// Empty `levels` selects the default set when the logger is opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileLoggerConfig {
    pub path: PathBuf,
    #[serde(default)]
    pub levels: Vec<Level>,
}

impl FileLoggerConfig {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            levels: Vec::new(),
        }
    }

    pub fn with_levels<I: IntoIterator<Item = Level>>(mut self, levels: I) -> Self {
        self.levels = levels.into_iter().collect();
        self
    }

    pub fn open(&self) -> Result<FileLogger> {
        FileLogger::from_config(self)
    }
}
