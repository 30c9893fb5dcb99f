//! fanlog-core - Level-filtered file logging with fan-out
//!
//! Writes leveled log lines with optional structured context to files, and
//! composes loggers so one call reaches several destinations. The crate
//! prioritizes:
//!
//! 1. **Whole lines** - each accepted call appends one complete line or nothing
//! 2. **Explicit errors** - open, write and encoding failures are returned, never swallowed
//! 3. **Thread safety** - one mutex per file, no interleaved output
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `level` - Severity levels and enabled-level sets
//! - `context` - Recursive context values and their JSON encoding
//! - `logger` - The `Logger` contract with per-severity helpers
//! - `writer` - File-backed logger, line format, configuration
//! - `multi` - Fail-fast fan-out composite
//!
//! ```no_run
//! use std::sync::Arc;
//! use fanlog_core::{FileLogger, Level, Logger, MultiLogger, Value};
//!
//! let errors = Arc::new(FileLogger::open("errors.log", [])?);
//! let audit = Arc::new(FileLogger::open("audit.log", [Level::Info, Level::Notice])?);
//! let log = MultiLogger::new(vec![errors.clone(), audit.clone()]);
//!
//! log.info("User logged in", &[Value::map([("user", "john_doe")])])?;
//!
//! errors.close()?;
//! audit.close()?;
//! # Ok::<(), fanlog_core::Error>(())
//! ```

pub mod context;
pub mod error;
pub mod level;
pub mod logger;
pub mod multi;
pub mod writer;

pub use context::Value;
pub use error::{Error, Result};
pub use level::{Level, LevelSet, ParseLevelError};
pub use logger::Logger;
pub use multi::MultiLogger;
pub use writer::{FileLogger, FileLoggerConfig};
