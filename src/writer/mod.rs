//! Level-filtered file writer.
//!
//! One open append-only handle per logger, guarded by a mutex so each
//! accepted call appends exactly one complete line.

pub mod config;
pub mod file;
pub mod format;

pub use config::*;
pub use file::*;
pub use format::*;
