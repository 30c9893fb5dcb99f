//! The logging contract shared by file writers and composites.
//!
//! Implementors provide `log`; the per-severity helpers are provided once
//! here in terms of it.

use std::sync::Arc;

use crate::context::Value;
use crate::error::Result;
use crate::level::Level;

/// A destination for leveled log entries.
///
/// Object-safe so composites can hold `Arc<dyn Logger>` members of mixed
/// types, including other composites.
pub trait Logger: Send + Sync {
    /// Log with an arbitrary level.
    fn log(&self, level: Level, message: &str, context: &[Value]) -> Result<()>;

    /// System is unusable.
    fn emergency(&self, message: &str, context: &[Value]) -> Result<()> {
        self.log(Level::Emergency, message, context)
    }

    /// Action must be taken immediately.
    fn alert(&self, message: &str, context: &[Value]) -> Result<()> {
        self.log(Level::Alert, message, context)
    }

    /// Critical conditions.
    fn critical(&self, message: &str, context: &[Value]) -> Result<()> {
        self.log(Level::Critical, message, context)
    }

    /// Runtime errors that do not require immediate action.
    fn error(&self, message: &str, context: &[Value]) -> Result<()> {
        self.log(Level::Error, message, context)
    }

    /// Exceptional occurrences that are not errors.
    fn warning(&self, message: &str, context: &[Value]) -> Result<()> {
        self.log(Level::Warning, message, context)
    }

    /// Normal but significant events.
    fn notice(&self, message: &str, context: &[Value]) -> Result<()> {
        self.log(Level::Notice, message, context)
    }

    /// Interesting events.
    fn info(&self, message: &str, context: &[Value]) -> Result<()> {
        self.log(Level::Info, message, context)
    }

    /// Detailed debug information.
    fn debug(&self, message: &str, context: &[Value]) -> Result<()> {
        self.log(Level::Debug, message, context)
    }
}

impl<L: Logger + ?Sized> Logger for &L {
    fn log(&self, level: Level, message: &str, context: &[Value]) -> Result<()> {
        (**self).log(level, message, context)
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn log(&self, level: Level, message: &str, context: &[Value]) -> Result<()> {
        (**self).log(level, message, context)
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn log(&self, level: Level, message: &str, context: &[Value]) -> Result<()> {
        (**self).log(level, message, context)
    }
}
