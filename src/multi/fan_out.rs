//! Composite logger that forwards every call to its members in order.

use std::fmt;
use std::sync::Arc;

use crate::context::Value;
use crate::error::Result;
use crate::level::Level;
use crate::logger::Logger;

/// Forwards each call to every member, stopping at the first failure.
///
/// Delivery is fail-fast: when member `i` errors, members before it have
/// already logged and members after it are never called. Callers must treat
/// any error as possible partial delivery.
///
/// Members are shared, not owned. Closing the underlying file loggers stays
/// with whoever opened them. The member list is fixed at construction, and
/// the composite adds no locking of its own.
#[derive(Clone, Default)]
pub struct MultiLogger {
    loggers: Vec<Arc<dyn Logger>>,
}

impl MultiLogger {
    pub fn new(loggers: Vec<Arc<dyn Logger>>) -> Self {
        Self { loggers }
    }

    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }
}

impl FromIterator<Arc<dyn Logger>> for MultiLogger {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Logger>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Debug for MultiLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiLogger")
            .field("loggers", &self.loggers.len())
            .finish()
    }
}

impl Logger for MultiLogger {
    fn log(&self, level: Level, message: &str, context: &[Value]) -> Result<()> {
        for logger in &self.loggers {
            logger.log(level, message, context)?;
        }
        Ok(())
    }
}
