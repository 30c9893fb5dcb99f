//! Severity levels.
//!
//! Provides the eight fixed severities and the per-logger enabled set.
//! Enablement is set membership; levels are never compared numerically.

pub mod set;
pub mod severity;

pub use set::*;
pub use severity::*;
