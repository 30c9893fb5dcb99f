//! Fan-out composition of loggers.

pub mod fan_out;

pub use fan_out::*;
