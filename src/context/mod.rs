//! Structured context attached to log calls.
//!
//! A log call carries `&[Value]`; a non-empty slice is written after the
//! message as one compact JSON array.

mod serializer;
pub mod value;

pub use value::*;
