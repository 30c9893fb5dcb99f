//! Log line formatting.
//!
//! `[<rfc3339>] [<level>] <message>[ <compact json context>]\n`

use chrono::{Local, SecondsFormat};

use crate::context::Value;
use crate::error::Result;
use crate::level::Level;

/// Current local time, RFC 3339 at second precision (`Z` when UTC).
pub fn timestamp() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Format one complete line, newline included.
///
/// Context encoding happens before anything is handed back, so a failed
/// encode never yields a partial line.
pub fn format_entry(
    timestamp: &str,
    level: Level,
    message: &str,
    context: &[Value],
) -> Result<Vec<u8>> {
    let mut line = format!("[{}] [{}] {}", timestamp, level, message).into_bytes();

    if !context.is_empty() {
        line.push(b' ');
        serde_json::to_writer(&mut line, context)?;
    }

    line.push(b'\n');
    Ok(line)
}
