//! Normalizer — turns one raw log line into zero or one [`LogEvent`].
//!
//! Every service writes lines of the shape `<timestamp> <LEVEL> <module>
//! <rest>`. Lines that fail this structural pre-check produce no event:
//! malformed and continuation lines are dropped, not reported. Matched lines
//! are classified by the originating service's rule table (first matching
//! rule wins) and fall back to the module token + truncated rest when no
//! rule applies.
//!
//! The function is pure and stateless: identical input yields identical
//! output, with no I/O and no current-time dependency. The only derived
//! field is the `time` display string, rendered from the parsed timestamp
//! itself.

use regex::Regex;
use std::sync::LazyLock;

use crate::rules;
use sentinel_core::{LogEvent, LogLevel, Service};

/// Structural pre-check: timestamp token, one of the four level tokens, a
/// module token, and a non-empty remainder.
static LINE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\S+)\s+(INFO|WARN|ERROR|DEBUG)\s+(\S+)\s+(.+)$")
        .expect("static pattern must compile")
});

/// Normalise one raw line from `service_name` into a [`LogEvent`].
///
/// Returns `None` when the line does not match the base shape. The caller
/// supplies the zero-based line `index` (used only for the event id) and the
/// service name, which routes the line to its rule table; an unrecognized
/// service name means no table rules match and the catch-all applies.
pub fn normalize(line: &str, index: usize, service_name: &str) -> Option<LogEvent> {
    let caps = LINE_SHAPE.captures(line)?;
    let timestamp = caps.get(1).map(|m| m.as_str())?;
    let level: LogLevel = caps.get(2)?.as_str().parse().ok()?;
    let module = caps.get(3).map(|m| m.as_str())?;
    let rest = caps.get(4).map(|m| m.as_str())?;

    let classification = rules::classify(Service::detect(service_name), module, rest);

    Some(LogEvent {
        id: format!("{service_name}-{index}"),
        timestamp: timestamp.to_string(),
        time: display_time(timestamp),
        level,
        service: service_name.to_string(),
        module: module.to_string(),
        action: classification.action,
        entity: classification.entity,
        message: classification.message,
        details: classification.details,
    })
}

/// Render the timestamp for display (`"Oct 4, 12:25"`). Falls back to the
/// raw token when it is not valid RFC 3339.
fn display_time(timestamp: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.format("%b %-d, %H:%M").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}
