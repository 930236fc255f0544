//! Core types for sentinel-core.
//!
//! This module defines the fundamental data structures shared across all
//! pipeline layers: the normalised [`LogEvent`], its [`LogLevel`], the
//! [`Service`] discriminant, and the [`RawLine`] unit emitted by feeds.

use serde::{Deserialize, Serialize};

/// A normalised log event produced by the normalizer from one raw line.
///
/// `entity` and `details` are optional; every other field is populated on
/// every event. Events are produced once per line and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Caller-assigned identity: `"{service name}-{line index}"`.
    pub id: String,
    /// ISO-8601 timestamp taken verbatim from the line. Source of truth
    /// for ordering.
    pub timestamp: String,
    /// Display rendering of `timestamp` (`"Oct 4, 12:25"`). Derived, not
    /// authoritative; falls back to the raw timestamp when unparseable.
    pub time: String,
    /// Level token parsed from the line. No inference is applied.
    pub level: LogLevel,
    /// Logical service name supplied by the caller, not parsed from the line.
    pub service: String,
    /// Raw module/subsystem token from the line.
    pub module: String,
    /// Classification label assigned by the first matching rule, or the
    /// module token when no rule matched.
    pub action: String,
    /// Business identifier extracted from the line, when one was present
    /// (container number, vessel name, IMO number, application number).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    /// Human-readable description, extracted from a quoted field or
    /// synthesized by the matching rule.
    pub message: String,
    /// Auxiliary `key=value` parts not promoted to top-level fields,
    /// comma-joined (`"status=200, latency_ms=41"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Log severity level. Only the four tokens the port services emit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Debug => write!(f, "DEBUG"),
        }
    }
}

/// Error returned when a level token is not one of the four known levels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized log level: {0:?}")]
pub struct ParseLevelError(pub String);

impl std::str::FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ERROR" => Ok(LogLevel::Error),
            "WARN" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            other => Err(ParseLevelError(other.to_string())),
        }
    }
}

/// One of the six upstream port-operations services whose logs use distinct
/// textual conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    ApiEvent,
    Edi,
    VesselAdvice,
    Container,
    VesselRegistry,
    Berth,
}

impl Service {
    /// All known services, in detection order.
    pub const ALL: [Service; 6] = [
        Service::ApiEvent,
        Service::Edi,
        Service::VesselAdvice,
        Service::Container,
        Service::VesselRegistry,
        Service::Berth,
    ];

    /// Route a caller-supplied service name to its rule table.
    ///
    /// Matching is by substring, so `"API Event Service"` and `"API Event"`
    /// both route to [`Service::ApiEvent`]. An unrecognized name returns
    /// `None`; the normalizer treats that as an empty rule table and every
    /// line falls through to the catch-all.
    pub fn detect(name: &str) -> Option<Service> {
        if name.contains("API Event") {
            Some(Service::ApiEvent)
        } else if name.contains("EDI") {
            Some(Service::Edi)
        } else if name.contains("Vessel Advice") {
            Some(Service::VesselAdvice)
        } else if name.contains("Container") {
            Some(Service::Container)
        } else if name.contains("Vessel Registry") {
            Some(Service::VesselRegistry)
        } else if name.contains("Berth") {
            Some(Service::Berth)
        } else {
            None
        }
    }

    /// Canonical display name, as the upstream dashboards label the service.
    pub fn name(&self) -> &'static str {
        match self {
            Service::ApiEvent => "API Event Service",
            Service::Edi => "EDI Service",
            Service::VesselAdvice => "Vessel Advice",
            Service::Container => "Container Service",
            Service::VesselRegistry => "Vessel Registry",
            Service::Berth => "Berth Application",
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A raw log line as read from a feed, paired with its zero-based index
/// within that feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    pub index: usize,
    pub text: String,
}
