//! Per-service classification rule tables.
//!
//! Each service owns an ordered list of [`Rule`] values: a predicate over
//! the line remainder plus an extractor that builds the
//! [`Classification`]. The first rule whose predicate matches wins; later
//! rules are never evaluated. When no rule matches, [`classify`] applies
//! the catch-all: the module token becomes the action and the remainder is
//! truncated to 80 characters for the message.
//!
//! Field extraction inside a rule is independent per field: a missing
//! capture leaves that output field unset and never fails the rule.

use regex::Regex;

use sentinel_core::Service;

mod api_event;
mod berth;
mod container;
mod edi;
mod vessel_advice;
mod vessel_registry;

/// The classification a rule (or the catch-all) assigns to a matched line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub action: String,
    pub entity: Option<String>,
    pub message: String,
    pub details: Option<String>,
}

/// One ordered classification rule: a predicate over `(module, rest)` and
/// the extractor applied when the predicate matches.
pub struct Rule {
    /// Short label used in tests and tracing.
    pub name: &'static str,
    pub applies: fn(module: &str, rest: &str) -> bool,
    pub classify: fn(module: &str, rest: &str) -> Classification,
}

/// The ordered rule table for a service. `None` (unrecognized service name)
/// yields an empty table, so every line falls to the catch-all.
pub fn rules_for(service: Option<Service>) -> &'static [Rule] {
    match service {
        Some(Service::ApiEvent) => api_event::RULES,
        Some(Service::Edi) => edi::RULES,
        Some(Service::VesselAdvice) => vessel_advice::RULES,
        Some(Service::Container) => container::RULES,
        Some(Service::VesselRegistry) => vessel_registry::RULES,
        Some(Service::Berth) => berth::RULES,
        None => &[],
    }
}

/// Classify `rest` with the first matching rule of the service's table, or
/// the catch-all when none matches.
pub fn classify(service: Option<Service>, module: &str, rest: &str) -> Classification {
    rules_for(service)
        .iter()
        .find(|rule| (rule.applies)(module, rest))
        .map(|rule| (rule.classify)(module, rest))
        .unwrap_or_else(|| fallback(module, rest))
}

/// Catch-all: action is the raw module token, message the truncated rest.
pub fn fallback(module: &str, rest: &str) -> Classification {
    Classification {
        action: module.to_string(),
        entity: None,
        message: truncate(rest, 80),
        details: None,
    }
}

/// Truncate to `max` characters, appending `...` when anything was cut.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max).collect();
        out.push_str("...");
        out
    }
}

// ---------------------------------------------------------------------------
// Shared extraction helpers
// ---------------------------------------------------------------------------

/// Declare a lazily compiled static regex.
macro_rules! rx {
    ($name:ident, $pattern:literal) => {
        static $name: std::sync::LazyLock<regex::Regex> = std::sync::LazyLock::new(|| {
            regex::Regex::new($pattern).expect("static pattern must compile")
        });
    };
}
pub(crate) use rx;

/// First capture group as an owned string, if the pattern matches.
pub(crate) fn cap1(re: &Regex, hay: &str) -> Option<String> {
    re.captures(hay)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Whole match as an owned string, if the pattern matches.
pub(crate) fn whole(re: &Regex, hay: &str) -> Option<String> {
    re.find(hay).map(|m| m.as_str().to_string())
}

/// Comma-join the present parts; `None` when every part is absent.
pub(crate) fn join_details<I>(parts: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    let present: Vec<String> = parts.into_iter().flatten().collect();
    if present.is_empty() {
        None
    } else {
        Some(present.join(", "))
    }
}
