//! Domain-specific assertion macros for sentinel harnesses.
//!
//! These add context-rich failure messages that make it clear *what*
//! normalizer invariant was violated and *which* line violated it.

use sentinel::LogEvent;

/// Assert that an event was classified with the expected action.
///
/// ```rust
/// assert_action!(event, "GATE_IN");
/// ```
#[macro_export]
macro_rules! assert_action {
    ($event:expr, $action:expr) => {{
        let event: &sentinel::LogEvent = &$event;
        let expected: &str = $action;
        if event.action != expected {
            panic!(
                "assert_action! failed:\n  expected: {:?}\n  actual:   {:?}\n  id: {:?}",
                expected, event.action, event.id
            );
        }
    }};
}

/// Assert that an event carries the expected entity.
#[macro_export]
macro_rules! assert_entity {
    ($event:expr, $entity:expr) => {{
        let event: &sentinel::LogEvent = &$event;
        let expected: &str = $entity;
        match event.entity.as_deref() {
            Some(actual) if actual == expected => {}
            Some(actual) => panic!(
                "assert_entity! failed:\n  expected: {:?}\n  actual:   {:?}\n  id: {:?}",
                expected, actual, event.id
            ),
            None => panic!(
                "assert_entity! failed: no entity on event.\n  expected: {:?}\n  id: {:?}",
                expected, event.id
            ),
        }
    }};
}

/// Assert that an event has the expected level.
#[macro_export]
macro_rules! assert_level {
    ($event:expr, $level:expr) => {{
        let event: &sentinel::LogEvent = &$event;
        let expected: sentinel::LogLevel = $level;
        if event.level != expected {
            panic!(
                "assert_level! failed:\n  expected: {:?}\n  actual:   {:?}\n  id: {:?}",
                expected, event.level, event.id
            );
        }
    }};
}

/// Assert the output guarantee: every mandatory field is non-empty.
///
/// Mandatory fields for every normalised event: `id`, `timestamp`,
/// `service`, `module`, `action`, `message` (`level` is an enum and always
/// present; `entity`/`details` are optional by contract).
pub fn assert_mandatory_fields(event: &LogEvent) {
    assert!(!event.id.is_empty(), "event id must be non-empty");
    assert!(
        !event.timestamp.is_empty(),
        "event timestamp must be non-empty: {:?}",
        event.id
    );
    assert!(
        !event.service.is_empty(),
        "event service must be non-empty: {:?}",
        event.id
    );
    assert!(
        !event.module.is_empty(),
        "event module must be non-empty: {:?}",
        event.id
    );
    assert!(
        !event.action.is_empty(),
        "event action must be non-empty: {:?}",
        event.id
    );
    assert!(
        !event.message.is_empty(),
        "event message must be non-empty: {:?}",
        event.id
    );
}
