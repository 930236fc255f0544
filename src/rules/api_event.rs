//! API Event Service rule table.
//!
//! The busiest of the six services: business events (`event_type=`),
//! persistence outcomes, HTTP access lines, retries, and alerts all share
//! one log stream. Table order matters; the persist rule must run before
//! the generic `event_type=` rule because persist lines carry both markers.

use super::{cap1, join_details, rx, whole, Classification, Rule};

rx!(RE_EVENT_TYPE, r"event_type=(\S+)");
rx!(RE_CNTR_NO, r"cntr_no=(\S+)");
rx!(RE_CORRELATION_ID, r"correlation_id=\S+");
rx!(RE_STATUS, r"status=(\d+)");
rx!(RE_ERROR, r#"error="([^"]+)""#);
rx!(RE_MESSAGE, r#"message="([^"]+)""#);
rx!(RE_VERSION_COMMIT, r"version=\S+.*commit=\S+");
rx!(RE_JOBS, r"jobs=(\d+)");
rx!(RE_TYPE, r"type=(\S+)");
rx!(RE_CONTAINER_ID, r"container_id=(\d+)");
rx!(RE_ATTEMPT, r"attempt=(\d+)");
rx!(RE_API_EVENT_ID, r"api_event_id=\d+");
rx!(RE_ACCESS, r"(\d+)\s+(GET|POST|PATCH|PUT|DELETE)\s+(\S+)");
rx!(RE_LATENCY, r"latency_ms=(\d+)");
rx!(RE_TRACE_ID, r"trace_id=\S+");
rx!(RE_JSON_BLOB, r"\{[^}]+\}");
rx!(RE_ATTEMPT_RATIO, r"attempt (\d+/\d+)");
rx!(RE_RETRY_IN, r"in (\d+s)");
rx!(RE_ALERT_ID, r"alert_id=(\S+)");
rx!(RE_SEVERITY, r"severity=\S+");
rx!(RE_REASON, r#"reason="([^"]+)""#);
rx!(RE_METHOD_PATH, r"(POST|GET|PATCH|PUT|DELETE)\s+(\S+)");

pub static RULES: &[Rule] = &[
    Rule {
        name: "service_start",
        applies: |_, rest| rest.contains("Boot"),
        classify: service_start,
    },
    Rule {
        name: "scheduler",
        applies: |_, rest| rest.contains("ScheduleLoaded"),
        classify: scheduler,
    },
    Rule {
        name: "persist",
        applies: |_, rest| {
            rest.contains("Persist") && (rest.contains("attempt") || rest.contains("api_event_id"))
        },
        classify: persist,
    },
    Rule {
        name: "business_event",
        applies: |_, rest| RE_EVENT_TYPE.is_match(rest),
        classify: business_event,
    },
    Rule {
        name: "http_access",
        applies: |module, rest| module == "http" && RE_ACCESS.is_match(rest),
        classify: http_access,
    },
    Rule {
        name: "retry",
        applies: |_, rest| rest.contains("Retrying") || rest.contains("retry"),
        classify: retry,
    },
    Rule {
        name: "alert",
        applies: |_, rest| rest.contains("alert-service") || rest.contains("Triggered"),
        classify: alert,
    },
    Rule {
        name: "failed_request",
        applies: |_, rest| rest.contains("Request failed") || rest.contains("Request timeout"),
        classify: failed_request,
    },
];

fn service_start(_module: &str, rest: &str) -> Classification {
    Classification {
        action: "Service Start".to_string(),
        entity: None,
        message: "API Event Service started".to_string(),
        details: whole(&RE_VERSION_COMMIT, rest),
    }
}

fn scheduler(_module: &str, rest: &str) -> Classification {
    Classification {
        action: "Scheduler".to_string(),
        entity: None,
        message: "Job scheduler loaded".to_string(),
        details: cap1(&RE_JOBS, rest).map(|jobs| format!("jobs={jobs}")),
    }
}

fn persist(_module: &str, rest: &str) -> Classification {
    let action = cap1(&RE_TYPE, rest).unwrap_or_else(|| "Persist Event".to_string());
    let entity = cap1(&RE_CONTAINER_ID, rest).map(|id| format!("container_id={id}"));
    let error = cap1(&RE_ERROR, rest);

    let (message, details) = if rest.contains("attempt") && error.is_some() {
        (
            error.unwrap_or_default(),
            cap1(&RE_ATTEMPT, rest).map(|n| format!("attempt={n}")),
        )
    } else {
        (
            cap1(&RE_MESSAGE, rest)
                .unwrap_or_else(|| "Event persisted to database".to_string()),
            join_details([
                whole(&RE_API_EVENT_ID, rest),
                cap1(&RE_STATUS, rest).map(|s| format!("status={s}")),
            ]),
        )
    };

    Classification { action, entity, message, details }
}

fn business_event(_module: &str, rest: &str) -> Classification {
    let action = cap1(&RE_EVENT_TYPE, rest).unwrap_or_default();
    let status = cap1(&RE_STATUS, rest);
    let error = cap1(&RE_ERROR, rest);
    let failed = error.is_some()
        || matches!(status.as_deref(), Some("401") | Some("504"));

    let message = if failed {
        error
            .or_else(|| cap1(&RE_MESSAGE, rest))
            .unwrap_or_else(|| "Request failed".to_string())
    } else {
        format!("{action} event processed successfully")
    };

    Classification {
        entity: cap1(&RE_CNTR_NO, rest),
        details: join_details([
            whole(&RE_CORRELATION_ID, rest),
            status.map(|s| format!("status={s}")),
            whole(&RE_JSON_BLOB, rest),
        ]),
        action,
        message,
    }
}

fn http_access(_module: &str, rest: &str) -> Classification {
    // The applies predicate already checked the access pattern.
    let caps = RE_ACCESS
        .captures(rest)
        .expect("http_access only classifies matching lines");
    let status = &caps[1];
    let method = &caps[2];
    let endpoint = &caps[3];

    let message = if status.starts_with('2') {
        "Request completed successfully".to_string()
    } else if status == "401" {
        "Authentication failed".to_string()
    } else if status == "504" {
        "Gateway Timeout - partner endpoint unresponsive".to_string()
    } else {
        format!("Request failed with status {status}")
    };

    Classification {
        action: method.to_string(),
        entity: Some(endpoint.to_string()),
        message,
        details: join_details([
            Some(format!("status={status}")),
            cap1(&RE_LATENCY, rest).map(|ms| format!("latency_ms={ms}")),
            whole(&RE_TRACE_ID, rest),
        ]),
    }
}

fn retry(_module: &str, rest: &str) -> Classification {
    Classification {
        action: "Retry".to_string(),
        entity: None,
        message: "Retrying request after failure".to_string(),
        details: whole(&RE_ATTEMPT_RATIO, rest).or_else(|| whole(&RE_RETRY_IN, rest)),
    }
}

fn alert(_module: &str, rest: &str) -> Classification {
    Classification {
        action: "Alert".to_string(),
        entity: cap1(&RE_ALERT_ID, rest),
        message: "Critical alert triggered".to_string(),
        details: join_details([
            whole(&RE_SEVERITY, rest),
            cap1(&RE_REASON, rest).map(|r| format!(r#"reason="{r}""#)),
        ]),
    }
}

fn failed_request(_module: &str, rest: &str) -> Classification {
    let (action, entity) = match RE_METHOD_PATH.captures(rest) {
        Some(caps) => (caps[1].to_string(), Some(caps[2].to_string())),
        None => ("API Request".to_string(), None),
    };

    let (message, details) = if rest.contains("timeout") {
        (
            "Request timeout - endpoint unresponsive".to_string(),
            cap1(&RE_LATENCY, rest).map(|ms| format!("latency_ms={ms}")),
        )
    } else {
        (
            cap1(&RE_MESSAGE, rest).unwrap_or_else(|| "Request failed".to_string()),
            cap1(&RE_STATUS, rest).map(|s| format!("status={s}")),
        )
    };

    Classification { action, entity, message, details }
}
