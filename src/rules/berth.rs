//! Berth Application rule table.

use super::{cap1, join_details, rx, whole, Classification, Rule};

rx!(RE_APPLICATION_NO, r"application_no=(\d+)");
rx!(RE_APPLICATION_NO_KV, r"application_no=\d+");
rx!(RE_VESSEL_ADVICE_NO, r"vessel_advice_no=(\d+)");
rx!(RE_VESSEL_ADVICE_NO_KV, r"vessel_advice_no=\d+");
rx!(RE_SYSTEM_VESSEL_NAME, r#"system_vessel_name="([^"]+)""#);
rx!(RE_REASON, r"reason=(\S+)");
rx!(RE_LATENCY, r"latency_ms=(\d+)");
rx!(RE_VERSION, r"version=\S+");
rx!(RE_DELETED, r"deleted=\S+");
rx!(RE_WRITE_ACCESS, r"(\d+)\s+(POST|PATCH)");

pub static RULES: &[Rule] = &[
    Rule {
        name: "service_start",
        applies: |_, rest| rest.contains("Boot"),
        classify: service_start,
    },
    Rule {
        name: "fetch_active",
        applies: |_, rest| rest.contains("FetchActive"),
        classify: fetch_active,
    },
    Rule {
        name: "open_application",
        applies: |_, rest| rest.contains("OpenApplication"),
        classify: open_application,
    },
    Rule {
        name: "close_application",
        applies: |_, rest| rest.contains("CloseApplication"),
        classify: close_application,
    },
    Rule {
        name: "archive_application",
        applies: |_, rest| rest.contains("ArchiveApplication"),
        classify: archive_application,
    },
    Rule {
        name: "http_access",
        applies: |module, rest| module == "http" || rest.contains("http"),
        classify: http_access,
    },
];

/// `App #<n>`, the entity label used by every application-scoped rule.
fn app_entity(rest: &str) -> Option<String> {
    cap1(&RE_APPLICATION_NO, rest).map(|n| format!("App #{n}"))
}

fn service_start(_module: &str, rest: &str) -> Classification {
    Classification {
        action: "Service Start".to_string(),
        entity: None,
        message: "Berth Application Service started".to_string(),
        details: whole(&RE_VERSION, rest),
    }
}

fn fetch_active(_module: &str, rest: &str) -> Classification {
    Classification {
        action: "Fetch Active Advice".to_string(),
        entity: cap1(&RE_SYSTEM_VESSEL_NAME, rest),
        message: "Retrieved active vessel advice".to_string(),
        details: cap1(&RE_VESSEL_ADVICE_NO, rest).map(|n| format!("vessel_advice_no={n}")),
    }
}

fn open_application(_module: &str, rest: &str) -> Classification {
    Classification {
        action: "Open Application".to_string(),
        entity: app_entity(rest),
        message: "Berth application opened".to_string(),
        details: join_details([
            whole(&RE_VESSEL_ADVICE_NO_KV, rest),
            whole(&RE_APPLICATION_NO_KV, rest),
        ]),
    }
}

fn close_application(_module: &str, rest: &str) -> Classification {
    Classification {
        action: "Close Application".to_string(),
        entity: app_entity(rest),
        message: "Berth application closed".to_string(),
        details: cap1(&RE_REASON, rest).map(|r| format!("reason={r}")),
    }
}

fn archive_application(_module: &str, rest: &str) -> Classification {
    Classification {
        action: "Archive Application".to_string(),
        entity: app_entity(rest),
        message: "Berth application archived".to_string(),
        details: whole(&RE_DELETED, rest),
    }
}

fn http_access(_module: &str, rest: &str) -> Classification {
    let action = match RE_WRITE_ACCESS.captures(rest) {
        Some(caps) => format!("HTTP {}", &caps[2]),
        None => "HTTP Request".to_string(),
    };
    Classification {
        action,
        entity: app_entity(rest),
        message: "Operation completed".to_string(),
        details: cap1(&RE_LATENCY, rest).map(|ms| format!("latency_ms={ms}")),
    }
}
