//! Container Service rule table.

use super::{cap1, rx, whole, Classification, Rule};

rx!(RE_CNTR_NO, r"cntr_no=(\S+)");
rx!(RE_STATUS, r"status=\S+");
rx!(RE_CORRELATION_ID, r"correlation_id=\S+");
rx!(RE_LATENCY, r"latency_ms=(\d+)");
rx!(RE_VERSION_BUILD, r"version=\S+.*build=\S+");
rx!(RE_SCHEMA_VERSION, r"schema=\S+.*version=\S+");
rx!(RE_EXISTING_CREATED_AT, r"existing_created_at=\S+");

pub static RULES: &[Rule] = &[
    Rule {
        name: "service_start",
        applies: |_, rest| rest.contains("Started"),
        classify: service_start,
    },
    Rule {
        name: "migration",
        applies: |_, rest| rest.contains("Flyway"),
        classify: migration,
    },
    Rule {
        name: "fetch_snapshot",
        applies: |_, rest| rest.contains("FetchLatestSnapshot"),
        classify: fetch_snapshot,
    },
    Rule {
        name: "insert_snapshot",
        applies: |_, rest| rest.contains("InsertSnapshot"),
        classify: insert_snapshot,
    },
    Rule {
        name: "duplicate_snapshot",
        applies: |_, rest| rest.contains("DuplicateSnapshotAttempt"),
        classify: duplicate_snapshot,
    },
    Rule {
        name: "publish_event",
        applies: |_, rest| rest.contains("PublishEvent"),
        classify: publish_event,
    },
    Rule {
        name: "http_access",
        applies: |module, rest| module == "http" || rest.contains("http"),
        classify: http_access,
    },
];

fn container_entity(rest: &str) -> Option<String> {
    cap1(&RE_CNTR_NO, rest)
}

fn service_start(_module: &str, rest: &str) -> Classification {
    Classification {
        action: "Service Start".to_string(),
        entity: None,
        message: "Container Service started".to_string(),
        details: whole(&RE_VERSION_BUILD, rest),
    }
}

fn migration(_module: &str, rest: &str) -> Classification {
    Classification {
        action: "Database Migration".to_string(),
        entity: None,
        message: "Database schema baseline complete".to_string(),
        details: whole(&RE_SCHEMA_VERSION, rest),
    }
}

fn fetch_snapshot(_module: &str, rest: &str) -> Classification {
    Classification {
        action: "Fetch Snapshot".to_string(),
        entity: container_entity(rest),
        message: "Retrieved latest container snapshot".to_string(),
        details: None,
    }
}

fn insert_snapshot(_module: &str, rest: &str) -> Classification {
    Classification {
        action: "Insert Snapshot".to_string(),
        entity: container_entity(rest),
        message: "Container snapshot created".to_string(),
        details: whole(&RE_STATUS, rest),
    }
}

fn duplicate_snapshot(_module: &str, rest: &str) -> Classification {
    Classification {
        action: "Duplicate Warning".to_string(),
        entity: container_entity(rest),
        message: "Duplicate snapshot attempt detected".to_string(),
        details: whole(&RE_EXISTING_CREATED_AT, rest),
    }
}

fn publish_event(_module: &str, rest: &str) -> Classification {
    Classification {
        action: "Publish Event".to_string(),
        entity: container_entity(rest),
        message: "Container update event published".to_string(),
        details: whole(&RE_CORRELATION_ID, rest),
    }
}

fn http_access(_module: &str, rest: &str) -> Classification {
    Classification {
        action: "HTTP POST".to_string(),
        entity: container_entity(rest),
        message: "Container snapshot updated and event published".to_string(),
        details: cap1(&RE_LATENCY, rest).map(|ms| format!("latency_ms={ms}")),
    }
}
