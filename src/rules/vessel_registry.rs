//! Vessel Registry rule table.
//!
//! Lookup results carry a `result=FOUND` / `result=NOT_FOUND` token; the
//! NOT_FOUND check runs first since the FOUND token is a substring of it.

use super::{cap1, rx, whole, Classification, Rule};

rx!(RE_IMO_NO, r"imo_no=(\d+)");
rx!(RE_VESSEL_ID, r"vessel_id=(\d+)");
rx!(RE_VESSEL_ID_KV, r"vessel_id=\d+");
rx!(RE_OLD_FLAG, r#"old_flag="([^"]+)""#);
rx!(RE_NEW_FLAG, r#"new_flag="([^"]+)""#);
rx!(RE_VERSION, r"version=\S+");
rx!(RE_WARMUP_STATS, r"vessels_cached=\d+.*ms=\d+");
rx!(RE_LAST_CHANGE, r"last_change_minutes=\d+");
rx!(RE_LATENCY, r"latency_ms=\d+");
rx!(RE_PATCH_ACCESS, r"(\d+)\s+PATCH");

pub static RULES: &[Rule] = &[
    Rule {
        name: "service_start",
        applies: |_, rest| rest.contains("Boot"),
        classify: service_start,
    },
    Rule {
        name: "warmup",
        applies: |_, rest| rest.contains("Warmup"),
        classify: warmup,
    },
    Rule {
        name: "lookup",
        applies: |_, rest| rest.contains("Lookup"),
        classify: lookup,
    },
    Rule {
        name: "update_flag",
        applies: |_, rest| rest.contains("UpdateFlag"),
        classify: update_flag,
    },
    Rule {
        name: "flag_state_change",
        applies: |_, rest| rest.contains("FlagStateChange"),
        classify: flag_state_change,
    },
    Rule {
        name: "http_access",
        applies: |module, rest| module == "http" || rest.contains("http"),
        classify: http_access,
    },
];

/// `IMO: <n>` when the line carries an IMO number, else `Vessel #<id>`.
fn registry_entity(rest: &str) -> Option<String> {
    cap1(&RE_IMO_NO, rest)
        .map(|imo| format!("IMO: {imo}"))
        .or_else(|| cap1(&RE_VESSEL_ID, rest).map(|id| format!("Vessel #{id}")))
}

fn service_start(_module: &str, rest: &str) -> Classification {
    Classification {
        action: "Service Start".to_string(),
        entity: None,
        message: "Vessel Registry started".to_string(),
        details: whole(&RE_VERSION, rest),
    }
}

fn warmup(_module: &str, rest: &str) -> Classification {
    Classification {
        action: "Cache Warmup".to_string(),
        entity: None,
        message: "Vessel cache warmed up".to_string(),
        details: whole(&RE_WARMUP_STATS, rest),
    }
}

fn lookup(_module: &str, rest: &str) -> Classification {
    let found = !rest.contains("NOT_FOUND") && rest.contains("FOUND");
    Classification {
        action: "Vessel Lookup".to_string(),
        entity: registry_entity(rest),
        message: if found {
            "Vessel found in registry".to_string()
        } else {
            "Vessel not found".to_string()
        },
        details: whole(&RE_VESSEL_ID_KV, rest),
    }
}

fn update_flag(_module: &str, rest: &str) -> Classification {
    let details = match (cap1(&RE_OLD_FLAG, rest), cap1(&RE_NEW_FLAG, rest)) {
        (Some(old), Some(new)) => Some(format!("{old} → {new}")),
        _ => None,
    };
    Classification {
        action: "Flag Update".to_string(),
        entity: registry_entity(rest),
        message: "Vessel flag updated".to_string(),
        details,
    }
}

fn flag_state_change(_module: &str, rest: &str) -> Classification {
    Classification {
        action: "Flag Update Warning".to_string(),
        entity: registry_entity(rest),
        message: "Vessel flag updated with high frequency warning".to_string(),
        details: whole(&RE_LAST_CHANGE, rest),
    }
}

fn http_access(_module: &str, rest: &str) -> Classification {
    let action = if RE_PATCH_ACCESS.is_match(rest) {
        "HTTP PATCH".to_string()
    } else {
        "HTTP Request".to_string()
    };
    Classification {
        action,
        entity: registry_entity(rest),
        message: "Flag update completed".to_string(),
        details: whole(&RE_LATENCY, rest),
    }
}
