//! Vessel Advice rule table.

use super::{cap1, rx, whole, Classification, Rule};

rx!(RE_VESSEL_NAME, r#"vesselName="([^"]+)""#);
rx!(RE_SYSTEM_VESSEL_NAME, r#"system_vessel_name="([^"]+)""#);
rx!(RE_CODE, r"code=(\S+)");
rx!(RE_MSG, r#"msg="([^"]+)""#);
rx!(RE_HTTP_STATUS, r"httpStatus=(\d+)");
rx!(RE_EFF_START, r"effStart=\S+");

pub static RULES: &[Rule] = &[
    Rule {
        name: "prepare_create",
        applies: |_, rest| rest.contains("prepareCreate"),
        classify: prepare_create,
    },
    Rule {
        name: "validation_error",
        applies: |_, rest| RE_CODE.is_match(rest) && RE_MSG.is_match(rest),
        classify: validation_error,
    },
    Rule {
        name: "response",
        applies: |_, rest| RE_HTTP_STATUS.is_match(rest),
        classify: response,
    },
];

/// Entities on advice lines come from `vesselName=`, falling back to
/// `system_vessel_name=`.
fn vessel_entity(rest: &str) -> Option<String> {
    cap1(&RE_VESSEL_NAME, rest).or_else(|| cap1(&RE_SYSTEM_VESSEL_NAME, rest))
}

fn prepare_create(_module: &str, rest: &str) -> Classification {
    Classification {
        action: "Create Advice".to_string(),
        entity: vessel_entity(rest),
        message: "Preparing to create vessel advice".to_string(),
        details: whole(&RE_EFF_START, rest),
    }
}

fn validation_error(_module: &str, rest: &str) -> Classification {
    Classification {
        action: "Validation Error".to_string(),
        entity: cap1(&RE_CODE, rest),
        message: cap1(&RE_MSG, rest).unwrap_or_default(),
        details: cap1(&RE_SYSTEM_VESSEL_NAME, rest)
            .map(|name| format!(r#"system_vessel_name="{name}", adviceState=ACTIVE"#)),
    }
}

fn response(_module: &str, rest: &str) -> Classification {
    let status = cap1(&RE_HTTP_STATUS, rest).unwrap_or_default();
    Classification {
        action: "Response".to_string(),
        entity: vessel_entity(rest),
        message: if status == "409" {
            "System vessel name already in use by active advice".to_string()
        } else {
            "Operation completed".to_string()
        },
        details: Some(format!("status={status}")),
    }
}
