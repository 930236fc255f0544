//! EDI Service rule table.
//!
//! EDI lines carry the interchange message type (`messageType="COPARN"`) on
//! most records. Rejections come in two shapes: structured (`code=` plus a
//! quoted `msg=`) and free text ("... processing failed - Segment missing
//! sender=LINE-PSA"); the structured shape takes priority.

use super::{cap1, join_details, rx, whole, Classification, Rule};

rx!(RE_MESSAGE_TYPE, r#"messageType="([^"]+)""#);
rx!(RE_CORR_ID, r"corrId=\S+");
rx!(RE_MSG, r#"msg="([^"]+)""#);
rx!(RE_CODE, r"code=(\S+)");
rx!(RE_DURATION, r"durationMs=(\d+)");
rx!(RE_HTTP_STATUS, r"httpStatus=(\d+)");
rx!(RE_METHOD_PATH, r#"httpMethod=(\S+)\s+path="([^"]+)""#);
rx!(RE_SENDER_RECEIVER, r#"sender="[^"]+".*receiver="[^"]+""#);
rx!(RE_SENDER_KV, r"sender=\S+");
rx!(RE_RECEIVER_KV, r"receiver=\S+");
rx!(RE_CODE_KV, r"code=\S+");
rx!(RE_FREE_TEXT, r"^(.*?)\s+\w+=");

pub static RULES: &[Rule] = &[
    Rule {
        name: "receive",
        applies: |_, rest| rest.contains("EDIController") && rest.contains("httpMethod"),
        classify: receive,
    },
    Rule {
        name: "process_incoming",
        applies: |_, rest| rest.contains("processIncoming"),
        classify: process_incoming,
    },
    Rule {
        name: "rejection",
        applies: |_, rest| RE_MSG.is_match(rest) && RE_CODE.is_match(rest),
        classify: rejection,
    },
    Rule {
        name: "processing_failure",
        applies: |_, rest| rest.contains("processing failed"),
        classify: processing_failure,
    },
    Rule {
        name: "response",
        applies: |_, rest| RE_HTTP_STATUS.is_match(rest),
        classify: response,
    },
];

fn receive(_module: &str, rest: &str) -> Classification {
    Classification {
        action: "Receive EDI".to_string(),
        entity: cap1(&RE_MESSAGE_TYPE, rest),
        message: "EDI message received".to_string(),
        details: RE_METHOD_PATH
            .captures(rest)
            .map(|caps| format!("{} {}", &caps[1], &caps[2]))
            .or_else(|| whole(&RE_CORR_ID, rest)),
    }
}

fn process_incoming(_module: &str, rest: &str) -> Classification {
    let action = cap1(&RE_MESSAGE_TYPE, rest).unwrap_or_else(|| "Process".to_string());
    Classification {
        message: format!("Processing {action} message"),
        action,
        entity: None,
        details: whole(&RE_CORR_ID, rest),
    }
}

fn rejection(_module: &str, rest: &str) -> Classification {
    Classification {
        action: cap1(&RE_MESSAGE_TYPE, rest).unwrap_or_else(|| "EDI Error".to_string()),
        entity: cap1(&RE_CODE, rest),
        message: cap1(&RE_MSG, rest).unwrap_or_default(),
        details: whole(&RE_SENDER_RECEIVER, rest),
    }
}

fn processing_failure(_module: &str, rest: &str) -> Classification {
    // Message is the free-text prefix before the first key=value field.
    let message = cap1(&RE_FREE_TEXT, rest).unwrap_or_else(|| rest.to_string());
    Classification {
        action: cap1(&RE_MESSAGE_TYPE, rest)
            .unwrap_or_else(|| "Processing Failure".to_string()),
        entity: None,
        message,
        details: join_details([
            whole(&RE_SENDER_KV, rest),
            whole(&RE_RECEIVER_KV, rest),
            whole(&RE_CODE_KV, rest),
        ]),
    }
}

fn response(_module: &str, rest: &str) -> Classification {
    let status = cap1(&RE_HTTP_STATUS, rest).unwrap_or_default();
    Classification {
        action: "Response".to_string(),
        entity: None,
        message: if status == "200" {
            "EDI message processed successfully".to_string()
        } else {
            "EDI processing failed".to_string()
        },
        details: cap1(&RE_DURATION, rest).map(|ms| format!("durationMs={ms}")),
    }
}
