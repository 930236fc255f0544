//! Static raw-line corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of representative log lines in
//! one service's textual format, every one matching the base
//! `<timestamp> <LEVEL> <module> <rest>` shape. The MALFORMED corpus holds
//! lines that must fail the structural pre-check.

/// EDI Service lines (`ea` module, `messageType=`/`corrId=` conventions).
pub const CORPUS_EDI: &[&str] = &[
    r#"2025-10-03T08:01:10.102Z INFO ea EDIController received request httpMethod=POST path="/api/edi/incoming" messageType="COPARN" corrId=corr-edi-0001"#,
    r#"2025-10-03T08:01:11.214Z INFO ea processIncoming messageType="COPARN" corrId=corr-edi-0001"#,
    "2025-10-03T08:01:12.400Z INFO ea response httpStatus=200 durationMs=45 corrId=corr-edi-0001",
    r#"2025-10-04T12:25:10.301Z ERROR ea reject messageType="IFTMIN" code=EDI_ERR_1 msg="Segment missing" sender="LINE-PSA" receiver="PSA-TOS""#,
    "2025-10-04T12:25:10.529Z ERROR ea EDI message processing failed - Segment missing sender=LINE-PSA",
];

/// Vessel Advice lines (`vs` module).
pub const CORPUS_VESSEL_ADVICE: &[&str] = &[
    r#"2025-10-08T09:14:11.002Z INFO vs prepareCreate vesselName="MV Lion City 07" effStart=2025-10-08T00:00:00Z"#,
    r#"2025-10-08T09:14:12.420Z ERROR vs validateAdvice code=VESSEL_ERR_4 msg="System vessel name already in use by active advice" system_vessel_name="MV Lion City 07""#,
    "2025-10-08T09:14:12.581Z INFO vs response httpStatus=409 latency_ms=64",
];

/// Vessel Registry lines (`vs` module plus `http` access records).
pub const CORPUS_VESSEL_REGISTRY: &[&str] = &[
    "2025-10-01T06:00:01.000Z INFO vs Boot version=3.4.1 commit=9f1c2aa",
    "2025-10-01T06:00:04.310Z INFO vs Warmup vessels_cached=412 ms=1830",
    "2025-10-09T08:30:09.120Z INFO vs Lookup imo_no=9434761 result=FOUND vessel_id=208",
    r#"2025-10-09T08:30:10.540Z INFO vs UpdateFlag vessel_id=208 old_flag="SG" new_flag="PA""#,
    "2025-10-09T08:30:10.713Z WARN vs FlagStateChange imo_no=9434761 last_change_minutes=4",
    "2025-10-09T08:30:11.001Z INFO http 200 PATCH /vessels/208/flag latency_ms=88",
];

/// Container Service lines (`cntr` module plus `http` access records).
pub const CORPUS_CONTAINER: &[&str] = &[
    "2025-10-01T05:58:02.000Z INFO cntr Started version=2.1.0 build=8842",
    "2025-10-01T05:58:03.210Z INFO cntr Flyway baseline schema=container_db version=12",
    "2025-10-09T08:15:11.240Z INFO cntr FetchLatestSnapshot cntr_no=CMAU0000020",
    "2025-10-09T08:15:11.895Z INFO cntr InsertSnapshot cntr_no=CMAU0000020 status=DISCHARGED",
    "2025-10-09T08:15:12.110Z WARN cntr DuplicateSnapshotAttempt cntr_no=CMAU0000031 existing_created_at=2025-10-09T08:15:12.000Z",
    "2025-10-09T08:15:12.430Z INFO cntr PublishEvent cntr_no=CMAU0000020 correlation_id=corr-cont-0001",
    "2025-10-09T08:15:12.912Z INFO http 200 POST /containers/snapshot latency_ms=187",
];

/// Berth Application lines.
pub const CORPUS_BERTH: &[&str] = &[
    "2025-10-01T05:59:00.000Z INFO others Boot version=1.9.2",
    r#"2025-10-07T10:02:14.300Z INFO others FetchActive system_vessel_name="MV Lion City 07" vessel_advice_no=88123"#,
    "2025-10-07T10:02:15.104Z INFO others OpenApplication vessel_advice_no=88123 application_no=55021",
    "2025-10-07T16:40:02.551Z INFO others CloseApplication application_no=55021 reason=completed",
    "2025-10-07T16:45:00.120Z INFO others ArchiveApplication application_no=54990 deleted=true",
    "2025-10-07T16:45:00.893Z INFO http 201 POST /berth/applications latency_ms=143",
];

/// API Event Service lines (`api` module plus `http` access records).
pub const CORPUS_API_EVENT: &[&str] = &[
    "2025-10-01T06:00:00.000Z INFO api Boot version=4.2.0 commit=77ab19c",
    "2025-10-01T06:00:02.150Z INFO api ScheduleLoaded jobs=6",
    "2025-10-09T08:25:33.661Z INFO api EventIngest event_type=GATE_IN cntr_no=MSCU0000006 correlation_id=corr-api-0005 status=200",
    "2025-10-09T08:25:34.112Z INFO api EventIngest event_type=LOAD cntr_no=MSCU0000007 correlation_id=corr-api-0006 status=200",
    r#"2025-10-09T08:31:00.480Z ERROR api Persist attempt=2 type=containerUpdate container_id=5 error="connection reset""#,
    r#"2025-10-09T08:31:01.231Z INFO api Persist type=containerUpdate api_event_id=912 status=201 message="Event persisted to database""#,
    "2025-10-09T08:32:10.004Z ERROR http 504 GET /partners/xyz/events latency_ms=30000 trace_id=tr-99021",
    "2025-10-09T08:32:11.550Z WARN api Retrying request attempt 2/3 in 4s",
    r#"2025-10-09T08:32:40.021Z ERROR api alert-service Triggered alert_id=AL-2210 severity=critical reason="gateway timeout budget exceeded""#,
];

/// Lines that must fail the structural pre-check and produce no event.
pub const CORPUS_MALFORMED: &[&str] = &[
    "garbage line with no structure",
    "",
    "    at com.psa.edi.Parser.parse(Parser.java:42)",
    "2025-10-01T06:00:00Z TRACE api level token is unknown",
    "2025-10-01T06:00:00Z INFO api",
    "continuation of a previous message body",
];

/// `(service name, corpus)` pairs covering all six services.
pub const ALL_SERVICE_CORPORA: &[(&str, &[&str])] = &[
    ("EDI Service", CORPUS_EDI),
    ("Vessel Advice", CORPUS_VESSEL_ADVICE),
    ("Vessel Registry", CORPUS_VESSEL_REGISTRY),
    ("Container Service", CORPUS_CONTAINER),
    ("Berth Application", CORPUS_BERTH),
    ("API Event Service", CORPUS_API_EVENT),
];
