//! End-to-end workflow tests against raw backend payloads

use subconverter_common::{
    api::{decode_detect, decode_validate},
    Error, Level, Session,
};

const NOW: &str = "09:30:00";
const ROOT: &str = "http://localhost:11200";
const REMOTE: &str = "http://ex.com/s";

#[test]
fn generate_flow_from_raw_backend_payload() {
    let mut session = Session::new();
    session.set_landing(0, "L1");
    session.set_front(0, "F1");

    let begun = session.begin_generate(ROOT, REMOTE, NOW).unwrap();
    let body = serde_json::to_string(&begun.request).unwrap();
    assert!(body.contains("\"remote_url\":\"http://ex.com/s\""));
    assert!(body.contains("\"node_pairs\""));

    let response = decode_validate(
        r#"{
            "success": true,
            "message": "configuration looks good",
            "logs": [{"level": "INFO", "message": "2 proxies inspected"}]
        }"#,
    );
    session.finish_generate(response, NOW);

    assert_eq!(
        session.generated_url(),
        Some(
            "http://localhost:11200/subscription.yaml?remote_url=http%3A%2F%2Fex.com%2Fs&manual_pairs=L1%3AF1"
        )
    );
    assert_eq!(
        session.feedback().current().unwrap().message,
        "configuration looks good"
    );
}

#[test]
fn malformed_backend_payload_is_a_transport_fault() {
    let mut session = Session::new();
    session.set_landing(0, "L1");
    session.set_front(0, "F1");
    session.begin_generate(ROOT, REMOTE, NOW).unwrap();

    let response = decode_validate("<html>502 Bad Gateway</html>");
    assert!(matches!(response, Err(Error::Transport(_))));
    session.finish_generate(response, NOW);

    assert_eq!(session.generated_url(), None);
    assert!(!session.is_busy());
    assert_eq!(session.feedback().current().unwrap().level, Level::Error);
}

#[test]
fn autodetect_flow_from_raw_backend_payload() {
    let mut session = Session::new();
    session.set_landing(0, "will be discarded");

    session.begin_autodetect(ROOT, REMOTE, NOW).unwrap();
    let response = decode_detect(
        r#"{
            "success": true,
            "suggested_pairs": [
                {"landing": "HK Landing 01", "front": "HK Auto"},
                {"landing": "JP Landing 02", "front": "JP Auto"}
            ],
            "message": "2 pairs detected",
            "logs": []
        }"#,
    );
    session.finish_autodetect(response, NOW);

    assert_eq!(session.pairs().len(), 2);
    assert_eq!(session.pairs().rows()[1].front, "JP Auto");

    // The detected pairs feed straight into generation
    let begun = session.begin_generate(ROOT, REMOTE, NOW).unwrap();
    assert_eq!(begun.request.node_pairs.len(), 2);
}

#[test]
fn workflows_exclude_each_other_while_in_flight() {
    let mut session = Session::new();
    session.set_landing(0, "L1");
    session.set_front(0, "F1");

    session.begin_autodetect(ROOT, REMOTE, NOW).unwrap();
    assert_eq!(session.begin_generate(ROOT, REMOTE, NOW), Err(Error::Busy));

    session.finish_autodetect(decode_detect(r#"{"success": false, "message": "fetch failed"}"#), NOW);
    assert!(!session.is_busy());
    // Failure reset the list, so generation now lacks a complete pair
    assert_eq!(
        session.begin_generate(ROOT, REMOTE, NOW),
        Err(Error::NoCompletePair)
    );
}
