use pretty_assertions::assert_eq;
use serde_json::json;
use widget_channel::{ConfigError, IntentMessage, PageChangeConfig, PageChangeEntry};

#[test]
fn parses_the_host_wire_shape() {
    let config = PageChangeConfig::from_json(
        r#"{
            "pageChanges": [
                { "url": "dolor.+sit", "callbackIntent": "/dolor", "regex": true },
                { "url": "elit.com/se", "callbackIntent": "/se", "regex": false },
                { "url": "http://elit.+sed", "callbackIntent": "/yes", "regex": true }
            ],
            "errorIntent": "/no"
        }"#,
    )
    .expect("parse config");

    assert_eq!(config.error_intent, "/no");
    assert_eq!(config.page_changes.len(), 3);
    assert_eq!(
        config.page_changes[1],
        PageChangeEntry {
            url: "elit.com/se".to_string(),
            callback_intent: "/se".to_string(),
            regex: false,
        }
    );
}

#[test]
fn regex_flag_defaults_to_false() {
    let config = PageChangeConfig::from_json(
        r#"{
            "pageChanges": [ { "url": "/cool", "callbackIntent": "/yes" } ],
            "errorIntent": "/no"
        }"#,
    )
    .expect("parse config");

    assert!(!config.page_changes[0].regex);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = PageChangeConfig::from_json("{ not json").expect_err("must fail");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn compile_preserves_rule_order() {
    let config = PageChangeConfig::from_json(
        r#"{
            "pageChanges": [
                { "url": "dolor.+sit", "callbackIntent": "/dolor", "regex": true },
                { "url": "elit.com/se", "callbackIntent": "/se", "regex": false },
                { "url": "http://elit.+sed", "callbackIntent": "/yes", "regex": true }
            ],
            "errorIntent": "/no"
        }"#,
    )
    .expect("parse config");

    let rules = config.compile().expect("compile");

    assert_eq!(rules.rules().len(), 3);
    assert_eq!(rules.evaluate("http://elit.com/sed"), "/yes");
    assert_eq!(rules.evaluate("dolor/amet/sit.com"), "/dolor");
    assert_eq!(rules.evaluate("http://nothing.here"), "/no");
}

#[test]
fn compile_rejects_invalid_regex_without_partial_set() {
    let config = PageChangeConfig {
        page_changes: vec![
            PageChangeEntry {
                url: "/fine".to_string(),
                callback_intent: "/ok".to_string(),
                regex: false,
            },
            PageChangeEntry {
                url: "[unclosed".to_string(),
                callback_intent: "/broken".to_string(),
                regex: true,
            },
        ],
        error_intent: "/no".to_string(),
    };

    let err = config.compile().expect_err("must be rejected");
    assert!(matches!(err, ConfigError::Rule(_)));
}

#[test]
fn intent_payload_serializes_to_the_expected_shape() {
    let payload = IntentMessage::new("/yes");
    assert_eq!(
        serde_json::to_value(&payload).expect("serialize"),
        json!({ "message": "/yes" })
    );

    let mut with_session = IntentMessage::new("/yes");
    with_session.session_id = Some("session-17".to_string());
    assert_eq!(
        serde_json::to_value(&with_session).expect("serialize"),
        json!({ "message": "/yes", "session_id": "session-17" })
    );
}
