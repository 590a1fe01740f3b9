//! API envelope parsing tests.

mod common;

use carddeckshuffler_sdk::{from_json_string, Converter, ParseError};

#[test]
fn ok_envelope_yields_data() {
    let data: serde_json::Value = serde_json::from_str(common::ONE_CARD_JSON).unwrap();
    let json = common::ok_envelope(data).to_string();

    let response = Converter::DEFAULT.response_from_json_string(&json).unwrap();
    assert!(response.is_ok());
    assert!(response.error.is_none());
    assert!(response.code.is_none());

    let data = response.into_data().unwrap();
    assert_eq!(data, from_json_string(common::ONE_CARD_JSON).unwrap());
}

#[test]
fn error_envelope_becomes_api_error() {
    let json = r#"{"status":"error","error":"Invalid API key","data":null,"code":401}"#;
    let response = Converter::DEFAULT.response_from_json_string(json).unwrap();
    assert!(!response.is_ok());
    assert_eq!(response.code, Some(401));

    match response.into_data().unwrap_err() {
        ParseError::Api { status, message } => {
            assert_eq!(status, "error");
            assert_eq!(message, "Invalid API key");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn error_envelope_without_message_uses_default() {
    let json = r#"{"status":"error"}"#;
    let response = Converter::DEFAULT.response_from_json_string(json).unwrap();
    let err = response.into_data().unwrap_err();
    assert!(err.to_string().contains("Unknown error"));
}

#[test]
fn ok_envelope_without_data_is_an_error() {
    let json = r#"{"status":"ok","error":null}"#;
    let response = Converter::DEFAULT.response_from_json_string(json).unwrap();
    assert!(matches!(response.into_data(), Err(ParseError::Api { .. })));
}

#[test]
fn envelope_ignores_unknown_fields() {
    let data: serde_json::Value = serde_json::from_str(common::ONE_CARD_JSON).unwrap();
    let mut envelope = common::ok_envelope(data);
    envelope["request_id"] = serde_json::Value::from("abc-123");
    let response = Converter::DEFAULT
        .response_from_json_string(&envelope.to_string())
        .unwrap();
    assert!(response.into_data().is_ok());
}

#[test]
fn envelope_round_trips_without_code() {
    let data: serde_json::Value = serde_json::from_str(common::ONE_CARD_JSON).unwrap();
    let json = common::ok_envelope(data).to_string();
    let response = Converter::DEFAULT.response_from_json_string(&json).unwrap();

    let written = serde_json::to_value(&response).unwrap();
    assert!(written.get("code").is_none());
    assert_eq!(written["status"], "ok");
    assert_eq!(written["data"]["shuffle_method"], "fisher-yates");
}
