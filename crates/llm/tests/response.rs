//! Tests for response body parsing.

use narwhal_llm::Response;

#[test]
fn first_choice_content_is_extracted() {
    let body = serde_json::json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "model": "test-model",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": "hello there" }, "finish_reason": "stop" },
            { "index": 1, "message": { "role": "assistant", "content": "ignored" }, "finish_reason": "stop" }
        ]
    });

    let response: Response = serde_json::from_value(body).unwrap();
    assert_eq!(response.text().unwrap(), "hello there");
}

#[test]
fn missing_choices_yields_none() {
    let response: Response = serde_json::from_str("{}").unwrap();
    assert!(response.text().is_none());
}

#[test]
fn empty_choices_yields_none() {
    let response: Response = serde_json::from_str(r#"{"choices": []}"#).unwrap();
    assert!(response.text().is_none());
}

#[test]
fn malformed_body_is_a_parse_error() {
    let result = serde_json::from_str::<Response>("not json at all");
    assert!(result.is_err());
}

#[test]
fn choice_without_content_is_malformed() {
    let body = serde_json::json!({
        "choices": [ { "message": { "role": "assistant" } } ]
    });

    // No silent empty reply: a missing content field must fail parsing
    // so the caller lands in the failure path.
    assert!(serde_json::from_value::<Response>(body).is_err());
}

#[test]
fn explicit_empty_content_still_parses() {
    let body = serde_json::json!({
        "choices": [ { "message": { "role": "assistant", "content": "" } } ]
    });

    let response: Response = serde_json::from_value(body).unwrap();
    assert_eq!(response.text().unwrap(), "");
}
