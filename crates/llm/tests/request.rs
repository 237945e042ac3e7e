//! Tests for the request payload builder.

use narwhal_llm::{Config, Request, Role};
use ncore::Exchange;

fn config() -> Config {
    Config::new("test-model").system("fixed system instruction")
}

#[test]
fn system_entry_is_first_and_exactly_once_for_empty_history() {
    let req = Request::from_history(&config(), &[]);

    assert_eq!(req.messages.len(), 1);
    assert_eq!(req.messages[0].role, Role::System);
    assert_eq!(req.messages[0].content, "fixed system instruction");
}

#[test]
fn system_entry_is_first_and_exactly_once_for_full_history() {
    let history: Vec<Exchange> = (0..10)
        .map(|i| Exchange::user("alice", format!("message {i}")))
        .collect();
    let req = Request::from_history(&config(), &history);

    assert_eq!(req.messages.len(), 11);
    assert_eq!(req.messages[0].role, Role::System);
    let systems = req
        .messages
        .iter()
        .filter(|m| m.role == Role::System)
        .count();
    assert_eq!(systems, 1);
}

#[test]
fn both_turn_kinds_collapse_onto_user_with_name_prefix() {
    let history = [
        Exchange::user("Alice", "hi"),
        Exchange::assistant("Tobi", "hello"),
    ];
    let req = Request::from_history(&config(), &history);

    assert_eq!(req.messages.len(), 3);
    assert_eq!(req.messages[0].role, Role::System);
    assert_eq!(req.messages[1].role, Role::User);
    assert_eq!(req.messages[1].content, "Alice: hi");
    assert_eq!(req.messages[2].role, Role::User);
    assert_eq!(req.messages[2].content, "Tobi: hello");
}

#[test]
fn nameless_exchange_is_not_prefixed() {
    let history = [Exchange::user("", "just text")];
    let req = Request::from_history(&config(), &history);

    assert_eq!(req.messages[1].content, "just text");
}

#[test]
fn history_order_is_preserved() {
    let history: Vec<Exchange> = (0..5)
        .map(|i| Exchange::user("alice", format!("message {i}")))
        .collect();
    let req = Request::from_history(&config(), &history);

    for (i, msg) in req.messages[1..].iter().enumerate() {
        assert_eq!(msg.content, format!("alice: message {i}"));
    }
}

#[test]
fn wire_format_matches_endpoint_contract() {
    let req = Request::from_history(&config(), &[Exchange::user("Alice", "hi")]);
    let value = serde_json::to_value(&req).unwrap();

    assert_eq!(value["model"], "test-model");
    assert_eq!(value["temperature"], 0.5);
    assert_eq!(value["max_tokens"], -1);
    assert_eq!(value["stream"], false);
    assert_eq!(value["messages"][0]["role"], "system");
    assert_eq!(value["messages"][1]["role"], "user");
    assert_eq!(value["messages"][1]["content"], "Alice: hi");
}
