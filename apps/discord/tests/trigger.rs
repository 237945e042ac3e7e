//! Tests for inbound message triage.

use narwhal_discord::{contains_wake_word, should_react, strip_mention};

#[test]
fn automated_author_never_triggers() {
    assert!(!should_react("tobi please respond", true, false, "tobi"));
    assert!(!should_react("anything", true, true, "tobi"));
}

#[test]
fn comment_marker_suppresses_reaction() {
    assert!(!should_react("// ignore me", false, true, "tobi"));
    assert!(!should_react("   // leading spaces too", false, false, "tobi"));
}

#[test]
fn mention_triggers_without_wake_word() {
    assert!(should_react("hey you", false, true, "tobi"));
}

#[test]
fn wake_word_is_case_insensitive() {
    assert!(should_react("TOBI please respond", false, false, "tobi"));
    assert!(should_react("tobi please respond", false, false, "tobi"));
    assert!(should_react("ToBi?", false, false, "tobi"));
}

#[test]
fn wake_word_matches_inside_longer_words() {
    // Substring semantics: this is a known false-positive source.
    assert!(should_react("the tobionaut has landed", false, false, "tobi"));
}

#[test]
fn unrelated_text_does_not_trigger() {
    assert!(!should_react("just chatting", false, false, "tobi"));
}

#[test]
fn empty_wake_word_never_matches() {
    assert!(!contains_wake_word("anything at all", ""));
}

#[test]
fn strip_mention_removes_both_token_forms() {
    assert_eq!(strip_mention("<@42> hello", 42), "hello");
    assert_eq!(strip_mention("<@!42> hello", 42), "hello");
    assert_eq!(strip_mention("hello <@42>", 42), "hello");
}

#[test]
fn strip_mention_leaves_other_ids_alone() {
    assert_eq!(strip_mention("<@99> hello", 42), "<@99> hello");
}
