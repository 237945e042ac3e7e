//! Inbound message triage.

/// Marker that silences a message entirely.
const COMMENT_MARKER: &str = "//";

/// Decide whether an inbound message should get a reply.
///
/// Evaluated in order, short-circuiting: automated authors are dropped
/// first, then `//`-prefixed comments, then anything that neither
/// mentions the bot nor carries the wake word.
pub fn should_react(
    content: &str,
    author_is_automated: bool,
    mentions_bot: bool,
    wake_word: &str,
) -> bool {
    if author_is_automated {
        return false;
    }
    if content.trim_start().starts_with(COMMENT_MARKER) {
        return false;
    }
    mentions_bot || contains_wake_word(content, wake_word)
}

/// Case-insensitive substring match for the wake word.
///
/// A plain substring test: the wake word also fires inside longer words
/// ("tobi" matches "tobionaut").
pub fn contains_wake_word(content: &str, wake_word: &str) -> bool {
    !wake_word.is_empty() && content.to_lowercase().contains(&wake_word.to_lowercase())
}

/// Remove direct mention tokens for the given user id and trim the rest.
///
/// Discord delivers mentions as `<@id>`, or `<@!id>` when the member has
/// a nickname.
pub fn strip_mention(content: &str, user_id: u64) -> String {
    content
        .replace(&format!("<@{user_id}>"), "")
        .replace(&format!("<@!{user_id}>"), "")
        .trim()
        .to_owned()
}
