//! Reply chunking for the platform message length limit.

/// Discord's maximum message length in characters.
pub const MESSAGE_LIMIT: usize = 2000;

/// Split reply text into consecutive chunks of at most [`MESSAGE_LIMIT`]
/// characters.
///
/// Slices at fixed character positions with no regard for word or
/// sentence boundaries. Character-based rather than byte-based so
/// multibyte text never splits inside a code point.
pub fn chunk_reply(text: &str) -> Vec<String> {
    if text.chars().count() <= MESSAGE_LIMIT {
        return vec![text.to_owned()];
    }

    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(MESSAGE_LIMIT)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
