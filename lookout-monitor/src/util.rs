//! Text windowing utilities shared by the extractors.
//!
//! All window math is character-based so multi-byte content can never split
//! a UTF-8 boundary, while byte offsets stay valid for the match positions
//! the regex engine reports.

/// Slice up to `chars` characters ending at byte offset `end`.
pub(crate) fn window_before(content: &str, end: usize, chars: usize) -> &str {
    let start = content[..end]
        .char_indices()
        .rev()
        .nth(chars.saturating_sub(1))
        .map_or(0, |(i, _)| i);
    &content[start..end]
}

/// Slice up to `take` characters starting `skip` characters past byte
/// offset `start`.
pub(crate) fn char_window(content: &str, start: usize, skip: usize, take: usize) -> &str {
    let tail = &content[start..];
    let begin = match tail.char_indices().nth(skip) {
        Some((i, _)) => i,
        None => return "",
    };
    let slice = &tail[begin..];
    match slice.char_indices().nth(take) {
        Some((i, _)) => &slice[..i],
        None => slice,
    }
}
