//! Best-matching line selection

use crate::text::split_lines;

/// Pick the line that mentions the most distinct query tokens.
///
/// A token counts for a line when it occurs as a substring of the
/// lower-cased line, so this is a presence count rather than the multiset
/// overlap used for document scoring. The earliest line wins ties. Returns
/// the 1-based line number and the trimmed line truncated to `max_chars`
/// characters; content without lines yields `(1, "")`.
pub fn best_line(content: &str, distinct_tokens: &[&str], max_chars: usize) -> (usize, String) {
    let mut best: Option<(usize, usize, &str)> = None;

    for (idx, line) in split_lines(content).enumerate() {
        let lowered = line.to_lowercase();
        let hits = distinct_tokens
            .iter()
            .filter(|token| lowered.contains(**token))
            .count();
        if best.is_none_or(|(_, best_hits, _)| hits > best_hits) {
            best = Some((idx, hits, line));
        }
    }

    match best {
        Some((idx, _, line)) => (idx + 1, truncate_chars(line.trim(), max_chars)),
        None => (1, String::new()),
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}
