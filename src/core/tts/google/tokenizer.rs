//! Splits input text into request-sized chunks.
//!
//! The translate endpoint rejects long inputs, so text is cut after
//! sentence and clause punctuation and the resulting segments are packed
//! into chunks of at most `max_chars` characters. Lengths are counted in
//! `char`s, never bytes, so Bengali and Devanagari text is measured the same
//! way as Latin text.

/// Marks that end a segment wherever they appear
const HARD_PUNCTUATION: &[char] = &['।', '॥', '？', '！', '。', '，', '、', '：', '；', '\n'];

/// Marks that end a segment only when followed by whitespace or the end of
/// the text, so `3.14`, `1,000` and `12:30` stay whole
const SOFT_PUNCTUATION: &[char] = &['.', ',', '?', '!', ';', ':', '…', '‥', '—', '،'];

/// True when the chunk contains something the engine can pronounce
fn is_speakable(chunk: &str) -> bool {
    chunk.chars().any(char::is_alphanumeric)
}

/// Cut text after every split point, keeping the punctuation
fn split_segments(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        let next = chars.peek().map(|&(_, n)| n);
        let split = HARD_PUNCTUATION.contains(&c)
            || (SOFT_PUNCTUATION.contains(&c) && next.is_none_or(char::is_whitespace));
        if split {
            let end = idx + c.len_utf8();
            segments.push(&text[start..end]);
            start = end;
        }
    }
    if start < text.len() {
        segments.push(&text[start..]);
    }
    segments
}

/// Break a segment longer than `max_chars` at the last whitespace before the
/// limit, or exactly at the limit when there is none
fn split_long(segment: &str, max_chars: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut rest = segment;

    while rest.chars().count() > max_chars {
        let byte_at = |n: usize| {
            rest.char_indices()
                .nth(n)
                .map(|(idx, _)| idx)
                .unwrap_or(rest.len())
        };
        let limit = byte_at(max_chars);
        // Whitespace sitting exactly at the limit is still a valid cut
        let head = &rest[..byte_at(max_chars + 1)];
        let cut = match head.rfind(char::is_whitespace) {
            Some(idx) if idx > 0 => idx,
            _ => limit,
        };
        pieces.push(rest[..cut].trim_end().to_string());
        rest = rest[cut..].trim_start();
    }

    if !rest.is_empty() {
        pieces.push(rest.to_string());
    }
    pieces
}

/// Split `text` into chunks of at most `max_chars` characters.
///
/// Chunks that are empty or contain only punctuation are dropped, so the
/// result is empty when there is nothing to speak.
pub fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);

    // Text that already fits is sent exactly as typed
    let trimmed = text.trim();
    if trimmed.chars().count() <= max_chars {
        return if is_speakable(trimmed) {
            vec![trimmed.to_string()]
        } else {
            Vec::new()
        };
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for segment in split_segments(text) {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        for piece in split_long(segment, max_chars) {
            let piece_len = piece.chars().count();
            if current_len == 0 {
                current = piece;
                current_len = piece_len;
            } else if current_len + 1 + piece_len <= max_chars {
                current.push(' ');
                current.push_str(&piece);
                current_len += 1 + piece_len;
            } else {
                chunks.push(std::mem::take(&mut current));
                current = piece;
                current_len = piece_len;
            }
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks.retain(|chunk| is_speakable(chunk));
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_sent_verbatim() {
        for text in [
            "Hello world",
            "The price is 3.14 rupees",
            "Meet me at 12:30, not later.",
            "Population: 1,000 people",
            "আমি ৩.৫ কেজি চাল কিনেছি।",
        ] {
            assert_eq!(split_text(text, 100), vec![text]);
        }
        assert_eq!(split_text("  padded text \n", 100), vec!["padded text"]);
    }

    #[test]
    fn test_blank_and_punctuation_only_text_yields_nothing() {
        assert!(split_text("", 100).is_empty());
        assert!(split_text("   \n\t ", 100).is_empty());
        assert!(split_text("... !!! ।", 100).is_empty());
        assert!(split_text(&".".repeat(150), 100).is_empty());
    }

    #[test]
    fn test_sentences_are_packed_up_to_limit() {
        assert_eq!(
            split_text("One. Two. Three.", 9),
            vec!["One. Two.", "Three."]
        );
    }

    #[test]
    fn test_numbers_are_not_split_in_long_text() {
        let text = "The total is 1,000.50 rupees at 12:30. Pay 3.14 now.";
        let chunks = split_text(text, 40);
        assert_eq!(
            chunks,
            vec!["The total is 1,000.50 rupees at 12:30.", "Pay 3.14 now."]
        );
    }

    #[test]
    fn test_long_segment_splits_on_whitespace() {
        let text = "aaaa bbbb cccc";
        assert_eq!(split_text(text, 9), vec!["aaaa bbbb", "cccc"]);
        assert_eq!(split_text(text, 4), vec!["aaaa", "bbbb", "cccc"]);
    }

    #[test]
    fn test_word_longer_than_limit_is_hard_split() {
        assert_eq!(split_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_limit_counts_characters_not_bytes() {
        // Each Bengali letter is three bytes in UTF-8
        let text = "আমি বাংলায় গান গাই। আমি বাংলার গান গাই।";
        let chunks = split_text(text, 20);
        assert_eq!(chunks, vec!["আমি বাংলায় গান গাই।", "আমি বাংলার গান গাই।"]);
    }

    #[test]
    fn test_danda_is_a_split_point() {
        let chunks = split_text("नमस्ते। आप कैसे हैं?", 8);
        assert_eq!(chunks[0], "नमस्ते।");
    }

    #[test]
    fn test_no_chunk_exceeds_default_limit() {
        let sentence = "The quick brown fox jumps over the lazy dog, again and again";
        let text = std::iter::repeat(sentence)
            .take(12)
            .collect::<Vec<_>>()
            .join(" ");

        let chunks = split_text(&text, 100);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 100);
        }
        // Every cut falls on a single space, so joining restores the input
        assert_eq!(chunks.join(" "), text);
    }
}
