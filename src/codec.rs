//! Permissive CSV line codec.
//!
//! One record per line: `handle,follower_count,"comment",date_last_modified`.
//! The comment is always quoted on output but embedded quotes are never
//! escaped, so the reader runs a tolerant, non-RFC dialect that matches this
//! exact writer:
//!
//! 1. handle: text before the first `,`.
//! 2. follower count: text before the next `,`, parsed as a digit prefix
//!    (0 when no digits are present).
//! 3. comment: text between the first pair of `"` delimiters.
//! 4. if text remains between the closing `"` and the next `,`, it is glued
//!    back onto the comment with a `,` reinserted. A comment holding a
//!    literal quote splits at that quote when reread; the fragment up to the
//!    next comma is what this step recovers.
//! 5. timestamp: text after the last remaining `,`, parsed as a digit
//!    prefix.
//!
//! Missing fields default to empty/zero; a line never fails to parse. Step 4
//! can still misparse comments that mix a literal `"` with several commas —
//! that is a property of the format, kept so the writer and reader stay in
//! lockstep.

use crate::types::{Comment, Handle, Record, Timestamp};

/// Parse one line into a record. Never fails; absent or malformed fields
/// land on their zero values and oversized text is clipped by the bounded
/// types.
pub fn parse_line(line: &str) -> Record {
    let (handle, rest) = split_field(line);
    let (count, rest) = split_field(rest);
    let (comment, rest) = take_comment(rest);

    Record {
        handle: Handle::new(handle),
        follower_count: parse_unsigned(count),
        comment: Comment::new(comment),
        date_last_modified: Timestamp(parse_unsigned(last_field(rest))),
    }
}

/// Serialize a record in the fixed field order, newline-terminated. The
/// comment is quoted; embedded quotes are not escaped.
pub fn format_record(record: &Record) -> String {
    format!(
        "{},{},\"{}\",{}\n",
        record.handle, record.follower_count, record.comment, record.date_last_modified
    )
}

/// Text before the first `,` and everything after it (whole text and empty
/// rest when there is none).
fn split_field(text: &str) -> (&str, &str) {
    match text.find(',') {
        Some(i) => (&text[..i], &text[i + 1..]),
        None => (text, ""),
    }
}

/// Text after the last `,`, or the whole text without one.
fn last_field(text: &str) -> &str {
    match text.rfind(',') {
        Some(i) => &text[i + 1..],
        None => text,
    }
}

/// The quoted comment plus the unconsumed tail.
fn take_comment(text: &str) -> (String, &str) {
    let Some(open) = text.find('"') else {
        // No quoted section at all; the comment stays empty.
        return (String::new(), text);
    };
    let body = &text[open + 1..];
    let Some(close) = body.find('"') else {
        // Unterminated quote: the rest of the line is the comment.
        return (body.to_owned(), "");
    };
    let quoted = &body[..close];
    let tail = &body[close + 1..];
    if tail.is_empty() || tail.starts_with(',') {
        return (quoted.to_owned(), tail);
    }
    // A fragment between the closing quote and the next comma belongs to the
    // comment; the separating comma it lost is reconstructed.
    let (fragment, rest) = split_field(tail);
    (format!("{quoted},{fragment}"), rest)
}

/// Digit-prefix parse after optional leading whitespace; 0 when no digits
/// are present, saturating on overflow.
fn parse_unsigned(text: &str) -> u64 {
    text.trim_start()
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .fold(0u64, |acc, b| {
            acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_line() {
        let record = parse_line("bob,7,\"steady growth\",1700000000");
        assert_eq!(record.handle, "bob");
        assert_eq!(record.follower_count, 7);
        assert_eq!(record.comment, "steady growth");
        assert_eq!(record.date_last_modified, Timestamp(1700000000));
    }

    #[test]
    fn test_parse_comment_with_embedded_comma() {
        let record = parse_line("alice,42,\"hello, world\",1000");
        assert_eq!(record.handle, "alice");
        assert_eq!(record.follower_count, 42);
        assert_eq!(record.comment, "hello, world");
        assert_eq!(record.date_last_modified, Timestamp(1000));
    }

    #[test]
    fn test_parse_line_without_commas() {
        let record = parse_line("bob");
        assert_eq!(record.handle, "bob");
        assert_eq!(record.follower_count, 0);
        assert_eq!(record.comment, "");
        assert_eq!(record.date_last_modified, Timestamp(0));
    }

    #[test]
    fn test_parse_partial_line() {
        let record = parse_line("bob,5");
        assert_eq!(record.handle, "bob");
        assert_eq!(record.follower_count, 5);
        assert_eq!(record.comment, "");
        assert_eq!(record.date_last_modified, Timestamp(0));
    }

    #[test]
    fn test_parse_count_reads_digit_prefix() {
        let record = parse_line("bob,12abc,\"x\",9");
        assert_eq!(record.follower_count, 12);
        assert_eq!(record.date_last_modified, Timestamp(9));
    }

    #[test]
    fn test_parse_non_numeric_count_defaults_to_zero() {
        let record = parse_line("bob,lots,\"x\",9");
        assert_eq!(record.follower_count, 0);
    }

    #[test]
    fn test_parse_empty_quoted_comment() {
        let record = parse_line("bob,5,\"\",9");
        assert_eq!(record.comment, "");
        assert_eq!(record.date_last_modified, Timestamp(9));
    }

    #[test]
    fn test_parse_unterminated_quote_runs_to_end_of_line() {
        let record = parse_line("bob,5,\"no closing quote");
        assert_eq!(record.comment, "no closing quote");
        assert_eq!(record.date_last_modified, Timestamp(0));
    }

    #[test]
    fn test_parse_reconstructs_fragment_after_embedded_quote() {
        // A comment of `a"b,c` is written as `"a"b,c"`; rereading splits at
        // the embedded quote, glues the fragment back with a comma, and
        // leaves whatever follows the fragment's comma to the timestamp
        // step. Lossy, but deterministic.
        let record = parse_line("x,1,\"a\"b,c\",99");
        assert_eq!(record.comment, "a,b");
        assert_eq!(record.date_last_modified, Timestamp(99));
    }

    #[test]
    fn test_parse_truncates_oversized_fields() {
        let line = format!("{},5,\"{}\",9", "h".repeat(100), "c".repeat(100));
        let record = parse_line(&line);
        assert_eq!(record.handle.len(), 31);
        assert_eq!(record.comment.len(), 63);
    }

    #[test]
    fn test_parse_empty_line() {
        let record = parse_line("");
        assert_eq!(record.handle, "");
        assert_eq!(record.follower_count, 0);
        assert_eq!(record.comment, "");
        assert_eq!(record.date_last_modified, Timestamp(0));
    }

    #[test]
    fn test_format_fixed_field_order() {
        let record = Record {
            handle: Handle::new("alice"),
            follower_count: 42,
            comment: Comment::new("hello, world"),
            date_last_modified: Timestamp(1000),
        };
        assert_eq!(format_record(&record), "alice,42,\"hello, world\",1000\n");
    }

    #[test]
    fn test_format_does_not_escape_quotes() {
        let record = Record {
            handle: Handle::new("x"),
            follower_count: 1,
            comment: Comment::new("say \"hi\""),
            date_last_modified: Timestamp(5),
        };
        assert_eq!(format_record(&record), "x,1,\"say \"hi\"\",5\n");
    }

    #[test]
    fn test_round_trip_with_commas_in_comment() {
        let record = Record {
            handle: Handle::new("carol"),
            follower_count: 9000,
            comment: Comment::new("one, two, three"),
            date_last_modified: Timestamp(123456),
        };
        let line = format_record(&record);
        assert_eq!(parse_line(line.trim_end()), record);
    }

    #[test]
    fn test_parse_unsigned_conventions() {
        assert_eq!(parse_unsigned(""), 0);
        assert_eq!(parse_unsigned("  42"), 42);
        assert_eq!(parse_unsigned("42 "), 42);
        assert_eq!(parse_unsigned("4x2"), 4);
        assert_eq!(parse_unsigned("x42"), 0);
        assert_eq!(parse_unsigned("99999999999999999999999999"), u64::MAX);
    }
}
