//! Column-formatted record listing.

use crate::store::Store;
use crate::types::Timestamp;
use std::fmt::Write;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

const HANDLE_WIDTH: usize = 20;
const FOLLOWERS_WIDTH: usize = 10;
const MODIFIED_WIDTH: usize = 20;
const COMMENT_WIDTH: usize = 30;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");

/// Render the whole store as a fixed-width table, header included.
///
/// Handles and comments are clipped to their column widths; follower counts
/// are right-aligned. Rows come out in insertion order.
pub fn render_table(store: &Store) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<HANDLE_WIDTH$} | {:<FOLLOWERS_WIDTH$} | {:<MODIFIED_WIDTH$} | {:<COMMENT_WIDTH$}",
        "HANDLE", "FOLLOWERS", "LAST MODIFIED", "COMMENT"
    );
    let _ = writeln!(
        out,
        "{}|{}|{}|{}",
        "-".repeat(HANDLE_WIDTH + 1),
        "-".repeat(FOLLOWERS_WIDTH + 2),
        "-".repeat(MODIFIED_WIDTH + 2),
        "-".repeat(COMMENT_WIDTH + 2),
    );

    for record in store {
        let _ = writeln!(
            out,
            "{:<HANDLE_WIDTH$.HANDLE_WIDTH$} | {:>FOLLOWERS_WIDTH$} | {:<MODIFIED_WIDTH$} | {:<COMMENT_WIDTH$.COMMENT_WIDTH$}",
            record.handle.as_str(),
            record.follower_count,
            format_timestamp(record.date_last_modified),
            record.comment.as_str(),
        );
    }

    out
}

/// `YYYY-MM-DD HH:MM` in UTC; raw seconds when the value is unrepresentable.
fn format_timestamp(timestamp: Timestamp) -> String {
    OffsetDateTime::from_unix_timestamp(timestamp.0 as i64)
        .ok()
        .and_then(|moment| moment.format(DATE_FORMAT).ok())
        .unwrap_or_else(|| timestamp.0.to_string())
}
