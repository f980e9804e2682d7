//! Row-to-model conversion. Corrupt columns are logged and replaced with
//! defaults rather than failing the whole listing.

use bookwish_db::models::{ReviewRow, UserRow, WishlistRow};
use bookwish_types::{Review, User, WishlistEntry};
use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::warn;
use uuid::Uuid;

pub(crate) fn parse_uuid(raw: &str, column: &str, row_id: &str) -> Uuid {
    raw.parse().unwrap_or_else(|e| {
        warn!("Corrupt {} '{}' on row '{}': {}", column, raw, row_id, e);
        Uuid::default()
    })
}

/// SQLite's `datetime('now')` yields "YYYY-MM-DD HH:MM:SS" in UTC without a zone.
pub(crate) fn parse_timestamp(raw: &str, row_id: &str) -> DateTime<Utc> {
    raw.parse::<DateTime<Utc>>()
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc()))
        .unwrap_or_else(|e| {
            warn!("Corrupt created_at '{}' on row '{}': {}", raw, row_id, e);
            DateTime::default()
        })
}

pub(crate) fn user(row: UserRow) -> User {
    User {
        id: parse_uuid(&row.id, "id", &row.id),
        created_at: parse_timestamp(&row.created_at, &row.id),
        username: row.username,
    }
}

pub(crate) fn wishlist_entry(row: WishlistRow) -> WishlistEntry {
    WishlistEntry {
        id: parse_uuid(&row.id, "id", &row.id),
        user_id: parse_uuid(&row.user_id, "user_id", &row.id),
        created_at: parse_timestamp(&row.created_at, &row.id),
        title: row.title,
        author: row.author,
    }
}

pub(crate) fn review(row: ReviewRow) -> Review {
    Review {
        id: parse_uuid(&row.id, "id", &row.id),
        user_id: parse_uuid(&row.user_id, "user_id", &row.id),
        created_at: parse_timestamp(&row.created_at, &row.id),
        username: row.username,
        title: row.title,
        author: row.author,
        body: row.body,
    }
}
