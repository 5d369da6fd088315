//! # Derived-View Filters
//!
//! Pure filters over the in-memory library snapshot. Total, order-preserving,
//! non-mutating; each screen render recomputes from the full snapshot. No
//! index or cache is kept — a personal library is small enough that a single
//! pass per render is fine.

use crate::store::types::LibraryBook;

/// A record counts as finished once its finished timestamp is set.
pub fn is_finished(book: &LibraryBook) -> bool {
    book.finished_reading_at.is_some()
}

/// Started but not yet finished.
pub fn is_in_progress(book: &LibraryBook) -> bool {
    book.started_reading_at.is_some() && book.finished_reading_at.is_none()
}

/// Records owned by `user_id`, in input order.
pub fn owned<'a>(records: &'a [LibraryBook], user_id: &str) -> Vec<&'a LibraryBook> {
    records.iter().filter(|b| b.user_id == user_id).collect()
}

/// Records with a finished-reading timestamp, in input order.
pub fn finished(records: &[LibraryBook]) -> Vec<&LibraryBook> {
    records.iter().filter(|b| is_finished(b)).collect()
}

/// Records started but not finished, in input order.
pub fn in_progress(records: &[LibraryBook]) -> Vec<&LibraryBook> {
    records.iter().filter(|b| is_in_progress(b)).collect()
}

/// Aggregate counts shown on the stats screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingSummary {
    /// Uppercased local part of the user's email ("me@example.com" -> "ME").
    pub greeting: String,
    pub reading: usize,
    pub finished: usize,
}

impl ReadingSummary {
    pub fn for_user(records: &[LibraryBook], user_id: &str, email: &str) -> Self {
        let mine = owned(records, user_id);
        ReadingSummary {
            greeting: email
                .split('@')
                .next()
                .unwrap_or(email)
                .to_uppercase(),
            reading: mine.iter().filter(|b| is_in_progress(b)).count(),
            finished: mine.iter().filter(|b| is_finished(b)).count(),
        }
    }
}
