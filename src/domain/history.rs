//! Search history model.
//!
//! [`HistoryLog`] is a bounded, deduplicated, most-recent-first record of
//! past successful queries. It serializes as a plain JSON array of
//! [`HistoryEntry`] objects.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of remembered queries.
pub const MAX_HISTORY_ITEMS: usize = 5;

/// One remembered query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub query: String,

    /// ISO-8601 UTC timestamp with millisecond precision, e.g.
    /// `2026-10-14T09:30:00.000Z`.
    pub timestamp: String,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(query: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            query: query.into(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Ordered query log. Entries are unique by `query` and capped at
/// [`MAX_HISTORY_ITEMS`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog(Vec<HistoryEntry>);

impl HistoryLog {
    /// Builds a log from arbitrary entries, dropping later duplicates and
    /// anything beyond the cap.
    #[must_use]
    pub fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        let mut kept: Vec<HistoryEntry> = Vec::with_capacity(MAX_HISTORY_ITEMS);
        for entry in entries {
            if kept.len() == MAX_HISTORY_ITEMS {
                break;
            }
            if kept.iter().all(|e| e.query != entry.query) {
                kept.push(entry);
            }
        }
        Self(kept)
    }

    /// Moves `entry` to the front, replacing any entry with the same query.
    pub fn push_front(&mut self, entry: HistoryEntry) {
        self.0.retain(|e| e.query != entry.query);
        self.0.insert(0, entry);
        self.0.truncate(MAX_HISTORY_ITEMS);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.0
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.0.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Query strings, most recent first.
    pub fn queries(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.query.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(second: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 14, 12, 0, second).unwrap()
    }

    #[test]
    fn timestamp_uses_millisecond_iso_format() {
        let entry = HistoryEntry::new("alien", at(7));
        assert_eq!(entry.timestamp, "2026-10-14T12:00:07.000Z");
    }

    #[test]
    fn duplicate_query_moves_to_front() {
        let mut log = HistoryLog::default();
        log.push_front(HistoryEntry::new("alien", at(1)));
        log.push_front(HistoryEntry::new("matrix", at(2)));
        log.push_front(HistoryEntry::new("alien", at(3)));

        assert_eq!(
            log.entries(),
            &[HistoryEntry::new("alien", at(3)), HistoryEntry::new("matrix", at(2))]
        );
    }

    #[test]
    fn oldest_entry_falls_off_past_cap() {
        let mut log = HistoryLog::default();
        for i in 1..=6 {
            log.push_front(HistoryEntry::new(format!("q{i}"), at(i)));
        }
        let queries: Vec<&str> = log.queries().collect();
        assert_eq!(queries, vec!["q6", "q5", "q4", "q3", "q2"]);
    }

    #[test]
    fn from_entries_normalizes_bad_logs() {
        let entries = vec![
            HistoryEntry::new("a", at(9)),
            HistoryEntry::new("b", at(8)),
            HistoryEntry::new("a", at(7)),
            HistoryEntry::new("c", at(6)),
            HistoryEntry::new("d", at(5)),
            HistoryEntry::new("e", at(4)),
            HistoryEntry::new("f", at(3)),
        ];
        let log = HistoryLog::from_entries(entries);
        let queries: Vec<&str> = log.queries().collect();
        assert_eq!(queries, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn queries_are_case_sensitive() {
        let mut log = HistoryLog::default();
        log.push_front(HistoryEntry::new("Alien", at(1)));
        log.push_front(HistoryEntry::new("alien", at(2)));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn serializes_as_plain_array() {
        let mut log = HistoryLog::default();
        log.push_front(HistoryEntry::new("heat", at(0)));
        let json = serde_json::to_string(&log).unwrap();
        assert_eq!(json, r#"[{"query":"heat","timestamp":"2026-10-14T12:00:00.000Z"}]"#);
    }
}
