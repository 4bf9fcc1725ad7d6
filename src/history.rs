//! Password history - bounded, ordered log of generated passwords.

use chrono::{DateTime, NaiveDate, Utc};
use secrecy::{ExposeSecret, SecretString};
use uuid::Uuid;

use crate::types::StrengthLabel;

/// Maximum number of entries kept; the oldest are dropped first.
pub const HISTORY_CAPACITY: usize = 20;

const EXPORT_DELIMITER: &str = "\n---\n";

#[derive(Debug)]
pub struct HistoryEntry {
    pub id: String,
    pub password: SecretString,
    pub created_at: DateTime<Utc>,
    pub length: usize,
    /// Display text of the strength label at generation time.
    pub strength: String,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current time and a fresh id.
    pub fn new(password: SecretString, strength: StrengthLabel) -> Self {
        Self::with_timestamp(password, strength.to_string(), Utc::now())
    }

    pub fn with_timestamp(
        password: SecretString,
        strength: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        let length = password.expose_secret().chars().count();
        Self {
            id: Uuid::new_v4().to_string(),
            password,
            created_at,
            length,
            strength,
        }
    }

    fn export_block(&self) -> String {
        format!(
            "Password: {}\nLength: {}\nStrength: {}\nGenerated: {}",
            self.password.expose_secret(),
            self.length,
            self.strength,
            self.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
        )
    }
}

/// Entries in generation order, oldest first.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history from stored entries, keeping only the most recent
    /// `HISTORY_CAPACITY`.
    pub fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        let mut history = Self { entries };
        history.enforce_capacity();
        history
    }

    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
        self.enforce_capacity();
    }

    /// Removes the entry with `id`. Returns `false` if none matched.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The most recent `limit` entries, newest first.
    pub fn list(&self, limit: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().take(limit).collect()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Plain-text dump of the whole history, newest first.
    ///
    /// Not meant to be read back.
    pub fn export(&self) -> String {
        self.entries
            .iter()
            .rev()
            .map(HistoryEntry::export_block)
            .collect::<Vec<_>>()
            .join(EXPORT_DELIMITER)
    }

    fn enforce_capacity(&mut self) {
        if self.entries.len() > HISTORY_CAPACITY {
            let excess = self.entries.len() - HISTORY_CAPACITY;
            self.entries.drain(..excess);
        }
    }
}

/// File name for an export made on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("password-history-{}.txt", date.format("%Y-%m-%d"))
}
