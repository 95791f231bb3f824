//! History of generated phrases.
//!
//! Rows are written once after a successful generation and then only read back, newest
//! first. The durable owner is the managed datastore ([`crate::datastore::RestHistoryStore`]);
//! [`MemoryHistoryStore`] keeps the same contract in-process for offline runs and tests.

use crate::{MotivateError, MotivateResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

/// One persisted (word, phrases) pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Opaque identifier assigned by the store.
    pub id: String,
    pub word: String,
    /// Newline-delimited phrase block, stored verbatim.
    pub phrases: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload; the store assigns `id` and `created_at`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewHistoryItem {
    pub word: String,
    pub phrases: String,
}

impl NewHistoryItem {
    pub fn new(word: impl Into<String>, phrases: impl Into<String>) -> MotivateResult<Self> {
        let word = word.into();
        if word.trim().is_empty() {
            return Err(MotivateError::InvalidInput(
                "history word cannot be empty".into(),
            ));
        }
        Ok(Self {
            word,
            phrases: phrases.into(),
        })
    }
}

/// Insert-one and read-newest operations over the history table.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Persists `item` and returns the stored row.
    async fn insert(&self, item: NewHistoryItem) -> MotivateResult<HistoryItem>;

    /// Returns at most `limit` rows ordered by `created_at` descending.
    async fn recent(&self, limit: usize) -> MotivateResult<Vec<HistoryItem>>;
}

/// In-process history store.
///
/// Ids are random UUIDs and `created_at` never decreases with insertion order, even if the
/// system clock steps backwards.
#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    rows: Mutex<Vec<HistoryItem>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All rows in insertion order.
    pub async fn rows(&self) -> Vec<HistoryItem> {
        self.rows.lock().await.clone()
    }
}

#[async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn insert(&self, item: NewHistoryItem) -> MotivateResult<HistoryItem> {
        let mut rows = self.rows.lock().await;

        let now = Utc::now();
        let created_at = match rows.last() {
            Some(last) if last.created_at > now => last.created_at,
            _ => now,
        };

        let row = HistoryItem {
            id: uuid::Uuid::new_v4().simple().to_string(),
            word: item.word,
            phrases: item.phrases,
            created_at,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn recent(&self, limit: usize) -> MotivateResult<Vec<HistoryItem>> {
        let rows = self.rows.lock().await;
        Ok(rows.iter().rev().take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn new_item(word: &str) -> NewHistoryItem {
        NewHistoryItem::new(word, format!("{word} one\n{word} two\n{word} three"))
            .expect("item should be valid")
    }

    #[test]
    fn test_new_history_item_requires_word() {
        let result = NewHistoryItem::new("  ", "phrases");
        assert!(matches!(result, Err(MotivateError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_memory_store_insert_returns_row() {
        let store = MemoryHistoryStore::new();
        let row = store
            .insert(new_item("courage"))
            .await
            .expect("insert should succeed");

        assert_eq!(row.word, "courage");
        assert_eq!(row.phrases, "courage one\ncourage two\ncourage three");
        assert_eq!(row.id.len(), 32);
        assert_eq!(store.rows().await, vec![row]);
    }

    #[tokio::test]
    async fn test_memory_store_recent_is_newest_first_and_bounded() {
        let store = MemoryHistoryStore::new();
        for word in ["a", "b", "c", "d", "e", "f", "g"] {
            store.insert(new_item(word)).await.expect("insert should succeed");
        }

        let recent = store.recent(5).await.expect("recent should succeed");
        let words: Vec<&str> = recent.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["g", "f", "e", "d", "c"]);

        for pair in recent.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[tokio::test]
    async fn test_memory_store_ids_are_unique() {
        let store = MemoryHistoryStore::new();
        for _ in 0..20 {
            store.insert(new_item("same")).await.expect("insert should succeed");
        }
        let ids: HashSet<String> = store.rows().await.into_iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_history_item_deserializes_datastore_row() {
        let row: HistoryItem = serde_json::from_str(
            r#"{"id":"3f1c","word":"hope","phrases":"x\ny","created_at":"2024-05-01T10:20:30.123456+00:00"}"#,
        )
        .expect("row should deserialize");
        assert_eq!(row.word, "hope");
        assert_eq!(row.created_at.to_rfc3339(), "2024-05-01T10:20:30.123456+00:00");
    }
}
