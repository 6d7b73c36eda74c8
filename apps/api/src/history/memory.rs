use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::history::{HistoryEntry, HistoryLog, MAX_HISTORY_ENTRIES};

#[derive(Default)]
pub struct MemoryHistory {
    entries: Mutex<HashMap<Uuid, Vec<HistoryEntry>>>,
}

#[async_trait]
impl HistoryLog for MemoryHistory {
    async fn record_visit(&self, user_id: Uuid, path: &str) -> Result<bool, AppError> {
        let mut all = self.entries.lock().unwrap();
        let list = all.entry(user_id).or_default();
        if list.first().is_some_and(|e| e.path == path) {
            return Ok(false);
        }
        list.insert(0, HistoryEntry::new(path));
        list.truncate(MAX_HISTORY_ENTRIES);
        Ok(true)
    }

    async fn list(&self, user_id: Uuid) -> Result<Vec<HistoryEntry>, AppError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn clear(&self, user_id: Uuid) -> Result<(), AppError> {
        self.entries.lock().unwrap().remove(&user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_consecutive_repeats_are_skipped() {
        let log = MemoryHistory::default();
        let user = Uuid::new_v4();
        assert!(log.record_visit(user, "/dashboard").await.unwrap());
        assert!(!log.record_visit(user, "/dashboard").await.unwrap());
        assert!(log.record_visit(user, "/history").await.unwrap());
        assert!(log.record_visit(user, "/dashboard").await.unwrap());

        let paths: Vec<String> = log.list(user).await.unwrap().into_iter().map(|e| e.path).collect();
        assert_eq!(paths, vec!["/dashboard", "/history", "/dashboard"]);
    }

    #[tokio::test]
    async fn test_list_is_capped() {
        let log = MemoryHistory::default();
        let user = Uuid::new_v4();
        for i in 0..60 {
            log.record_visit(user, &format!("/page-{i}")).await.unwrap();
        }
        let entries = log.list(user).await.unwrap();
        assert_eq!(entries.len(), MAX_HISTORY_ENTRIES);
        assert_eq!(entries[0].path, "/page-59");
        assert_eq!(entries[0].title, "page 59");
    }

    #[tokio::test]
    async fn test_clear_is_per_user() {
        let log = MemoryHistory::default();
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        log.record_visit(a, "/").await.unwrap();
        log.record_visit(b, "/").await.unwrap();
        log.clear(a).await.unwrap();
        assert!(log.list(a).await.unwrap().is_empty());
        assert_eq!(log.list(b).await.unwrap()[0].title, "Home");
    }
}
