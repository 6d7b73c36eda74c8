use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::history::{HistoryEntry, HistoryLog, MAX_HISTORY_ENTRIES};

/// Pushes ARGV[2] unless the head entry already has path ARGV[1], then caps
/// the list at ARGV[3]. Returns 1 when pushed. Runs atomically on the server.
const RECORD_VISIT_LUA: &str = r#"
local head = redis.call('LINDEX', KEYS[1], 0)
if head then
  local ok, entry = pcall(cjson.decode, head)
  if ok and type(entry) == 'table' and entry.path == ARGV[1] then
    return 0
  end
end
redis.call('LPUSH', KEYS[1], ARGV[2])
redis.call('LTRIM', KEYS[1], 0, tonumber(ARGV[3]) - 1)
return 1
"#;

/// History kept in a Redis list per user, newest at the head.
pub struct RedisHistory {
    client: redis::Client,
    record_visit: redis::Script,
}

impl RedisHistory {
    pub fn new(client: redis::Client) -> Self {
        Self {
            client,
            record_visit: redis::Script::new(RECORD_VISIT_LUA),
        }
    }

    fn key(user_id: Uuid) -> String {
        format!("folio:history:{user_id}")
    }

    async fn connection(&self) -> Result<redis::aio::MultiplexedConnection, AppError> {
        Ok(self.client.get_multiplexed_async_connection().await?)
    }
}

#[async_trait]
impl HistoryLog for RedisHistory {
    async fn record_visit(&self, user_id: Uuid, path: &str) -> Result<bool, AppError> {
        let key = Self::key(user_id);
        let mut conn = self.connection().await?;

        let entry = serde_json::to_string(&HistoryEntry::new(path))
            .map_err(|e| AppError::Internal(e.into()))?;
        let pushed: i32 = self
            .record_visit
            .key(&key)
            .arg(path)
            .arg(entry)
            .arg(MAX_HISTORY_ENTRIES)
            .invoke_async(&mut conn)
            .await?;
        if pushed == 0 {
            debug!("Skipping repeat visit to {path} for user {user_id}");
        }
        Ok(pushed == 1)
    }

    async fn list(&self, user_id: Uuid) -> Result<Vec<HistoryEntry>, AppError> {
        let mut conn = self.connection().await?;
        let raw: Vec<String> = conn.lrange(Self::key(user_id), 0, -1).await?;
        Ok(raw
            .iter()
            .filter_map(|item| match serde_json::from_str(item) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Dropping unreadable history entry for user {user_id}: {e}");
                    None
                }
            })
            .collect())
    }

    async fn clear(&self, user_id: Uuid) -> Result<(), AppError> {
        let mut conn = self.connection().await?;
        conn.del::<_, ()>(Self::key(user_id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_entry_exposes_path_for_dedup() {
        let entry = serde_json::to_string(&HistoryEntry::new("/dashboard")).unwrap();
        let decoded: serde_json::Value = serde_json::from_str(&entry).unwrap();
        assert_eq!(decoded["path"], "/dashboard");
        assert!(RECORD_VISIT_LUA.contains("entry.path == ARGV[1]"));
        assert!(RECORD_VISIT_LUA.contains("LTRIM"));
    }

    #[test]
    fn test_key_is_per_user() {
        let user = Uuid::nil();
        assert_eq!(RedisHistory::key(user), format!("folio:history:{user}"));
    }
}
