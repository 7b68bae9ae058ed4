use async_trait::async_trait;
use uuid::Uuid;

/// Key-value persistence slot for per-user UI state.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, scope_id: Uuid, key: &str) -> anyhow::Result<Option<serde_json::Value>>;
    async fn set(&self, scope_id: Uuid, key: &str, value: &serde_json::Value)
    -> anyhow::Result<()>;
}
