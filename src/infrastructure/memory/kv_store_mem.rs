use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::application::ports::kv_store::KvStore;

#[derive(Default)]
pub struct InMemoryKvStore {
    entries: RwLock<HashMap<(Uuid, String), serde_json::Value>>,
}

impl InMemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for InMemoryKvStore {
    async fn get(&self, scope_id: Uuid, key: &str) -> anyhow::Result<Option<serde_json::Value>> {
        Ok(self
            .entries
            .read()
            .await
            .get(&(scope_id, key.to_string()))
            .cloned())
    }

    async fn set(
        &self,
        scope_id: Uuid,
        key: &str,
        value: &serde_json::Value,
    ) -> anyhow::Result<()> {
        self.entries
            .write()
            .await
            .insert((scope_id, key.to_string()), value.clone());
        Ok(())
    }
}
