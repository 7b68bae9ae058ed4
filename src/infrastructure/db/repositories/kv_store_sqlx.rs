use async_trait::async_trait;
use serde_json::Value as JsonValue;
use sqlx::Row;
use uuid::Uuid;

use crate::application::ports::kv_store::KvStore;
use crate::infrastructure::db::PgPool;

pub struct SqlxKvStore {
    pub pool: PgPool,
}

impl SqlxKvStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KvStore for SqlxKvStore {
    async fn get(&self, scope_id: Uuid, key: &str) -> anyhow::Result<Option<JsonValue>> {
        let row = sqlx::query(r#"SELECT value FROM ui_kv WHERE scope_id = $1 AND key = $2"#)
            .bind(scope_id)
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.and_then(|r| r.try_get::<JsonValue, _>("value").ok()))
    }

    async fn set(&self, scope_id: Uuid, key: &str, value: &JsonValue) -> anyhow::Result<()> {
        sqlx::query(
            r#"INSERT INTO ui_kv (scope_id, key, value)
               VALUES ($1, $2, $3)
               ON CONFLICT (scope_id, key)
               DO UPDATE SET value = EXCLUDED.value, updated_at = now()"#,
        )
        .bind(scope_id)
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
