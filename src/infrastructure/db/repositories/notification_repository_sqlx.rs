use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::notification_repository::NotificationRepository;
use crate::domain::notifications::notification::Notification;
use crate::infrastructure::db::PgPool;

pub struct SqlxNotificationRepository {
    pub pool: PgPool,
}

impl SqlxNotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_notification(r: PgRow) -> Notification {
    Notification {
        id: r.get("id"),
        user_id: r.get("user_id"),
        title: r.get("title"),
        body: r.get("body"),
        read: r.get("read"),
        created_at: r.get("created_at"),
    }
}

#[async_trait]
impl NotificationRepository for SqlxNotificationRepository {
    async fn list_for_user(
        &self,
        user_id: Uuid,
        unread_only: bool,
    ) -> anyhow::Result<Vec<Notification>> {
        let rows = sqlx::query(
            r#"SELECT id, user_id, title, body, read, created_at
               FROM notifications
               WHERE user_id = $1 AND ($2 = false OR read = false)
               ORDER BY created_at DESC"#,
        )
        .bind(user_id)
        .bind(unread_only)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(map_notification).collect())
    }

    async fn mark_read(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"UPDATE notifications SET read = true WHERE id = $1 AND user_id = $2"#,
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn mark_all_read(&self, user_id: Uuid) -> anyhow::Result<u64> {
        let res = sqlx::query(
            r#"UPDATE notifications SET read = true WHERE user_id = $1 AND read = false"#,
        )
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected())
    }
}
