use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::notifications::notification::Notification;

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    // Newest first
    async fn list_for_user(
        &self,
        user_id: Uuid,
        unread_only: bool,
    ) -> anyhow::Result<Vec<Notification>>;

    // false when the notification does not belong to the user
    async fn mark_read(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool>;

    async fn mark_all_read(&self, user_id: Uuid) -> anyhow::Result<u64>;
}
