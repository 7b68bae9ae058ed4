use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::application::ports::notification_repository::NotificationRepository;
use crate::domain::notifications::notification::Notification;

#[derive(Default)]
pub struct InMemoryNotificationRepository {
    items: RwLock<Vec<Notification>>,
}

impl InMemoryNotificationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // Notifications are written by other services; tests seed the inbox directly
    #[cfg(test)]
    pub(crate) async fn push(&self, user_id: Uuid, title: &str, body: Option<&str>) -> Notification {
        let n = Notification {
            id: Uuid::new_v4(),
            user_id,
            title: title.to_string(),
            body: body.map(str::to_string),
            read: false,
            created_at: chrono::Utc::now(),
        };
        self.items.write().await.push(n.clone());
        n
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    async fn list_for_user(
        &self,
        user_id: Uuid,
        unread_only: bool,
    ) -> anyhow::Result<Vec<Notification>> {
        let items = self.items.read().await;
        // stored oldest first
        Ok(items
            .iter()
            .rev()
            .filter(|n| n.user_id == user_id && (!unread_only || !n.read))
            .cloned()
            .collect())
    }

    async fn mark_read(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|n| n.id == id && n.user_id == user_id) {
            Some(n) => {
                n.read = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn mark_all_read(&self, user_id: Uuid) -> anyhow::Result<u64> {
        let mut items = self.items.write().await;
        let mut updated = 0;
        for n in items.iter_mut().filter(|n| n.user_id == user_id && !n.read) {
            n.read = true;
            updated += 1;
        }
        Ok(updated)
    }
}
