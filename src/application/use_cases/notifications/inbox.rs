use uuid::Uuid;

use crate::application::ports::notification_repository::NotificationRepository;
use crate::domain::notifications::notification::Notification;

pub struct ListNotifications<'a, R: NotificationRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: NotificationRepository + ?Sized> ListNotifications<'a, R> {
    pub async fn execute(&self, user_id: Uuid, unread_only: bool) -> anyhow::Result<Vec<Notification>> {
        self.repo.list_for_user(user_id, unread_only).await
    }
}

pub struct MarkNotificationRead<'a, R: NotificationRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: NotificationRepository + ?Sized> MarkNotificationRead<'a, R> {
    pub async fn execute(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        self.repo.mark_read(user_id, id).await
    }
}

pub struct MarkAllNotificationsRead<'a, R: NotificationRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: NotificationRepository + ?Sized> MarkAllNotificationsRead<'a, R> {
    pub async fn execute(&self, user_id: Uuid) -> anyhow::Result<u64> {
        self.repo.mark_all_read(user_id).await
    }
}
