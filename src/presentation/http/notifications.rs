use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::use_cases::notifications::inbox::{
    ListNotifications, MarkAllNotificationsRead, MarkNotificationRead,
};
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::auth::{Bearer, current_user};

#[derive(Debug, Serialize, ToSchema)]
pub struct NotificationItem {
    pub id: Uuid,
    pub title: String,
    pub body: Option<String>,
    pub read: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NotificationListResponse {
    pub items: Vec<NotificationItem>,
    pub unread: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MarkAllReadResponse {
    pub updated: u64,
}

#[derive(Debug, Deserialize)]
pub struct ListNotificationsQuery {
    pub unread: Option<bool>,
}

#[utoipa::path(get, path = "/api/notifications", tag = "Notifications",
    params(("unread" = Option<bool>, Query, description = "Only unread notifications")),
    responses((status = 200, body = NotificationListResponse)))]
pub async fn list_notifications(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    q: Option<Query<ListNotificationsQuery>>,
) -> Result<Json<NotificationListResponse>, StatusCode> {
    let user_id = current_user(&ctx.cfg, bearer)?;
    let unread_only = q.and_then(|Query(v)| v.unread).unwrap_or(false);
    let repo = ctx.notification_repo();
    let uc = ListNotifications {
        repo: repo.as_ref(),
    };
    let rows = uc.execute(user_id, unread_only).await.map_err(|e| {
        tracing::error!(error = ?e, "list_notifications_failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    let unread = rows.iter().filter(|n| !n.read).count();
    let items = rows
        .into_iter()
        .map(|n| NotificationItem {
            id: n.id,
            title: n.title,
            body: n.body,
            read: n.read,
            created_at: n.created_at,
        })
        .collect();
    Ok(Json(NotificationListResponse { items, unread }))
}

#[utoipa::path(post, path = "/api/notifications/{id}/read", tag = "Notifications",
    params(("id" = Uuid, Path, description = "Notification ID")),
    responses((status = 204, description = "Marked as read"), (status = 404, description = "Not found")))]
pub async fn mark_notification_read(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let user_id = current_user(&ctx.cfg, bearer)?;
    let repo = ctx.notification_repo();
    let uc = MarkNotificationRead {
        repo: repo.as_ref(),
    };
    let found = uc.execute(user_id, id).await.map_err(|e| {
        tracing::error!(error = ?e, "mark_notification_read_failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    if found {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

#[utoipa::path(post, path = "/api/notifications/read-all", tag = "Notifications",
    responses((status = 200, body = MarkAllReadResponse)))]
pub async fn mark_all_notifications_read(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<MarkAllReadResponse>, StatusCode> {
    let user_id = current_user(&ctx.cfg, bearer)?;
    let repo = ctx.notification_repo();
    let uc = MarkAllNotificationsRead {
        repo: repo.as_ref(),
    };
    let updated = uc.execute(user_id).await.map_err(|e| {
        tracing::error!(error = ?e, "mark_all_notifications_read_failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(MarkAllReadResponse { updated }))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/notifications", get(list_notifications))
        .route("/notifications/read-all", post(mark_all_notifications_read))
        .route("/notifications/:id/read", post(mark_notification_read))
        .with_state(ctx)
}
