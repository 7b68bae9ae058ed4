use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::kv_store::KvStore;

pub const SIDEBAR_COLLAPSED_KEY: &str = "sidebar.collapsed";

/// Sidebar collapse flag for one user, loaded once and written through on
/// every change.
pub struct SidebarState {
    store: Arc<dyn KvStore>,
    user_id: Uuid,
    collapsed: bool,
}

impl SidebarState {
    pub async fn load(store: Arc<dyn KvStore>, user_id: Uuid) -> Self {
        let collapsed = match store.get(user_id, SIDEBAR_COLLAPSED_KEY).await {
            Ok(Some(v)) => v.as_bool().unwrap_or(false),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(error = ?e, %user_id, "sidebar_state_load_failed");
                false
            }
        };
        Self {
            store,
            user_id,
            collapsed,
        }
    }

    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    pub async fn set_collapsed(&mut self, collapsed: bool) -> bool {
        self.collapsed = collapsed;
        if let Err(e) = self
            .store
            .set(
                self.user_id,
                SIDEBAR_COLLAPSED_KEY,
                &serde_json::Value::Bool(collapsed),
            )
            .await
        {
            tracing::warn!(error = ?e, user_id = %self.user_id, "sidebar_state_persist_failed");
        }
        self.collapsed
    }

    pub async fn toggle(&mut self) -> bool {
        let next = !self.collapsed;
        self.set_collapsed(next).await
    }
}
