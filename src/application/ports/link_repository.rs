use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::notes::link::Link;

#[async_trait]
pub trait LinkRepository: Send + Sync {
    // Match on the (source, target) pair only; link type is not part of the key.
    async fn find_link_ids(&self, source_id: Uuid, target_id: Uuid) -> anyhow::Result<Vec<Uuid>>;

    async fn insert_link(
        &self,
        source_id: Uuid,
        target_id: Uuid,
        link_type: &str,
    ) -> anyhow::Result<Uuid>;

    // Links whose source or target is in `note_ids`
    async fn links_touching(&self, note_ids: &[Uuid]) -> anyhow::Result<Vec<Link>>;
}
