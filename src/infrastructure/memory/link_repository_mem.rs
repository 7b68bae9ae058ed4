use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::application::ports::link_repository::LinkRepository;
use crate::domain::notes::link::Link;

#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: RwLock<Vec<Link>>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.links.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.links.read().await.is_empty()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn find_link_ids(&self, source_id: Uuid, target_id: Uuid) -> anyhow::Result<Vec<Uuid>> {
        Ok(self
            .links
            .read()
            .await
            .iter()
            .filter(|l| l.source_id == source_id && l.target_id == target_id)
            .map(|l| l.id)
            .collect())
    }

    async fn insert_link(
        &self,
        source_id: Uuid,
        target_id: Uuid,
        link_type: &str,
    ) -> anyhow::Result<Uuid> {
        let id = Uuid::new_v4();
        self.links.write().await.push(Link {
            id,
            source_id,
            target_id,
            link_type: link_type.to_string(),
        });
        Ok(id)
    }

    async fn links_touching(&self, note_ids: &[Uuid]) -> anyhow::Result<Vec<Link>> {
        Ok(self
            .links
            .read()
            .await
            .iter()
            .filter(|l| note_ids.contains(&l.source_id) || note_ids.contains(&l.target_id))
            .cloned()
            .collect())
    }
}
