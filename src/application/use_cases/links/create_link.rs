use uuid::Uuid;

use crate::application::ports::link_repository::LinkRepository;
use crate::domain::notes::link::DEFAULT_LINK_TYPE;

pub struct CreateLink<'a, R: LinkRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: LinkRepository + ?Sized> CreateLink<'a, R> {
    /// Returns the id of the link between `source_id` and `target_id`, creating
    /// it when no link for that pair exists yet. `None` means the link could
    /// not be established; the underlying error has already been logged.
    ///
    /// The lookup and the insert are separate round-trips, so two concurrent
    /// callers for the same pair may both insert.
    pub async fn execute(
        &self,
        source_id: Uuid,
        target_id: Uuid,
        link_type: Option<&str>,
    ) -> Option<Uuid> {
        let link_type = link_type.unwrap_or(DEFAULT_LINK_TYPE);
        match self.repo.find_link_ids(source_id, target_id).await {
            Ok(existing) => {
                if let Some(id) = existing.first() {
                    tracing::debug!(%source_id, %target_id, link_id = %id, "link_exists");
                    return Some(*id);
                }
            }
            Err(e) => {
                tracing::error!(error = ?e, %source_id, %target_id, "link_lookup_failed");
                return None;
            }
        }
        match self.repo.insert_link(source_id, target_id, link_type).await {
            Ok(id) => {
                tracing::debug!(%source_id, %target_id, link_id = %id, link_type, "link_created");
                Some(id)
            }
            Err(e) => {
                tracing::error!(error = ?e, %source_id, %target_id, "link_insert_failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notes::link::Link;
    use crate::infrastructure::memory::InMemoryLinkRepository;
    use async_trait::async_trait;

    #[tokio::test]
    async fn second_call_returns_same_id() {
        let repo = InMemoryLinkRepository::new();
        let uc = CreateLink { repo: &repo };
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());

        let first = uc.execute(a, b, Some("note")).await;
        let second = uc.execute(a, b, Some("note")).await;
        assert!(first.is_some());
        assert_eq!(first, second);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn dedup_ignores_link_type() {
        let repo = InMemoryLinkRepository::new();
        let uc = CreateLink { repo: &repo };
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());

        let first = uc.execute(a, b, None).await;
        let second = uc.execute(a, b, Some("reference")).await;
        assert_eq!(first, second);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn direction_matters() {
        let repo = InMemoryLinkRepository::new();
        let uc = CreateLink { repo: &repo };
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());

        let ab = uc.execute(a, b, None).await;
        let ba = uc.execute(b, a, None).await;
        assert_ne!(ab, ba);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn default_type_is_note() {
        let repo = InMemoryLinkRepository::new();
        let uc = CreateLink { repo: &repo };
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());

        uc.execute(a, b, None).await.unwrap();
        let links = repo.links_touching(&[a]).await.unwrap();
        assert_eq!(links[0].link_type, "note");
    }

    struct FailingInsert;

    #[async_trait]
    impl LinkRepository for FailingInsert {
        async fn find_link_ids(&self, _: Uuid, _: Uuid) -> anyhow::Result<Vec<Uuid>> {
            Ok(vec![])
        }
        async fn insert_link(&self, _: Uuid, _: Uuid, _: &str) -> anyhow::Result<Uuid> {
            anyhow::bail!("insert rejected")
        }
        async fn links_touching(&self, _: &[Uuid]) -> anyhow::Result<Vec<Link>> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn insert_failure_yields_none() {
        let uc = CreateLink {
            repo: &FailingInsert,
        };
        assert_eq!(uc.execute(Uuid::new_v4(), Uuid::new_v4(), None).await, None);
    }
}
