use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::notes::note::Note;

#[async_trait]
pub trait NoteRepository: Send + Sync {
    async fn list_for_owner(&self, owner_id: Uuid) -> anyhow::Result<Vec<Note>>;

    async fn create_for_owner(
        &self,
        owner_id: Uuid,
        title: &str,
        content: &str,
    ) -> anyhow::Result<Note>;

    // Returns None when the note does not exist for this owner
    async fn update_content_for_owner(
        &self,
        id: Uuid,
        owner_id: Uuid,
        content: &str,
    ) -> anyhow::Result<Option<Note>>;

    async fn exists_for_owner(&self, id: Uuid, owner_id: Uuid) -> anyhow::Result<bool>;

    async fn find_id_by_owner_and_title(
        &self,
        owner_id: Uuid,
        title: &str,
    ) -> anyhow::Result<Option<Uuid>>;
}
