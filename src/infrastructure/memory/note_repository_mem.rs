use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::application::ports::note_repository::NoteRepository;
use crate::domain::notes::note::Note;

/// Notes kept in insertion order, which is also the listing order.
#[derive(Default)]
pub struct InMemoryNoteRepository {
    notes: RwLock<Vec<Note>>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn list_for_owner(&self, owner_id: Uuid) -> anyhow::Result<Vec<Note>> {
        Ok(self
            .notes
            .read()
            .await
            .iter()
            .filter(|n| n.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn create_for_owner(
        &self,
        owner_id: Uuid,
        title: &str,
        content: &str,
    ) -> anyhow::Result<Note> {
        let now = chrono::Utc::now();
        let note = Note {
            id: Uuid::new_v4(),
            owner_id,
            title: title.to_string(),
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.notes.write().await.push(note.clone());
        Ok(note)
    }

    async fn update_content_for_owner(
        &self,
        id: Uuid,
        owner_id: Uuid,
        content: &str,
    ) -> anyhow::Result<Option<Note>> {
        let mut notes = self.notes.write().await;
        let Some(note) = notes
            .iter_mut()
            .find(|n| n.id == id && n.owner_id == owner_id)
        else {
            return Ok(None);
        };
        note.content = content.to_string();
        note.updated_at = chrono::Utc::now();
        Ok(Some(note.clone()))
    }

    async fn exists_for_owner(&self, id: Uuid, owner_id: Uuid) -> anyhow::Result<bool> {
        Ok(self
            .notes
            .read()
            .await
            .iter()
            .any(|n| n.id == id && n.owner_id == owner_id))
    }

    async fn find_id_by_owner_and_title(
        &self,
        owner_id: Uuid,
        title: &str,
    ) -> anyhow::Result<Option<Uuid>> {
        let wanted = title.to_lowercase();
        // Most recently updated wins, like the postgres adapter
        Ok(self
            .notes
            .read()
            .await
            .iter()
            .filter(|n| n.owner_id == owner_id && n.title.to_lowercase() == wanted)
            .max_by_key(|n| n.updated_at)
            .map(|n| n.id))
    }
}
