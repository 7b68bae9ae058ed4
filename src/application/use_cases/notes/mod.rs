pub mod create_note;
pub mod get_local_graph;
pub mod list_notes;
pub mod update_note_content;

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::application::ports::note_repository::NoteRepository;
    use crate::domain::notes::note::Note;
    use crate::infrastructure::memory::InMemoryNoteRepository;

    /// Stores notes normally but fails every title lookup.
    #[derive(Default)]
    pub struct TitleLookupFails {
        pub inner: InMemoryNoteRepository,
    }

    #[async_trait]
    impl NoteRepository for TitleLookupFails {
        async fn list_for_owner(&self, owner_id: Uuid) -> anyhow::Result<Vec<Note>> {
            self.inner.list_for_owner(owner_id).await
        }

        async fn create_for_owner(
            &self,
            owner_id: Uuid,
            title: &str,
            content: &str,
        ) -> anyhow::Result<Note> {
            self.inner.create_for_owner(owner_id, title, content).await
        }

        async fn update_content_for_owner(
            &self,
            id: Uuid,
            owner_id: Uuid,
            content: &str,
        ) -> anyhow::Result<Option<Note>> {
            self.inner.update_content_for_owner(id, owner_id, content).await
        }

        async fn exists_for_owner(&self, id: Uuid, owner_id: Uuid) -> anyhow::Result<bool> {
            self.inner.exists_for_owner(id, owner_id).await
        }

        async fn find_id_by_owner_and_title(
            &self,
            _owner_id: Uuid,
            _title: &str,
        ) -> anyhow::Result<Option<Uuid>> {
            anyhow::bail!("title index unavailable")
        }
    }
}
