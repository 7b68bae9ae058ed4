use uuid::Uuid;

use crate::application::linkgraph::sync_note_links;
use crate::application::ports::link_repository::LinkRepository;
use crate::application::ports::note_repository::NoteRepository;
use crate::domain::notes::note::{Note, normalize_title};

pub struct CreateNote<'a, N: NoteRepository + ?Sized, L: LinkRepository + ?Sized> {
    pub notes: &'a N,
    pub links: &'a L,
}

impl<'a, N: NoteRepository + ?Sized, L: LinkRepository + ?Sized> CreateNote<'a, N, L> {
    pub async fn execute(&self, owner_id: Uuid, title: &str, content: &str) -> anyhow::Result<Note> {
        let title = normalize_title(title)?;
        let note = self.notes.create_for_owner(owner_id, &title, content).await?;
        // The note is already stored; link sync failures only cost backlinks
        if let Err(e) = sync_note_links(self.notes, self.links, owner_id, note.id, content).await {
            tracing::warn!(error = ?e, note_id = %note.id, "note_link_sync_failed");
        }
        Ok(note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::notes::test_support::TitleLookupFails;
    use crate::domain::notes::note::NoteError;
    use crate::infrastructure::memory::{InMemoryLinkRepository, InMemoryNoteRepository};

    #[tokio::test]
    async fn creates_note_and_links_existing_targets() {
        let notes = InMemoryNoteRepository::new();
        let links = InMemoryLinkRepository::new();
        let owner = Uuid::new_v4();
        let target = notes.create_for_owner(owner, "Roadmap", "").await.unwrap();

        let uc = CreateNote {
            notes: &notes,
            links: &links,
        };
        let note = uc.execute(owner, "  Weekly ", "follow [[Roadmap]]").await.unwrap();
        assert_eq!(note.title, "Weekly");

        let stored = links.links_touching(&[target.id]).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].source_id, note.id);
    }

    #[tokio::test]
    async fn link_sync_failure_still_returns_the_note() {
        let notes = TitleLookupFails::default();
        let links = InMemoryLinkRepository::new();
        let owner = Uuid::new_v4();
        let uc = CreateNote {
            notes: &notes,
            links: &links,
        };

        let note = uc.execute(owner, "Weekly", "see [[Roadmap]]").await.unwrap();

        let stored = notes.list_for_owner(owner).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, note.id);
        assert!(links.is_empty().await);
    }

    #[tokio::test]
    async fn blank_title_is_rejected() {
        let notes = InMemoryNoteRepository::new();
        let links = InMemoryLinkRepository::new();
        let uc = CreateNote {
            notes: &notes,
            links: &links,
        };
        let err = uc.execute(Uuid::new_v4(), " ", "").await.unwrap_err();
        assert!(matches!(err.downcast_ref::<NoteError>(), Some(NoteError::InvalidTitle)));
    }
}
