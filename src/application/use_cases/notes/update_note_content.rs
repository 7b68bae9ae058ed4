use uuid::Uuid;

use crate::application::linkgraph::sync_note_links;
use crate::application::ports::link_repository::LinkRepository;
use crate::application::ports::note_repository::NoteRepository;
use crate::domain::notes::note::{Note, NoteError};

pub struct UpdateNoteContent<'a, N: NoteRepository + ?Sized, L: LinkRepository + ?Sized> {
    pub notes: &'a N,
    pub links: &'a L,
}

impl<'a, N: NoteRepository + ?Sized, L: LinkRepository + ?Sized> UpdateNoteContent<'a, N, L> {
    pub async fn execute(&self, owner_id: Uuid, id: Uuid, content: &str) -> anyhow::Result<Note> {
        let note = self
            .notes
            .update_content_for_owner(id, owner_id, content)
            .await?
            .ok_or(NoteError::NotFound)?;
        if let Err(e) = sync_note_links(self.notes, self.links, owner_id, note.id, content).await {
            tracing::warn!(error = ?e, note_id = %note.id, "note_link_sync_failed");
        }
        Ok(note)
    }
}
