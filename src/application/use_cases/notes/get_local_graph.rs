use uuid::Uuid;

use crate::application::ports::link_repository::LinkRepository;
use crate::application::ports::note_repository::NoteRepository;
use crate::domain::graph::local_graph::{LocalGraph, derive_local_graph};
use crate::domain::notes::note::NoteError;

pub struct GetLocalGraph<'a, N: NoteRepository + ?Sized, L: LinkRepository + ?Sized> {
    pub notes: &'a N,
    pub links: &'a L,
}

impl<'a, N: NoteRepository + ?Sized, L: LinkRepository + ?Sized> GetLocalGraph<'a, N, L> {
    pub async fn execute(&self, owner_id: Uuid, focal_id: Uuid, depth: u32) -> anyhow::Result<LocalGraph> {
        if !self.notes.exists_for_owner(focal_id, owner_id).await? {
            return Err(NoteError::NotFound.into());
        }
        // Links are scoped through the owner's notes; edges to foreign notes
        // fall out in derive_local_graph.
        let notes = self.notes.list_for_owner(owner_id).await?;
        let ids: Vec<Uuid> = notes.iter().map(|n| n.id).collect();
        let links = self.links.links_touching(&ids).await?;
        Ok(derive_local_graph(focal_id, &notes, &links, depth))
    }
}
