use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::application::ports::note_repository::NoteRepository;
use crate::domain::notes::note::Note;

pub const DEFAULT_CATALOG_IDLE: Duration = Duration::from_secs(900);

struct CatalogEntry {
    notes: Arc<Vec<Note>>,
    last_access: Instant,
}

/// Per-owner in-memory note snapshots feeding wiki-link suggestions.
///
/// An owner with no snapshot is "not loaded". Refreshing swaps the whole
/// snapshot; readers keep whatever `Arc` they already cloned. Owners not read
/// for `idle_ttl` are dropped by the next `refresh_loaded` pass.
pub struct NoteCatalog {
    repo: Arc<dyn NoteRepository>,
    idle_ttl: Duration,
    snapshots: RwLock<HashMap<Uuid, CatalogEntry>>,
}

impl NoteCatalog {
    pub fn new(repo: Arc<dyn NoteRepository>) -> Self {
        Self::with_idle_ttl(repo, DEFAULT_CATALOG_IDLE)
    }

    pub fn with_idle_ttl(repo: Arc<dyn NoteRepository>, idle_ttl: Duration) -> Self {
        Self {
            repo,
            idle_ttl,
            snapshots: RwLock::new(HashMap::new()),
        }
    }

    pub async fn snapshot(&self, owner_id: Uuid) -> Option<Arc<Vec<Note>>> {
        let mut guard = self.snapshots.write().await;
        let entry = guard.get_mut(&owner_id)?;
        entry.last_access = Instant::now();
        Some(entry.notes.clone())
    }

    pub async fn refresh(&self, owner_id: Uuid) -> anyhow::Result<Arc<Vec<Note>>> {
        let notes = Arc::new(self.repo.list_for_owner(owner_id).await?);
        let now = Instant::now();
        self.snapshots
            .write()
            .await
            .entry(owner_id)
            .and_modify(|e| e.notes = notes.clone())
            .or_insert_with(|| CatalogEntry {
                notes: notes.clone(),
                last_access: now,
            });
        Ok(notes)
    }

    /// Drops owners whose snapshot was last read more than `idle_ttl` before `now`.
    pub async fn evict_idle_at(&self, now: Instant) -> usize {
        let ttl = self.idle_ttl;
        let mut guard = self.snapshots.write().await;
        let before = guard.len();
        guard.retain(|_, e| now.saturating_duration_since(e.last_access) < ttl);
        before - guard.len()
    }

    /// Evicts idle owners, then refreshes every owner still loaded.
    pub async fn refresh_loaded(&self) {
        let evicted = self.evict_idle_at(Instant::now()).await;
        if evicted > 0 {
            tracing::debug!(evicted, "note_catalog_evicted_idle_owners");
        }
        let owners: Vec<Uuid> = self.snapshots.read().await.keys().copied().collect();
        for owner_id in owners {
            if let Err(e) = self.refresh(owner_id).await {
                tracing::warn!(error = ?e, %owner_id, "note_catalog_refresh_failed");
            }
        }
    }

    pub async fn loaded_owners(&self) -> usize {
        self.snapshots.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::suggestions::fetch_suggestions::FetchNotesForSuggestion;
    use crate::infrastructure::memory::InMemoryNoteRepository;

    #[tokio::test]
    async fn not_loaded_until_refreshed() {
        let repo = Arc::new(InMemoryNoteRepository::new());
        let owner = Uuid::new_v4();
        repo.create_for_owner(owner, "Project Plan", "").await.unwrap();
        let catalog = NoteCatalog::new(repo.clone());

        let snap = catalog.snapshot(owner).await;
        assert!(snap.is_none());
        let uc = FetchNotesForSuggestion::new(snap.as_deref().map(Vec::as_slice));
        assert!(uc.execute("plan").await.is_empty());

        catalog.refresh(owner).await.unwrap();
        let snap = catalog.snapshot(owner).await;
        let uc = FetchNotesForSuggestion::new(snap.as_deref().map(Vec::as_slice));
        assert_eq!(uc.execute("plan").await.len(), 1);
    }

    #[tokio::test]
    async fn refresh_loaded_picks_up_new_notes() {
        let repo = Arc::new(InMemoryNoteRepository::new());
        let owner = Uuid::new_v4();
        let catalog = NoteCatalog::new(repo.clone());
        catalog.refresh(owner).await.unwrap();
        let before = catalog.snapshot(owner).await.unwrap();

        repo.create_for_owner(owner, "Later", "").await.unwrap();
        catalog.refresh_loaded().await;

        assert!(before.is_empty());
        assert_eq!(catalog.snapshot(owner).await.unwrap().len(), 1);
        assert_eq!(catalog.loaded_owners().await, 1);
    }

    #[tokio::test]
    async fn idle_owners_are_evicted() {
        let repo = Arc::new(InMemoryNoteRepository::new());
        let catalog = NoteCatalog::with_idle_ttl(repo, Duration::from_secs(60));
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        catalog.refresh(first).await.unwrap();
        catalog.refresh(second).await.unwrap();
        catalog.snapshot(second).await.unwrap();

        assert_eq!(catalog.evict_idle_at(Instant::now()).await, 0);
        assert_eq!(catalog.loaded_owners().await, 2);

        let later = Instant::now() + Duration::from_secs(120);
        assert_eq!(catalog.evict_idle_at(later).await, 2);
        assert!(catalog.snapshot(first).await.is_none());
        assert!(catalog.snapshot(second).await.is_none());
    }

    #[tokio::test]
    async fn refresh_loaded_drops_unread_owners() {
        let repo = Arc::new(InMemoryNoteRepository::new());
        let catalog = NoteCatalog::with_idle_ttl(repo, Duration::ZERO);
        for _ in 0..100 {
            catalog.refresh(Uuid::new_v4()).await.unwrap();
        }
        assert_eq!(catalog.loaded_owners().await, 100);

        catalog.refresh_loaded().await;
        assert_eq!(catalog.loaded_owners().await, 0);
    }
}
