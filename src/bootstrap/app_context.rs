use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::kv_store::KvStore;
use crate::application::ports::link_repository::LinkRepository;
use crate::application::ports::note_repository::NoteRepository;
use crate::application::ports::notification_repository::NotificationRepository;
use crate::application::services::note_catalog::NoteCatalog;
use crate::bootstrap::config::Config;
use crate::infrastructure::memory::{
    InMemoryKvStore, InMemoryLinkRepository, InMemoryNoteRepository,
    InMemoryNotificationRepository,
};

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

pub struct AppServices {
    note_repo: Arc<dyn NoteRepository>,
    link_repo: Arc<dyn LinkRepository>,
    kv_store: Arc<dyn KvStore>,
    notification_repo: Arc<dyn NotificationRepository>,
    note_catalog: Arc<NoteCatalog>,
}

impl AppServices {
    pub fn new(
        note_repo: Arc<dyn NoteRepository>,
        link_repo: Arc<dyn LinkRepository>,
        kv_store: Arc<dyn KvStore>,
        notification_repo: Arc<dyn NotificationRepository>,
    ) -> Self {
        let note_catalog = Arc::new(NoteCatalog::new(note_repo.clone()));
        Self {
            note_repo,
            link_repo,
            kv_store,
            notification_repo,
            note_catalog,
        }
    }

    /// Rebuilds the catalog so owners unread for `ttl` are evicted on refresh.
    pub fn with_catalog_idle_ttl(mut self, ttl: Duration) -> Self {
        self.note_catalog = Arc::new(NoteCatalog::with_idle_ttl(self.note_repo.clone(), ttl));
        self
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryNoteRepository::new()),
            Arc::new(InMemoryLinkRepository::new()),
            Arc::new(InMemoryKvStore::new()),
            Arc::new(InMemoryNotificationRepository::new()),
        )
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn note_repo(&self) -> Arc<dyn NoteRepository> {
        self.services.note_repo.clone()
    }

    pub fn link_repo(&self) -> Arc<dyn LinkRepository> {
        self.services.link_repo.clone()
    }

    pub fn kv_store(&self) -> Arc<dyn KvStore> {
        self.services.kv_store.clone()
    }

    pub fn notification_repo(&self) -> Arc<dyn NotificationRepository> {
        self.services.notification_repo.clone()
    }

    pub fn note_catalog(&self) -> Arc<NoteCatalog> {
        self.services.note_catalog.clone()
    }
}
