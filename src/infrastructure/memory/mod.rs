//! In-memory adapters used for `STORAGE_BACKEND=memory` and in tests.

pub mod kv_store_mem;
pub mod link_repository_mem;
pub mod note_repository_mem;
pub mod notification_repository_mem;

pub use kv_store_mem::InMemoryKvStore;
pub use link_repository_mem::InMemoryLinkRepository;
pub use note_repository_mem::InMemoryNoteRepository;
pub use notification_repository_mem::InMemoryNotificationRepository;
