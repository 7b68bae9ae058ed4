pub mod kv_store;
pub mod link_repository;
pub mod note_repository;
pub mod notification_repository;
pub mod ui_callbacks;
