pub mod kv_store_sqlx;
pub mod link_repository_sqlx;
pub mod note_repository_sqlx;
pub mod notification_repository_sqlx;
