pub mod note_catalog;
pub mod sidebar;
