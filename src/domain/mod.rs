pub mod editor;
pub mod graph;
pub mod notes;
pub mod notifications;
pub mod ui;
