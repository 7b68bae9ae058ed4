pub mod links;
pub mod notes;
pub mod notifications;
pub mod suggestions;
