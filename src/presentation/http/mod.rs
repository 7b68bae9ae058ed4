pub mod auth;
pub mod health;
pub mod links;
pub mod notes;
pub mod notifications;
pub mod ui;
