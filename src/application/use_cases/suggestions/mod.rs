pub mod fetch_suggestions;
