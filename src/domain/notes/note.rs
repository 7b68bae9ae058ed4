use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Note {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Autocomplete candidate shown while typing a `[[wiki link`.
///
/// `index` is the position inside the (already truncated) suggestion list and
/// is only meaningful for keyboard navigation on the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiLinkItem {
    pub id: Uuid,
    pub title: String,
    pub index: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("note not found")]
    NotFound,
    #[error("note title must not be empty")]
    InvalidTitle,
}

pub fn normalize_title(raw: &str) -> Result<String, NoteError> {
    let t = raw.trim();
    if t.is_empty() {
        return Err(NoteError::InvalidTitle);
    }
    Ok(t.to_string())
}
