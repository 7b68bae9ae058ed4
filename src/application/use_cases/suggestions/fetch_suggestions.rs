use crate::domain::notes::note::{Note, WikiLinkItem};

pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Autocomplete over an already-loaded note collection.
///
/// `notes` is `None` while the collection has not been loaded yet; in that
/// state every query yields an empty list.
pub struct FetchNotesForSuggestion<'a> {
    pub notes: Option<&'a [Note]>,
    pub limit: usize,
}

impl<'a> FetchNotesForSuggestion<'a> {
    pub fn new(notes: Option<&'a [Note]>) -> Self {
        Self {
            notes,
            limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    pub async fn execute(&self, query: &str) -> Vec<WikiLinkItem> {
        let Some(notes) = self.notes else {
            return Vec::new();
        };
        let needle = query.to_lowercase();
        notes
            .iter()
            .filter(|n| n.title.to_lowercase().contains(&needle))
            .take(self.limit)
            .enumerate()
            .map(|(index, n)| WikiLinkItem {
                id: n.id,
                title: n.title.clone(),
                index,
            })
            .collect()
    }
}
