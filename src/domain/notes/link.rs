use uuid::Uuid;

pub const DEFAULT_LINK_TYPE: &str = "note";

/// Directed, typed edge between two notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: Uuid,
    pub source_id: Uuid,
    pub target_id: Uuid,
    pub link_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Note,
    Embed,
    Mention,
}

impl LinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkKind::Note => DEFAULT_LINK_TYPE,
            LinkKind::Embed => "embed",
            LinkKind::Mention => "mention",
        }
    }
}
