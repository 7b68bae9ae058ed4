use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use uuid::Uuid;

use crate::application::ports::link_repository::LinkRepository;
use crate::application::ports::note_repository::NoteRepository;
use crate::application::use_cases::links::create_link::CreateLink;
use crate::domain::notes::link::LinkKind;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LinkTarget {
    Id(Uuid),
    Title(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WikiLinkRef {
    pub target: LinkTarget,
    pub kind: LinkKind,
    pub label: Option<String>,
    pub position_start: usize,
    pub position_end: usize,
}

static WIKI_LINK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([^\[\]|]+)(?:\|([^\[\]]+))?\]\]").unwrap());
static EMBED_LINK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[\[([^\[\]|]+)(?:\|([^\[\]]+))?\]\]").unwrap());
static MENTION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@\[\[([^\[\]|]+)(?:\|([^\[\]]+))?\]\]").unwrap());

fn to_ref(cap: &Captures<'_>, kind: LinkKind, start: usize, end: usize) -> WikiLinkRef {
    WikiLinkRef {
        target: parse_target(cap.get(1).map_or("", |m| m.as_str())),
        kind,
        label: cap.get(2).map(|m| m.as_str().trim().to_string()),
        position_start: start,
        position_end: end,
    }
}

/// Extracts wiki references in document order.
///
/// `![[x]]` and `@[[x]]` win over the plain `[[x]]` they contain; the plain
/// pattern also matches one byte later, so those inner matches are skipped by
/// their end offset.
pub fn parse_links(content: &str) -> Vec<WikiLinkRef> {
    let mut links: Vec<WikiLinkRef> = Vec::new();
    let mut claimed_ends: HashSet<usize> = HashSet::new();

    for (re, kind) in [
        (&*EMBED_LINK_REGEX, LinkKind::Embed),
        (&*MENTION_REGEX, LinkKind::Mention),
    ] {
        for cap in re.captures_iter(content) {
            let Some(mat) = cap.get(0) else { continue };
            if !claimed_ends.insert(mat.end()) {
                continue;
            }
            links.push(to_ref(&cap, kind, mat.start(), mat.end()));
        }
    }

    for cap in WIKI_LINK_REGEX.captures_iter(content) {
        let Some(mat) = cap.get(0) else { continue };
        if claimed_ends.contains(&mat.end()) {
            continue;
        }
        links.push(to_ref(&cap, LinkKind::Note, mat.start(), mat.end()));
    }

    links.sort_by_key(|l| l.position_start);
    links
}

fn parse_target(txt: &str) -> LinkTarget {
    let t = txt.trim();
    if let Ok(id) = Uuid::parse_str(t) {
        LinkTarget::Id(id)
    } else {
        LinkTarget::Title(t.to_string())
    }
}

/// Persists a link for every resolvable wiki reference in `content`.
///
/// Targets resolve by id or case-insensitive title within the owner's notes;
/// unresolved targets and self references are skipped. Existing links are
/// reused through the create-link dedup, never removed. Returns the ids of
/// the links that now back the references.
pub async fn sync_note_links<N, L>(
    notes: &N,
    links: &L,
    owner_id: Uuid,
    source_id: Uuid,
    content: &str,
) -> anyhow::Result<Vec<Uuid>>
where
    N: NoteRepository + ?Sized,
    L: LinkRepository + ?Sized,
{
    let refs = parse_links(content);
    let create = CreateLink { repo: links };
    let mut out: Vec<Uuid> = Vec::new();

    for r in refs {
        let target_id: Option<Uuid> = match r.target {
            LinkTarget::Id(id) => {
                if notes.exists_for_owner(id, owner_id).await? {
                    Some(id)
                } else {
                    None
                }
            }
            LinkTarget::Title(title) => notes.find_id_by_owner_and_title(owner_id, &title).await?,
        };

        let Some(target_id) = target_id else {
            tracing::debug!(%source_id, "wiki_link_unresolved");
            continue;
        };
        if target_id == source_id {
            continue;
        }
        if let Some(link_id) = create
            .execute(source_id, target_id, Some(r.kind.as_str()))
            .await
        {
            if !out.contains(&link_id) {
                out.push(link_id);
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::{InMemoryLinkRepository, InMemoryNoteRepository};

    #[test]
    fn parses_plain_labelled_embed_and_mention() {
        let content = "see [[Project Plan]] and [[Roadmap|the roadmap]], ![[Diagram]] cc @[[Alice]]";
        let links = parse_links(content);
        assert_eq!(links.len(), 4);

        assert_eq!(links[0].target, LinkTarget::Title("Project Plan".into()));
        assert_eq!(links[0].kind, LinkKind::Note);
        assert_eq!(links[1].label.as_deref(), Some("the roadmap"));
        assert_eq!(links[2].kind, LinkKind::Embed);
        assert_eq!(links[3].kind, LinkKind::Mention);
        assert_eq!(&content[links[0].position_start..links[0].position_end], "[[Project Plan]]");
    }

    #[test]
    fn embed_is_not_double_counted_as_plain_link() {
        let links = parse_links("![[Diagram]]");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].kind, LinkKind::Embed);
        assert_eq!(links[0].position_start, 0);
    }

    #[test]
    fn uuid_targets_parse_as_ids() {
        let id = Uuid::new_v4();
        let links = parse_links(&format!("[[{id}]]"));
        assert_eq!(links[0].target, LinkTarget::Id(id));
    }

    #[tokio::test]
    async fn sync_resolves_titles_case_insensitively_and_skips_unknown() {
        let notes = InMemoryNoteRepository::new();
        let links = InMemoryLinkRepository::new();
        let owner = Uuid::new_v4();
        let src = notes.create_for_owner(owner, "Inbox", "").await.unwrap();
        let plan = notes.create_for_owner(owner, "Project Plan", "").await.unwrap();

        let created = sync_note_links(
            &notes,
            &links,
            owner,
            src.id,
            "[[project plan]] [[Nowhere]] [[Inbox]]",
        )
        .await
        .unwrap();
        assert_eq!(created.len(), 1);

        let stored = links.links_touching(&[src.id]).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].target_id, plan.id);
    }

    #[tokio::test]
    async fn sync_is_idempotent() {
        let notes = InMemoryNoteRepository::new();
        let links = InMemoryLinkRepository::new();
        let owner = Uuid::new_v4();
        let src = notes.create_for_owner(owner, "A", "").await.unwrap();
        let dst = notes.create_for_owner(owner, "B", "").await.unwrap();
        let body = format!("[[B]] and again [[{}]]", dst.id);

        let first = sync_note_links(&notes, &links, owner, src.id, &body).await.unwrap();
        let second = sync_note_links(&notes, &links, owner, src.id, &body).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(links.len().await, 1);
    }

    #[tokio::test]
    async fn sync_ignores_other_owners_notes() {
        let notes = InMemoryNoteRepository::new();
        let links = InMemoryLinkRepository::new();
        let (owner, stranger) = (Uuid::new_v4(), Uuid::new_v4());
        let src = notes.create_for_owner(owner, "A", "").await.unwrap();
        let theirs = notes.create_for_owner(stranger, "Secret", "").await.unwrap();

        let body = format!("[[Secret]] [[{}]]", theirs.id);
        let created = sync_note_links(&notes, &links, owner, src.id, &body).await.unwrap();
        assert!(created.is_empty());
    }
}
