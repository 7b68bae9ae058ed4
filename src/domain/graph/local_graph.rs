use std::collections::{HashMap, HashSet, VecDeque};

use uuid::Uuid;

use crate::domain::notes::link::Link;
use crate::domain::notes::note::Note;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub id: Uuid,
    pub label: String,
    pub is_focal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    pub id: Uuid,
    pub source: Uuid,
    pub target: Uuid,
    pub link_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalGraph {
    pub focal_id: Option<Uuid>,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Neighbourhood of `focal` within `depth` hops, walking links in both
/// directions. Edges are kept only when both endpoints made it into the node set.
pub fn derive_local_graph(focal: Uuid, notes: &[Note], links: &[Link], depth: u32) -> LocalGraph {
    let titles: HashMap<Uuid, &str> = notes.iter().map(|n| (n.id, n.title.as_str())).collect();
    if !titles.contains_key(&focal) {
        return LocalGraph::default();
    }

    let mut adjacency: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
    for l in links {
        if !titles.contains_key(&l.source_id) || !titles.contains_key(&l.target_id) {
            continue;
        }
        adjacency.entry(l.source_id).or_default().push(l.target_id);
        adjacency.entry(l.target_id).or_default().push(l.source_id);
    }

    let mut order: Vec<Uuid> = vec![focal];
    let mut seen: HashSet<Uuid> = HashSet::from([focal]);
    let mut queue: VecDeque<(Uuid, u32)> = VecDeque::from([(focal, 0)]);
    while let Some((id, d)) = queue.pop_front() {
        if d >= depth {
            continue;
        }
        for next in adjacency.get(&id).into_iter().flatten() {
            if seen.insert(*next) {
                order.push(*next);
                queue.push_back((*next, d + 1));
            }
        }
    }

    let nodes = order
        .iter()
        .map(|id| GraphNode {
            id: *id,
            label: titles.get(id).copied().unwrap_or_default().to_string(),
            is_focal: *id == focal,
        })
        .collect();
    let edges = links
        .iter()
        .filter(|l| seen.contains(&l.source_id) && seen.contains(&l.target_id))
        .map(|l| GraphEdge {
            id: l.id,
            source: l.source_id,
            target: l.target_id,
            link_type: l.link_type.clone(),
        })
        .collect();

    LocalGraph {
        focal_id: Some(focal),
        nodes,
        edges,
    }
}
