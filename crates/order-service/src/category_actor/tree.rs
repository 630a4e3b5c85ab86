//! Subtree closure over the parent-of relation.

use crate::model::CategoryId;
use std::collections::{HashMap, HashSet, VecDeque};

/// Returns `root` plus every category reachable from it by following child links.
///
/// `edges` yields `(category, parent)` pairs for every known category. An unknown
/// `root` yields an empty set. Traversal is breadth-first with a visited set, so
/// depth is unbounded and a cycle in the input still terminates.
pub fn subtree_closure<I>(edges: I, root: CategoryId) -> HashSet<CategoryId>
where
    I: IntoIterator<Item = (CategoryId, Option<CategoryId>)>,
{
    let mut known = HashSet::new();
    let mut children: HashMap<CategoryId, Vec<CategoryId>> = HashMap::new();
    for (id, parent) in edges {
        known.insert(id);
        if let Some(parent) = parent {
            children.entry(parent).or_default().push(id);
        }
    }

    let mut visited = HashSet::new();
    if !known.contains(&root) {
        return visited;
    }

    let mut frontier = VecDeque::from([root]);
    while let Some(current) = frontier.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        if let Some(kids) = children.get(&current) {
            frontier.extend(kids.iter().filter(|kid| !visited.contains(*kid)));
        }
    }
    visited
}
