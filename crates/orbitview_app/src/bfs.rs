// SPDX-License-Identifier: MIT OR Apache-2.0
//! Breadth-first shortest path over the graph adapter.

use orbitview_graph::GraphAdapter;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::hash::Hash;

/// First-found shortest path from `start` to `target` as the ordered node
/// sequence including both ends, or `None` if `target` is unreachable.
///
/// Standard queue-based BFS over [`GraphAdapter::adjacent_nodes`]; a visited
/// set prevents re-expansion, and the path is rebuilt from parent links.
pub fn shortest_path<N, V, E>(
    adapter: &GraphAdapter<N, V, E>,
    start: &N,
    target: &N,
) -> Option<Vec<N>>
where
    N: Clone + Eq + Hash + Ord + fmt::Display,
    V: fmt::Display,
    E: Clone + Eq + Hash + fmt::Display,
{
    if start == target {
        return Some(vec![start.clone()]);
    }
    let mut visited: HashSet<N> = HashSet::from([start.clone()]);
    let mut parent: HashMap<N, N> = HashMap::new();
    let mut queue: VecDeque<N> = VecDeque::from([start.clone()]);

    while let Some(node) = queue.pop_front() {
        for next in adapter.adjacent_nodes(&node) {
            if !visited.insert(next.clone()) {
                continue;
            }
            parent.insert(next.clone(), node.clone());
            if next == target {
                return Some(rebuild(&parent, start, target));
            }
            queue.push_back(next.clone());
        }
    }
    None
}

fn rebuild<N: Clone + Eq + Hash>(parent: &HashMap<N, N>, start: &N, target: &N) -> Vec<N> {
    let mut path = vec![target.clone()];
    let mut cursor = target;
    while cursor != start {
        // Every node on the path was inserted with a parent
        match parent.get(cursor) {
            Some(prev) => {
                path.push(prev.clone());
                cursor = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
