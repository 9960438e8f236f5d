use super::super::result::Connection;
use crate::graph::ActorGraph;
use crate::records::ActorId;
use rustc_hash::FxHashMap;
use std::collections::{BTreeMap, BTreeSet};

/// Layer-by-layer BFS that keeps every predecessor of every visited actor,
/// not just the first one found.
pub struct LayeredBfsState<'g> {
    graph: &'g ActorGraph,
    distances: FxHashMap<&'g ActorId, usize>,
    predecessors: FxHashMap<&'g ActorId, BTreeSet<&'g ActorId>>,
    frontier: Vec<&'g ActorId>,
    depth: usize,
}

impl<'g> LayeredBfsState<'g> {
    pub fn new(graph: &'g ActorGraph, start: &'g ActorId) -> Self {
        let mut distances = FxHashMap::default();
        distances.insert(start, 0);

        Self {
            graph,
            distances,
            predecessors: FxHashMap::default(),
            frontier: vec![start],
            depth: 0,
        }
    }

    pub fn visited_count(&self) -> usize {
        self.distances.len()
    }

    /// Expands whole layers until `target` is reached, then returns the
    /// connections of every shortest path to it. `None` when the search
    /// runs out of actors first.
    pub fn find_paths_to_target(&mut self, target: &'g ActorId) -> Option<Vec<Connection>> {
        while !self.distances.contains_key(target) {
            if self.frontier.is_empty() {
                return None;
            }
            self.expand_layer();
        }

        Some(self.shortest_path_connections(target))
    }

    fn expand_layer(&mut self) {
        let graph = self.graph;
        let mut next_layer: BTreeMap<&'g ActorId, BTreeSet<&'g ActorId>> = BTreeMap::new();

        for &current in &self.frontier {
            for (neighbor, _) in graph.neighbors(current) {
                if !self.distances.contains_key(neighbor) {
                    next_layer.entry(neighbor).or_default().insert(current);
                }
            }
        }

        self.depth += 1;
        self.frontier.clear();

        for (actor, predecessors) in next_layer {
            self.distances.insert(actor, self.depth);
            self.predecessors.insert(actor, predecessors);
            self.frontier.push(actor);
        }
    }

    /// Walks predecessor sets back from `target`. Only actors reachable this
    /// way lie on a shortest path; everything else visited is dropped.
    fn shortest_path_connections(&self, target: &'g ActorId) -> Vec<Connection> {
        let mut retained: BTreeSet<&ActorId> = BTreeSet::from([target]);
        let mut pending = vec![target];
        let mut hops: Vec<(usize, &ActorId, &ActorId)> = Vec::new();

        while let Some(successor) = pending.pop() {
            let Some(predecessors) = self.predecessors.get(successor) else {
                continue;
            };
            for &predecessor in predecessors {
                hops.push((self.distances[predecessor], predecessor, successor));
                if retained.insert(predecessor) {
                    pending.push(predecessor);
                }
            }
        }

        hops.sort_unstable();
        hops.into_iter()
            .map(|(_, from, to)| Connection {
                from: from.clone(),
                to: to.clone(),
                productions: self.graph.get_edge(from, to).cloned().unwrap_or_default(),
            })
            .collect()
    }
}
