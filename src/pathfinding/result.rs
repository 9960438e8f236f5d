use crate::graph::ProductionSet;
use crate::records::{ActorId, ProductionId};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One hop of a shortest path: `from` and `to` share every production in
/// `productions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub from: ActorId,
    pub to: ActorId,
    pub productions: ProductionSet,
}

/// Every shortest path between two actors, as a layered DAG.
///
/// Connections are ordered by the layer of `from` (closest to `start` first),
/// then by `from`, then by `to`, so equal searches produce equal values.
/// A result with no connections is either the trivial `start == end` case or
/// the "no path" sentinel; [`PathResult::is_found`] tells them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    start: ActorId,
    end: ActorId,
    found: bool,
    connections: Vec<Connection>,
}

impl PathResult {
    /// An empty, found result. Add connections in layer order to describe
    /// an expected DAG.
    pub fn new(start: impl Into<ActorId>, end: impl Into<ActorId>) -> Self {
        Self::with_connections(start.into(), end.into(), Vec::new())
    }

    /// The "no path" sentinel: both actors exist but nothing connects them.
    pub fn not_found(start: impl Into<ActorId>, end: impl Into<ActorId>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            found: false,
            connections: Vec::new(),
        }
    }

    pub(crate) fn with_connections(start: ActorId, end: ActorId, connections: Vec<Connection>) -> Self {
        Self {
            start,
            end,
            found: true,
            connections,
        }
    }

    pub fn add_connection<I>(
        &mut self,
        from: impl Into<ActorId>,
        to: impl Into<ActorId>,
        productions: I,
    ) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<ProductionId>,
    {
        self.connections.push(Connection {
            from: from.into(),
            to: to.into(),
            productions: productions.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn start(&self) -> &ActorId {
        &self.start
    }

    pub fn end(&self) -> &ActorId {
        &self.end
    }

    pub fn is_found(&self) -> bool {
        self.found
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Hop count of every path in the DAG, `None` for the sentinel.
    pub fn distance(&self) -> Option<usize> {
        if !self.found {
            return None;
        }
        Some(self.actor_layers().get(&self.end).copied().unwrap_or(0))
    }

    /// Connections grouped by the layer of their `from` actor.
    pub fn layers(&self) -> Vec<Vec<&Connection>> {
        let actor_layers = self.actor_layers();
        let mut layers: Vec<Vec<&Connection>> = Vec::new();

        for connection in &self.connections {
            let layer = actor_layers.get(&connection.from).copied().unwrap_or(0);
            if layers.len() <= layer {
                layers.resize_with(layer + 1, Vec::new);
            }
            layers[layer].push(connection);
        }

        layers
    }

    /// Distinct actors on the DAG, ordered by layer and then by id.
    pub fn actors(&self) -> Vec<&ActorId> {
        if !self.found {
            return Vec::new();
        }

        let mut by_layer: Vec<(usize, &ActorId)> = self
            .actor_layers()
            .into_iter()
            .map(|(actor, layer)| (layer, actor))
            .collect();
        by_layer.sort_unstable();
        by_layer.into_iter().map(|(_, actor)| actor).collect()
    }

    /// Number of distinct shortest paths from `start` to `end`.
    pub fn path_count(&self) -> usize {
        if !self.found {
            return 0;
        }

        let mut ways: FxHashMap<&ActorId, usize> = FxHashMap::default();
        ways.insert(&self.start, 1);
        for connection in &self.connections {
            let incoming = ways.get(&connection.from).copied().unwrap_or(0);
            *ways.entry(&connection.to).or_default() += incoming;
        }
        ways.get(&self.end).copied().unwrap_or(0)
    }

    /// Productions used anywhere on the DAG.
    pub fn productions(&self) -> BTreeSet<&ProductionId> {
        self.connections
            .iter()
            .flat_map(|connection| &connection.productions)
            .collect()
    }

    fn actor_layers(&self) -> FxHashMap<&ActorId, usize> {
        let mut layers = FxHashMap::default();
        layers.insert(&self.start, 0);

        for connection in &self.connections {
            let next_layer = layers.get(&connection.from).copied().unwrap_or(0) + 1;
            layers.entry(&connection.to).or_insert(next_layer);
        }

        layers
    }
}
