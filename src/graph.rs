use crate::records::{ActorId, ProductionId};
use rustc_hash::FxHashMap;
use std::collections::{BTreeMap, BTreeSet};

/// Productions shared by two actors. Equality is set equality.
pub type ProductionSet = BTreeSet<ProductionId>;

/// Undirected collaboration graph: actors are nodes, and each edge carries
/// every production the two endpoints appeared in together.
///
/// Both directions of an edge hold equal label sets, so `get_edge(a, b)` and
/// `get_edge(b, a)` always agree. Self-edges are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActorGraph {
    adjacency: FxHashMap<ActorId, BTreeMap<ActorId, ProductionSet>>,
}

impl ActorGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an actor as a node. Isolated actors stay in the graph so a
    /// search can tell "no path" apart from "unknown actor".
    pub fn add_actor(&mut self, actor: impl Into<ActorId>) {
        self.adjacency.entry(actor.into()).or_default();
    }

    /// Records that `a` and `b` appeared in `production`. Returns `false`
    /// without touching the graph when `a == b`.
    pub fn add_edge(
        &mut self,
        a: impl Into<ActorId>,
        b: impl Into<ActorId>,
        production: impl Into<ProductionId>,
    ) -> bool {
        let (a, b) = (a.into(), b.into());
        if a == b {
            return false;
        }
        let production = production.into();

        self.adjacency
            .entry(a.clone())
            .or_default()
            .entry(b.clone())
            .or_default()
            .insert(production.clone());
        self.adjacency
            .entry(b)
            .or_default()
            .entry(a)
            .or_default()
            .insert(production);
        true
    }

    pub fn get_edge(&self, a: impl AsRef<str>, b: impl AsRef<str>) -> Option<&ProductionSet> {
        self.adjacency.get(a.as_ref())?.get(b.as_ref())
    }

    /// Neighbors of `actor` in ascending id order, each with its edge label.
    pub fn neighbors(
        &self,
        actor: impl AsRef<str>,
    ) -> impl Iterator<Item = (&ActorId, &ProductionSet)> {
        self.adjacency.get(actor.as_ref()).into_iter().flatten()
    }

    pub fn contains_actor(&self, actor: impl AsRef<str>) -> bool {
        self.adjacency.contains_key(actor.as_ref())
    }

    /// The graph's own id for `actor`, if it is a node.
    pub fn get_actor(&self, actor: impl AsRef<str>) -> Option<&ActorId> {
        self.adjacency
            .get_key_value(actor.as_ref())
            .map(|(id, _)| id)
    }

    /// All actors, sorted.
    pub fn actors(&self) -> Vec<&ActorId> {
        let mut actors: Vec<&ActorId> = self.adjacency.keys().collect();
        actors.sort_unstable();
        actors
    }

    pub fn actor_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of unordered actor pairs connected by an edge.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum::<usize>() / 2
    }

    /// Folds `other` into this graph: node sets are united and overlapping
    /// edges take the union of both label sets. The operation is associative
    /// and commutative, so the fold order of partial graphs never matters.
    pub fn merge(&mut self, other: ActorGraph) {
        for (actor, edges) in other.adjacency {
            let own_edges = self.adjacency.entry(actor).or_default();
            for (neighbor, productions) in edges {
                own_edges.entry(neighbor).or_default().extend(productions);
            }
        }
    }
}

impl<A, B, P> Extend<(A, B, P)> for ActorGraph
where
    A: Into<ActorId>,
    B: Into<ActorId>,
    P: Into<ProductionId>,
{
    fn extend<I: IntoIterator<Item = (A, B, P)>>(&mut self, iter: I) {
        for (a, b, production) in iter {
            self.add_edge(a, b, production);
        }
    }
}

impl<A, B, P> FromIterator<(A, B, P)> for ActorGraph
where
    A: Into<ActorId>,
    B: Into<ActorId>,
    P: Into<ProductionId>,
{
    fn from_iter<I: IntoIterator<Item = (A, B, P)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}
