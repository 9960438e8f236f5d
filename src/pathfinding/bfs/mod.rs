mod state;

use super::result::PathResult;
use crate::error::SearchError;
use crate::graph::ActorGraph;
use crate::records::ActorId;
use state::LayeredBfsState;
use std::time::Instant;
use tracing::debug;

/// Finds every shortest collaboration path between `start` and `end`.
///
/// Returns [`SearchError::UnknownActor`] when either actor is not a node of
/// `graph` (`start` is checked first), and [`PathResult::not_found`] when both
/// exist but are not connected.
pub fn search(
    graph: &ActorGraph,
    start: impl AsRef<str>,
    end: impl AsRef<str>,
) -> Result<PathResult, SearchError> {
    let start = resolve_actor(graph, start.as_ref())?;
    let end = resolve_actor(graph, end.as_ref())?;
    let search_timer = Instant::now();

    let mut bfs_state = LayeredBfsState::new(graph, start);
    let result = match bfs_state.find_paths_to_target(end) {
        Some(connections) => PathResult::with_connections(start.clone(), end.clone(), connections),
        None => PathResult::not_found(start.clone(), end.clone()),
    };

    debug!(
        %start,
        %end,
        distance = ?result.distance(),
        visited = bfs_state.visited_count(),
        elapsed_us = search_timer.elapsed().as_micros() as u64,
        "shortest path search finished"
    );
    Ok(result)
}

fn resolve_actor<'g>(graph: &'g ActorGraph, actor: &str) -> Result<&'g ActorId, SearchError> {
    graph
        .get_actor(actor)
        .ok_or_else(|| SearchError::UnknownActor(ActorId::from(actor)))
}
