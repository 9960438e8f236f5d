use crate::error::{GenerateError, LookupError};
use crate::generator_config::GeneratorConfig;
use crate::graph::ActorGraph;
use crate::records::{ActorId, Person, Production, ProductionId};
use crate::source::MetadataSource;
use futures::{StreamExt, TryStreamExt, stream};
use std::{collections::BTreeSet, future::Future};
use tracing::{debug, instrument, warn};

/// Builds the collaboration graph of a fixed set of seed actors.
///
/// Generation runs in two phases. First every seed actor's filmography is
/// fetched, then every distinct production referenced by those filmographies
/// is fetched once for its cast. Lookups inside a phase run concurrently,
/// bounded by [`GeneratorConfig::max_workers`]. Each production yields its own
/// partial graph, and the partials are merged only after the phase completes,
/// so the result does not depend on the worker count or completion order.
///
/// The first failed lookup aborts generation: in-flight lookups are dropped,
/// nothing else is dispatched, and no graph is returned.
pub struct GraphGenerator<S> {
    seed_ids: BTreeSet<ActorId>,
    source: S,
    config: GeneratorConfig,
}

impl<S: MetadataSource> GraphGenerator<S> {
    pub fn new<I>(seed_ids: I, source: S, config: GeneratorConfig) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ActorId>,
    {
        Self {
            seed_ids: seed_ids.into_iter().map(Into::into).collect(),
            source,
            config: GeneratorConfig {
                max_workers: config.max_workers.max(1),
                ..config
            },
        }
    }

    pub fn seed_ids(&self) -> &BTreeSet<ActorId> {
        &self.seed_ids
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    #[instrument(
        skip(self),
        fields(seeds = self.seed_ids.len(), max_workers = self.config.max_workers)
    )]
    pub async fn generate(&self) -> Result<ActorGraph, GenerateError> {
        let result = self.build().await;
        if let Err(err) = &result {
            warn!(error = %err, cause = %err.lookup_error(), "graph generation aborted");
        }
        result
    }

    async fn build(&self) -> Result<ActorGraph, GenerateError> {
        let persons = self.fetch_persons().await?;
        let production_ids = collect_production_ids(&persons);
        debug!(
            persons = persons.len(),
            productions = production_ids.len(),
            "fetched filmographies"
        );

        let partial_graphs = self.fetch_cast_graphs(&production_ids).await?;

        let mut graph = ActorGraph::new();
        for actor in &self.seed_ids {
            graph.add_actor(actor.clone());
        }
        for partial in partial_graphs {
            graph.merge(partial);
        }

        debug!(
            actors = graph.actor_count(),
            edges = graph.edge_count(),
            "collaboration graph built"
        );
        Ok(graph)
    }

    async fn fetch_persons(&self) -> Result<Vec<Person>, GenerateError> {
        stream::iter(&self.seed_ids)
            .map(|actor| async move {
                self.bounded(self.source.lookup_person(actor))
                    .await
                    .map_err(|source| GenerateError::PersonLookup {
                        actor: actor.clone(),
                        source,
                    })
            })
            .buffer_unordered(self.config.max_workers)
            .try_collect()
            .await
    }

    async fn fetch_cast_graphs(
        &self,
        production_ids: &BTreeSet<ProductionId>,
    ) -> Result<Vec<ActorGraph>, GenerateError> {
        stream::iter(production_ids)
            .map(|production_id| async move {
                let production = self
                    .bounded(self.source.lookup_production(production_id))
                    .await
                    .map_err(|source| GenerateError::ProductionLookup {
                        production: production_id.clone(),
                        source,
                    })?;
                Ok::<_, GenerateError>(cast_graph(production_id, &production, &self.seed_ids))
            })
            .buffer_unordered(self.config.max_workers)
            .try_collect()
            .await
    }

    async fn bounded<T>(
        &self,
        lookup: impl Future<Output = Result<T, LookupError>>,
    ) -> Result<T, LookupError> {
        match self.config.lookup_timeout {
            Some(timeout) => tokio::time::timeout(timeout, lookup)
                .await
                .map_err(|_| LookupError::TimedOut { timeout })?,
            None => lookup.await,
        }
    }
}

fn collect_production_ids(persons: &[Person]) -> BTreeSet<ProductionId> {
    persons
        .iter()
        .flat_map(|person| &person.filmography)
        .map(|stub| stub.id.clone())
        .collect()
}

/// Edges contributed by a single production: one per unordered pair of seed
/// actors in its cast.
fn cast_graph(
    production_id: &ProductionId,
    production: &Production,
    seed_ids: &BTreeSet<ActorId>,
) -> ActorGraph {
    let seeded_cast: Vec<&ActorId> = production
        .cast
        .iter()
        .map(|member| &member.id)
        .filter(|id| seed_ids.contains(*id))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut partial = ActorGraph::new();
    for (i, &a) in seeded_cast.iter().enumerate() {
        for &b in &seeded_cast[i + 1..] {
            partial.add_edge(a.clone(), b.clone(), production_id.clone());
        }
    }
    partial
}
