#![allow(dead_code)]

use actorpath::{
    ActorGraph, ActorId, GeneratorConfig, GraphGenerator, InMemorySource, LookupError,
    MetadataSource, Person, PersonStub, Production, ProductionId, ProductionStub,
};
use rustc_hash::{FxHashMap, FxHashSet};
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

pub const FAMILY: [&str; 6] = ["Maxim", "Kostya", "Irina", "Svetlana", "Lilia", "Elena"];

const MOVIES: [(&str, &str, &[&str]); 4] = [
    ("Sumy", "Sumy, The", &["Kostya", "Maxim"]),
    ("Moscow", "Moscow, The", &["Kostya", "Svetlana", "Elena", "Lilia"]),
    ("Budapest", "Budapest, The", &["Elena", "Lilia"]),
    ("New York", "New York, The", &["Irina", "Svetlana", "Elena"]),
];

const FILMOGRAPHIES: [(&str, &[&str]); 6] = [
    ("Maxim", &["Sumy"]),
    ("Kostya", &["Sumy", "Moscow"]),
    ("Svetlana", &["Moscow", "New York"]),
    ("Irina", &["New York"]),
    ("Elena", &["Moscow", "New York", "Budapest"]),
    ("Lilia", &["Moscow", "Budapest"]),
];

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn movie_titles() -> FxHashMap<ProductionId, String> {
    MOVIES
        .iter()
        .map(|(id, title, _)| (ProductionId::from(*id), title.to_string()))
        .collect()
}

/// Six actors and four movies; every lookup answers from memory.
pub fn family_source() -> InMemorySource {
    let titles = movie_titles();
    let mut source = InMemorySource::new();

    for (actor, movies) in FILMOGRAPHIES {
        let filmography = movies
            .iter()
            .map(|&movie| ProductionStub::new(movie, titles[movie].clone()))
            .collect();
        source.insert_person(Person::new(actor, actor, filmography));
    }

    for (movie, title, cast) in MOVIES {
        let cast = cast.iter().map(|&actor| PersonStub::new(actor, actor)).collect();
        source.insert_production(Production::new(movie, title, cast));
    }

    source
}

pub async fn family_graph() -> ActorGraph {
    init_tracing();
    GraphGenerator::new(FAMILY, family_source(), GeneratorConfig::new(1))
        .generate()
        .await
        .expect("family graph should generate")
}

/// Wraps an [`InMemorySource`], suspending on every lookup and recording how
/// many lookups were in flight at once. Ids in `failing` fail as unavailable.
pub struct InstrumentedSource {
    pub inner: InMemorySource,
    failing: FxHashSet<String>,
    delay: Option<Duration>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl InstrumentedSource {
    pub fn new(inner: InMemorySource) -> Self {
        Self {
            inner,
            failing: FxHashSet::default(),
            delay: None,
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn failing_on(mut self, id: &str) -> Self {
        self.failing.insert(id.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn track<T>(
        &self,
        id: &str,
        lookup: impl Future<Output = Result<T, LookupError>>,
    ) -> Result<T, LookupError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        tokio::task::yield_now().await;
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let result = if self.failing.contains(id) {
            Err(LookupError::Unavailable(format!("{id} is offline")))
        } else {
            lookup.await
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}

impl MetadataSource for InstrumentedSource {
    async fn lookup_person(&self, id: &ActorId) -> Result<Person, LookupError> {
        self.track(id.as_str(), self.inner.lookup_person(id)).await
    }

    async fn lookup_production(&self, id: &ProductionId) -> Result<Production, LookupError> {
        self.track(id.as_str(), self.inner.lookup_production(id)).await
    }
}

pub fn labels(ids: &[&str]) -> actorpath::ProductionSet {
    ids.iter().map(|&id| ProductionId::from(id)).collect()
}
