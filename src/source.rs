use crate::error::LookupError;
use crate::records::{ActorId, Person, Production, ProductionId};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{
    future::Future,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

/// The metadata provider the generator pulls filmographies and cast lists
/// from. These two lookups are the only I/O the core performs.
pub trait MetadataSource: Sync {
    fn lookup_person(
        &self,
        id: &ActorId,
    ) -> impl Future<Output = Result<Person, LookupError>> + Send;

    fn lookup_production(
        &self,
        id: &ProductionId,
    ) -> impl Future<Output = Result<Production, LookupError>> + Send;
}

impl<S: MetadataSource> MetadataSource for &S {
    fn lookup_person(
        &self,
        id: &ActorId,
    ) -> impl Future<Output = Result<Person, LookupError>> + Send {
        (**self).lookup_person(id)
    }

    fn lookup_production(
        &self,
        id: &ProductionId,
    ) -> impl Future<Output = Result<Production, LookupError>> + Send {
        (**self).lookup_production(id)
    }
}

impl<S: MetadataSource + Send> MetadataSource for Arc<S> {
    fn lookup_person(
        &self,
        id: &ActorId,
    ) -> impl Future<Output = Result<Person, LookupError>> + Send {
        (**self).lookup_person(id)
    }

    fn lookup_production(
        &self,
        id: &ProductionId,
    ) -> impl Future<Output = Result<Production, LookupError>> + Send {
        (**self).lookup_production(id)
    }
}

struct Entry<T> {
    record: T,
    lookups: AtomicUsize,
}

impl<T: Clone> Entry<T> {
    fn new(record: T) -> Self {
        Self {
            record,
            lookups: AtomicUsize::new(0),
        }
    }

    fn fetch(&self) -> T {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.record.clone()
    }
}

#[derive(Serialize, Deserialize)]
struct Dataset {
    #[serde(default)]
    persons: Vec<Person>,
    #[serde(default)]
    productions: Vec<Production>,
}

/// A metadata source with canned records, answering every lookup
/// immediately. Counts lookups per id.
#[derive(Default)]
pub struct InMemorySource {
    persons: FxHashMap<ActorId, Entry<Person>>,
    productions: FxHashMap<ProductionId, Entry<Production>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_person(mut self, person: Person) -> Self {
        self.insert_person(person);
        self
    }

    pub fn with_production(mut self, production: Production) -> Self {
        self.insert_production(production);
        self
    }

    pub fn insert_person(&mut self, person: Person) {
        self.persons.insert(person.id.clone(), Entry::new(person));
    }

    pub fn insert_production(&mut self, production: Production) {
        self.productions
            .insert(production.id.clone(), Entry::new(production));
    }

    /// Parses `{ "persons": [...], "productions": [...] }`.
    pub fn from_json_str(json: &str) -> Result<Self, LookupError> {
        let dataset: Dataset =
            serde_json::from_str(json).map_err(|e| LookupError::Malformed(e.to_string()))?;

        let mut source = Self::new();
        for person in dataset.persons {
            source.insert_person(person);
        }
        for production in dataset.productions {
            source.insert_production(production);
        }
        Ok(source)
    }

    pub fn person_lookups(&self, id: impl AsRef<str>) -> usize {
        self.persons
            .get(id.as_ref())
            .map_or(0, |entry| entry.lookups.load(Ordering::Relaxed))
    }

    pub fn production_lookups(&self, id: impl AsRef<str>) -> usize {
        self.productions
            .get(id.as_ref())
            .map_or(0, |entry| entry.lookups.load(Ordering::Relaxed))
    }
}

impl MetadataSource for InMemorySource {
    async fn lookup_person(&self, id: &ActorId) -> Result<Person, LookupError> {
        self.persons
            .get(id)
            .map(Entry::fetch)
            .ok_or_else(|| LookupError::UnknownPerson(id.clone()))
    }

    async fn lookup_production(&self, id: &ProductionId) -> Result<Production, LookupError> {
        self.productions
            .get(id)
            .map(Entry::fetch)
            .ok_or_else(|| LookupError::UnknownProduction(id.clone()))
    }
}
